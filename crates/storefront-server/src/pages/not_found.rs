use storefront_catalog::{CatalogClient, RECOMMENDED_LIMIT};
use storefront_core::{
    resolve_locale, Locale, MessageCatalog, ProductSummary, Translator, NOT_FOUND_NAMESPACE,
};

use crate::api::AppState;

/// Everything the not-found page renders.
#[derive(Debug, Clone)]
pub(super) struct NotFoundPage {
    pub locale: Locale,
    pub translator: Translator,
    pub products: Vec<ProductSummary>,
}

/// Gathers page data. Each step degrades on its own; none of them fail the page.
pub(super) async fn assemble(state: &AppState, path: &str, referer: Option<&str>) -> NotFoundPage {
    let locale = resolve_locale(path, referer);
    let translator = load_translator(&state.messages, locale).await;
    let products = recommended_products(&state.products).await;

    NotFoundPage {
        locale,
        translator: translator.ensure_usable(),
        products,
    }
}

async fn load_translator(messages: &MessageCatalog, locale: Locale) -> Translator {
    match messages.translator(locale, NOT_FOUND_NAMESPACE).await {
        Ok(translator) => translator,
        Err(e) => {
            tracing::warn!(error = %e, %locale, "not-found messages unavailable; using built-in strings");
            Translator::fallback()
        }
    }
}

async fn recommended_products(client: &CatalogClient) -> Vec<ProductSummary> {
    match client.new_arrivals(RECOMMENDED_LIMIT).await {
        Ok(products) => products,
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch recommended products");
            Vec::new()
        }
    }
}
