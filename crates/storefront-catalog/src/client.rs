//! HTTP client for the storefront product API.

use std::time::Duration;

use reqwest::{Client, Url};
use storefront_core::ProductSummary;

use crate::error::CatalogError;
use crate::listing::{normalize_listing, ListingShape};

const NEW_ARRIVALS_PATH: &str = "products/new-arrivals";

/// Read-only client for the product listing endpoints.
///
/// Non-2xx responses surface as typed errors. Requests are never retried: the
/// pages that call this degrade instead.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidBaseUrl`] if `base_url` is not an absolute http(s) URL.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CatalogError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the newest products and normalizes the envelope to at most
    /// `limit` items.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] on HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`CatalogError::Http`] on network or TLS failure.
    /// - [`CatalogError::Deserialize`] if the body is not JSON.
    pub async fn new_arrivals(&self, limit: usize) -> Result<Vec<ProductSummary>, CatalogError> {
        let url = self.endpoint(NEW_ARRIVALS_PATH)?;
        let body = self.get_json(url).await?;
        let shape = ListingShape::of(&body);
        let products = normalize_listing(body, limit);
        tracing::debug!(%shape, count = products.len(), "fetched new arrivals");
        Ok(products)
    }

    async fn get_json(&self, url: Url) -> Result<serde_json::Value, CatalogError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| CatalogError::Deserialize {
            context: format!("response from {url}"),
            source,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        self.base_url
            .join(path)
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Parses the API base URL, forcing a trailing slash so relative joins append
/// to the path instead of replacing its last segment.
fn parse_base_url(raw: &str) -> Result<Url, CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidBaseUrl {
        base_url: raw.to_owned(),
        reason,
    };

    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    Ok(url)
}
