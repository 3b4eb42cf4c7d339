//! Server-rendered HTML pages.

mod not_found;
mod render;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use crate::api::AppState;

/// Marker returned by handlers that have nothing to show.
///
/// Its response is an empty `404` carrying the marker as an extension;
/// [`not_found_boundary`] swaps that response for the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl IntoResponse for NotFound {
    fn into_response(self) -> Response {
        let mut response = StatusCode::NOT_FOUND.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Handler for every path no other route claims.
pub async fn catch_all() -> NotFound {
    NotFound
}

/// Middleware rendering the not-found page for responses marked [`NotFound`].
pub async fn not_found_boundary(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let referer = req.headers().get(header::REFERER).cloned();

    let response = next.run(req).await;
    if response.extensions().get::<NotFound>().is_none() {
        return response;
    }

    let referer = referer.as_ref().and_then(|v| v.to_str().ok());
    let page = not_found::assemble(&state, &path, referer).await;
    tracing::info!(
        path = %path,
        locale = %page.locale,
        products = page.products.len(),
        fallback_strings = page.translator.is_fallback(),
        "rendering not-found page"
    );

    (StatusCode::NOT_FOUND, Html(render::not_found_page(&page))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn catch_all_signals_not_found_without_content() {
        let response = catch_all().await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.extensions().get::<NotFound>(), Some(&NotFound));
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        assert!(body.is_empty());
    }
}
