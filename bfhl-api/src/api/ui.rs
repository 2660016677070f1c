//! UI serving routes
//!
//! Serves the static informational page

use axum::{http::Uri, response::Html};

use crate::ApiError;

const INDEX_HTML: &str = include_str!("../../ui/index.html");

/// GET /
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
