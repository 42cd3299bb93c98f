//! Form page handler

use axum::response::Html;

/// Serve the single-page prediction form
pub async fn page() -> Html<&'static str> {
    Html(include_str!("../../assets/form.html"))
}
