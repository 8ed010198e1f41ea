use axum::response::Html;

/// GET /
/// The job-description form and results view.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
