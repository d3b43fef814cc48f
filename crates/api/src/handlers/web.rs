use axum::response::Html;

/// GET / -- the admin web page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
