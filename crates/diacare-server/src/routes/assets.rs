use axum::http::header;
use axum::response::IntoResponse;

pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        diacare_render::STYLESHEET,
    )
}

pub async fn health_check() -> &'static str {
    "ok"
}
