use axum::response::Redirect;

pub mod assets;
pub mod auth;
pub mod dashboard;
pub mod report;

pub async fn root() -> Redirect {
    Redirect::to("/auth/login")
}
