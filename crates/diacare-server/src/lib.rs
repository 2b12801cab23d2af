//! diacare-server
//!
//! Axum application: registration, phone-number login, health-data entry
//! and the recommendation report.

use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the full router. Used by `main` and by the integration tests.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::assets::health_check))
        .route("/static/style.css", get(routes::assets::stylesheet))
        .route(
            "/auth/register",
            get(routes::auth::register_form).post(routes::auth::register),
        )
        .route(
            "/auth/login",
            get(routes::auth::login_form).post(routes::auth::login),
        )
        .route(
            "/dashboard",
            get(routes::dashboard::dashboard_form).post(routes::dashboard::submit_health_data),
        )
        .route("/report/{id}", get(routes::report::show_report))
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .with_state(state)
}
