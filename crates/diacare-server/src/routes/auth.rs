use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use diacare_core::models::person::Person;

use crate::error::ApiError;
use crate::state::AppState;

const SERVER_ERROR: &str = "Server Error";

pub const ALREADY_EXISTS: &str = "User already exists. Please login.";

#[derive(Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub phone: String,
}

pub async fn register_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state
        .pages
        .register()
        .map_err(ApiError::internal(SERVER_ERROR))?;
    Ok(Html(html))
}

/// Find-by-phone, else insert.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, ApiError> {
    let phone = form.phone.trim();
    if phone.is_empty() {
        return Err(ApiError::BadRequest("phone is required".to_string()));
    }

    let existing = state
        .store
        .find_person_by_phone(phone)
        .await
        .map_err(ApiError::internal(SERVER_ERROR))?;
    if existing.is_some() {
        return Ok((StatusCode::OK, ALREADY_EXISTS).into_response());
    }

    let person = Person::new(form.name.trim(), phone);
    state
        .store
        .insert_person(&person)
        .await
        .map_err(ApiError::internal(SERVER_ERROR))?;
    tracing::info!(person_id = %person.id, "person registered");

    Ok(Redirect::to("/auth/login").into_response())
}

pub async fn login_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state.pages.login().map_err(ApiError::internal(SERVER_ERROR))?;
    Ok(Html(html))
}

/// No credential check: knowing the phone number is enough.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, ApiError> {
    let person = state
        .store
        .find_person_by_phone(form.phone.trim())
        .await
        .map_err(ApiError::internal(SERVER_ERROR))?;

    match person {
        Some(person) => Ok(Redirect::to(&format!("/dashboard?userId={}", person.id))),
        None => Ok(Redirect::to("/auth/register")),
    }
}
