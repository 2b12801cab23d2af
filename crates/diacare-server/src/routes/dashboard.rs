use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use uuid::Uuid;

use diacare_core::forms::{parse_person_id, HealthSubmission};

use crate::error::ApiError;
use crate::state::AppState;

const SUBMIT_ERROR: &str = "Error submitting data";

#[derive(Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthForm {
    pub diabetes_type: Option<String>,
    pub blood_sugar: Option<String>,
    pub age: Option<String>,
    pub medications: Option<String>,
}

pub async fn dashboard_form(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, ApiError> {
    let user_id = query
        .user_id
        .as_deref()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok());

    let html = state
        .pages
        .dashboard(user_id)
        .map_err(ApiError::internal("Server Error"))?;
    Ok(Html(html))
}

pub async fn submit_health_data(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
    Form(form): Form<HealthForm>,
) -> Result<Redirect, ApiError> {
    let person_id = parse_person_id(query.user_id.as_deref())?;

    let record = HealthSubmission {
        diabetes_type: form.diabetes_type.as_deref(),
        blood_sugar: form.blood_sugar.as_deref(),
        age: form.age.as_deref(),
        medications: form.medications.as_deref(),
    }
    .into_record(person_id)?;

    state
        .store
        .insert_health_record(&record)
        .await
        .map_err(ApiError::internal(SUBMIT_ERROR))?;
    tracing::info!(record_id = %record.id, person_id = %person_id, "health record stored");

    Ok(Redirect::to(&format!("/report/{}", record.id)))
}
