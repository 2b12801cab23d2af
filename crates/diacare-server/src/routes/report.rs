use axum::extract::{Path, State};
use axum::response::Html;
use uuid::Uuid;

use diacare_core::recommendation::derive_recommendation;
use diacare_storage::error::StorageError;

use crate::error::ApiError;
use crate::state::AppState;

const REPORT_ERROR: &str = "Error generating report";
const NOT_FOUND: &str = "Health record not found";

pub async fn show_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound(NOT_FOUND.to_string()))?;

    let record = match state.store.get_health_record(id).await {
        Ok(record) => record,
        Err(StorageError::NotFound { .. }) => return Err(ApiError::NotFound(NOT_FOUND.to_string())),
        Err(e) => return Err(ApiError::internal(REPORT_ERROR)(e)),
    };

    let recommendation = derive_recommendation(&record);
    let html = state
        .pages
        .report(&recommendation)
        .map_err(ApiError::internal(REPORT_ERROR))?;
    Ok(Html(html))
}
