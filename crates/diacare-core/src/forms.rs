//! Raw form values into typed domain values.
//!
//! Browsers post everything as strings. The server hands those strings to
//! these functions before any record is constructed.

use uuid::Uuid;

use crate::error::CoreError;
use crate::models::diabetes_type::DiabetesType;
use crate::models::health_record::HealthRecord;

/// Parse a required numeric field. Surrounding whitespace is ignored.
///
/// `NaN` and infinities parse as f64 but have no JSON representation, so
/// they are rejected here rather than stored.
pub fn parse_number(field: &'static str, raw: Option<&str>) -> Result<f64, CoreError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty());
    let value = value.ok_or(CoreError::MissingField(field))?;
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| CoreError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Split a comma-separated medication list. Entries are trimmed and blanks
/// dropped, so an empty string gives an empty list.
pub fn parse_medications(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_person_id(raw: Option<&str>) -> Result<Uuid, CoreError> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(CoreError::MissingField("userId"))?;
    Ok(Uuid::parse_str(raw)?)
}

/// Health-data submission exactly as posted by the dashboard form.
#[derive(Debug, Clone, Default)]
pub struct HealthSubmission<'a> {
    pub diabetes_type: Option<&'a str>,
    pub blood_sugar: Option<&'a str>,
    pub age: Option<&'a str>,
    pub medications: Option<&'a str>,
}

impl HealthSubmission<'_> {
    /// Validate and build a new record owned by `person_id`.
    ///
    /// The classification is taken verbatim: `" Type 2 "` is `Other`.
    pub fn into_record(self, person_id: Uuid) -> Result<HealthRecord, CoreError> {
        let diabetes_type = DiabetesType::from_label(self.diabetes_type.unwrap_or_default());
        let blood_sugar = parse_number("bloodSugar", self.blood_sugar)?;
        let age = parse_number("age", self.age)?;
        let medications = parse_medications(self.medications.unwrap_or_default());

        Ok(HealthRecord::new(
            person_id,
            diabetes_type,
            blood_sugar,
            age,
            medications,
        ))
    }
}
