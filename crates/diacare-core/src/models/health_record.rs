use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::diabetes_type::DiabetesType;

/// One submitted snapshot of diabetes metrics.
///
/// `person_id` is a weak reference: nothing checks that the person exists
/// when the record is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: Uuid,
    pub person_id: Uuid,
    pub diabetes_type: DiabetesType,
    pub blood_sugar: f64,
    pub age: f64,
    pub medications: Vec<String>,
    pub created_at: jiff::Timestamp,
}

impl HealthRecord {
    pub fn new(
        person_id: Uuid,
        diabetes_type: DiabetesType,
        blood_sugar: f64,
        age: f64,
        medications: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            person_id,
            diabetes_type,
            blood_sugar,
            age,
            medications,
            created_at: jiff::Timestamp::now(),
        }
    }
}
