//! Rule-based recommendation engine.
//!
//! Maps a health record's classification and blood-sugar reading to a list
//! of suggested medications and an advisory message. Pure and total: callers
//! must reject missing or malformed records before getting here.

use serde::{Deserialize, Serialize};

use crate::models::diabetes_type::DiabetesType;
use crate::models::health_record::HealthRecord;

/// Readings strictly above this are high.
pub const HIGH_BLOOD_SUGAR: f64 = 130.0;

/// Readings strictly below this are low.
pub const LOW_BLOOD_SUGAR: f64 = 70.0;

pub const HIGH_ADVISORY: &str =
    "Your blood sugar is high, consider reducing carbs and increasing physical activity.";
pub const LOW_ADVISORY: &str =
    "Your blood sugar is low, make sure to consume fast-acting carbohydrates.";
pub const NORMAL_ADVISORY: &str = "Your blood sugar is within normal range. Keep up the good work!";
pub const GESTATIONAL_ADVISORY: &str =
    "Maintain a balanced diet, monitor blood sugar closely, and consult your doctor regularly.";

const TYPE_1_MEDICATIONS: &[&str] = &["Insulin therapy", "Glucose monitoring devices"];
const HIGH_MEDICATIONS: &[&str] = &["Metformin", "SGLT2 inhibitors", "GLP-1 receptor agonists"];
const LOW_MEDICATIONS: &[&str] = &["Glucose tablets", "Juice or fast-acting carbs"];
const NORMAL_MEDICATIONS: &[&str] = &["Continue with your prescribed medications"];
const GESTATIONAL_MEDICATIONS: &[&str] = &["Insulin therapy (if needed)", "Blood glucose monitoring"];
const NO_MEDICATIONS: &[&str] = &[];

/// Blood-sugar band used for Type 2 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodSugarBand {
    High,
    Low,
    Normal,
}

impl BloodSugarBand {
    /// Both thresholds are exclusive, so 70 and 130 are `Normal`. NaN
    /// compares false on both sides and is `Normal` too.
    pub fn classify(blood_sugar: f64) -> Self {
        if blood_sugar > HIGH_BLOOD_SUGAR {
            BloodSugarBand::High
        } else if blood_sugar < LOW_BLOOD_SUGAR {
            BloodSugarBand::Low
        } else {
            BloodSugarBand::Normal
        }
    }
}

/// Derived advice for a single health record. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub diabetes_type: DiabetesType,
    pub blood_sugar: f64,
    pub medications: Vec<String>,
    pub advisory: String,
}

pub fn derive_recommendation(record: &HealthRecord) -> Recommendation {
    recommend(&record.diabetes_type, record.blood_sugar)
}

pub fn recommend(diabetes_type: &DiabetesType, blood_sugar: f64) -> Recommendation {
    let (medications, advisory): (&[&str], &str) = match diabetes_type {
        DiabetesType::Type1 => (TYPE_1_MEDICATIONS, ""),
        DiabetesType::Type2 => match BloodSugarBand::classify(blood_sugar) {
            BloodSugarBand::High => (HIGH_MEDICATIONS, HIGH_ADVISORY),
            BloodSugarBand::Low => (LOW_MEDICATIONS, LOW_ADVISORY),
            BloodSugarBand::Normal => (NORMAL_MEDICATIONS, NORMAL_ADVISORY),
        },
        DiabetesType::Gestational => (GESTATIONAL_MEDICATIONS, GESTATIONAL_ADVISORY),
        DiabetesType::Other(_) => (NO_MEDICATIONS, ""),
    };

    Recommendation {
        diabetes_type: diabetes_type.clone(),
        blood_sugar,
        medications: medications.iter().map(|m| m.to_string()).collect(),
        advisory: advisory.to_string(),
    }
}
