use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Diabetes classification attached to a health record.
///
/// Labels outside the three known ones are kept verbatim in `Other` so the
/// report can echo exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiabetesType {
    Type1,
    Type2,
    Gestational,
    Other(String),
}

impl DiabetesType {
    pub const TYPE_1: &'static str = "Type 1";
    pub const TYPE_2: &'static str = "Type 2";
    pub const GESTATIONAL: &'static str = "Gestational";

    /// Label as shown to the user and persisted in the store.
    pub fn label(&self) -> &str {
        match self {
            DiabetesType::Type1 => Self::TYPE_1,
            DiabetesType::Type2 => Self::TYPE_2,
            DiabetesType::Gestational => Self::GESTATIONAL,
            DiabetesType::Other(label) => label,
        }
    }

    /// Matching is exact: "type 1" or " Type 1" land in `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::TYPE_1 => DiabetesType::Type1,
            Self::TYPE_2 => DiabetesType::Type2,
            Self::GESTATIONAL => DiabetesType::Gestational,
            other => DiabetesType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for DiabetesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DiabetesType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for DiabetesType {
    fn from(label: String) -> Self {
        match label.as_str() {
            Self::TYPE_1 => DiabetesType::Type1,
            Self::TYPE_2 => DiabetesType::Type2,
            Self::GESTATIONAL => DiabetesType::Gestational,
            _ => DiabetesType::Other(label),
        }
    }
}

impl From<DiabetesType> for String {
    fn from(value: DiabetesType) -> Self {
        match value {
            DiabetesType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}
