use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered individual, keyed by phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub created_at: jiff::Timestamp,
}

impl Person {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            created_at: jiff::Timestamp::now(),
        }
    }
}
