//! Store key/path conventions.
//!
//! Pure string functions. These define the canonical layout of documents in
//! whichever backend the record store is pointed at.

use uuid::Uuid;

pub const PERSONS_PREFIX: &str = "persons/";

pub const HEALTH_RECORDS_PREFIX: &str = "health-records/";

pub fn person(id: Uuid) -> String {
    format!("persons/{id}.json")
}

/// Phone index entry. The phone is hex-encoded so arbitrary user input
/// cannot escape the prefix or collide with another key.
pub fn person_phone_index(phone: &str) -> String {
    let encoded: String = phone.bytes().map(|b| format!("{b:02x}")).collect();
    format!("persons/by-phone/{encoded}.json")
}

pub fn health_record(id: Uuid) -> String {
    format!("health-records/{id}.json")
}
