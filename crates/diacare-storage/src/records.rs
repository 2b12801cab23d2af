use serde::{Deserialize, Serialize};
use uuid::Uuid;

use diacare_core::keys;
use diacare_core::models::health_record::HealthRecord;
use diacare_core::models::person::Person;

use crate::backend::{Backend, StoreUrl};
use crate::documents::{create_document, find_document, load_document, save_document};
use crate::error::StorageError;

/// Phone index entry pointing at the owning person document.
#[derive(Debug, Serialize, Deserialize)]
struct PhoneIndexEntry {
    person_id: Uuid,
}

/// Person and HealthRecord persistence over a document backend.
///
/// No transactions: each call is a handful of independent document reads
/// and writes. The phone index is claimed with a create-only write, which is
/// the only uniqueness guarantee.
#[derive(Clone)]
pub struct RecordStore {
    backend: Backend,
}

impl RecordStore {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn connect(url: &StoreUrl) -> Self {
        Self::new(Backend::connect(url).await)
    }

    pub async fn find_person_by_phone(&self, phone: &str) -> Result<Option<Person>, StorageError> {
        let index_key = keys::person_phone_index(phone);
        let Some(entry) = find_document::<PhoneIndexEntry>(&self.backend, &index_key).await? else {
            return Ok(None);
        };

        let person: Option<Person> = find_document(&self.backend, &keys::person(entry.person_id)).await?;
        if person.is_none() {
            tracing::warn!(person_id = %entry.person_id, "phone index points at a missing person");
        }
        Ok(person)
    }

    /// Claim the phone first, then write the person document create-only.
    /// A concurrent registration for the same phone fails at the claim with
    /// `AlreadyExists` and writes nothing.
    pub async fn insert_person(&self, person: &Person) -> Result<(), StorageError> {
        create_document(
            &self.backend,
            &keys::person_phone_index(&person.phone),
            &PhoneIndexEntry {
                person_id: person.id,
            },
        )
        .await?;
        create_document(&self.backend, &keys::person(person.id), person).await
    }

    pub async fn insert_health_record(&self, record: &HealthRecord) -> Result<(), StorageError> {
        save_document(&self.backend, &keys::health_record(record.id), record).await
    }

    pub async fn get_health_record(&self, id: Uuid) -> Result<HealthRecord, StorageError> {
        load_document(&self.backend, &keys::health_record(id)).await
    }
}
