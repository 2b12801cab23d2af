pub mod diabetes_type;
pub mod health_record;
pub mod person;
