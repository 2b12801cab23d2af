use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
