//! diacare-storage
//!
//! The record store. JSON documents in an S3 bucket, or in process memory for
//! local runs and tests, with Person / HealthRecord lookups on top.

pub mod backend;
pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod records;
