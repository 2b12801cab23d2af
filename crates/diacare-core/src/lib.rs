//! diacare-core
//!
//! Pure domain types, the recommendation engine, form parsing and store key
//! conventions. No I/O: this is the shared vocabulary of the diacare system.

pub mod error;
pub mod forms;
pub mod keys;
pub mod models;
pub mod recommendation;
