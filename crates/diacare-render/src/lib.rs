//! diacare-render
//!
//! HTML pages rendered from Tera templates compiled into the binary.

pub mod error;
pub mod pages;
pub mod render;

/// Stylesheet served at `/static/style.css`.
pub const STYLESHEET: &str = include_str!("../static/style.css");
