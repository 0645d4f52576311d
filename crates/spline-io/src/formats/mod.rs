//! Format handlers for curve files.

#[cfg(feature = "json")]
pub mod json;
