//! FitTrack Shared Library
//!
//! This crate contains the domain models and input validation used by the
//! core data-access layer and by any presentation layer built on top of it.

pub mod models;
pub mod validation;

// Re-export commonly used items
pub use models::*;
