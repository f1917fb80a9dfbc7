//! # Polyspace Common
//!
//! Types shared by the Polyspace configuration checks.
//!
//! This crate provides the building blocks every other crate in the
//! workspace speaks in:
//! - `ValidationResult` and its `Kind`
//! - Message keys and the catalog that renders them
//! - The `CheckWarning` error raised by existence checks
//! - `ConnectionParameters` for Polyspace Access

pub mod errors;
pub mod messages;
pub mod types;

// Re-export commonly used items
pub use errors::{CatalogError, CheckResult, CheckWarning};
pub use messages::{MessageCatalog, MessageKey};
pub use types::{ConnectionParameters, Kind, ValidationResult};
