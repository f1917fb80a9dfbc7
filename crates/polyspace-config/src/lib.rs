//! # Polyspace Config
//!
//! Configuration checks for the Polyspace build plugin.
//!
//! This crate provides:
//! - Field validators for protocol, port and report filename
//! - The Polyspace Access check (command construction and execution)
//! - The YAML configuration model and its validation report

pub mod access;
pub mod config;
pub mod validation;

// Re-export main types
pub use access::{check_polyspace_access, AccessChecker, AccessCommand, POLYSPACE_ACCESS_COMMAND};
pub use config::{
    AccessServerConfig, InstallationConfig, NotificationConfig, PolyspaceConfig,
    ValidationReport,
};
pub use validation::{check_filename, check_port, check_protocol};

pub use polyspace_common::{ConnectionParameters, Kind, MessageCatalog, MessageKey, ValidationResult};
pub use polyspace_process::{CommandRunner, Platform, SystemCommandRunner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
