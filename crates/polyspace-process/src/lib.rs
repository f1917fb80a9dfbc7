//! # Polyspace Process
//!
//! Low-level primitives used by the Polyspace configuration checks.
//!
//! This crate provides:
//! - Platform query and executable suffix resolution
//! - Existence checks for the installation folder and its binaries
//! - External command execution reduced to a success flag

pub mod execute;
pub mod platform;
pub mod validation;

// Re-export main types
pub use execute::*;
pub use platform::*;
pub use validation::*;
