//! Field validators.
//!
//! Each validator classifies one user-supplied string. They have no side
//! effects and never fail; the verdict is the returned `ValidationResult`.

use polyspace_common::{MessageKey, ValidationResult};

/// Protocols accepted by Polyspace Access.
pub const ALLOWED_PROTOCOLS: &[&str] = &["http", "https"];

/// Validate the Polyspace Access protocol (exact, case-sensitive).
pub fn check_protocol(value: &str) -> ValidationResult {
    if ALLOWED_PROTOCOLS.contains(&value) {
        ValidationResult::Ok
    } else {
        ValidationResult::Error(MessageKey::WrongProtocol)
    }
}

/// Validate a port number.
///
/// Accepts anything that parses as a signed 32-bit decimal integer, with an
/// optional leading sign. Range is not checked here.
pub fn check_port(value: &str) -> ValidationResult {
    match value.parse::<i32>() {
        Ok(_) => ValidationResult::Ok,
        Err(_) => ValidationResult::Error(MessageKey::PortMustBeANumber),
    }
}

/// Validate a filename relative to the workspace.
///
/// Absolute paths are reported before parent-directory segments, so
/// `/a/../b` is an absolute-path error.
pub fn check_filename(value: &str) -> ValidationResult {
    if value.starts_with('/') || value.starts_with('\\') {
        return ValidationResult::Error(MessageKey::AbsoluteDirectoryForbidden);
    }

    if value.split(['/', '\\']).any(|segment| segment == "..") {
        return ValidationResult::Error(MessageKey::PreviousDirectoryForbidden);
    }

    ValidationResult::Ok
}
