use super::*;
use crate::validation::{check_filename, check_port, check_protocol};
use polyspace_common::{Kind, ValidationResult};
use polyspace_process::check_bin_folder_exists;

pub const FIELD_BIN_DIR: &str = "installation.bin_dir";
pub const FIELD_PROTOCOL: &str = "access.protocol";
pub const FIELD_PORT: &str = "access.port";
pub const FIELD_REPORT_FILENAME: &str = "notification.report_filename";

/// Per-field outcome of validating a configuration, in check order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<(&'static str, ValidationResult)>,
}

impl ValidationReport {
    pub fn push(&mut self, field: &'static str, result: ValidationResult) {
        self.entries.push((field, result));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, ValidationResult)> {
        self.entries.iter()
    }

    /// Result recorded for `field`, if it was checked
    pub fn get(&self, field: &str) -> Option<ValidationResult> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, result)| *result)
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|(_, result)| result.is_error())
    }

    /// Most severe kind in the report, `Ok` when empty
    pub fn worst_kind(&self) -> Kind {
        self.entries
            .iter()
            .map(|(_, result)| result.kind())
            .max()
            .unwrap_or(Kind::Ok)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate the complete configuration
///
/// Protocol and port are optional on the Access command line, so they are
/// only checked when set.
pub fn validate_config(config: &PolyspaceConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    let bin_dir = match check_bin_folder_exists(&config.installation.bin_dir) {
        Ok(()) => ValidationResult::Ok,
        Err(warning) => warning.into(),
    };
    report.push(FIELD_BIN_DIR, bin_dir);

    if !config.access.protocol.is_empty() {
        report.push(FIELD_PROTOCOL, check_protocol(&config.access.protocol));
    }

    if !config.access.port.is_empty() {
        report.push(FIELD_PORT, check_port(&config.access.port));
    }

    report.push(
        FIELD_REPORT_FILENAME,
        check_filename(&config.notification.report_filename),
    );

    report
}
