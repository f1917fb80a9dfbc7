//! Installation existence checks.
//!
//! Both checks succeed silently and report a missing or mistyped path as a
//! `CheckWarning`, which callers either propagate with `?` or turn into a
//! `ValidationResult` with `into()`.

use polyspace_common::{CheckResult, CheckWarning, MessageKey};
use std::path::Path;
use tracing::debug;

/// Check that the Polyspace `bin` folder exists and is a directory.
pub fn check_bin_folder_exists(path: impl AsRef<Path>) -> CheckResult<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }

    debug!("Polyspace bin folder not found: {}", path.display());
    Err(CheckWarning::new(MessageKey::PolyspaceBinNotFound))
}

/// Check that a Polyspace command exists and is a regular file.
pub fn check_bin_command_exists(path: impl AsRef<Path>) -> CheckResult<()> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(());
    }

    debug!("Polyspace command not valid: {}", path.display());
    Err(CheckWarning::new(MessageKey::PolyspaceBinNotValid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bin_folder_exists() {
        let dir = tempdir().unwrap();
        assert!(check_bin_folder_exists(dir.path()).is_ok());
    }

    #[test]
    fn test_bin_folder_missing() {
        let err = check_bin_folder_exists("this/path/should/not/exist/as/a/bin/folder").unwrap_err();
        assert_eq!(err.key(), MessageKey::PolyspaceBinNotFound);
    }

    #[test]
    fn test_bin_folder_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, "").unwrap();

        let err = check_bin_folder_exists(&file).unwrap_err();
        assert_eq!(err.key(), MessageKey::PolyspaceBinNotFound);
    }

    #[test]
    fn test_bin_command_exists() {
        let dir = tempdir().unwrap();
        let command = dir.path().join("testCommand.exe");
        std::fs::write(&command, "").unwrap();

        assert!(check_bin_command_exists(&command).is_ok());
    }

    #[test]
    fn test_bin_command_missing() {
        let err = check_bin_command_exists("this/path/should/not/exist/as/a/command").unwrap_err();
        assert_eq!(err.key(), MessageKey::PolyspaceBinNotValid);
    }

    #[test]
    fn test_bin_command_is_a_directory() {
        let dir = tempdir().unwrap();
        let err = check_bin_command_exists(dir.path()).unwrap_err();
        assert_eq!(err.key(), MessageKey::PolyspaceBinNotValid);
    }
}
