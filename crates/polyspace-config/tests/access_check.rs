//! Access check against a fake installation, with the command runner
//! replaced by a recorder.

use polyspace_config::{
    AccessChecker, CommandRunner, ConnectionParameters, MessageKey, Platform, ValidationResult,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Runner that records every command and answers with a fixed outcome.
struct RecordingRunner {
    outcome: bool,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingRunner {
    fn new(outcome: bool) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, argv: &[String]) -> bool {
        self.calls.lock().unwrap().push(argv.to_vec());
        self.outcome
    }
}

/// Creates `<tmp>/<name>/polyspace-access[.exe]` and returns (dir, binary).
fn fake_installation(tmp: &TempDir, name: &str) -> (PathBuf, PathBuf) {
    let bin_dir = tmp.path().join(name);
    std::fs::create_dir_all(&bin_dir).unwrap();
    let binary = bin_dir.join(Platform::current().executable_name("polyspace-access"));
    std::fs::write(&binary, "").unwrap();
    (bin_dir, binary)
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn full_params() -> ConnectionParameters {
    ConnectionParameters::new("testUser", "testPass")
        .with_protocol("http")
        .with_host("testHost")
        .with_port("1234")
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_successful_command_is_ok() {
    let tmp = tempfile::tempdir().unwrap();
    let (bin_dir, _) = fake_installation(&tmp, "polyspace_bin");
    let checker = AccessChecker::with_runner(RecordingRunner::new(true));

    let result = checker.check_access(&bin_dir, &full_params());

    assert_eq!(result, ValidationResult::Ok);
    assert_eq!(checker.runner().calls().len(), 1);
}

#[test]
fn test_failed_command_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let (bin_dir, _) = fake_installation(&tmp, "polyspace_bin_fail");
    let checker = AccessChecker::with_runner(RecordingRunner::new(false));

    let result = checker.check_access(&bin_dir, &full_params());

    assert_eq!(result, ValidationResult::Error(MessageKey::PolyspaceAccessConnectionFailed));
    assert_eq!(checker.runner().calls().len(), 1);
}

#[test]
fn test_missing_bin_folder_does_not_run_anything() {
    let checker = AccessChecker::with_runner(RecordingRunner::new(true));

    let result = checker.check_access("this/path/should/not/exist/folder/for/access/check", &full_params());

    assert_eq!(result, ValidationResult::Warning(MessageKey::PolyspaceBinNotFound));
    assert!(checker.runner().calls().is_empty());
}

#[test]
fn test_missing_access_binary_does_not_run_anything() {
    let tmp = tempfile::tempdir().unwrap();
    let bin_dir = tmp.path().join("polyspace_bin_no_cmd_for_access_check");
    std::fs::create_dir_all(&bin_dir).unwrap();
    let checker = AccessChecker::with_runner(RecordingRunner::new(true));

    let result = checker.check_access(&bin_dir, &full_params());

    assert_eq!(result, ValidationResult::Warning(MessageKey::PolyspaceBinNotValid));
    assert!(checker.runner().calls().is_empty());
}

#[test]
fn test_command_construction_all_params() {
    let tmp = tempfile::tempdir().unwrap();
    let (bin_dir, binary) = fake_installation(&tmp, "polyspace_bin_construct_all");
    let checker = AccessChecker::with_runner(RecordingRunner::new(true));

    let params = ConnectionParameters::new("myUser", "myPass")
        .with_protocol("https")
        .with_host("myHost")
        .with_port("8080");
    checker.check_access(&bin_dir, &params);

    let mut expected = vec![path_string(&binary)];
    expected.extend(strings(&[
        "-login",
        "myUser",
        "-encrypted-password",
        "myPass",
        "-protocol",
        "https",
        "-host",
        "myHost",
        "-port",
        "8080",
        "-list-project",
    ]));
    assert_eq!(checker.runner().calls(), vec![expected]);
}

#[test]
fn test_command_construction_minimal_params() {
    let tmp = tempfile::tempdir().unwrap();
    let (bin_dir, binary) = fake_installation(&tmp, "polyspace_bin_construct_min");
    let checker = AccessChecker::with_runner(RecordingRunner::new(true));

    let params = ConnectionParameters::new("minUser", "minPass");
    checker.check_access(&bin_dir, &params);

    let calls = checker.runner().calls();
    assert_eq!(calls.len(), 1);
    let command = &calls[0];

    let mut expected = vec![path_string(&binary)];
    expected.extend(strings(&["-login", "minUser", "-encrypted-password", "minPass", "-list-project"]));
    assert_eq!(command, &expected);

    for flag in ["-protocol", "-host", "-port"] {
        assert!(!command.iter().any(|arg| arg == flag), "unexpected {} in {:?}", flag, command);
    }
}

#[test]
fn test_windows_suffix_is_required_on_windows_platform() {
    let tmp = tempfile::tempdir().unwrap();
    let bin_dir = tmp.path().join("bin");
    std::fs::create_dir_all(&bin_dir).unwrap();
    std::fs::write(bin_dir.join("polyspace-access"), "").unwrap();
    let checker = AccessChecker::with_runner(RecordingRunner::new(true)).platform(Platform::Windows);

    let result = checker.check_access(&bin_dir, &full_params());

    assert_eq!(result, ValidationResult::Warning(MessageKey::PolyspaceBinNotValid));
    assert!(checker.runner().calls().is_empty());
}

#[cfg(unix)]
fn script_installation(tmp: &TempDir, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let (bin_dir, binary) = fake_installation(tmp, name);
    std::fs::write(&binary, script).unwrap();
    std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();
    bin_dir
}

#[test]
#[cfg(unix)]
fn test_real_process_exit_status() {
    let tmp = tempfile::tempdir().unwrap();

    // Succeeds only when the listing flag comes last
    let listing = script_installation(
        &tmp,
        "listing",
        "#!/bin/sh\nfor last; do :; done\n[ \"$last\" = \"-list-project\" ]\n",
    );
    let failing = script_installation(&tmp, "failing", "#!/bin/sh\nexit 2\n");

    let checker = AccessChecker::new();
    assert_eq!(checker.check_access(&listing, &full_params()), ValidationResult::Ok);
    assert_eq!(
        checker.check_access(&failing, &full_params()),
        ValidationResult::Error(MessageKey::PolyspaceAccessConnectionFailed)
    );
}

#[test]
#[cfg(unix)]
fn test_non_executable_binary_is_error() {
    let tmp = tempfile::tempdir().unwrap();
    let (bin_dir, _) = fake_installation(&tmp, "bin");

    // Exists as a file, so the existence checks pass, but it cannot be launched
    let result = AccessChecker::new().check_access(&bin_dir, &full_params());
    assert_eq!(result, ValidationResult::Error(MessageKey::PolyspaceAccessConnectionFailed));
}
