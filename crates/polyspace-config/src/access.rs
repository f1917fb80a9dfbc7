//! Polyspace Access check.
//!
//! Verifies that a Polyspace installation can reach an Access server with
//! the given credentials by running `polyspace-access -list-project`.
//!
//! # Example
//! ```no_run
//! use polyspace_config::{AccessChecker, ConnectionParameters, ValidationResult};
//!
//! let params = ConnectionParameters::new("jenkins", "encrypted")
//!     .with_protocol("https")
//!     .with_host("access.example.com");
//!
//! let result = AccessChecker::new().check_access("/opt/polyspace/bin", &params);
//! if result == ValidationResult::Ok {
//!     println!("Polyspace Access reachable");
//! }
//! ```

use polyspace_common::{ConnectionParameters, MessageKey, ValidationResult};
use polyspace_process::{
    check_bin_command_exists, check_bin_folder_exists, redact_positions, CommandRunner, Platform,
    SystemCommandRunner,
};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the Access client binary, without platform suffix.
pub const POLYSPACE_ACCESS_COMMAND: &str = "polyspace-access";

pub const FLAG_LOGIN: &str = "-login";
pub const FLAG_ENCRYPTED_PASSWORD: &str = "-encrypted-password";
pub const FLAG_PROTOCOL: &str = "-protocol";
pub const FLAG_HOST: &str = "-host";
pub const FLAG_PORT: &str = "-port";
pub const FLAG_LIST_PROJECT: &str = "-list-project";

// binary, -login, login, -encrypted-password, password
const PASSWORD_INDEX: usize = 4;

/// Argument vector for a `polyspace-access` invocation.
///
/// Always starts with the binary path and ends with `-list-project`.
/// Optional flags are only present when their value is non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCommand {
    argv: Vec<String>,
}

impl AccessCommand {
    /// Build the listing command for `binary` and `params`.
    pub fn build(binary: &Path, params: &ConnectionParameters) -> Self {
        let mut argv = vec![binary.to_string_lossy().into_owned()];

        argv.push(FLAG_LOGIN.to_string());
        argv.push(params.login.clone());
        argv.push(FLAG_ENCRYPTED_PASSWORD.to_string());
        argv.push(params.encrypted_password.clone());

        push_optional(&mut argv, FLAG_PROTOCOL, &params.protocol);
        push_optional(&mut argv, FLAG_HOST, &params.host);
        push_optional(&mut argv, FLAG_PORT, &params.port);

        argv.push(FLAG_LIST_PROJECT.to_string());

        Self { argv }
    }

    pub fn args(&self) -> &[String] {
        &self.argv
    }

    pub fn into_args(self) -> Vec<String> {
        self.argv
    }

    /// Arguments with the encrypted password masked, for logging.
    pub fn redacted(&self) -> Vec<String> {
        redact_positions(&self.argv, &[PASSWORD_INDEX])
    }
}

fn push_optional(argv: &mut Vec<String>, flag: &str, value: &str) {
    if !value.is_empty() {
        argv.push(flag.to_string());
        argv.push(value.to_string());
    }
}

impl fmt::Debug for AccessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessCommand").field(&self.redacted()).finish()
    }
}

/// Runs the Polyspace Access check against an installation.
///
/// The platform decides the binary suffix and the runner decides how the
/// command is executed. Both default to the real system.
#[derive(Debug, Clone)]
pub struct AccessChecker<R = SystemCommandRunner> {
    platform: Platform,
    runner: R,
}

impl AccessChecker<SystemCommandRunner> {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
            runner: SystemCommandRunner,
        }
    }
}

impl Default for AccessChecker<SystemCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> AccessChecker<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            platform: Platform::current(),
            runner,
        }
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Path of the `polyspace-access` binary inside `bin_dir`.
    pub fn access_binary(&self, bin_dir: impl AsRef<Path>) -> PathBuf {
        bin_dir
            .as_ref()
            .join(self.platform.executable_name(POLYSPACE_ACCESS_COMMAND))
    }

    /// Check that `bin_dir` holds a working `polyspace-access` able to
    /// list projects on the server described by `params`.
    ///
    /// Returns `Warning` when the folder or binary is missing (no process
    /// is launched), `Error` when the command fails, `Ok` otherwise.
    pub fn check_access(&self, bin_dir: impl AsRef<Path>, params: &ConnectionParameters) -> ValidationResult {
        let bin_dir = bin_dir.as_ref();
        let binary = self.access_binary(bin_dir);

        if let Err(warning) = check_bin_folder_exists(bin_dir) {
            warn!("Polyspace bin folder not found: {}", bin_dir.display());
            return warning.into();
        }
        if let Err(warning) = check_bin_command_exists(&binary) {
            warn!("Polyspace Access binary not valid: {}", binary.display());
            return warning.into();
        }

        let command = AccessCommand::build(&binary, params);
        debug!("Checking Polyspace Access: {:?}", command);

        if self.runner.run(command.args()) {
            debug!("Polyspace Access check succeeded");
            ValidationResult::Ok
        } else {
            debug!("Polyspace Access check failed");
            ValidationResult::Error(MessageKey::PolyspaceAccessConnectionFailed)
        }
    }
}

/// Positional form of [`AccessChecker::check_access`] using the real system.
pub fn check_polyspace_access(
    bin_dir: &str,
    login: &str,
    encrypted_password: &str,
    protocol: &str,
    host: &str,
    port: &str,
) -> ValidationResult {
    let params = ConnectionParameters::new(login, encrypted_password)
        .with_protocol(protocol)
        .with_host(host)
        .with_port(port);

    AccessChecker::new().check_access(bin_dir, &params)
}
