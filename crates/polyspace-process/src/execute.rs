//! External command execution.
//!
//! Only the exit status of the child matters. Output is discarded and any
//! failure to launch is reported as an unsuccessful run, so callers cannot
//! tell "the tool said no" from "the tool could not start".

use std::process::{Command, Stdio};
use tracing::debug;

/// Runs an argument vector and reports whether it succeeded.
///
/// The access checker takes a runner so tests can observe the command it
/// built without launching anything.
pub trait CommandRunner: Send + Sync {
    /// Returns true iff the command ran and exited with code 0.
    fn run(&self, argv: &[String]) -> bool;
}

/// Runner that launches a real child process and blocks until it exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, argv: &[String]) -> bool {
        check_command(argv)
    }
}

impl<F> CommandRunner for F
where
    F: Fn(&[String]) -> bool + Send + Sync,
{
    fn run(&self, argv: &[String]) -> bool {
        self(argv)
    }
}

/// Launch `argv` as a child process and wait for it.
///
/// Returns true iff the exit code is exactly zero. An empty vector, a spawn
/// error, or a child killed by a signal all yield false. There is no timeout.
pub fn check_command(argv: &[String]) -> bool {
    let Some((program, args)) = argv.split_first() else {
        debug!("Refusing to run an empty command");
        return false;
    };

    // Arguments may carry credentials; callers log their own masked form
    debug!("Running {} with {} argument(s)", program, args.len());

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) => {
            debug!("Command {} exited with {}", program, status);
            status.code() == Some(0)
        }
        Err(e) => {
            debug!("Failed to launch {}: {}", program, e);
            false
        }
    }
}

/// Copy of `argv` with the arguments at `positions` masked.
///
/// Masking is positional so a value that looks like a flag cannot shift
/// the mask onto the wrong argument.
pub fn redact_positions(argv: &[String], positions: &[usize]) -> Vec<String> {
    argv.iter()
        .enumerate()
        .map(|(index, arg)| {
            if positions.contains(&index) {
                "***".to_string()
            } else {
                arg.clone()
            }
        })
        .collect()
}
