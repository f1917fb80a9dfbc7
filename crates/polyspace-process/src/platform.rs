//! Platform query.
//!
//! The executable suffix is the only platform-dependent piece of the
//! checks. It is carried as a value so callers and tests can pick the
//! platform explicitly instead of relying on the compile target.

use std::fmt;

/// Operating system family the external tool is installed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform of the running binary.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Conventional executable extension, including the dot.
    pub fn exe_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Unix => "",
        }
    }

    /// Appends the executable suffix to a command name.
    pub fn executable_name(&self, command: &str) -> String {
        format!("{}{}", command, self.exe_suffix())
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Unix => write!(f, "unix"),
        }
    }
}

/// Executable suffix of the running platform.
pub fn exe_suffix() -> &'static str {
    Platform::current().exe_suffix()
}
