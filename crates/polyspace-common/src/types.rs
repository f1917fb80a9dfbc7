//! Core types for configuration checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::messages::{MessageCatalog, MessageKey};

/// Severity of a validation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Ok,
    Warning,
    Error,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Ok => "ok",
            Kind::Warning => "warning",
            Kind::Error => "error",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single validation call.
///
/// `Ok` carries no message. `Warning` and `Error` carry the key of the
/// message to show; rendering it is left to a `MessageCatalog`.
///
/// # Example
/// ```
/// use polyspace_common::{Kind, MessageCatalog, MessageKey, ValidationResult};
///
/// let result = ValidationResult::Error(MessageKey::WrongProtocol);
/// assert_eq!(result.kind(), Kind::Error);
/// assert_eq!(result.render(&MessageCatalog::new()), "wrong protocol");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum ValidationResult {
    Ok,
    Warning(MessageKey),
    Error(MessageKey),
}

impl ValidationResult {
    pub fn kind(&self) -> Kind {
        match self {
            ValidationResult::Ok => Kind::Ok,
            ValidationResult::Warning(_) => Kind::Warning,
            ValidationResult::Error(_) => Kind::Error,
        }
    }

    pub fn message(&self) -> Option<MessageKey> {
        match self {
            ValidationResult::Ok => None,
            ValidationResult::Warning(key) | ValidationResult::Error(key) => Some(*key),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationResult::Ok)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ValidationResult::Error(_))
    }

    /// Renders the message text, or an empty string for `Ok`.
    pub fn render(&self, catalog: &MessageCatalog) -> String {
        self.message()
            .map(|key| catalog.text(key).to_string())
            .unwrap_or_default()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        ValidationResult::Ok
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(key) => write!(f, "{}: {}", self.kind(), key.default_text()),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// Connection parameters for a Polyspace Access server.
///
/// Every field is optional. An empty string means "leave the flag off the
/// command line", never "use a default value".
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParameters {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub encrypted_password: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: String,
}

impl ConnectionParameters {
    pub fn new(login: impl Into<String>, encrypted_password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            encrypted_password: encrypted_password.into(),
            ..Self::default()
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }
}

// Keeps the encrypted password out of logs and panic messages.
impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("login", &self.login)
            .field("encrypted_password", &"***")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}
