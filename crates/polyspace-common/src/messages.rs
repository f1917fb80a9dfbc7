//! Message keys and the catalog that renders them.
//!
//! Checks only pick a key. Turning a key into text is the catalog's job, so
//! the host can ship its own translations without touching the checks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::errors::CatalogError;

/// Key of a human-readable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    WrongProtocol,
    PortMustBeANumber,
    AbsoluteDirectoryForbidden,
    PreviousDirectoryForbidden,
    PolyspaceBinNotFound,
    PolyspaceBinNotValid,
    PolyspaceAccessConnectionFailed,
}

impl MessageKey {
    pub const ALL: [MessageKey; 7] = [
        MessageKey::WrongProtocol,
        MessageKey::PortMustBeANumber,
        MessageKey::AbsoluteDirectoryForbidden,
        MessageKey::PreviousDirectoryForbidden,
        MessageKey::PolyspaceBinNotFound,
        MessageKey::PolyspaceBinNotValid,
        MessageKey::PolyspaceAccessConnectionFailed,
    ];

    /// Returns the catalog key as written in override files.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::WrongProtocol => "wrong_protocol",
            MessageKey::PortMustBeANumber => "port_must_be_a_number",
            MessageKey::AbsoluteDirectoryForbidden => "absolute_directory_forbidden",
            MessageKey::PreviousDirectoryForbidden => "previous_directory_forbidden",
            MessageKey::PolyspaceBinNotFound => "polyspace_bin_not_found",
            MessageKey::PolyspaceBinNotValid => "polyspace_bin_not_valid",
            MessageKey::PolyspaceAccessConnectionFailed => "polyspace_access_connection_failed",
        }
    }

    /// Built-in English text.
    pub fn default_text(&self) -> &'static str {
        match self {
            MessageKey::WrongProtocol => "wrong protocol",
            MessageKey::PortMustBeANumber => "port must be a number",
            MessageKey::AbsoluteDirectoryForbidden => "absolute directory forbidden",
            MessageKey::PreviousDirectoryForbidden => "previous directory forbidden",
            MessageKey::PolyspaceBinNotFound => "polyspace bin not found",
            MessageKey::PolyspaceBinNotValid => "polyspace bin not valid",
            MessageKey::PolyspaceAccessConnectionFailed => "cannot connect to Polyspace Access",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lookup table from message key to text.
///
/// Keys without an override fall back to `MessageKey::default_text`.
///
/// # Example
/// ```
/// use polyspace_common::{MessageCatalog, MessageKey};
///
/// let catalog = MessageCatalog::from_yaml_str("wrong_protocol: protocole invalide").unwrap();
/// assert_eq!(catalog.text(MessageKey::WrongProtocol), "protocole invalide");
/// assert_eq!(catalog.text(MessageKey::PortMustBeANumber), "port must be a number");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    overrides: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a YAML map of `key: text`.
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let overrides: Option<HashMap<MessageKey, String>> = serde_yaml::from_str(content)?;
        Ok(Self::with_overrides(overrides.unwrap_or_default()))
    }

    pub fn with_overrides(overrides: HashMap<MessageKey, String>) -> Self {
        Self { overrides }
    }

    /// Adds or replaces the text for one key.
    pub fn set(&mut self, key: MessageKey, text: impl Into<String>) {
        self.overrides.insert(key, text.into());
    }

    pub fn text(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }
}
