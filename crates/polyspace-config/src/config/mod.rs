use anyhow::{Context, Result};
use polyspace_common::{ConnectionParameters, MessageCatalog, MessageKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub mod validation;

pub use validation::ValidationReport;

/// Top-level plugin configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolyspaceConfig {
    pub installation: InstallationConfig,
    #[serde(default)]
    pub access: AccessServerConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Message catalog overrides, keyed by message key
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: HashMap<MessageKey, String>,
}

/// Polyspace installation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallationConfig {
    #[serde(default = "default_installation_name")]
    pub name: String,
    /// Folder holding the Polyspace binaries
    pub bin_dir: PathBuf,
}

/// Polyspace Access server and credentials.
///
/// All fields are strings as typed by the user; they are validated, not
/// parsed, so an invalid port can be reported rather than rejected at load.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessServerConfig {
    #[serde(default)]
    pub protocol: String,
    #[serde(default)]
    pub host: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub port: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub encrypted_password: String,
}

impl std::fmt::Debug for AccessServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessServerConfig")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

impl AccessServerConfig {
    pub fn connection_parameters(&self) -> ConnectionParameters {
        ConnectionParameters::new(&self.login, &self.encrypted_password)
            .with_protocol(&self.protocol)
            .with_host(&self.host)
            .with_port(&self.port)
    }
}

/// Notification settings for post-build reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Report file, relative to the build workspace
    #[serde(default)]
    pub report_filename: String,
}

impl PolyspaceConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::load_from_string(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// Loading only checks structure. Field values are checked by
    /// [`PolyspaceConfig::validate_fields`] so every problem can be shown.
    pub fn load_from_string(content: &str) -> Result<Self> {
        let config: PolyspaceConfig = serde_yaml::from_str(content)
            .context("Failed to parse YAML configuration")?;

        Ok(config)
    }

    /// Validate every user-editable field
    pub fn validate_fields(&self) -> ValidationReport {
        validation::validate_config(self)
    }

    /// Message catalog with this configuration's overrides applied
    pub fn catalog(&self) -> MessageCatalog {
        let mut catalog = MessageCatalog::new();
        for (key, text) in &self.messages {
            catalog.set(*key, text.clone());
        }
        catalog
    }
}

fn default_installation_name() -> String {
    "default".to_string()
}

// Ports are often written unquoted in YAML. A blank value counts as unset.
// YAML resolves unquoted integers itself (`0x1F` is 31), so numbers are
// kept in their decimal form; quote the value to validate it as typed.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_yaml::Number),
    }

    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
