//! Application settings loading from config.toml.
//!
//! Settings carry the identity stamped into export documents and relay
//! payloads (organization, system, version), the export filename prefix and
//! the optional email-relay endpoint. Every field has a default, so the
//! registry runs without a config file; `RELAY_ENDPOINT` in the environment
//! overrides the file value.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Application settings, deserialized from config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Organization name stamped into exports and relay payloads
    #[serde(default = "default_organization")]
    pub organization: String,
    /// System name stamped into exports and relay payloads
    #[serde(default = "default_system")]
    pub system: String,
    /// System version stamped into exports and relay payloads
    #[serde(default = "default_version")]
    pub version: String,
    /// Filename prefix for exported documents
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,
    /// Email relay endpoint; relay dispatch is skipped when unset
    #[serde(default)]
    pub relay_endpoint: Option<String>,
}

fn default_organization() -> String {
    "Caldlaser".to_string()
}

fn default_system() -> String {
    "TeepMES".to_string()
}

fn default_version() -> String {
    "1.1".to_string()
}

fn default_export_prefix() -> String {
    "caldlaser-maquinas".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            system: default_system(),
            version: default_version(),
            export_prefix: default_export_prefix(),
            relay_endpoint: None,
        }
    }
}

/// Loads settings from a TOML file, falling back to defaults when the file
/// does not exist. `RELAY_ENDPOINT` from the environment wins over the file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    let mut settings = if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;

        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?
    } else {
        Settings::default()
    };

    if let Ok(endpoint) = std::env::var("RELAY_ENDPOINT") {
        if !endpoint.is_empty() {
            settings.relay_endpoint = Some(endpoint);
        }
    }

    Ok(settings)
}

/// Loads settings from the default location (./config.toml)
pub fn load_default_settings() -> Result<Settings> {
    load("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            organization = "Acme Welding"
            system = "AcmeMES"
            version = "2.0"
            export_prefix = "acme-machines"
            relay_endpoint = "https://relay.example.com/f/abc123"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.organization, "Acme Welding");
        assert_eq!(settings.system, "AcmeMES");
        assert_eq!(settings.version, "2.0");
        assert_eq!(settings.export_prefix, "acme-machines");
        assert_eq!(
            settings.relay_endpoint.as_deref(),
            Some("https://relay.example.com/f/abc123")
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.organization, "Caldlaser");
        assert_eq!(settings.system, "TeepMES");
        assert_eq!(settings.version, "1.1");
        assert_eq!(settings.export_prefix, "caldlaser-maquinas");
        assert!(settings.relay_endpoint.is_none());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let settings = load("definitely-not-a-config.toml").unwrap();
        assert_eq!(settings.organization, "Caldlaser");
    }
}
