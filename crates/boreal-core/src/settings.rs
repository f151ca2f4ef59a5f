//! Environment-driven runtime settings.
//!
//! The default working directory and the reasoning-engine credential
//! are supplied out-of-band via the environment, never by the core
//! components themselves.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the default working directory.
pub const WORKSPACE_ENV: &str = "BOREAL_WORKSPACE";

/// Environment variable holding the reasoning-engine credential.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("engine credential missing: set {API_KEY_ENV}")]
    MissingCredential,
}

/// Runtime configuration for an executor deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Default working directory for tasks that do not specify one.
    pub working_directory: PathBuf,
    /// Reasoning-engine credential. `None` means the executor must
    /// refuse to start.
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
}

impl Settings {
    /// Build settings from the process environment. Falls back to the
    /// current directory when [`WORKSPACE_ENV`] is unset.
    pub fn from_env() -> Self {
        let working_directory = env::var(WORKSPACE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let api_key = env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self {
            working_directory,
            api_key,
        }
    }

    /// The credential, or a configuration error if it is absent.
    pub fn require_api_key(&self) -> Result<&str, SettingsError> {
        self.api_key
            .as_deref()
            .ok_or(SettingsError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_a_configuration_error() {
        let settings = Settings {
            working_directory: PathBuf::from("/tmp"),
            api_key: None,
        };
        assert!(settings.require_api_key().is_err());
    }

    #[test]
    fn present_credential_is_returned() {
        let settings = Settings {
            working_directory: PathBuf::from("/tmp"),
            api_key: Some("sk-test".into()),
        };
        assert_eq!(settings.require_api_key().unwrap(), "sk-test");
    }

    #[test]
    fn credential_is_not_serialized() {
        let settings = Settings {
            working_directory: PathBuf::from("/tmp"),
            api_key: Some("sk-secret".into()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
