//! Configuration Management
//!
//! Persistent configuration for gce-mv, stored as JSON in the user config
//! directory. Anything left unset falls back to the environment and then to
//! the gcloud CLI configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::gcp::auth;
use crate::gcp::client::DEFAULT_ENDPOINT;
use crate::multiversion::{DeletePolicy, DeleteRetryPolicy, ScopeType, WaitPolicy};
use crate::{Error, Result};

/// Environment variable holding a ready-made OAuth access token
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_OAUTH_ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitConfig {
    #[serde(default = "default_wait_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_wait_timeout() -> u64 {
    4 * 60
}

fn default_poll_interval() -> u64 {
    2
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_wait_timeout(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRetryConfig {
    #[serde(default = "default_delete_attempts")]
    pub attempts: u32,
    #[serde(default = "default_delete_delay")]
    pub delay_secs: u64,
}

fn default_delete_attempts() -> u32 {
    20
}

fn default_delete_delay() -> u64 {
    2
}

impl Default for DeleteRetryConfig {
    fn default() -> Self {
        Self {
            attempts: default_delete_attempts(),
            delay_secs: default_delete_delay(),
        }
    }
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub zone: Option<String>,
    /// Compute API root, `https://compute.googleapis.com` when unset
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Also build a client for the beta API
    #[serde(default)]
    pub enable_beta: bool,
    /// Static access token instead of Application Default Credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default)]
    pub wait: WaitConfig,
    #[serde(default)]
    pub delete_retry: DeleteRetryConfig,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gce-mv").join("config.json"))
    }

    /// Load configuration from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location and return where it went
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| Error::Config("no user config directory".to_string()))?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.endpoint {
            url::Url::parse(endpoint)
                .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
        }
        if let Some(project) = &self.project_id {
            if !auth::validate_project_id(project) {
                return Err(Error::Config(format!("invalid project id '{}'", project)));
            }
        }
        if self.delete_retry.attempts == 0 {
            return Err(Error::Config("delete_retry.attempts must be at least 1".to_string()));
        }
        if self.wait.poll_interval_secs == 0 {
            return Err(Error::Config("wait.poll_interval_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Get effective project (config > environment > gcloud default)
    pub fn effective_project(&self) -> Option<String> {
        self.project_id.clone().or_else(auth::get_default_project)
    }

    /// Get effective zone (config > environment > gcloud default)
    pub fn effective_zone(&self) -> Option<String> {
        self.zone.clone().or_else(auth::get_default_zone)
    }

    /// Get effective region (config > environment > gcloud default > zone's region)
    pub fn effective_region(&self) -> Option<String> {
        self.region
            .clone()
            .or_else(|| self.zone.as_deref().map(auth::region_of_zone))
            .or_else(auth::get_default_region)
    }

    /// Region or zone an operation of `scope` is looked up in by default
    pub fn effective_qualifier(&self, scope: ScopeType) -> Option<String> {
        match scope {
            ScopeType::Global => None,
            ScopeType::Region => self.effective_region(),
            ScopeType::Zone => self.effective_zone(),
        }
    }

    pub fn effective_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn effective_access_token(&self) -> Option<String> {
        self.access_token
            .clone()
            .or_else(|| std::env::var(ACCESS_TOKEN_ENV).ok())
            .filter(|t| !t.is_empty())
    }

    pub fn wait_policy(&self) -> WaitPolicy {
        WaitPolicy {
            timeout: Duration::from_secs(self.wait.timeout_secs),
            poll_interval: Duration::from_secs(self.wait.poll_interval_secs),
        }
    }

    pub fn delete_retry_policy(&self) -> DeleteRetryPolicy {
        DeleteRetryPolicy {
            attempts: self.delete_retry.attempts,
            delay: Duration::from_secs(self.delete_retry.delay_secs),
        }
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        DeletePolicy {
            wait: self.wait_policy(),
            retry: self.delete_retry_policy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.wait_policy(), WaitPolicy::default());
        assert_eq!(config.delete_retry_policy(), DeleteRetryPolicy::default());
        assert_eq!(config.delete_policy(), DeletePolicy::default());
        assert_eq!(config.effective_endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"project_id": "my-project-123", "zone": "europe-west1-b", "wait": {"timeout_secs": 30}}"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.project_id.as_deref(), Some("my-project-123"));
        assert_eq!(config.wait.timeout_secs, 30);
        assert_eq!(config.wait.poll_interval_secs, 2);
        assert_eq!(config.delete_retry.attempts, 20);
        assert_eq!(config.effective_region().as_deref(), Some("europe-west1"));
    }

    #[test]
    fn test_qualifier_follows_scope() {
        let config = Config {
            zone: Some("europe-west1-b".to_string()),
            ..Default::default()
        };
        assert_eq!(config.effective_qualifier(ScopeType::Global), None);
        assert_eq!(
            config.effective_qualifier(ScopeType::Region).as_deref(),
            Some("europe-west1")
        );
        assert_eq!(
            config.effective_qualifier(ScopeType::Zone).as_deref(),
            Some("europe-west1-b")
        );

        let config = Config {
            region: Some("us-east1".to_string()),
            ..config
        };
        assert_eq!(config.effective_qualifier(ScopeType::Region).as_deref(), Some("us-east1"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            project_id: Some("my-project-123".to_string()),
            enable_beta: true,
            endpoint: Some("http://127.0.0.1:8080".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, r#"{"endpoint": "not a url"}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));

        std::fs::write(&path, r#"{"delete_retry": {"attempts": 0}}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));

        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
