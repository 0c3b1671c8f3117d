//! GCP Authentication
//!
//! Handles authentication using Application Default Credentials (ADC), or a
//! fixed access token supplied through configuration. Also resolves the
//! default project, region and zone from the gcloud CLI configuration.

use gcp_auth::TokenProvider;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::{Error, Result};

/// Default scopes for Compute Engine access
pub const DEFAULT_SCOPES: &[&str] = &["https://www.googleapis.com/auth/compute"];

/// Refresh tokens this much before they actually expire
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL if we can't determine expiry (conservative: 30 minutes)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Clone)]
enum TokenSource {
    Provider(Arc<dyn TokenProvider>),
    Static(String),
}

/// GCP credentials holder with token caching
#[derive(Clone)]
pub struct GcpCredentials {
    source: TokenSource,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

impl GcpCredentials {
    /// Create new GCP credentials using Application Default Credentials
    pub async fn new() -> Result<Self> {
        let provider = gcp_auth::provider().await.map_err(|e| Error::Auth {
            message: "failed to initialize GCP authentication, run 'gcloud auth application-default login'"
                .to_string(),
            source: Some(e),
        })?;

        Ok(Self {
            source: TokenSource::Provider(provider),
            token_cache: Arc::new(RwLock::new(None)),
        })
    }

    /// Credentials that always present `token`. Used with emulators and tests.
    pub fn from_access_token(token: impl Into<String>) -> Self {
        Self {
            source: TokenSource::Static(token.into()),
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Get an access token for API calls
    pub async fn get_token(&self) -> Result<String> {
        let provider = match &self.source {
            TokenSource::Static(token) => return Ok(token.clone()),
            TokenSource::Provider(provider) => provider,
        };

        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let token = provider.token(DEFAULT_SCOPES).await.map_err(|e| Error::Auth {
            message: "failed to get access token".to_string(),
            source: Some(e),
        })?;
        let token_str = token.as_str().to_string();

        let expires_at = Instant::now() + DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER;
        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: token_str.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "New token cached, expires in ~{} minutes",
            (DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(token_str)
    }

    /// Force refresh the token
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }
        self.get_token().await
    }
}

/// Get the gcloud configuration directory
pub fn get_gcloud_config_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CLOUDSDK_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|p| p.join("gcloud"))
}

/// Validate a GCP project ID format
/// Project IDs must be 6-30 characters, lowercase letters, digits, and hyphens
/// Must start with a letter and cannot end with a hyphen
pub fn validate_project_id(project: &str) -> bool {
    if project.len() < 6 || project.len() > 30 {
        return false;
    }

    match project.chars().next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }

    if project.ends_with('-') {
        return false;
    }

    project
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Look up `key` in `[section]` of the active gcloud configuration under
/// `config_dir`.
pub fn read_gcloud_property(config_dir: &Path, section: &str, key: &str) -> Option<String> {
    let active_config = std::fs::read_to_string(config_dir.join("active_config")).ok()?;
    let config_name = active_config.trim();

    // Security: Validate config name to prevent path traversal
    if config_name.is_empty()
        || !config_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        tracing::warn!("Invalid characters in active_config name");
        return None;
    }

    let config_path = config_dir
        .join("configurations")
        .join(format!("config_{}", config_name));
    let content = std::fs::read_to_string(config_path).ok()?;

    let header = format!("[{}]", section);
    let mut in_section = false;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            in_section = line == header;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some((name, value)) = line.split_once('=') {
            if name.trim() == key {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read the default project from the environment or gcloud configuration
/// Security: Validates project ID format before returning
pub fn get_default_project() -> Option<String> {
    for name in ["CLOUDSDK_CORE_PROJECT", "GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"] {
        if let Ok(project) = std::env::var(name) {
            if validate_project_id(&project) {
                return Some(project);
            }
            tracing::warn!("Invalid project ID format in {}", name);
        }
    }

    let config_dir = get_gcloud_config_dir()?;
    read_gcloud_property(&config_dir, "core", "project").filter(|p| validate_project_id(p))
}

/// Get the default zone from the environment or gcloud configuration
pub fn get_default_zone() -> Option<String> {
    if let Some(zone) = env_value("CLOUDSDK_COMPUTE_ZONE") {
        return Some(zone);
    }
    let config_dir = get_gcloud_config_dir()?;
    read_gcloud_property(&config_dir, "compute", "zone")
}

/// Get the default region from the environment or gcloud configuration,
/// falling back to the region of the default zone.
pub fn get_default_region() -> Option<String> {
    if let Some(region) = env_value("CLOUDSDK_COMPUTE_REGION") {
        return Some(region);
    }
    get_gcloud_config_dir()
        .and_then(|dir| read_gcloud_property(&dir, "compute", "region"))
        .or_else(|| get_default_zone().map(|zone| region_of_zone(&zone)))
}

/// `us-central1-a` -> `us-central1`
pub fn region_of_zone(zone: &str) -> String {
    match zone.rsplit_once('-') {
        Some((region, _)) => region.to_string(),
        None => zone.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, name: &str, content: &str) {
        std::fs::create_dir_all(dir.join("configurations")).unwrap();
        std::fs::write(dir.join("active_config"), format!("{name}\n")).unwrap();
        std::fs::write(
            dir.join("configurations").join(format!("config_{name}")),
            content,
        )
        .unwrap();
    }

    #[test]
    fn test_validate_project_id() {
        assert!(validate_project_id("my-project-123"));
        assert!(!validate_project_id("short"));
        assert!(!validate_project_id("1starts-with-digit"));
        assert!(!validate_project_id("ends-with-hyphen-"));
        assert!(!validate_project_id("Upper-Case-Project"));
    }

    #[test]
    fn test_read_property_from_section() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default",
            "[core]\nproject = my-project-123\n# zone = nope\n\n[compute]\nzone = europe-west1-b\nregion=europe-west1\n",
        );

        assert_eq!(
            read_gcloud_property(dir.path(), "core", "project").as_deref(),
            Some("my-project-123")
        );
        assert_eq!(
            read_gcloud_property(dir.path(), "compute", "zone").as_deref(),
            Some("europe-west1-b")
        );
        assert_eq!(
            read_gcloud_property(dir.path(), "compute", "region").as_deref(),
            Some("europe-west1")
        );
        assert!(read_gcloud_property(dir.path(), "core", "zone").is_none());
    }

    #[test]
    fn test_active_config_path_traversal_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "default", "[core]\nproject = my-project-123\n");
        std::fs::write(dir.path().join("active_config"), "../../etc/passwd").unwrap();
        assert!(read_gcloud_property(dir.path(), "core", "project").is_none());
    }

    #[test]
    fn test_region_of_zone() {
        assert_eq!(region_of_zone("us-central1-a"), "us-central1");
        assert_eq!(region_of_zone("global"), "global");
    }

    #[test]
    fn test_static_token() {
        let creds = GcpCredentials::from_access_token("ya29.test");
        assert_eq!(tokio_test::block_on(creds.get_token()).unwrap(), "ya29.test");
        assert_eq!(tokio_test::block_on(creds.refresh_token()).unwrap(), "ya29.test");
    }
}
