//! Credential and region resolution
//!
//! Resolution runs exactly once, at facade construction:
//! - Environment variables (AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY,
//!   AWS_REGION) win when all three are set.
//! - Otherwise a JSON credentials file is loaded, when a path was supplied.
//! - Otherwise resolution fails.
//!
//! The environment is captured as a snapshot up front, so resolution itself
//! is a pure function of its inputs.

use std::env;
use std::fs;
use std::path::Path;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Where the resolved credentials came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialsSource {
    /// All three environment variables were set
    Environment,
    /// Loaded from the JSON credentials file
    ConfigFile,
}

impl CredentialsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialsSource::Environment => "environment",
            CredentialsSource::ConfigFile => "config file",
        }
    }
}

/// Snapshot of the credential-related environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
}

impl EnvCredentials {
    /// Capture the current process environment. Empty values are treated
    /// as absent.
    pub fn from_env() -> Self {
        Self {
            access_key_id: non_empty_var("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty_var("AWS_SECRET_ACCESS_KEY"),
            region: non_empty_var("AWS_REGION"),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// JSON credentials file layout (the SDK's native shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsFile {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    #[serde(default)]
    pub session_token: Option<String>,
}

/// Fully resolved credentials. Access key, secret key and region are all
/// present here, or resolution has already failed.
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub session_token: Option<String>,
    pub source: CredentialsSource,
}

impl ResolvedCredentials {
    /// Resolve credentials from the environment snapshot, falling back to
    /// the credentials file when a path was supplied.
    ///
    /// A complete environment wins outright: no file I/O happens even when
    /// a path is present.
    pub fn resolve(
        env: &EnvCredentials,
        config_path: Option<&Path>,
    ) -> Result<Self, ProviderError> {
        if let (Some(access_key_id), Some(secret_access_key), Some(region)) = (
            env.access_key_id.as_deref(),
            env.secret_access_key.as_deref(),
            env.region.as_deref(),
        ) {
            tracing::debug!(region, "using credentials from environment variables");
            return Ok(Self {
                access_key_id: access_key_id.to_string(),
                secret_access_key: secret_access_key.to_string(),
                region: region.to_string(),
                session_token: None,
                source: CredentialsSource::Environment,
            });
        }

        if let Some(path) = config_path {
            return Self::from_file(path);
        }

        Err(ProviderError::MissingCredentials)
    }

    /// Load credentials from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ProviderError> {
        let contents = fs::read_to_string(path).map_err(|source| ProviderError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: CredentialsFile =
            serde_json::from_str(&contents).map_err(|source| ProviderError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!(
            path = %path.display(),
            region = %file.region,
            "loaded credentials file"
        );

        Ok(Self {
            access_key_id: file.access_key_id,
            secret_access_key: file.secret_access_key,
            region: file.region,
            session_token: file.session_token,
            source: CredentialsSource::ConfigFile,
        })
    }

    /// Build the shared SDK configuration carrying these credentials.
    ///
    /// The credentials are injected explicitly rather than exported back
    /// into the process environment, so constructing several facades
    /// concurrently cannot race on global state.
    pub async fn load_sdk_config(&self) -> SdkConfig {
        let credentials = Credentials::new(
            self.access_key_id.clone(),
            self.secret_access_key.clone(),
            self.session_token.clone(),
            None,
            "aws-provider",
        );

        aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(self.region.clone()))
            .load()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn complete_env() -> EnvCredentials {
        EnvCredentials {
            access_key_id: Some("AKIDEXAMPLE".to_string()),
            secret_access_key: Some("wJalrXUtnFEMI".to_string()),
            region: Some("eu-west-1".to_string()),
        }
    }

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const VALID_FILE: &str = r#"{
        "accessKeyId": "AKIDFROMFILE",
        "secretAccessKey": "filesecret",
        "region": "ap-southeast-2"
    }"#;

    #[test]
    fn test_resolve_from_complete_environment() {
        let resolved = ResolvedCredentials::resolve(&complete_env(), None).unwrap();
        assert_eq!(resolved.access_key_id, "AKIDEXAMPLE");
        assert_eq!(resolved.region, "eu-west-1");
        assert_eq!(resolved.source, CredentialsSource::Environment);
        assert!(resolved.session_token.is_none());
    }

    #[test]
    fn test_resolve_environment_wins_over_file() {
        // Path points nowhere: must not be touched when the environment
        // is complete.
        let path = Path::new("/nonexistent/credentials.json");
        let resolved = ResolvedCredentials::resolve(&complete_env(), Some(path)).unwrap();
        assert_eq!(resolved.source, CredentialsSource::Environment);
    }

    #[test]
    fn test_resolve_nothing_fails() {
        let result = ResolvedCredentials::resolve(&EnvCredentials::default(), None);
        assert!(matches!(result, Err(ProviderError::MissingCredentials)));
    }

    #[test]
    fn test_resolve_partial_environment_falls_back_to_file() {
        let env = EnvCredentials {
            access_key_id: Some("AKIDEXAMPLE".to_string()),
            secret_access_key: None,
            region: Some("eu-west-1".to_string()),
        };
        let file = write_file(VALID_FILE);
        let resolved = ResolvedCredentials::resolve(&env, Some(file.path())).unwrap();
        assert_eq!(resolved.access_key_id, "AKIDFROMFILE");
        assert_eq!(resolved.region, "ap-southeast-2");
        assert_eq!(resolved.source, CredentialsSource::ConfigFile);
    }

    #[test]
    fn test_resolve_partial_environment_no_file_fails() {
        let env = EnvCredentials {
            access_key_id: Some("AKIDEXAMPLE".to_string()),
            secret_access_key: Some("wJalrXUtnFEMI".to_string()),
            region: None,
        };
        let result = ResolvedCredentials::resolve(&env, None);
        assert!(matches!(result, Err(ProviderError::MissingCredentials)));
    }

    #[test]
    fn test_from_file_valid() {
        let file = write_file(VALID_FILE);
        let resolved = ResolvedCredentials::from_file(file.path()).unwrap();
        assert_eq!(resolved.access_key_id, "AKIDFROMFILE");
        assert_eq!(resolved.secret_access_key, "filesecret");
        assert_eq!(resolved.region, "ap-southeast-2");
        assert!(resolved.session_token.is_none());
    }

    #[test]
    fn test_from_file_with_session_token() {
        let file = write_file(
            r#"{
                "accessKeyId": "ASIATEMP",
                "secretAccessKey": "tempsecret",
                "region": "us-east-1",
                "sessionToken": "FwoGZXIvYXdzEBE"
            }"#,
        );
        let resolved = ResolvedCredentials::from_file(file.path()).unwrap();
        assert_eq!(resolved.session_token.as_deref(), Some("FwoGZXIvYXdzEBE"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = ResolvedCredentials::from_file(Path::new("/nonexistent/credentials.json"));
        match result {
            Err(ProviderError::ConfigRead { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/credentials.json"));
            }
            other => panic!("expected ConfigRead, got {:?}", other),
        }
    }

    #[test]
    fn test_from_file_malformed_json() {
        let file = write_file("not json at all");
        let result = ResolvedCredentials::from_file(file.path());
        assert!(matches!(result, Err(ProviderError::ConfigParse { .. })));
    }

    #[test]
    fn test_from_file_missing_required_field() {
        // Valid JSON but no region
        let file = write_file(r#"{"accessKeyId": "AKID", "secretAccessKey": "secret"}"#);
        let result = ResolvedCredentials::from_file(file.path());
        assert!(matches!(result, Err(ProviderError::ConfigParse { .. })));
    }

    #[test]
    fn test_credentials_source_as_str() {
        assert_eq!(CredentialsSource::Environment.as_str(), "environment");
        assert_eq!(CredentialsSource::ConfigFile.as_str(), "config file");
    }

    #[tokio::test]
    async fn test_load_sdk_config_carries_region() {
        let resolved = ResolvedCredentials {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "wJalrXUtnFEMI".to_string(),
            region: "eu-central-1".to_string(),
            session_token: None,
            source: CredentialsSource::Environment,
        };
        let config = resolved.load_sdk_config().await;
        assert_eq!(config.region().map(|r| r.to_string()), Some("eu-central-1".to_string()));
    }
}
