//! Error types for credential resolution and facade construction

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving credentials or building the facade.
///
/// All of these are fatal to construction: there is no retry or recovery
/// at this layer.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No usable credentials in the environment and no file to fall back to
    #[error(
        "no AWS credentials found: set AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and AWS_REGION, \
         or pass the path to a credentials file \
         (see https://docs.aws.amazon.com/sdkref/latest/guide/creds-config-files.html)"
    )]
    MissingCredentials,

    /// The credentials file could not be read
    #[error("failed to read credentials file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file is not valid JSON or is missing required fields
    #[error("failed to parse credentials file {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
