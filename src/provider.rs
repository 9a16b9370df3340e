//! The provider facade
//!
//! [`Provider`] resolves credentials once, loads one shared SDK
//! configuration and hands out per-service wrappers that all share it.
//! The named accessors (`compute`, `storage`, `s3`, ...) are thin aliases
//! over one generic factory, [`Provider::connect`].

use std::path::Path;
use std::sync::Arc;

use aws_config::SdkConfig;

use crate::credentials::{EnvCredentials, ResolvedCredentials};
use crate::error::ProviderError;
use crate::services::{
    ComputeClient, ContainerClient, DnsClient, FromSharedConfig, LoadBalancerClient,
    ObjectStorageClient, PeeringClient, RdbmsClient, StorageClient,
};

/// Options accepted by every service accessor
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    /// Pin the wrapper to an explicit API version; `None` selects the
    /// SDK default
    pub api_version: Option<String>,
}

impl ServiceOptions {
    /// Options pinning an explicit API version
    pub fn with_api_version(version: impl Into<String>) -> Self {
        Self {
            api_version: Some(version.into()),
        }
    }
}

/// Facade over the AWS SDK: one authenticated configuration, eight
/// service families.
#[derive(Debug, Clone)]
pub struct Provider {
    sdk_config: Arc<SdkConfig>,
    credentials: ResolvedCredentials,
}

impl Provider {
    /// Resolve credentials and build the facade.
    ///
    /// Environment variables win when all of AWS_ACCESS_KEY_ID,
    /// AWS_SECRET_ACCESS_KEY and AWS_REGION are set; `config_path` is the
    /// fallback when the environment is incomplete. With neither,
    /// construction fails with [`ProviderError::MissingCredentials`].
    pub async fn new(config_path: Option<&Path>) -> Result<Self, ProviderError> {
        let env = EnvCredentials::from_env();
        let credentials = ResolvedCredentials::resolve(&env, config_path)?;
        Ok(Self::from_credentials(credentials).await)
    }

    /// Build the facade from already-resolved credentials
    pub async fn from_credentials(credentials: ResolvedCredentials) -> Self {
        tracing::info!(
            source = credentials.source.as_str(),
            region = %credentials.region,
            "building shared SDK configuration"
        );

        let sdk_config = credentials.load_sdk_config().await;

        Self {
            sdk_config: Arc::new(sdk_config),
            credentials,
        }
    }

    /// The raw shared SDK configuration (escape hatch). The same `Arc` is
    /// handed out for the lifetime of the facade.
    pub fn sdk_config(&self) -> Arc<SdkConfig> {
        Arc::clone(&self.sdk_config)
    }

    /// The credentials this facade was constructed with
    pub fn credentials(&self) -> &ResolvedCredentials {
        &self.credentials
    }

    /// Generic factory: construct any service wrapper from the shared
    /// configuration
    pub fn connect<S: FromSharedConfig>(&self, options: &ServiceOptions) -> S {
        tracing::debug!(
            service = S::KIND.as_str(),
            api_version = options.api_version.as_deref(),
            "constructing service wrapper"
        );
        S::from_shared_config(&self.sdk_config, options.api_version.clone())
    }

    /// EC2
    pub fn compute(&self, options: &ServiceOptions) -> ComputeClient {
        self.connect(options)
    }

    /// EBS
    pub fn storage(&self, options: &ServiceOptions) -> StorageClient {
        self.connect(options)
    }

    /// S3
    pub fn s3(&self, options: &ServiceOptions) -> ObjectStorageClient {
        self.connect(options)
    }

    /// Elastic Load Balancing
    pub fn load_balancer(&self, options: &ServiceOptions) -> LoadBalancerClient {
        self.connect(options)
    }

    /// Route 53
    pub fn dns(&self, options: &ServiceOptions) -> DnsClient {
        self.connect(options)
    }

    /// Direct Connect
    pub fn peering(&self, options: &ServiceOptions) -> PeeringClient {
        self.connect(options)
    }

    /// ECS
    pub fn container(&self, options: &ServiceOptions) -> ContainerClient {
        self.connect(options)
    }

    /// RDS
    pub fn rdbms(&self, options: &ServiceOptions) -> RdbmsClient {
        self.connect(options)
    }
}
