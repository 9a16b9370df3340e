//! Facade over the AWS SDK
//!
//! This crate resolves credentials and region once at construction time,
//! builds one shared SDK configuration, and hands out typed per-service
//! client wrappers (compute, storage, object storage, load balancing, DNS,
//! private connectivity, container orchestration, relational databases)
//! that all share that one authenticated configuration.

pub mod credentials;
pub mod error;
pub mod provider;
pub mod services;

// Re-export commonly used types
pub use credentials::{CredentialsSource, EnvCredentials, ResolvedCredentials};
pub use error::ProviderError;
pub use provider::{Provider, ServiceOptions};
pub use services::{FromSharedConfig, ServiceKind};
