//! Typed per-service client wrappers
//!
//! Each wrapper holds an `aws-sdk-*` client built from the facade's shared
//! configuration plus the API version recorded at construction. Wrappers
//! are grouped by family:
//! - [`compute`] - EC2 virtual machines, ECS container orchestration
//! - [`storage`] - EBS volumes, S3 object storage
//! - [`network`] - load balancing, Route 53 DNS, Direct Connect
//! - [`database`] - RDS relational databases

pub mod compute;
pub mod database;
pub mod network;
pub mod storage;

// Re-export commonly used types
pub use compute::{ComputeClient, ContainerClient};
pub use database::RdbmsClient;
pub use network::{DnsClient, LoadBalancerClient, PeeringClient};
pub use storage::{ObjectStorageClient, StorageClient};

use aws_config::SdkConfig;

/// The service families the facade can hand out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Compute,
    Storage,
    ObjectStorage,
    LoadBalancer,
    Dns,
    Peering,
    Container,
    Rdbms,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceKind::Compute => "compute",
            ServiceKind::Storage => "storage",
            ServiceKind::ObjectStorage => "object-storage",
            ServiceKind::LoadBalancer => "load-balancer",
            ServiceKind::Dns => "dns",
            ServiceKind::Peering => "peering",
            ServiceKind::Container => "container",
            ServiceKind::Rdbms => "rdbms",
        }
    }
}

/// Capability implemented by every service wrapper: construction from the
/// facade's shared SDK configuration, optionally pinned to an explicit
/// API version.
pub trait FromSharedConfig {
    const KIND: ServiceKind;

    fn from_shared_config(config: &SdkConfig, api_version: Option<String>) -> Self;
}

/// Defines one service wrapper: the struct, its accessors and its
/// [`FromSharedConfig`] implementation. All eight families share this one
/// shape.
macro_rules! service_wrapper {
    ($(#[$meta:meta])* $name:ident, $sdk:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            client: $sdk::Client,
            api_version: Option<String>,
        }

        impl $name {
            /// Borrow the underlying SDK client
            pub fn client(&self) -> &$sdk::Client {
                &self.client
            }

            /// The API version recorded at construction, if the caller
            /// pinned one. `None` means the SDK default.
            pub fn api_version(&self) -> Option<&str> {
                self.api_version.as_deref()
            }
        }

        impl $crate::services::FromSharedConfig for $name {
            const KIND: $crate::services::ServiceKind = $kind;

            fn from_shared_config(
                config: &aws_config::SdkConfig,
                api_version: Option<String>,
            ) -> Self {
                Self {
                    client: $sdk::Client::new(config),
                    api_version,
                }
            }
        }
    };
}

pub(crate) use service_wrapper;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_kind_as_str() {
        assert_eq!(ServiceKind::Compute.as_str(), "compute");
        assert_eq!(ServiceKind::Storage.as_str(), "storage");
        assert_eq!(ServiceKind::ObjectStorage.as_str(), "object-storage");
        assert_eq!(ServiceKind::LoadBalancer.as_str(), "load-balancer");
        assert_eq!(ServiceKind::Dns.as_str(), "dns");
        assert_eq!(ServiceKind::Peering.as_str(), "peering");
        assert_eq!(ServiceKind::Container.as_str(), "container");
        assert_eq!(ServiceKind::Rdbms.as_str(), "rdbms");
    }

    #[test]
    fn test_wrapper_kinds_match_family() {
        assert_eq!(ComputeClient::KIND, ServiceKind::Compute);
        assert_eq!(ContainerClient::KIND, ServiceKind::Container);
        assert_eq!(StorageClient::KIND, ServiceKind::Storage);
        assert_eq!(ObjectStorageClient::KIND, ServiceKind::ObjectStorage);
        assert_eq!(LoadBalancerClient::KIND, ServiceKind::LoadBalancer);
        assert_eq!(DnsClient::KIND, ServiceKind::Dns);
        assert_eq!(PeeringClient::KIND, ServiceKind::Peering);
        assert_eq!(RdbmsClient::KIND, ServiceKind::Rdbms);
    }
}
