//! Storage family: EBS block volumes and S3 object storage

use super::{service_wrapper, ServiceKind};

service_wrapper!(
    /// EBS client bound to the facade's shared configuration
    StorageClient,
    aws_sdk_ebs,
    ServiceKind::Storage
);

service_wrapper!(
    /// S3 client bound to the facade's shared configuration
    ObjectStorageClient,
    aws_sdk_s3,
    ServiceKind::ObjectStorage
);
