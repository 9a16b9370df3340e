//! Compute family: EC2 virtual machines and ECS container orchestration

use super::{service_wrapper, ServiceKind};

service_wrapper!(
    /// EC2 client bound to the facade's shared configuration
    ComputeClient,
    aws_sdk_ec2,
    ServiceKind::Compute
);

service_wrapper!(
    /// ECS client bound to the facade's shared configuration
    ContainerClient,
    aws_sdk_ecs,
    ServiceKind::Container
);
