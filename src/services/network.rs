//! Network family: load balancing, Route 53 DNS and Direct Connect

use super::{service_wrapper, ServiceKind};

service_wrapper!(
    /// Elastic Load Balancing client bound to the facade's shared configuration
    LoadBalancerClient,
    aws_sdk_elasticloadbalancingv2,
    ServiceKind::LoadBalancer
);

service_wrapper!(
    /// Route 53 client bound to the facade's shared configuration
    DnsClient,
    aws_sdk_route53,
    ServiceKind::Dns
);

service_wrapper!(
    /// Direct Connect client bound to the facade's shared configuration
    PeeringClient,
    aws_sdk_directconnect,
    ServiceKind::Peering
);
