//! Database family: RDS relational databases

use super::{service_wrapper, ServiceKind};

service_wrapper!(
    /// RDS client bound to the facade's shared configuration
    RdbmsClient,
    aws_sdk_rds,
    ServiceKind::Rdbms
);
