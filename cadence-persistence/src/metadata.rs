//! Domain metadata store interface.

use async_trait::async_trait;
use cadence_core::CadenceResult;
use cadence_proto::DomainStatus;

/// Stored identity and ownership of a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainInfo {
    pub id: String,
    pub name: String,
    pub status: DomainStatus,
    pub description: String,
    pub owner_email: String,
}

/// Stored configuration of a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainConfig {
    /// Workflow execution retention, in days
    pub retention: i32,
    pub emit_metric: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDomainRequest {
    pub name: String,
    pub status: DomainStatus,
    pub description: String,
    pub owner_email: String,
    pub retention: i32,
    pub emit_metric: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDomainResponse {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDomainResponse {
    pub info: DomainInfo,
    pub config: DomainConfig,
}

/// Full replacement of a domain record, keyed by `info.id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDomainRequest {
    pub info: DomainInfo,
    pub config: DomainConfig,
}

/// Source of truth for domains.
///
/// Implementations report a missing domain as
/// `ServerError::EntityNotExists` and a duplicate registration as
/// `ServerError::DomainAlreadyExists`, both wrapped in `CadenceError::Server`.
/// The store assigns the domain id on creation.
#[async_trait]
pub trait MetadataManager: Send + Sync {
    async fn create_domain(&self, request: CreateDomainRequest)
        -> CadenceResult<CreateDomainResponse>;

    async fn get_domain(&self, name: &str) -> CadenceResult<GetDomainResponse>;

    async fn update_domain(&self, request: UpdateDomainRequest) -> CadenceResult<()>;
}
