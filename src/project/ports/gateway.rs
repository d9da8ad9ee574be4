//! Gateway port for fetching organizations and project snapshots.

use crate::organization::domain::{Organization, OrganizationId, OrganizationSlug};
use crate::project::domain::{Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project gateway operations.
pub type ProjectGatewayResult<T> = Result<T, ProjectGatewayError>;

/// Remote project API contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    /// Fetches an organization by its URL slug.
    async fn fetch_organization(&self, slug: &OrganizationSlug)
    -> ProjectGatewayResult<Organization>;

    /// Fetches every project of an organization in the order the API lists
    /// them.
    async fn fetch_projects(
        &self,
        organization_id: OrganizationId,
    ) -> ProjectGatewayResult<Vec<Project>>;

    /// Fetches a single project, `None` when it does not exist.
    async fn fetch_project(&self, id: ProjectId) -> ProjectGatewayResult<Option<Project>>;
}

/// Errors returned by project gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectGatewayError {
    /// No organization has the requested slug.
    #[error("organization '{0}' not found")]
    OrganizationNotFound(OrganizationSlug),

    /// The remote payload could not be decoded into a snapshot.
    #[error("undecodable project payload: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote API could not be reached or answered with a fault.
    #[error("project transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectGatewayError {
    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }

    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
