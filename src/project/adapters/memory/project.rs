//! In-memory stand-in for the remote project API.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::organization::domain::{Organization, OrganizationId, OrganizationSlug};
use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectGateway, ProjectGatewayError, ProjectGatewayResult},
};

/// Thread-safe in-memory project gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectGateway {
    state: Arc<RwLock<InMemoryProjectState>>,
}

#[derive(Debug, Default)]
struct InMemoryProjectState {
    organizations: Vec<Organization>,
    projects: Vec<Project>,
}

impl InMemoryProjectGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectGatewayError::Transport`] when the state lock is
    /// poisoned.
    pub fn insert_organization(&self, organization: Organization) -> ProjectGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(existing) = state
            .organizations
            .iter_mut()
            .find(|existing| existing.id() == organization.id())
        {
            *existing = organization;
            return Ok(());
        }
        state.organizations.push(organization);
        Ok(())
    }

    /// Adds or replaces a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectGatewayError::Transport`] when the state lock is
    /// poisoned.
    pub fn insert_project(&self, project: Project) -> ProjectGatewayResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if let Some(existing) = state
            .projects
            .iter_mut()
            .find(|existing| existing.id() == project.id())
        {
            *existing = project;
            return Ok(());
        }
        state.projects.push(project);
        Ok(())
    }
}

fn lock_error(err: impl ToString) -> ProjectGatewayError {
    ProjectGatewayError::transport(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectGateway for InMemoryProjectGateway {
    async fn fetch_organization(
        &self,
        slug: &OrganizationSlug,
    ) -> ProjectGatewayResult<Organization> {
        let state = self.state.read().map_err(lock_error)?;
        state
            .organizations
            .iter()
            .find(|organization| organization.slug() == slug)
            .cloned()
            .ok_or_else(|| ProjectGatewayError::OrganizationNotFound(slug.clone()))
    }

    async fn fetch_projects(
        &self,
        organization_id: OrganizationId,
    ) -> ProjectGatewayResult<Vec<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .projects
            .iter()
            .filter(|project| project.organization_id() == organization_id)
            .cloned()
            .collect())
    }

    async fn fetch_project(&self, id: ProjectId) -> ProjectGatewayResult<Option<Project>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.projects.iter().find(|project| project.id() == id).cloned())
    }
}
