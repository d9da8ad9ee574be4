//! Organization snapshot as fetched from the remote API.

use super::{OrganizationDomainError, OrganizationId, OrganizationSlug};
use serde::Serialize;

/// Top-level tenant grouping projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    id: OrganizationId,
    name: String,
    slug: OrganizationSlug,
    project_count: u32,
    active_project_count: u32,
}

impl Organization {
    /// Builds a validated organization snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationDomainError::EmptyName`] when the name is blank.
    pub fn new(
        id: OrganizationId,
        name: impl Into<String>,
        slug: OrganizationSlug,
    ) -> Result<Self, OrganizationDomainError> {
        let raw = name.into();
        let name = raw.trim();
        if name.is_empty() {
            return Err(OrganizationDomainError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_owned(),
            slug,
            project_count: 0,
            active_project_count: 0,
        })
    }

    /// Sets the project counters reported upstream.
    #[must_use]
    pub const fn with_project_counts(mut self, project_count: u32, active_project_count: u32) -> Self {
        self.project_count = project_count;
        self.active_project_count = active_project_count;
        self
    }

    /// Returns the organization identifier.
    #[must_use]
    pub const fn id(&self) -> OrganizationId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the routing slug.
    #[must_use]
    pub const fn slug(&self) -> &OrganizationSlug {
        &self.slug
    }

    /// Returns the number of projects.
    #[must_use]
    pub const fn project_count(&self) -> u32 {
        self.project_count
    }

    /// Returns the number of active projects.
    #[must_use]
    pub const fn active_project_count(&self) -> u32 {
        self.active_project_count
    }
}
