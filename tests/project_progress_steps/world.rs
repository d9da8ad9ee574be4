//! Shared world state for project progress BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{SteppingClock, reference_now};
use chrono::{DateTime, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::{
    organization::domain::Organization,
    project::{
        adapters::memory::InMemoryProjectGateway,
        services::{ProjectCard, ProjectOverview, ProjectOverviewError, ProjectOverviewService},
    },
};

/// Scenario world for project progress behaviour tests.
pub struct ProjectProgressWorld {
    pub clock: Arc<SteppingClock>,
    pub gateway: Arc<InMemoryProjectGateway>,
    pub service: ProjectOverviewService<InMemoryProjectGateway, SteppingClock>,
    pub organization: Option<Organization>,
    pub last_overview: Option<Result<ProjectOverview, ProjectOverviewError>>,
}

impl ProjectProgressWorld {
    /// Creates a world with an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(SteppingClock::at(reference_now()));
        let gateway = Arc::new(InMemoryProjectGateway::new());
        Self {
            service: ProjectOverviewService::new(Arc::clone(&gateway), Arc::clone(&clock)),
            clock,
            gateway,
            organization: None,
            last_overview: None,
        }
    }

    /// Returns the scenario's current instant.
    pub fn clock_now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    /// Returns the organization seeded by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no organization has been seeded yet.
    pub fn organization(&self) -> Result<&Organization, eyre::Report> {
        self.organization
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing organization in scenario world"))
    }

    /// Returns the card for the named project from the loaded overview.
    ///
    /// # Errors
    ///
    /// Returns an error when the overview is missing, failed to load, or
    /// does not list the project.
    pub fn card(&self, name: &str) -> Result<&ProjectCard, eyre::Report> {
        let overview = self
            .last_overview
            .as_ref()
            .ok_or_else(|| eyre::eyre!("overview has not been loaded"))?
            .as_ref()
            .map_err(|err| eyre::eyre!("overview failed to load: {err}"))?;
        overview
            .projects
            .iter()
            .find(|card| card.project.name() == name)
            .ok_or_else(|| eyre::eyre!("project {name:?} missing from overview"))
    }
}

impl Default for ProjectProgressWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectProgressWorld {
    ProjectProgressWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
