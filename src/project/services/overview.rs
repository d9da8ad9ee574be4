//! Service layer assembling an organization's project overview.

use crate::metrics::{
    ColorToken, EntityFilter, MetricsConfig, ProgressThresholds, ProjectStats, can_add_tasks,
    can_be_completed, completion_percentage, filter_by_predicates, is_overdue,
    progress_color_token, project_status_color,
};
use crate::organization::domain::{Organization, OrganizationSlug};
use crate::project::{
    domain::{Project, ProjectStatus},
    ports::{ProjectGateway, ProjectGatewayError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Selection of projects shown in an overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewQuery {
    organization: OrganizationSlug,
    filter: EntityFilter<ProjectStatus>,
}

impl OverviewQuery {
    /// Creates a query over every project of an organization.
    #[must_use]
    pub fn new(organization: OrganizationSlug) -> Self {
        Self {
            organization,
            filter: EntityFilter::new(),
        }
    }

    /// Applies a predicate filter to the fetched projects.
    #[must_use]
    pub fn with_filter(mut self, filter: EntityFilter<ProjectStatus>) -> Self {
        self.filter = filter;
        self
    }
}

/// A project together with everything the overview derives from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    /// Underlying snapshot.
    pub project: Project,
    /// Rounded share of done tasks, `0..=100`.
    pub completion_percentage: u8,
    /// Deadline has passed and the project is still open.
    pub is_overdue: bool,
    /// Colour of the status badge.
    pub status_color: ColorToken,
    /// Colour of the progress bar.
    pub progress_color: ColorToken,
    /// New tasks may be added.
    pub can_add_tasks: bool,
    /// The project may be marked completed.
    pub can_be_completed: bool,
}

impl ProjectCard {
    /// Derives a card for `project` as of `now`.
    #[must_use]
    pub fn new(project: Project, now: DateTime<Utc>, thresholds: ProgressThresholds) -> Self {
        let status = project.status();
        let percentage =
            completion_percentage(project.completed_task_count(), project.task_count());
        Self {
            completion_percentage: percentage,
            is_overdue: is_overdue(project.due_date(), status, now),
            status_color: project_status_color(status),
            progress_color: progress_color_token(percentage, thresholds),
            can_add_tasks: can_add_tasks(status),
            can_be_completed: can_be_completed(
                status,
                project.completed_task_count(),
                project.task_count(),
            ),
            project,
        }
    }
}

/// Overview of an organization's projects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectOverview {
    /// Organization the projects belong to.
    pub organization: Organization,
    /// Instant every derived flag was computed against.
    pub generated_at: DateTime<Utc>,
    /// Cards in the order the API listed the projects.
    pub projects: Vec<ProjectCard>,
    /// Statistics over the listed projects.
    pub stats: ProjectStats,
}

/// Service-level errors for overview assembly.
#[derive(Debug, Error)]
pub enum ProjectOverviewError {
    /// Gateway operation failed.
    #[error(transparent)]
    Gateway(#[from] ProjectGatewayError),
}

/// Builds project overviews from the latest remote snapshots.
#[derive(Clone)]
pub struct ProjectOverviewService<G, C>
where
    G: ProjectGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    config: MetricsConfig,
}

impl<G, C> ProjectOverviewService<G, C>
where
    G: ProjectGateway,
    C: Clock + Send + Sync,
{
    /// Creates an overview service with the default metrics configuration.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            clock,
            config: MetricsConfig::default(),
        }
    }

    /// Replaces the metrics configuration.
    #[must_use]
    pub const fn with_config(mut self, config: MetricsConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetches an organization's projects and derives their cards.
    ///
    /// Projects reporting more completed tasks than tasks are kept, logged,
    /// and shown as fully complete.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectOverviewError::Gateway`] when the organization is
    /// unknown or a fetch fails.
    pub async fn overview(
        &self,
        query: &OverviewQuery,
    ) -> Result<ProjectOverview, ProjectOverviewError> {
        let organization = self.gateway.fetch_organization(&query.organization).await?;
        let projects = self.gateway.fetch_projects(organization.id()).await?;
        let now = self.clock.utc();

        for project in projects.iter().filter(|project| project.has_count_anomaly()) {
            warn!(
                project_id = %project.id(),
                task_count = project.task_count(),
                completed_task_count = project.completed_task_count(),
                "project reports more completed tasks than tasks"
            );
        }

        let visible: Vec<Project> = filter_by_predicates(&projects, &query.filter)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            organization = %organization.slug(),
            fetched = projects.len(),
            visible = visible.len(),
            "assembling project overview"
        );

        let stats = ProjectStats::from_projects(&visible, now);
        let thresholds = self.config.progress_thresholds;
        let cards = visible
            .into_iter()
            .map(|project| ProjectCard::new(project, now, thresholds))
            .collect();

        Ok(ProjectOverview {
            organization,
            generated_at: now,
            projects: cards,
            stats,
        })
    }
}
