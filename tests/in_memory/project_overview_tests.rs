//! In-memory integration tests for the organization overview.

use std::sync::Arc;

use crate::test_helpers::{SteppingClock, reference_now};
use chrono::Duration;
use rstest::{fixture, rstest};
use taskboard::{
    metrics::{ColorToken, EntityFilter, MetricsConfig},
    organization::domain::{Organization, OrganizationId, OrganizationSlug},
    project::{
        adapters::memory::InMemoryProjectGateway,
        domain::{Project, ProjectSnapshotData, ProjectStatus},
        ports::ProjectGatewayError,
        services::{OverviewQuery, ProjectOverviewError, ProjectOverviewService},
    },
};

struct Harness {
    clock: Arc<SteppingClock>,
    gateway: Arc<InMemoryProjectGateway>,
    service: ProjectOverviewService<InMemoryProjectGateway, SteppingClock>,
    organization: Organization,
}

impl Harness {
    fn seed(&self, data: ProjectSnapshotData) -> eyre::Result<Project> {
        let project = Project::from_snapshot(data)?;
        self.gateway.insert_project(project.clone())?;
        Ok(project)
    }

    fn data(&self, name: &str, status: ProjectStatus) -> ProjectSnapshotData {
        ProjectSnapshotData::new(self.organization.id(), name, reference_now()).with_status(status)
    }

    fn query(&self) -> OverviewQuery {
        OverviewQuery::new(self.organization.slug().clone())
    }
}

#[fixture]
fn harness() -> Harness {
    let clock = Arc::new(SteppingClock::at(reference_now()));
    let gateway = Arc::new(InMemoryProjectGateway::new());
    let slug = OrganizationSlug::from_name("Acme Widgets").expect("valid slug");
    let organization =
        Organization::new(OrganizationId::new(), "Acme Widgets", slug).expect("valid organization");
    gateway
        .insert_organization(organization.clone())
        .expect("insert should succeed");
    Harness {
        service: ProjectOverviewService::new(Arc::clone(&gateway), Arc::clone(&clock)),
        clock,
        gateway,
        organization,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overview_summarises_an_organization(harness: Harness) -> eyre::Result<()> {
    harness.seed(harness.data("Launch", ProjectStatus::Active).with_task_counts(4, 3))?;
    harness.seed(harness.data("Archive", ProjectStatus::Completed).with_task_counts(2, 2))?;
    harness.seed(harness.data("Paused", ProjectStatus::OnHold).with_task_counts(5, 1))?;
    harness.seed(harness.data("Dropped", ProjectStatus::Cancelled))?;

    let view = harness.service.overview(&harness.query()).await?;

    let tones: Vec<ColorToken> = view.projects.iter().map(|card| card.progress_color).collect();
    eyre::ensure!(
        tones
            == vec![
                ColorToken::Success,
                ColorToken::Success,
                ColorToken::Danger,
                ColorToken::Danger,
            ],
        "unexpected progress tones {tones:?}"
    );
    let addable: Vec<bool> = view.projects.iter().map(|card| card.can_add_tasks).collect();
    eyre::ensure!(addable == vec![true, false, true, false]);
    eyre::ensure!(view.stats.total == 4);
    eyre::ensure!((view.stats.completion_rate - 25.0).abs() < 1e-9);
    eyre::ensure!((view.stats.mean_task_completion - 48.75).abs() < 1e-9);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_and_status_filters_combine(harness: Harness) -> eyre::Result<()> {
    harness.seed(harness.data("Mobile app", ProjectStatus::Active))?;
    harness.seed(harness.data("Mobile web", ProjectStatus::OnHold))?;
    harness.seed(harness.data("Desktop app", ProjectStatus::Active))?;

    let query = harness.query().with_filter(
        EntityFilter::new()
            .with_status(ProjectStatus::Active)
            .with_search_text("mobile"),
    );
    let view = harness.service.overview(&query).await?;

    let names: Vec<&str> = view.projects.iter().map(|card| card.project.name()).collect();
    eyre::ensure!(names == vec!["Mobile app"], "unexpected projects {names:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_stays_on_time_through_its_due_day(harness: Harness) -> eyre::Result<()> {
    harness.seed(
        harness
            .data("Quarter close", ProjectStatus::Active)
            .with_due_date(reference_now() + Duration::hours(1)),
    )?;

    let before = harness.service.overview(&harness.query()).await?;
    harness.clock.advance(Duration::hours(2));
    let after = harness.service.overview(&harness.query()).await?;

    eyre::ensure!(before.stats.overdue == 0);
    eyre::ensure!(after.stats.overdue == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_config_lowers_progress_tone(harness: Harness) -> eyre::Result<()> {
    harness.seed(harness.data("Launch", ProjectStatus::Active).with_task_counts(5, 4))?;
    let strict = ProjectOverviewService::new(Arc::clone(&harness.gateway), Arc::clone(&harness.clock))
        .with_config(MetricsConfig::strict());

    let relaxed_view = harness.service.overview(&harness.query()).await?;
    let strict_view = strict.overview(&harness.query()).await?;

    let tone = |view: &taskboard::project::services::ProjectOverview| {
        view.projects.first().map(|card| card.progress_color)
    };
    eyre::ensure!(tone(&relaxed_view) == Some(ColorToken::Success));
    eyre::ensure!(tone(&strict_view) == Some(ColorToken::Warning));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_organization_is_reported(harness: Harness) -> eyre::Result<()> {
    let query = OverviewQuery::new(OrganizationSlug::new("initech")?);

    let result = harness.service.overview(&query).await;

    eyre::ensure!(matches!(
        result,
        Err(ProjectOverviewError::Gateway(
            ProjectGatewayError::OrganizationNotFound(_)
        ))
    ));
    Ok(())
}
