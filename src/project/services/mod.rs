//! Application services for the organization project overview.

mod overview;

pub use overview::{
    OverviewQuery, ProjectCard, ProjectOverview, ProjectOverviewError, ProjectOverviewService,
};
