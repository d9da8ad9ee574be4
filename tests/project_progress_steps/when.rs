//! When steps for project progress BDD scenarios.

use super::world::{ProjectProgressWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::project::services::OverviewQuery;

#[when("the overview is loaded")]
fn load_overview(world: &mut ProjectProgressWorld) -> Result<(), eyre::Report> {
    let slug = world.organization()?.slug().clone();

    let result = run_async(world.service.overview(&OverviewQuery::new(slug)));
    world.last_overview = Some(result);
    Ok(())
}
