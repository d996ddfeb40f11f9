//! When steps for task completion BDD scenarios.

use super::world::{CompletionWorld, run_async};
use rstest_bdd_macros::when;

#[when("the task is marked done")]
fn mark_done(world: &mut CompletionWorld) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id();
    let result = run_async(world.service()?.complete(id));
    world.last_completion = Some(result);
    Ok(())
}
