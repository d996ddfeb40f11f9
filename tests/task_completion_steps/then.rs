//! Then steps for task completion BDD scenarios.

use super::world::{CompletionWorld, run_async};
use rstest_bdd_macros::then;
use tickler::task::services::{CompletionOutcome, TaskLifecycleError};

#[then("the task no longer exists")]
fn task_no_longer_exists(world: &CompletionWorld) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id();
    let completion = world
        .last_completion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;
    if !matches!(completion, Ok(CompletionOutcome::Deleted(deleted)) if *deleted == id) {
        return Err(eyre::eyre!("expected deletion of {id}, got {completion:?}"));
    }

    let lookup = run_async(world.service()?.find(id));
    if !matches!(lookup, Err(TaskLifecycleError::NotFound(_))) {
        return Err(eyre::eyre!("expected task {id} to be gone, got {lookup:?}"));
    }
    Ok(())
}

#[then("marking the task done again fails with not found")]
fn second_completion_not_found(world: &CompletionWorld) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id();
    let result = run_async(world.service()?.complete(id));
    if !matches!(result, Err(TaskLifecycleError::NotFound(missing)) if missing == id) {
        return Err(eyre::eyre!("expected NotFound, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the task is due "{date}""#)]
fn task_is_due(world: &CompletionWorld, date: String) -> Result<(), eyre::Report> {
    let id = world.created_task()?.id();
    let stored = run_async(world.service()?.find(id))?;
    if stored.date().to_string() != date {
        return Err(eyre::eyre!("expected due date {date}, found {}", stored.date()));
    }
    Ok(())
}

#[then("the task keeps its identifier")]
fn task_keeps_identifier(world: &CompletionWorld) -> Result<(), eyre::Report> {
    let created = world.created_task()?;
    let completion = world
        .last_completion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;
    match completion {
        Ok(CompletionOutcome::Rescheduled(task)) if task.id() == created.id() => Ok(()),
        other => Err(eyre::eyre!(
            "expected reschedule of {}, got {other:?}",
            created.id()
        )),
    }
}
