//! Repository port behaviour of the in-memory adapter.

use super::helpers::{draft, repository};
use eyre::ensure;
use rstest::rstest;
use tickler::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskDate, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_not_reused_after_delete(
    repository: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let first = repository.insert(&draft("20250120", "one", "")?).await?;
    let removed = repository.delete(first).await?;
    let second = repository.insert(&draft("20250120", "two", "")?).await?;

    ensure!(removed == 1, "expected one removed row, got {removed}");
    ensure!(second > first, "identifier {second} reused or reordered");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_task_removes_nothing(
    repository: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let removed = repository.delete(TaskId::new(99)?).await?;
    ensure!(removed == 0, "expected nothing removed, got {removed}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overwrite_of_missing_task_is_not_found(
    repository: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let id = repository.insert(&draft("20250120", "ephemeral", "")?).await?;
    let task = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("inserted task not found"))?;
    repository.delete(id).await?;

    let result = repository.overwrite(&task).await;

    ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(missing)) if missing == id),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overwrite_persists_new_date(
    repository: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    let id = repository.insert(&draft("20250120", "move me", "d 2")?).await?;
    let mut task = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("inserted task not found"))?;
    task.reschedule(TaskDate::parse("20250122")?);

    repository.overwrite(&task).await?;
    let stored = repository.find_by_id(id).await?;

    ensure!(stored.as_ref() == Some(&task), "stored task differs: {stored:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_is_truncated_to_limit_in_date_order(
    repository: InMemoryTaskRepository,
) -> Result<(), eyre::Report> {
    for date in ["20250310", "20250111", "20250205", "20250111"] {
        repository.insert(&draft(date, "task", "")?).await?;
    }

    let listed = repository.list_upcoming(3).await?;
    let dates: Vec<String> = listed.iter().map(|task| task.date().to_string()).collect();
    let ids: Vec<i64> = listed.iter().map(|task| task.id().value()).collect();

    ensure!(
        dates == ["20250111", "20250111", "20250205"],
        "unexpected order {dates:?}"
    );
    ensure!(ids == [2, 4, 3], "ties not broken by identifier: {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_storage(repository: InMemoryTaskRepository) -> Result<(), eyre::Report> {
    let handle = repository.clone();
    let id = handle.insert(&draft("", "shared", "")?).await?;

    ensure!(
        repository.find_by_id(id).await?.is_some(),
        "clone did not observe insert"
    );
    Ok(())
}
