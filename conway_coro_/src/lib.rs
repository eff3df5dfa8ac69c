// lib.rs - Advancing a Conway grid with one coroutine per row

use std::future::Future;
use std::sync::Arc;

use conway::{Grid, GridError};
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};
use tracing::debug;

#[derive(Debug, Error)]
pub enum AdvanceError {
    #[error("row task failed: {0}")]
    Join(#[from] JoinError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

type RowResult = Result<(usize, Vec<bool>), GridError>;

/// Row coroutine: computes one row of the next generation from the shared
/// snapshot, yielding after every cell.
async fn process_row(row_index: usize, current: Arc<Grid>) -> RowResult {
    let mut row_result = Vec::with_capacity(current.cols());
    for col in 0..current.cols() {
        row_result.push(current.next_state(row_index, col)?);
        tokio::task::yield_now().await; // Cooperative yielding
    }
    Ok((row_index, row_result))
}

/// Computes the next generation with every row running as its own task.
///
/// All tasks read the same snapshot, so the result is identical to
/// [`Grid::advance`].
pub async fn advance_rows(grid: Arc<Grid>) -> Result<Grid, AdvanceError> {
    let next = join_rows(grid.rows(), |row| process_row(row, Arc::clone(&grid))).await?;
    debug!(rows = grid.rows(), cols = grid.cols(), "joined row tasks");
    Ok(next)
}

/// Spawns `task(row)` for every row and assembles the finished rows.
///
/// The first failure is returned and the rows still running are aborted when
/// the set is dropped.
async fn join_rows<F, Fut>(rows: usize, task: F) -> Result<Grid, AdvanceError>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = RowResult> + Send + 'static,
{
    let mut tasks = JoinSet::new();
    for row in 0..rows {
        tasks.spawn(task(row));
    }

    // Collect results by row id; tasks may finish in any order
    let mut next = vec![Vec::new(); rows];
    while let Some(joined) = tasks.join_next().await {
        let (row_index, completed_row) = joined??;
        next[row_index] = completed_row;
    }
    Ok(Grid::from_rows(next)?)
}
