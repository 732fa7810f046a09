//! Background solving on a worker thread.
use std::{sync::mpsc, thread};

use sweepgrid_core::Grid;
use sweepgrid_solver::{CleaningSolver, SearchOutcome, SolverError};

/// Errors produced while waiting for the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub(crate) enum WorkerError {
    /// The worker thread exited without sending a result.
    #[display("solver thread exited without a result")]
    Disconnected,
}

/// A handle for polling the solver result.
#[derive(Debug)]
pub(crate) struct SolveHandle {
    receiver: mpsc::Receiver<Result<SearchOutcome, SolverError>>,
}

impl SolveHandle {
    /// Starts solving `grid` on a new thread.
    pub(crate) fn spawn(solver: CleaningSolver, grid: Grid) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(solver.solve_grid(&grid));
        });
        Self { receiver: rx }
    }

    /// Attempts to poll for the result without blocking.
    pub(crate) fn poll(&self) -> Result<Option<Result<SearchOutcome, SolverError>>, WorkerError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(result) => Ok(Some(result)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }
}
