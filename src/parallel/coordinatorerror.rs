use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("at least one worker thread is required")]
    NoWorkers,
    #[error("failed to spawn worker {worker}: {source}")]
    SpawnFailed {
        worker: usize,
        #[source]
        source: std::io::Error
    },
    #[error("worker {worker} panicked before producing its partial sum")]
    WorkerPanicked {
        worker: usize
    }
}
