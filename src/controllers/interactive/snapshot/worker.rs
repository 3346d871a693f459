use std::sync::mpsc;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::error;

use crate::controllers::interactive::errors::snapshot::SnapshotError;
use crate::controllers::interactive::snapshot::pending::{EncodeOutcome, PendingEncode};

/// Runs snapshot encodes off the main thread.
///
/// Jobs share no state with the caller beyond what they own.
pub struct EncodeWorker {
    pool: ThreadPool,
    next_id: u64,
}

impl EncodeWorker {
    pub fn new(threads: usize) -> Result<Self, SnapshotError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|index| format!("snapshot-encode-{index}"))
            // Without a handler rayon aborts the process on a panicking job.
            .panic_handler(|_| error!("snapshot encode job panicked"))
            .build()
            .map_err(|e| SnapshotError::WorkerPool(e.to_string()))?;

        Ok(Self { pool, next_id: 0 })
    }

    /// Schedules `job` and returns immediately.
    pub fn submit<F>(&mut self, job: F) -> PendingEncode
    where
        F: FnOnce() -> EncodeOutcome + Send + 'static,
    {
        self.next_id += 1;
        let (sender, receiver) = mpsc::sync_channel(1);

        self.pool.spawn(move || {
            let outcome = job();
            // The receiver may already be gone if the registry was dropped.
            let _ = sender.send(outcome);
        });

        PendingEncode::new(self.next_id, receiver)
    }
}
