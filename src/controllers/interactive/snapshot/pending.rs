use std::sync::mpsc::{Receiver, TryRecvError};

use crate::controllers::interactive::errors::snapshot::SnapshotError;
use crate::controllers::interactive::ports::snapshot_sink::SnapshotReport;

pub type EncodeOutcome = Result<SnapshotReport, SnapshotError>;

/// Handle to one in-flight buffer-to-file encode.
///
/// Produces exactly one outcome. A worker that goes away without sending
/// one counts as [`SnapshotError::WorkerLost`].
#[derive(Debug)]
pub struct PendingEncode {
    id: u64,
    receiver: Receiver<EncodeOutcome>,
    outcome: Option<EncodeOutcome>,
}

impl PendingEncode {
    pub(crate) fn new(id: u64, receiver: Receiver<EncodeOutcome>) -> Self {
        Self {
            id,
            receiver,
            outcome: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Non-blocking readiness check. Once this returns true it keeps doing so.
    pub fn is_ready(&mut self) -> bool {
        if self.outcome.is_some() {
            return true;
        }

        match self.receiver.try_recv() {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.outcome = Some(Err(SnapshotError::WorkerLost));
                true
            }
        }
    }

    /// Blocks until the encode finishes and returns its outcome.
    pub fn wait(self) -> EncodeOutcome {
        match self.outcome {
            Some(outcome) => outcome,
            None => self
                .receiver
                .recv()
                .unwrap_or(Err(SnapshotError::WorkerLost)),
        }
    }
}
