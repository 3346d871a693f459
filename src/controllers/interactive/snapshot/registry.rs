use tracing::{debug, info};

use crate::controllers::interactive::snapshot::pending::PendingEncode;

/// Outcome counts of a shutdown drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrainReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl DrainReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// Unordered set of in-flight encodes.
///
/// Reaped without blocking once per tick and drained with a blocking wait
/// exactly once at shutdown, so no requested snapshot is lost on exit.
#[derive(Debug, Default)]
pub struct EncodeRegistry {
    entries: Vec<PendingEncode>,
}

impl EncodeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: PendingEncode) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry that has finished and returns how many were removed.
    ///
    /// Never blocks. Outcomes are discarded here: the encode job logs its own
    /// success or failure.
    pub fn reap_completed(&mut self) -> usize {
        let mut reaped = 0;
        let mut index = 0;

        while index < self.entries.len() {
            if self.entries[index].is_ready() {
                let entry = self.entries.swap_remove(index);
                debug!(id = entry.id(), "reaped finished snapshot encode");
                let _ = entry.wait();
                reaped += 1;
            } else {
                index += 1;
            }
        }

        reaped
    }

    /// Blocks until every remaining encode has finished.
    pub fn drain_all(self) -> DrainReport {
        let mut report = DrainReport::default();

        if self.entries.is_empty() {
            return report;
        }

        info!("{} snapshots are still being encoded...", self.entries.len());

        for entry in self.entries {
            match entry.wait() {
                Ok(_) => report.succeeded += 1,
                Err(_) => report.failed += 1,
            }
        }

        info!("Done");
        report
    }
}
