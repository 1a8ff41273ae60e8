use std::sync::Mutex;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One successful deployment, immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeploymentRecord {
    /// Team display label at the time of dispatch.
    pub event: String,
    /// Round-elapsed time when the deployment was requested.
    pub round_time: Duration,
    /// Free-form initiator, e.g. "admin:Alice" or "system:auto".
    pub source: String,
}

/// Insertion-ordered log of the round's deployments. Unbounded within a
/// round, cleared exactly at round restart.
#[derive(Debug, Default)]
pub struct DeploymentHistory {
    records: Mutex<Vec<DeploymentRecord>>,
}

impl DeploymentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, record: DeploymentRecord) {
        self.lock_records().push(record);
    }

    /// Read-only copy of the log, oldest first.
    pub fn snapshot(&self) -> Vec<DeploymentRecord> {
        self.lock_records().clone()
    }

    pub fn len(&self) -> usize {
        self.lock_records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_records().is_empty()
    }

    pub fn clear(&self) {
        self.lock_records().clear();
    }

    fn lock_records(&self) -> std::sync::MutexGuard<'_, Vec<DeploymentRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
