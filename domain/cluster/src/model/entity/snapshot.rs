use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::{Job, Node, StorageUsageRecord};

/// Everything gathered in one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSnapshot {
    pub captured_at: DateTime<Local>,
    pub jobs: Vec<Job>,
    pub nodes: Vec<Node>,
    pub storage: Vec<StorageUsageRecord>,
}

impl ClusterSnapshot {
    /// Count of `(queued, running)` jobs.
    pub fn qr_count(&self) -> (usize, usize) {
        use crate::model::vo::JobStatus;

        self.jobs.iter().fold((0, 0), |(mut queued, mut running), j| {
            match j.status {
                JobStatus::Queued => queued += 1,
                JobStatus::Running => running += 1,
                JobStatus::Completed | JobStatus::Error => (),
            }
            (queued, running)
        })
    }
}

impl std::fmt::Display for ClusterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (queued, running) = self.qr_count();
        let busy = self.nodes.iter().filter(|n| n.used_cpus > 0).count();
        write!(
            f,
            "jobs={}, queued={queued}, running={running}, \
             nodes={}, busyNodes={busy}, volumes={}",
            self.jobs.len(),
            self.nodes.len(),
            self.storage.len(),
        )
    }
}
