use serde::{Deserialize, Serialize};

use super::Coerced;

/// Lifecycle status of a job.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Queued,
    Running,
    Completed,
    Error,
}

impl JobStatus {
    /// Map a single-letter scheduler code (`job_state`).
    pub fn from_code(code: &str) -> Coerced<Self> {
        match code.trim() {
            "R" => Coerced::Parsed(JobStatus::Running),
            "Q" => Coerced::Parsed(JobStatus::Queued),
            "C" => Coerced::Parsed(JobStatus::Completed),
            "E" => Coerced::Parsed(JobStatus::Error),
            _ => Coerced::Unparseable,
        }
    }
}

/// Allocation status of a compute node.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    #[default]
    Free,
    Busy,
    Down,
    Offline,
}

impl NodeStatus {
    pub const EXCLUSIVE: &'static str = "job-exclusive";

    /// Classify a raw `state` value. `down` wins over `offline`, which wins
    /// over exclusive allocation.
    pub fn from_state(state: &str) -> Self {
        if state.contains("down") {
            NodeStatus::Down
        } else if state.contains("offline") {
            NodeStatus::Offline
        } else if is_exclusive(state) {
            NodeStatus::Busy
        } else {
            NodeStatus::Free
        }
    }
}

/// Whether the whole node is held by a single job.
#[inline]
pub fn is_exclusive(state: &str) -> bool {
    state.contains(NodeStatus::EXCLUSIVE)
}
