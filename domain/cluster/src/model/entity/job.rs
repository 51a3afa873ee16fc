use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::vo::JobStatus;

/// Placeholder for a textual field the scheduler did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// A job as reported by the detailed job listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Scheduler-assigned id, e.g. `1234.pbs-server`.
    pub id: String,
    pub name: String,
    /// Account name with the `@host` realm removed.
    pub owner: String,
    pub queue: String,
    pub status: JobStatus,
    /// Requested node count.
    pub nodes: u32,
    /// Requested CPU count.
    pub ncpus: u32,
    /// Requested MPI process count.
    pub mpiprocs: u32,
    /// Requested wall-clock limit, in the scheduler's own format.
    pub walltime: String,
    /// Local start time, `null` until the job runs.
    pub start_time: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{Job, JobStatus};

    fn job() -> Job {
        Job {
            id: "1234.pbs-server".to_string(),
            name: "molecular_sim".to_string(),
            owner: "alice".to_string(),
            queue: "workq".to_string(),
            status: JobStatus::Queued,
            nodes: 4,
            ncpus: 64,
            mpiprocs: 64,
            walltime: "24:00:00".to_string(),
            start_time: None,
        }
    }

    #[test]
    fn test_start_time_is_always_present() {
        let value = serde_json::to_value(job()).unwrap();
        assert!(value["startTime"].is_null());
        assert_eq!(value["mpiprocs"], 64);
        assert_eq!(value["status"], "queued");

        let start = NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|d| d.and_hms_opt(10, 5, 0))
            .unwrap();
        let running = Job {
            status: JobStatus::Running,
            start_time: Some(start),
            ..job()
        };
        let value = serde_json::to_value(running).unwrap();
        assert_eq!(value["startTime"], "2024-03-15T10:05:00");
    }
}
