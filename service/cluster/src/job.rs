//! Detailed job listing (`qstat -f`).
//!
//! ```text
//! Job Id: 1234.pbs-server
//!     Job_Name = molecular_sim
//!     Job_Owner = alice@login01
//!     job_state = R
//!     queue = workq
//!     Resource_List.ncpus = 64
//! ```

use std::collections::HashMap;

use domain_cluster::exception::{ParseException, ParseResult};
use domain_cluster::model::entity::Job;
use domain_cluster::model::vo::JobStatus;
use tracing::debug;

use crate::coerce;

/// Literal that introduces every job record.
pub const JOB_ID_MARKER: &str = "Job Id: ";

/// Raw fields of one job record, before coercion.
#[derive(Debug, PartialEq, Eq)]
pub struct JobBlock<'a> {
    pub id: &'a str,
    fields: HashMap<&'a str, &'a str>,
}

impl<'a> JobBlock<'a> {
    /// Tokenize a segment that follows [`JOB_ID_MARKER`].
    ///
    /// Values end at the first comma or the end of the line. Lines without a
    /// `key = value` pair, such as wrapped continuations, are skipped.
    pub fn tokenize(segment: &'a str) -> ParseResult<Self> {
        let mut lines = segment.lines();
        let id = lines.next().map(str::trim).unwrap_or_default();
        if id.is_empty() {
            return Err(ParseException::MissingJobId {
                segment: segment.to_owned(),
            });
        }

        let mut fields = HashMap::new();
        for line in lines {
            let Some((key, value)) = line.split_once(" = ") else {
                continue;
            };
            let value = value.split(',').next().unwrap_or_default();
            fields.entry(key.trim()).or_insert(value.trim());
        }
        Ok(Self { id, fields })
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).copied()
    }
}

/// Parse one job segment (the text after [`JOB_ID_MARKER`]).
pub fn parse_job(segment: &str) -> ParseResult<Job> {
    let block = JobBlock::tokenize(segment)?;

    let state = block.get("job_state");
    let status = JobStatus::from_code(state.unwrap_or_default());
    if !status.is_parsed() {
        debug!("Job {} has unrecognized state {state:?}, assuming queued", block.id);
    }

    let stime = block.get("stime");
    let start_time = coerce::ctime(stime);
    if stime.is_some() && !start_time.is_parsed() {
        debug!("Job {} has unreadable start time {stime:?}", block.id);
    }

    Ok(Job {
        id: block.id.to_owned(),
        name: coerce::text(block.get("Job_Name")),
        owner: coerce::account(block.get("Job_Owner")),
        queue: coerce::text(block.get("queue")),
        status: status.unwrap_or_default(),
        nodes: coerce::count(block.get("Resource_List.nodect")).unwrap_or_default(),
        ncpus: coerce::count(block.get("Resource_List.ncpus")).unwrap_or_default(),
        mpiprocs: coerce::count(block.get("Resource_List.mpiprocs")).unwrap_or_default(),
        walltime: coerce::text(block.get("Resource_List.walltime")),
        start_time: start_time.ok(),
    })
}

/// Parse a whole job listing. Malformed records are logged and skipped.
pub fn parse_jobs(document: &str) -> Vec<Job> {
    crate::keep_parsed("job", document.split(JOB_ID_MARKER).skip(1).map(parse_job))
}
