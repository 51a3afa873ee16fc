//! Parsers for PBS command output and the service that assembles them into
//! cluster snapshots.

mod coerce;
pub mod job;
pub mod node;
mod snapshot;
pub mod storage;
pub mod unit;

#[rustfmt::skip]
pub use {
    snapshot::SnapshotServiceImpl,
    storage::{StorageLayout, PROBE_SCRIPT},
};

use domain_cluster::exception::ParseResult;
use tracing::warn;

/// Collect the records that parsed and log the ones that did not.
fn keep_parsed<T>(kind: &str, results: impl Iterator<Item = ParseResult<T>>) -> Vec<T> {
    results
        .filter_map(|result| match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping malformed {kind} record: {e}");
                None
            }
        })
        .collect()
}
