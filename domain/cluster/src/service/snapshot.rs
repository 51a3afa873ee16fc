use async_trait::async_trait;

use crate::model::entity::{ClusterSnapshot, Job, Node, StorageUsageRecord};

/// Gathers cluster state from the scheduler tools.
///
/// Every method degrades to an empty list when its probe fails, so one broken
/// tool never hides the output of the others.
#[async_trait]
pub trait ClusterSnapshotService: Send + Sync {
    /// Jobs from the detailed job listing.
    async fn jobs(&self) -> Vec<Job>;
    /// Nodes from the node listing.
    async fn nodes(&self) -> Vec<Node>;
    /// Home and scratch usage of the monitored user.
    async fn storage(&self) -> Vec<StorageUsageRecord>;
    /// Run all three probes concurrently.
    async fn snapshot(&self) -> ClusterSnapshot;
}
