use std::collections::HashMap;

use async_trait::async_trait;
use mockall::mock;

use crate::model::entity::{ClusterSnapshot, Job, Node, StorageUsageRecord};
use crate::service::{ClusterSnapshotService, CommandRunner};

mock! {
    pub CommandRunner {}
    #[async_trait]
    impl CommandRunner for CommandRunner {
        async fn run(
            &self,
            program: &str,
            args: &[String],
            env: &HashMap<String, String>,
        ) -> anyhow::Result<String>;
    }
}

mock! {
    pub ClusterSnapshotService {}
    #[async_trait]
    impl ClusterSnapshotService for ClusterSnapshotService {
        async fn jobs(&self) -> Vec<Job>;
        async fn nodes(&self) -> Vec<Node>;
        async fn storage(&self) -> Vec<StorageUsageRecord>;
        async fn snapshot(&self) -> ClusterSnapshot;
    }
}
