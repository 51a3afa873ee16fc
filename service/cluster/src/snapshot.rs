use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::Local;
use domain_cluster::{
    model::{
        entity::{ClusterSnapshot, Job, Node, StorageUsageRecord},
        vo::ToolPaths,
    },
    service::{ClusterSnapshotService, CommandRunner},
};
use tracing::{debug, error};
use typed_builder::TypedBuilder;

use crate::job::parse_jobs;
use crate::node::parse_nodes;
use crate::storage::{parse_storage, StorageLayout};

#[derive(TypedBuilder)]
pub struct SnapshotServiceImpl {
    runner: Arc<dyn CommandRunner>,
    #[builder(default)]
    tools: ToolPaths,
    #[builder(default = vec!["-f".to_owned()])]
    job_args: Vec<String>,
    #[builder(default = vec!["-a".to_owned()])]
    node_args: Vec<String>,
    layout: StorageLayout,
    /// Environment override passed to every probe.
    #[builder(default)]
    env: HashMap<String, String>,
}

impl SnapshotServiceImpl {
    /// Run a probe, logging and swallowing its failure.
    async fn probe(&self, program: &str, args: &[String]) -> Option<String> {
        match self
            .runner
            .run(program, args, &self.env)
            .await
            .with_context(|| format!("Failed to run {program}"))
        {
            Ok(output) => Some(output),
            Err(e) => {
                error!("{e:#}");
                None
            }
        }
    }
}

#[async_trait]
impl ClusterSnapshotService for SnapshotServiceImpl {
    async fn jobs(&self) -> Vec<Job> {
        let Some(output) = self.probe(&self.tools.qstat, &self.job_args).await else {
            return vec![];
        };
        let jobs = parse_jobs(&output);
        debug!("Parsed {} jobs", jobs.len());
        jobs
    }

    async fn nodes(&self) -> Vec<Node> {
        let Some(output) = self.probe(&self.tools.pbsnodes, &self.node_args).await else {
            return vec![];
        };
        let nodes = parse_nodes(&output);
        debug!("Parsed {} nodes", nodes.len());
        nodes
    }

    async fn storage(&self) -> Vec<StorageUsageRecord> {
        let args = self.layout.probe_args();
        let Some(output) = self.probe(&self.tools.shell, &args).await else {
            return vec![];
        };
        match parse_storage(&output, &self.layout) {
            Ok(records) => records,
            Err(e) => {
                error!("Storage probe for {} is unusable: {e}", self.layout.user);
                vec![]
            }
        }
    }

    async fn snapshot(&self) -> ClusterSnapshot {
        let (jobs, nodes, storage) = tokio::join!(self.jobs(), self.nodes(), self.storage());
        ClusterSnapshot {
            captured_at: Local::now(),
            jobs,
            nodes,
            storage,
        }
    }
}
