use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use domain_cluster::service::ClusterSnapshotService;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, Instrument};

/// Prints one snapshot per tick as a JSON line.
pub struct IntervalRunner {
    service: Arc<dyn ClusterSnapshotService>,
    interval: Duration,
    once: bool,
}

impl IntervalRunner {
    pub fn new(interval: u64, once: bool, service: Arc<dyn ClusterSnapshotService>) -> Self {
        Self {
            interval: Duration::from_secs(interval.max(1)),
            once,
            service,
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        self.run_with(std::io::stdout()).await
    }

    /// Returns only when `once` is set or `out` stops accepting lines.
    pub async fn run_with<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        let mut interval = interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let snapshot = self
                .service
                .snapshot()
                .instrument(tracing::trace_span!("interval_runner"))
                .await;
            info!("Refreshed cluster state: {snapshot}");

            let mut line = serde_json::to_string(&snapshot)?;
            line.push('\n');
            out.write_all(line.as_bytes())
                .and_then(|_| out.flush())
                .context("Unable to write snapshot")?;

            if self.once {
                return Ok(());
            }
        }
    }
}
