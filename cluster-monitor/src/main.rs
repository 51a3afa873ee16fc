mod config;
mod runner;
mod telemetry;

use std::sync::Arc;

use colored::Colorize;
use infrastructure_command::{ProcessCommandRunner, SshProxy};
use service_cluster::SnapshotServiceImpl;
use tracing::{error, info};

use crate::config::{build_config, section, MonitorConfig};
use crate::runner::IntervalRunner;
use crate::telemetry::TelemetryConfig;

#[tokio::main]
async fn main() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Failed to build config".red());
            return;
        }
    };

    let telemetry: TelemetryConfig = match section(&config, "telemetry") {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Invalid telemetry config".red());
            return;
        }
    };
    if let Err(e) = telemetry::initialize_telemetry(&telemetry) {
        eprintln!("{}: {e}", "Failed to initialize logger".red());
        return;
    }

    let monitor: MonitorConfig = match section(&config, "monitor") {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Invalid monitor config".red());
            return;
        }
    };
    let layout = match monitor.storage.layout() {
        Ok(x) => x,
        Err(e) => {
            eprintln!("{}: {e}", "Failed to resolve storage layout".red());
            return;
        }
    };

    let runner = ProcessCommandRunner::new(SshProxy::new(&monitor.ssh_proxy));
    let service = SnapshotServiceImpl::builder()
        .runner(Arc::new(runner))
        .tools(monitor.tools)
        .job_args(monitor.job_args)
        .node_args(monitor.node_args)
        .layout(layout)
        .env(monitor.env)
        .build();
    let runner = IntervalRunner::new(monitor.interval, monitor.once, Arc::new(service));

    info!("Monitoring every {}s", monitor.interval);
    tokio::select! {
        result = runner.run() => {
            if let Err(e) = result {
                error!("{e:#}");
            }
        }
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }
}
