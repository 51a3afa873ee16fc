use std::collections::HashMap;
use std::sync::Arc;

use domain_cluster::{
    mock::MockCommandRunner,
    model::vo::{JobStatus, NodeStatus, ToolPaths},
    service::ClusterSnapshotService,
};
use indoc::indoc;
use service_cluster::{SnapshotServiceImpl, StorageLayout};

const QSTAT: &str = indoc! {"
    Job Id: 101.head
        Job_Name = relax
        Job_Owner = alice@login
        job_state = R
        queue = workq
        Resource_List.ncpus = 32
        Resource_List.nodect = 1
        Resource_List.walltime = 02:00:00
        stime = Tue Oct 15 08:00:00 2024

    Job Id: 102.head
        Job_Owner = bob@login
        job_state = H
        queue = workq
"};

const PBSNODES: &str = indoc! {"
    cn01
         state = job-exclusive
         jobs = 101.head/0
         resources_available.mem = 96gb
         resources_available.ncpus = 32

    cn02
         state = free
         resources_available.mem = 96gb
         resources_available.ncpus = 32
"};

const PROBE: &str = "1000\n5000 1200 3800\n0\n0 0 0\n";

fn tools() -> ToolPaths {
    ToolPaths {
        qstat: "qstat".to_owned(),
        pbsnodes: "pbsnodes".to_owned(),
        shell: "sh".to_owned(),
    }
}

/// Runner answering with canned output, failing for the listed programs.
fn runner(failing: &'static [&'static str]) -> MockCommandRunner {
    let mut runner = MockCommandRunner::new();
    runner.expect_run().returning(move |program, _, _| {
        if failing.contains(&program) {
            anyhow::bail!("{program}: command not found");
        }
        match program {
            "qstat" => Ok(QSTAT.to_owned()),
            "pbsnodes" => Ok(PBSNODES.to_owned()),
            "sh" => Ok(PROBE.to_owned()),
            other => anyhow::bail!("unexpected program {other}"),
        }
    });
    runner
}

fn service(runner: MockCommandRunner) -> SnapshotServiceImpl {
    SnapshotServiceImpl::builder()
        .runner(Arc::new(runner))
        .tools(tools())
        .layout(StorageLayout::new("alice"))
        .build()
}

#[tokio::test]
async fn test_full_snapshot() {
    let snapshot = service(runner(&[])).snapshot().await;

    assert_eq!(snapshot.jobs.len(), 2);
    assert_eq!(snapshot.jobs[0].status, JobStatus::Running);
    assert_eq!(snapshot.jobs[1].status, JobStatus::Queued);
    assert_eq!(snapshot.jobs[1].name, "N/A");

    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.nodes[0].status, NodeStatus::Busy);
    assert_eq!(snapshot.nodes[0].used_memory, 96.0);
    assert_eq!(snapshot.nodes[1].status, NodeStatus::Free);

    assert_eq!(snapshot.storage.len(), 1);
    assert_eq!(snapshot.storage[0].path, "/home/alice");
    assert_eq!(snapshot.storage[0].available, 3800);
}

#[tokio::test]
async fn test_failed_probe_only_empties_its_class() {
    let snapshot = service(runner(&["qstat"])).snapshot().await;
    assert!(snapshot.jobs.is_empty());
    assert_eq!(snapshot.nodes.len(), 2);
    assert_eq!(snapshot.storage.len(), 1);

    let snapshot = service(runner(&["pbsnodes", "sh"])).snapshot().await;
    assert_eq!(snapshot.jobs.len(), 2);
    assert!(snapshot.nodes.is_empty());
    assert!(snapshot.storage.is_empty());
}

#[tokio::test]
async fn test_every_probe_failing() {
    let snapshot = service(runner(&["qstat", "pbsnodes", "sh"])).snapshot().await;
    assert!(snapshot.jobs.is_empty());
    assert!(snapshot.nodes.is_empty());
    assert!(snapshot.storage.is_empty());
}

#[tokio::test]
async fn test_garbled_storage_probe() {
    let mut runner = MockCommandRunner::new();
    runner
        .expect_run()
        .returning(|_, _, _| Ok("du: cannot access '/home/alice'\n".to_owned()));
    let service = service(runner);

    assert!(service.storage().await.is_empty());
    assert!(service.jobs().await.is_empty());
}

#[tokio::test]
async fn test_probe_invocation() {
    let env = HashMap::from([("LC_ALL".to_owned(), "C".to_owned())]);
    let mut runner = MockCommandRunner::new();
    runner
        .expect_run()
        .withf(|program, args, env| {
            program == "pbsnodes" && args == ["-a", "-S"] && env.get("LC_ALL").is_some()
        })
        .times(1)
        .returning(|_, _, _| Ok(PBSNODES.to_owned()));
    let service = SnapshotServiceImpl::builder()
        .runner(Arc::new(runner))
        .tools(tools())
        .node_args(vec!["-a".to_owned(), "-S".to_owned()])
        .layout(StorageLayout::new("alice"))
        .env(env)
        .build();

    assert_eq!(service.nodes().await.len(), 2);
}
