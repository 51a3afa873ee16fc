use std::collections::HashMap;

use anyhow::{bail, Context};
use async_trait::async_trait;
use domain_cluster::service::CommandRunner;
use tracing::debug;

use crate::SshProxy;

/// Runs probes as child processes, optionally through an [`SshProxy`].
#[derive(Debug, Default)]
pub struct ProcessCommandRunner {
    proxy: SshProxy,
}

impl ProcessCommandRunner {
    pub fn new(proxy: SshProxy) -> Self {
        Self { proxy }
    }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        env: &HashMap<String, String>,
    ) -> anyhow::Result<String> {
        let output = self
            .proxy
            .command(program, args, env)
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("Unable to start {program}"))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        if !output.status.success() {
            bail!("Exit Status not 0 for {program}. real: {}\n{text}", output.status);
        }
        debug!("{program} printed {} bytes", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use domain_cluster::service::CommandRunner;

    use super::ProcessCommandRunner;

    fn script(s: &str) -> Vec<String> {
        vec!["-c".to_owned(), s.to_owned()]
    }

    #[tokio::test]
    async fn test_stderr_is_appended() {
        let runner = ProcessCommandRunner::default();
        let out = runner
            .run("sh", &script("echo out; echo err >&2"), &HashMap::new())
            .await
            .unwrap();
        assert_eq!(out, "out\nerr\n");
    }

    #[tokio::test]
    async fn test_env_override() {
        let runner = ProcessCommandRunner::default();
        let env = HashMap::from([("PBSMON_PROBE".to_owned(), "42".to_owned())]);
        let out = runner.run("sh", &script("printf %s \"$PBSMON_PROBE\""), &env).await.unwrap();
        assert_eq!(out, "42");
    }

    #[tokio::test]
    async fn test_failures() {
        let runner = ProcessCommandRunner::default();
        let e = runner.run("sh", &script("echo nope; exit 3"), &HashMap::new()).await.unwrap_err();
        assert!(e.to_string().contains("nope"));

        let e = runner
            .run("/nonexistent/pbsnodes", &[], &HashMap::new())
            .await
            .unwrap_err();
        assert!(e.to_string().contains("Unable to start /nonexistent/pbsnodes"));
    }
}
