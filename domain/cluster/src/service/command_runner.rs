use std::collections::HashMap;

use async_trait::async_trait;

/// Runs an external program and hands back what it printed.
///
/// `env` overrides variables of the inherited environment; an empty map
/// leaves it untouched. Standard error is appended to standard output. A
/// program that cannot be spawned or exits unsuccessfully is an error.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        env: &HashMap<String, String>,
    ) -> anyhow::Result<String>;
}
