use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tokio::process::Command;

/// Login node through which the scheduler tools are reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshProxyConfig {
    pub host: String,
    pub username: String,
    #[serde(default = "SshProxyConfig::default_port")]
    pub port: u16,
}

impl SshProxyConfig {
    pub fn default_port() -> u16 {
        22
    }
}

/// An ssh proxy for command. It's transparent if not using ssh.
#[derive(Debug, Default)]
pub struct SshProxy {
    ssh: Option<SshConfig>,
}

#[derive(Debug)]
struct SshConfig {
    port: String,
    username_host: String,
}

impl SshProxy {
    pub fn new(ssh_config: &Option<SshProxyConfig>) -> Self {
        let Some(SshProxyConfig {
            host,
            username,
            port,
        }) = ssh_config
        else {
            return Self { ssh: None };
        };

        Self {
            ssh: Some(SshConfig {
                port: port.to_string(),
                username_host: format!("{username}@{host}"),
            }),
        }
    }

    /// Build the command locally, or as an `ssh` invocation when proxying.
    ///
    /// The remote side joins its arguments into a shell command line, so
    /// every word is quoted and the environment is passed through `env`.
    pub fn command(&self, program: &str, args: &[String], env: &HashMap<String, String>) -> Command {
        let Some(ssh) = &self.ssh else {
            let mut command = Command::new(program);
            command.args(args).envs(env);
            return command;
        };

        let mut command = Command::new("ssh");
        command.args(["-p", &ssh.port, &ssh.username_host]);
        if !env.is_empty() {
            let mut vars: Vec<_> = env.iter().map(|(k, v)| quote(&format!("{k}={v}"))).collect();
            vars.sort();
            command.arg("env").args(vars);
        }
        command.arg(quote(program)).args(args.iter().map(|a| quote(a)));
        command
    }
}

/// Single-quote a word for a POSIX shell.
fn quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', r"'\''"))
}
