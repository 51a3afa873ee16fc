use std::collections::HashMap;

use anyhow::Context;
use config::{Config, ConfigError};
use domain_cluster::model::vo::ToolPaths;
use infrastructure_command::SshProxyConfig;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use service_cluster::storage::{StorageLayout, DEFAULT_HOME_ROOT, DEFAULT_SCRATCH_ROOT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Seconds between two refreshes.
    #[serde(default = "MonitorConfig::default_interval")]
    pub interval: u64,
    /// Emit a single snapshot and exit.
    #[serde(default = "Default::default")]
    pub once: bool,
    #[serde(default = "Default::default")]
    pub tools: ToolPaths,
    #[serde(default = "MonitorConfig::default_job_args")]
    pub job_args: Vec<String>,
    #[serde(default = "MonitorConfig::default_node_args")]
    pub node_args: Vec<String>,
    #[serde(default = "MonitorConfig::default_env")]
    pub env: HashMap<String, String>,
    #[serde(default = "Default::default")]
    pub storage: StorageConfig,
    #[serde(default = "Default::default")]
    pub ssh_proxy: Option<SshProxyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Defaults to `$USER`.
    #[serde(default = "Default::default")]
    pub user: Option<String>,
    #[serde(default = "StorageConfig::default_home_root")]
    pub home_root: String,
    /// Set to `~` on sites without a scratch file system.
    #[serde(default = "StorageConfig::default_scratch_root")]
    pub scratch_root: Option<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Self::default_interval(),
            once: Default::default(),
            tools: Default::default(),
            job_args: Self::default_job_args(),
            node_args: Self::default_node_args(),
            env: Self::default_env(),
            storage: Default::default(),
            ssh_proxy: Default::default(),
        }
    }
}

impl MonitorConfig {
    pub fn default_interval() -> u64 {
        30
    }
    pub fn default_job_args() -> Vec<String> {
        vec!["-f".to_string()]
    }
    pub fn default_node_args() -> Vec<String> {
        vec!["-a".to_string()]
    }
    pub fn default_env() -> HashMap<String, String> {
        HashMap::from([("LC_ALL".to_string(), "C".to_string())])
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            user: Default::default(),
            home_root: Self::default_home_root(),
            scratch_root: Self::default_scratch_root(),
        }
    }
}

impl StorageConfig {
    pub fn default_home_root() -> String {
        DEFAULT_HOME_ROOT.to_string()
    }
    pub fn default_scratch_root() -> Option<String> {
        Some(DEFAULT_SCRATCH_ROOT.to_string())
    }

    /// Resolve the monitored user and its volume roots.
    pub fn layout(&self) -> anyhow::Result<StorageLayout> {
        let user = match &self.user {
            Some(user) => user.clone(),
            None => std::env::var("USER").context("monitor.storage.user is unset and so is $USER")?,
        };
        Ok(StorageLayout {
            user,
            home_root: self.home_root.clone(),
            scratch_root: self.scratch_root.clone(),
        })
    }
}

/// Layer `config.yaml`, any yaml file named on the command line and
/// `PBSMON`-prefixed environment variables.
pub fn build_config() -> anyhow::Result<Config> {
    let mut config = Config::builder().add_source(
        config::File::with_name("config")
            .required(false)
            .format(config::FileFormat::Yaml),
    );
    for arg in std::env::args().skip(1) {
        if arg.ends_with("yaml") || arg.ends_with("yml") {
            config = config.add_source(
                config::File::from(std::path::Path::new(arg.as_str()))
                    .format(config::FileFormat::Yaml)
                    .required(true),
            );
        }
    }
    config = config.add_source(
        config::Environment::with_prefix("PBSMON")
            .separator("__")
            .try_parsing(true)
            .list_separator(" ")
            .with_list_parse_key("monitor.job_args")
            .with_list_parse_key("monitor.node_args"),
    );
    Ok(config.build()?)
}

/// Read a section, falling back to its defaults when it is absent.
pub fn section<T: DeserializeOwned + Default>(config: &Config, key: &str) -> Result<T, ConfigError> {
    match config.get(key) {
        Err(ConfigError::NotFound(_)) => Ok(T::default()),
        other => other,
    }
}
