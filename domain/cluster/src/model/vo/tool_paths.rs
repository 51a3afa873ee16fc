use serde::{Deserialize, Serialize};

/// Resolved locations of the external tools the probes run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPaths {
    #[serde(default = "ToolPaths::default_qstat")]
    pub qstat: String,
    #[serde(default = "ToolPaths::default_pbsnodes")]
    pub pbsnodes: String,
    /// Shell used to run the storage probe script.
    #[serde(default = "ToolPaths::default_shell")]
    pub shell: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            qstat: Self::default_qstat(),
            pbsnodes: Self::default_pbsnodes(),
            shell: Self::default_shell(),
        }
    }
}

impl ToolPaths {
    pub fn default_qstat() -> String {
        "/opt/pbs/bin/qstat".to_string()
    }
    pub fn default_pbsnodes() -> String {
        "/opt/pbs/bin/pbsnodes".to_string()
    }
    pub fn default_shell() -> String {
        "/bin/sh".to_string()
    }
}
