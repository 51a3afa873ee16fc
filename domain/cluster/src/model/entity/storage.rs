use serde::{Deserialize, Serialize};

/// Usage of one of the user's volumes, in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsageRecord {
    /// Label of the volume, e.g. `Home Directory`.
    pub mount_point: String,
    pub path: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
}
