use serde::{Deserialize, Serialize};

use crate::model::vo::NodeStatus;

/// A compute node as reported by the node listing.
///
/// Memory figures are in gigabytes. Used figures are trusted as reported and
/// may exceed the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(rename = "nodeName")]
    pub name: String,
    pub status: NodeStatus,
    #[serde(rename = "totalCPUs")]
    pub total_cpus: u32,
    #[serde(rename = "usedCPUs")]
    pub used_cpus: u32,
    pub total_memory: f64,
    pub used_memory: f64,
    /// Ids of the jobs currently placed on this node.
    pub jobs: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{Node, NodeStatus};

    #[test]
    fn test_json_keys() {
        let node = Node {
            name: "cn01".to_string(),
            status: NodeStatus::Free,
            total_cpus: 4,
            used_cpus: 0,
            total_memory: 16.0,
            used_memory: 0.0,
            jobs: vec![],
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["nodeName"], "cn01");
        assert_eq!(value["totalCPUs"], 4);
        assert_eq!(value["usedCPUs"], 0);
        assert_eq!(value["totalMemory"], 16.0);
        assert!(value.get("name").is_none());
        assert!(value.get("totalCpus").is_none());

        let back: Node = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }
}
