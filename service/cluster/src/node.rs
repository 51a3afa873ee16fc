//! Node listing (`pbsnodes -a`).
//!
//! Nodes are separated by blank lines. The first line of a section is the
//! node name, the rest are `key = value` (or `key=value`) attributes.

use std::collections::HashMap;

use domain_cluster::exception::{ParseException, ParseResult};
use domain_cluster::model::entity::Node;
use domain_cluster::model::vo::{is_exclusive, Coerced, NodeStatus};

use crate::{coerce, unit};

/// Raw attributes of one node section, before coercion.
#[derive(Debug, PartialEq, Eq)]
pub struct NodeBlock<'a> {
    pub name: &'a str,
    fields: HashMap<&'a str, &'a str>,
}

impl<'a> NodeBlock<'a> {
    pub fn tokenize(section: &[&'a str]) -> ParseResult<Self> {
        let name = section.first().map(|l| l.trim()).unwrap_or_default();
        if name.is_empty() || name.contains('=') {
            return Err(ParseException::MissingNodeName {
                section: section.join("\n"),
            });
        }

        let mut fields = HashMap::new();
        for line in &section[1..] {
            if let Some((key, value)) = line.split_once('=') {
                fields.entry(key.trim()).or_insert(value.trim());
            }
        }
        Ok(Self { name, fields })
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).copied()
    }
}

/// Split a listing on blank lines, dropping empty sections.
pub fn sections(document: &str) -> Vec<Vec<&str>> {
    let mut sections = Vec::new();
    let mut current = Vec::new();
    for line in document.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

fn memory(value: Option<&str>) -> Coerced<f64> {
    value.map_or(Coerced::Unparseable, unit::to_gigabytes)
}

/// Parse one node section.
///
/// CPU usage is derived from exclusivity alone: an exclusive node uses all of
/// its CPUs, any other node none. An exclusive node with no memory figure is
/// considered to use all of its memory.
pub fn parse_node(section: &[&str]) -> ParseResult<Node> {
    let block = NodeBlock::tokenize(section)?;
    let state = block.get("state").unwrap_or_default();
    let exclusive = is_exclusive(state);

    let total_cpus = coerce::count(block.get("resources_available.ncpus")).unwrap_or_default();
    let total_memory = memory(block.get("resources_available.mem")).unwrap_or(0.0);
    let mut used_memory = memory(block.get("resources_assigned.mem"))
        .or_else(|| memory(block.get("resources_used.mem")))
        .unwrap_or(0.0);
    if exclusive && used_memory == 0.0 {
        used_memory = total_memory;
    }

    let jobs = block
        .get("jobs")
        .map(|jobs| {
            jobs.split(',')
                .map(str::trim)
                .filter(|j| !j.is_empty())
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Ok(Node {
        name: block.name.to_owned(),
        status: NodeStatus::from_state(state),
        total_cpus,
        used_cpus: if exclusive { total_cpus } else { 0 },
        total_memory,
        used_memory,
        jobs,
    })
}

/// Parse a whole node listing. Malformed sections are logged and skipped.
pub fn parse_nodes(document: &str) -> Vec<Node> {
    crate::keep_parsed("node", sections(document).iter().map(|s| parse_node(s)))
}
