// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-node connection summaries

use std::fmt;
use std::ops::RangeInclusive;

use crate::builder::Topology;
use crate::domain::{Node, NodeIndex};
use crate::rules::RuleCatalog;

/// How a node's neighbor count compares to its role's expectation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryStatus {
    /// Within the expected range
    Ok,
    /// Role expects no connections under this architecture
    Skip,
    /// Outside the expected range; reported, but not a failure
    OutOfRange { expected: RangeInclusive<usize> },
    /// Role could not be classified, so no expectation applies
    Unresolved,
}

/// "`<index>`: `<name>` connects to `<K>` nodes: [...]"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSummary {
    pub index: NodeIndex,
    pub common_name: String,
    /// Distinct neighbors in port discovery order
    pub neighbors: Vec<NodeIndex>,
    pub status: SummaryStatus,
}

impl NodeSummary {
    pub fn connection_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_skip(&self) -> bool {
        self.status == SummaryStatus::Skip
    }
}

impl fmt::Display for NodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let neighbors: Vec<String> = self.neighbors.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{}: {} connects to {} nodes: [{}]",
            self.index,
            self.common_name,
            self.neighbors.len(),
            neighbors.join(", ")
        )
    }
}

/// Summarize one node against its role's expected connection count
pub fn summarize_node(catalog: &RuleCatalog, topology: &Topology, node: &Node) -> NodeSummary {
    let neighbors = node.neighbors();
    let expected = catalog.expected_count(topology.architecture(), node.role());
    let status = if !node.role().is_known() {
        SummaryStatus::Unresolved
    } else if *expected.end() == 0 {
        SummaryStatus::Skip
    } else if expected.contains(&neighbors.len()) {
        SummaryStatus::Ok
    } else {
        SummaryStatus::OutOfRange { expected }
    };
    NodeSummary {
        index: node.index(),
        common_name: node.common_name().to_string(),
        neighbors,
        status,
    }
}

/// Summaries for every node in discovery-index order
pub fn summarize(catalog: &RuleCatalog, topology: &Topology) -> Vec<NodeSummary> {
    topology
        .nodes()
        .iter()
        .map(|node| summarize_node(catalog, topology, node))
        .collect()
}
