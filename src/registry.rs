// Copyright (c) 2025 - Cowboy AI, Inc.
//! Node Registry
//!
//! Append-only arena of nodes. A node's index is its position in the arena,
//! assigned the first time its common name is seen and never changed. All
//! links refer to nodes by index.

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::domain::{Hardware, Location, Node, NodeIndex, Role};

/// Arena of nodes keyed by discovery index
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeIndex>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `common_name`, creating the node with role `unknown` if new
    pub fn get_or_create(&mut self, common_name: &str) -> NodeIndex {
        let name = common_name.trim();
        if let Some(index) = self.by_name.get(name) {
            return *index;
        }
        let index = NodeIndex::new(self.nodes.len());
        debug!(%index, name, "discovered node");
        self.nodes.push(Node::new(index, name));
        self.by_name.insert(name.to_string(), index);
        index
    }

    /// Index of an existing node
    pub fn lookup(&self, common_name: &str) -> Option<NodeIndex> {
        self.by_name.get(common_name.trim()).copied()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.get())
    }

    pub(crate) fn node_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(index.get())
    }

    pub fn set_role(&mut self, index: NodeIndex, role: Role) {
        if let Some(node) = self.node_mut(index) {
            if node.role() != role {
                node.set_role(role);
            }
        }
    }

    pub fn set_hardware(&mut self, index: NodeIndex, hardware: Hardware) {
        if let Some(node) = self.node_mut(index) {
            if *node.hardware() != hardware {
                node.set_hardware(hardware);
            }
        }
    }

    /// Record a node's location; a later, different location replaces it
    ///
    /// A mention that names the same rack and elevation but no parent keeps
    /// the parent already recorded: only source endpoints carry one.
    pub fn set_location(&mut self, index: NodeIndex, location: Location) {
        if let Some(node) = self.node_mut(index) {
            let current = node.location();
            let same_place = current.rack == location.rack && current.elevation == location.elevation;
            if current.is_unset() {
                node.set_location(location);
            } else if *current != location && !(same_place && location.parent.is_none()) {
                warn!(
                    node = node.common_name(),
                    previous = %current,
                    current = %location,
                    "node location changed between rows"
                );
                node.set_location(location);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub(crate) fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
