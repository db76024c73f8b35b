// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Graph Builder
//!
//! Folds raw rows, in order, into the node registry and port ledger:
//!
//! ```text
//!  RawRow ──parse──▶ ParsedRow ──resolve──▶ (src, dst) indices
//!                                   │
//!                         claim both ports in ledger
//!                                   │
//!                 append src port, synthesize/verify reciprocal
//! ```
//!
//! Discovery order is load-bearing: node indices and per-node port order
//! both follow row order, so the fold is strictly sequential. Any structural
//! error aborts the build; nothing is built on a corrupted ledger.

mod document;
pub mod row;

use tracing::{debug, info, warn};

use crate::domain::{Hardware, LinkSpeed, Node, NodeIndex, Port, PortRef, Role};
use crate::errors::{TopologyError, TopologyResult};
use crate::ledger::{PortConflictError, PortLedger};
use crate::registry::NodeRegistry;
use crate::rules::{Architecture, RuleCatalog};

pub use row::{Endpoint, ParsedRow, RawRow, COLUMNS};

/// A frozen topology
///
/// Produced by [`TopologyBuilder::finish`] or
/// [`TopologyBuilder::from_document`]. Read-only from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    architecture: Architecture,
    nodes: Vec<Node>,
}

impl Topology {
    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    /// Nodes in discovery-index order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.get())
    }

    pub fn find(&self, common_name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.common_name() == common_name)
    }

    /// Name of the node at `index`, or the index itself if out of range
    pub fn name_of(&self, index: NodeIndex) -> String {
        self.node(index)
            .map(|n| n.common_name().to_string())
            .unwrap_or_else(|| format!("#{index}"))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of claimed ports
    pub fn port_count(&self) -> usize {
        self.nodes.iter().map(|n| n.ports().len()).sum()
    }
}

/// Row-folding builder
#[derive(Debug)]
pub struct TopologyBuilder<'c> {
    catalog: &'c RuleCatalog,
    architecture: Architecture,
    registry: NodeRegistry,
    ledger: PortLedger,
    rows: usize,
}

impl<'c> TopologyBuilder<'c> {
    pub fn new(catalog: &'c RuleCatalog, architecture: Architecture) -> Self {
        Self {
            catalog,
            architecture,
            registry: NodeRegistry::new(),
            ledger: PortLedger::new(),
            rows: 0,
        }
    }

    /// Build a frozen topology from rows in one call
    pub fn build<'r, I>(
        catalog: &'c RuleCatalog,
        architecture: Architecture,
        rows: I,
    ) -> TopologyResult<Topology>
    where
        I: IntoIterator<Item = &'r RawRow>,
    {
        let builder = rows
            .into_iter()
            .try_fold(Self::new(catalog, architecture), |mut builder, row| {
                builder.add_row(row)?;
                Ok::<_, TopologyError>(builder)
            })?;
        Ok(builder.finish())
    }

    /// Fold one row into the graph
    ///
    /// # Errors
    /// - [`TopologyError::MalformedInput`] if the row is structurally broken
    /// - [`TopologyError::PortConflict`] if either port is already held by
    ///   a different peer
    pub fn add_row(&mut self, row: &RawRow) -> TopologyResult<()> {
        let parsed = row.parse()?;
        debug!(origin = %parsed.origin, source = %parsed.source.name, destination = %parsed.destination.name, "folding row");

        let source = self.resolve(&parsed.source);
        let destination = self.resolve(&parsed.destination);

        let source_port = PortRef::new(source, parsed.source.port, parsed.source.slot);
        let destination_port = PortRef::new(destination, parsed.destination.port, parsed.destination.slot);

        self.claim(&source_port, &destination_port)?;
        self.claim(&destination_port, &source_port)?;

        self.attach(&source_port, &destination_port, parsed.speed);
        self.attach(&destination_port, &source_port, parsed.speed);

        self.rows += 1;
        Ok(())
    }

    /// Number of nodes discovered so far
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Freeze the graph
    pub fn finish(self) -> Topology {
        let topology = Topology {
            architecture: self.architecture,
            nodes: self.registry.into_nodes(),
        };
        info!(
            architecture = %topology.architecture,
            rows = self.rows,
            nodes = topology.len(),
            ports = topology.port_count(),
            "topology built"
        );
        topology
    }

    /// Get or create the endpoint's node and stamp role, hardware and location
    fn resolve(&mut self, endpoint: &Endpoint) -> NodeIndex {
        let index = self.registry.get_or_create(&endpoint.name);
        let role = Role::classify(&endpoint.name);
        self.registry.set_role(index, role);
        if role.is_known() {
            let profile = self.catalog.hardware(self.architecture, role);
            self.registry.set_hardware(index, Hardware::from(profile));
        } else {
            debug!(name = %endpoint.name, "name matches no role pattern");
        }
        self.registry.set_location(index, endpoint.location.clone());
        index
    }

    fn claim(&mut self, port: &PortRef, peer: &PortRef) -> TopologyResult<()> {
        self.ledger
            .claim(port.clone(), peer.clone())
            .map(|_| ())
            .map_err(|conflict| self.conflict_error(conflict))
    }

    fn conflict_error(&self, conflict: PortConflictError) -> TopologyError {
        let describe = |port: &PortRef| {
            let name = self
                .registry
                .node(port.node)
                .map(|n| n.common_name().to_string())
                .unwrap_or_else(|| format!("#{}", port.node));
            match &port.slot {
                Some(slot) => format!("{name} slot {slot} port {}", port.port),
                None => format!("{name} port {}", port.port),
            }
        };
        let error = TopologyError::PortConflict {
            node: describe(&conflict.port),
            existing_peer: describe(&conflict.existing),
            attempted_peer: describe(&conflict.attempted),
            conflict,
        };
        warn!(%error, "aborting build");
        error
    }

    /// Append the port on its node, or verify the one already there
    ///
    /// The ledger has already accepted `(local, peer)`, so an existing port at
    /// `local` necessarily points at `peer`.
    fn attach(&mut self, local: &PortRef, peer: &PortRef, speed: Option<LinkSpeed>) {
        let Some(node) = self.registry.node_mut(local.node) else {
            return;
        };
        match node.port_mut(&local.port, local.slot.as_deref()) {
            Some(existing) => match (existing.speed, speed) {
                (None, Some(_)) => existing.speed = speed,
                (Some(recorded), Some(row)) if recorded != row => {
                    warn!(%local, %recorded, %row, "conflicting speeds for one link, keeping the first");
                }
                _ => {}
            },
            None => node.push_port(Port {
                port: local.port.clone(),
                slot: local.slot.clone(),
                speed,
                destination_node: peer.node,
                destination_port: peer.port.clone(),
                destination_slot: peer.slot.clone(),
            }),
        }
    }
}
