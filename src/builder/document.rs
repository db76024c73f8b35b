// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rebuilding a topology from a canonical document
//!
//! Bypasses row folding: nodes are taken as written, in document order, and
//! every port is replayed through a fresh ledger from both ends, exactly as
//! a row claims both of its ports. No reciprocal ports are synthesized; a
//! document that lacks one is reported by the validator.

use std::collections::HashSet;
use tracing::info;

use super::{Topology, TopologyBuilder};
use crate::canonical::CanonicalDocument;
use crate::domain::{Hardware, Port, PortRef};
use crate::errors::{MalformedInputError, RowOrigin, TopologyError, TopologyResult};
use crate::ledger::PortLedger;
use crate::registry::NodeRegistry;

/// Pseudo-tab used in error origins for document entries
pub(crate) const DOCUMENT_TAB: &str = "document";

impl TopologyBuilder<'_> {
    /// Rebuild a frozen topology from a canonical document
    ///
    /// # Errors
    /// - [`TopologyError::MalformedInput`] for blank or duplicate names,
    ///   non-contiguous ids, or ports pointing at nodes not in the document
    /// - [`TopologyError::PortConflict`] if a port is listed twice with
    ///   different peers, or two ports name the same peer port
    pub fn from_document(document: &CanonicalDocument) -> TopologyResult<Topology> {
        let mut registry = NodeRegistry::new();
        let node_count = document.topology.len();

        for (position, entry) in document.topology.iter().enumerate() {
            let origin = RowOrigin::new(DOCUMENT_TAB, position);
            if entry.common_name.trim().is_empty() {
                return Err(MalformedInputError::in_column(origin, "common_name", "required field is blank").into());
            }
            if entry.id.get() != position {
                return Err(MalformedInputError::in_column(
                    origin,
                    "id",
                    format!("node ids must follow discovery order, expected {position} found {}", entry.id),
                )
                .into());
            }
            let index = registry.get_or_create(&entry.common_name);
            if index.get() != position {
                return Err(MalformedInputError::in_column(
                    origin,
                    "common_name",
                    format!("duplicate node {}", entry.common_name),
                )
                .into());
            }
            registry.set_role(index, entry.role);
            registry.set_hardware(
                index,
                Hardware {
                    vendor: entry.vendor.clone(),
                    model: entry.model.clone(),
                    device_type: entry.device_type,
                },
            );
            registry.set_location(index, entry.location.clone());
        }

        let mut ledger = PortLedger::new();
        let mut listed: HashSet<PortRef> = HashSet::new();
        for entry in &document.topology {
            let origin = RowOrigin::new(DOCUMENT_TAB, entry.id.get());
            for port in &entry.ports {
                if port.destination_node_id.get() >= node_count {
                    return Err(MalformedInputError::in_column(
                        origin,
                        "destination_node_id",
                        format!(
                            "port {} points at node {} which is not in the document",
                            port.port, port.destination_node_id
                        ),
                    )
                    .into());
                }
                let local = PortRef::new(entry.id, port.port.clone(), port.slot.clone());
                let peer = PortRef::new(
                    port.destination_node_id,
                    port.destination_port.clone(),
                    port.destination_slot.clone(),
                );
                for (claimed, by) in [(&local, &peer), (&peer, &local)] {
                    if let Err(conflict) = ledger.claim(claimed.clone(), by.clone()) {
                        let describe = |port: &PortRef| {
                            let name = &document.topology[port.node.get()].common_name;
                            match &port.slot {
                                Some(slot) => format!("{name} slot {slot} port {}", port.port),
                                None => format!("{name} port {}", port.port),
                            }
                        };
                        return Err(TopologyError::PortConflict {
                            node: describe(&conflict.port),
                            existing_peer: describe(&conflict.existing),
                            attempted_peer: describe(&conflict.attempted),
                            conflict,
                        });
                    }
                }
                // A port listed twice with the same peer is kept once
                if !listed.insert(local) {
                    continue;
                }
                if let Some(node) = registry.node_mut(entry.id) {
                    node.push_port(Port {
                        port: port.port.clone(),
                        slot: port.slot.clone(),
                        speed: port.speed,
                        destination_node: port.destination_node_id,
                        destination_port: port.destination_port.clone(),
                        destination_slot: port.destination_slot.clone(),
                    });
                }
            }
        }

        let topology = Topology {
            architecture: document.architecture,
            nodes: registry.into_nodes(),
        };
        info!(
            architecture = %topology.architecture,
            source = %document.source_reference,
            nodes = topology.len(),
            ports = topology.port_count(),
            "topology loaded from document"
        );
        Ok(topology)
    }
}
