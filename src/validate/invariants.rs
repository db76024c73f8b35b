// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Link Invariants
//!
//! Each function inspects the frozen topology and returns what it found; none
//! of them mutate anything or stop at the first problem.
//!
//! # Invariant Categories
//!
//! 1. **Reciprocity**: every port's peer points back at it
//! 2. **Role compatibility**: the role pair and speed are in the catalog
//! 3. **Multiplicity**: parallel links between a pair stay within the rule

use std::collections::BTreeMap;

use super::findings::{ArchitecturalRuleViolation, Finding, ReciprocityError, ViolationReason};
use crate::builder::Topology;
use crate::domain::{Node, NodeIndex, Port, PortRef};
use crate::rules::RuleCatalog;

fn describe_port(port: &PortRef) -> String {
    match &port.slot {
        Some(slot) => format!("slot {} port {}", slot, port.port),
        None => format!("port {}", port.port),
    }
}

/// True when the peer of `port` holds a port pointing back at it
pub fn has_reciprocal(topology: &Topology, owner: NodeIndex, port: &Port) -> bool {
    let local = port.local(owner);
    topology
        .node(port.destination_node)
        .and_then(|peer| peer.port(&port.destination_port, port.destination_slot.as_deref()))
        .is_some_and(|back| back.points_at(&local))
}

/// Reciprocity: the peer must hold a port pointing back at `(owner, port)`
pub fn check_reciprocity(topology: &Topology, owner: &Node, port: &Port) -> Option<ReciprocityError> {
    if has_reciprocal(topology, owner.index(), port) {
        return None;
    }
    Some(ReciprocityError {
        node: owner.common_name().to_string(),
        node_port: describe_port(&port.local(owner.index())),
        peer: topology.name_of(port.destination_node),
        peer_port: describe_port(&port.peer()),
    })
}

/// Whether this side of a link is the one that gets rule-checked
///
/// A reciprocated link is seen from both ends; only the end with the smaller
/// port address reports, so each physical link yields at most one finding.
pub fn is_reporting_side(topology: &Topology, owner: NodeIndex, port: &Port) -> bool {
    !has_reciprocal(topology, owner, port) || port.local(owner) <= port.peer()
}

/// Role compatibility and speed for one link
///
/// Both roles must be concrete; callers check roles before calling.
pub fn check_link(
    catalog: &RuleCatalog,
    topology: &Topology,
    owner: &Node,
    port: &Port,
) -> Option<ArchitecturalRuleViolation> {
    let peer = topology.node(port.destination_node)?;
    let architecture = topology.architecture();
    let reason = match catalog.variant(architecture).rule(owner.role(), peer.role()) {
        None => ViolationReason::IllegalPair,
        Some(rule) if !rule.permits_speed(port.speed) => ViolationReason::UnsupportedSpeed {
            speed: port.speed?,
            permitted: rule.speeds,
        },
        Some(_) => return None,
    };
    Some(ArchitecturalRuleViolation {
        architecture,
        node: owner.common_name().to_string(),
        node_role: owner.role(),
        peer: peer.common_name().to_string(),
        peer_role: peer.role(),
        reason,
    })
}

/// Parallel-link ceilings for every pair `(owner, peer)` with `peer >= owner`
///
/// Pairs the catalog forbids outright are skipped: [`check_link`] already
/// reports those.
pub fn check_multiplicity(catalog: &RuleCatalog, topology: &Topology, owner: &Node) -> Vec<Finding> {
    let mut per_peer: BTreeMap<NodeIndex, usize> = BTreeMap::new();
    for port in owner.ports() {
        if port.destination_node >= owner.index() {
            *per_peer.entry(port.destination_node).or_default() += 1;
        }
    }

    let mut findings = Vec::new();
    for (peer_index, mut count) in per_peer {
        let Some(peer) = topology.node(peer_index) else {
            continue;
        };
        if !owner.role().is_known() || !peer.role().is_known() {
            continue;
        }
        if peer_index == owner.index() {
            // Both ends of a loopback cable live on this node
            count = count.div_ceil(2);
        }
        let Some(max) = catalog.max_links(topology.architecture(), owner.role(), peer.role()) else {
            continue;
        };
        if count > max {
            findings.push(Finding::RuleViolation(ArchitecturalRuleViolation {
                architecture: topology.architecture(),
                node: owner.common_name().to_string(),
                node_role: owner.role(),
                peer: peer.common_name().to_string(),
                peer_role: peer.role(),
                reason: ViolationReason::TooManyLinks { count, max },
            }));
        }
    }
    findings
}
