// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Canonical Round Trips
//!
//! Emitting a topology and rebuilding it from the document must reproduce
//! the same graph, whatever links the rows describe.

use std::collections::BTreeMap;

use cim_fabric_topology::{
    Architecture, ArchitecturalValidator, CanonicalDocument, RawRow, RuleCatalog, TopologyBuilder,
};
use proptest::prelude::*;

use crate::fixtures::switch_link;

const PEERS: [&str; 4] = ["sw-spine-002", "sw-cdu-001", "sw-leaf-bmc-001", "mystery-box"];

// ============================================================================
// Strategies
// ============================================================================

/// Links from the first spine, one per distinct spine port
fn arb_rows() -> impl Strategy<Value = Vec<RawRow>> {
    let speed = prop::option::of(prop::sample::select(vec![10u32, 25, 100]));
    prop::collection::btree_map(1u16..96, (0..PEERS.len(), speed), 1..24)
        .prop_map(|links: BTreeMap<u16, (usize, Option<u32>)>| {
            links
                .into_iter()
                .enumerate()
                .map(|(i, (port, (peer, speed)))| {
                    let port = port.to_string();
                    let speed = speed.map(|s| s.to_string()).unwrap_or_default();
                    switch_link(i + 1, "sw-spine-001", &port, PEERS[peer], &port, &speed)
                })
                .collect()
        })
}

fn arb_architecture() -> impl Strategy<Value = Architecture> {
    prop::sample::select(Architecture::ALL.to_vec())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: document -> rebuild -> document is the identity
    #[test]
    fn prop_document_round_trip(rows in arb_rows(), architecture in arb_architecture()) {
        let catalog = RuleCatalog::load();
        let topology = TopologyBuilder::build(&catalog, architecture, &rows).unwrap();
        let document = CanonicalDocument::from_topology(&topology, "prop");

        let parsed = CanonicalDocument::parse(&document.to_json().unwrap()).unwrap();
        let rebuilt = TopologyBuilder::from_document(&parsed).unwrap();

        prop_assert_eq!(&rebuilt, &topology);
        prop_assert_eq!(CanonicalDocument::from_topology(&rebuilt, "prop"), document);
    }

    /// Property: a rebuilt topology validates exactly like the original
    #[test]
    fn prop_rebuild_preserves_findings(rows in arb_rows(), architecture in arb_architecture()) {
        let catalog = RuleCatalog::load();
        let validator = ArchitecturalValidator::new(&catalog);
        let topology = TopologyBuilder::build(&catalog, architecture, &rows).unwrap();
        let rebuilt = TopologyBuilder::from_document(&CanonicalDocument::from_topology(&topology, "prop")).unwrap();

        prop_assert_eq!(validator.validate(&rebuilt), validator.validate(&topology));
    }

    /// Property: every built port has a reciprocal, so the validator never
    /// reports one missing for row input
    #[test]
    fn prop_rows_are_always_reciprocal(rows in arb_rows(), architecture in arb_architecture()) {
        let catalog = RuleCatalog::load();
        let topology = TopologyBuilder::build(&catalog, architecture, &rows).unwrap();
        let report = ArchitecturalValidator::new(&catalog).validate(&topology);

        prop_assert_eq!(report.reciprocity_errors().count(), 0);
        prop_assert_eq!(topology.port_count(), rows.len() * 2);
    }
}
