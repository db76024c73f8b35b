// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Port Claims
//!
//! A physical port holds one link. Restating a link in either direction is
//! harmless; cabling it to anything else is fatal regardless of row order.

use cim_fabric_topology::{Architecture, RuleCatalog, TopologyBuilder, TopologyError};
use proptest::prelude::*;

use crate::fixtures::switch_link;

proptest! {
    /// Property: a row and its mirror image produce a single pair of ports
    #[test]
    fn prop_mirrored_rows_make_one_link(
        src_port in 1u16..64,
        dst_port in 1u16..64,
        repeats in 1usize..4,
        mirror_first in any::<bool>(),
    ) {
        let catalog = RuleCatalog::load();
        let forward = switch_link(1, "sw-spine-001", &src_port.to_string(), "sw-spine-002", &dst_port.to_string(), "100");
        let mirror = switch_link(2, "sw-spine-002", &dst_port.to_string(), "sw-spine-001", &src_port.to_string(), "100");

        let mut rows = Vec::new();
        for _ in 0..repeats {
            if mirror_first {
                rows.push(mirror.clone());
                rows.push(forward.clone());
            } else {
                rows.push(forward.clone());
                rows.push(mirror.clone());
            }
        }

        let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &rows).unwrap();
        prop_assert_eq!(topology.len(), 2);
        prop_assert_eq!(topology.port_count(), 2);
    }

    /// Property: two different peers on one port conflict in either order
    #[test]
    fn prop_double_claim_conflicts(port in 1u16..64, reversed in any::<bool>()) {
        let catalog = RuleCatalog::load();
        let port = port.to_string();
        let first = switch_link(1, "sw-spine-001", &port, "sw-spine-002", "1", "100");
        let second = switch_link(2, "sw-cdu-001", "1", "sw-spine-001", &port, "100");
        let rows = if reversed { vec![second, first] } else { vec![first, second] };

        let result = TopologyBuilder::build(&catalog, Architecture::Tds, &rows);
        let is_conflict = matches!(result, Err(TopologyError::PortConflict { .. }));
        prop_assert!(is_conflict);
    }
}
