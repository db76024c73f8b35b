// Copyright (c) 2025 - Cowboy AI, Inc.
//! Integration tests for the row-folding builder

mod fixtures;

use cim_fabric_topology::domain::{DeviceType, Location};
use cim_fabric_topology::{
    Architecture, NodeIndex, PortLabel, RawRow, Role, RuleCatalog, TopologyBuilder, TopologyError,
};
use fixtures::*;
use pretty_assertions::assert_eq;

#[test]
fn test_tds_nodes_in_discovery_order() {
    let catalog = RuleCatalog::load();
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &tds_rows()).unwrap();

    let names: Vec<&str> = topology.nodes().iter().map(|n| n.common_name()).collect();
    assert_eq!(names, TDS_NODES.to_vec());
    for (position, node) in topology.nodes().iter().enumerate() {
        assert_eq!(node.index(), NodeIndex::new(position));
    }
}

#[test]
fn test_tds_roles_and_hardware() {
    let catalog = RuleCatalog::load();
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &tds_rows()).unwrap();

    let spine = topology.find("sw-spine-001").unwrap();
    assert_eq!(spine.role(), Role::Spine);
    assert_eq!(spine.vendor(), "aruba");
    assert_eq!(spine.model(), "8325");

    let leaf_bmc = topology.find("sw-leaf-bmc-002").unwrap();
    assert_eq!(leaf_bmc.role(), Role::LeafBmc);
    assert_eq!(leaf_bmc.model(), "6300M");

    assert_eq!(topology.find("uan001").unwrap().role(), Role::ApplicationNode);
    assert_eq!(topology.find("x3000p0").unwrap().hardware().device_type, DeviceType::Pdu);
    assert_eq!(topology.find("cmm-x1000-000").unwrap().role(), Role::Cmm);
}

#[test]
fn test_every_row_yields_two_ports() {
    let catalog = RuleCatalog::load();
    let rows = tds_rows();
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &rows).unwrap();
    assert_eq!(topology.port_count(), rows.len() * 2);
}

#[test]
fn test_slotted_port_points_back() {
    let catalog = RuleCatalog::load();
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &tds_rows()).unwrap();

    let master = topology.find("ncn-m001").unwrap();
    let bmc = master
        .port(&PortLabel::new("1").unwrap(), Some("bmc"))
        .unwrap();
    assert_eq!(topology.name_of(bmc.destination_node), "sw-leaf-bmc-001");
    assert_eq!(bmc.destination_port.as_str(), "1");
    assert_eq!(bmc.destination_slot, None);

    let leaf = topology.find("sw-leaf-bmc-001").unwrap();
    let back = leaf.port(&PortLabel::new("1").unwrap(), None).unwrap();
    assert_eq!(back.destination_node, master.index());
    assert_eq!(back.destination_slot.as_deref(), Some("bmc"));
}

#[test]
fn test_port_conflict_is_fatal() {
    let catalog = RuleCatalog::load();
    let err = TopologyBuilder::build(&catalog, Architecture::Tds, &port_conflict_rows()).unwrap_err();
    match err {
        TopologyError::PortConflict {
            node,
            existing_peer,
            attempted_peer,
            ..
        } => {
            assert_eq!(node, "sw-spine-001 port 51");
            assert_eq!(existing_peer, "sw-spine-002 port 51");
            assert_eq!(attempted_peer, "sw-cdu-001 port 49");
        }
        other => panic!("expected a port conflict, got {other:?}"),
    }
}

#[test]
fn test_repeated_row_is_idempotent() {
    let catalog = RuleCatalog::load();
    let row = switch_link(1, "sw-spine-001", "1", "sw-spine-002", "1", "100");
    let reversed = switch_link(2, "sw-spine-002", "1", "sw-spine-001", "1", "");
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, [&row, &row, &reversed]).unwrap();
    assert_eq!(topology.port_count(), 2);
    let spine = topology.find("sw-spine-002").unwrap();
    assert_eq!(spine.ports()[0].speed.map(|s| s.as_gbps()), Some(100));
}

#[test]
fn test_malformed_row_names_origin() {
    let catalog = RuleCatalog::load();
    let rows = vec![
        switch_link(1, "sw-spine-001", "1", "sw-spine-002", "1", "100"),
        RawRow::new("NMN", 7, ["ncn-m001", "x3000", "u05", "bmc", "", "sw-leaf-bmc-001", "x3000", "u14", "", "1"]),
    ];
    let err = TopologyBuilder::build(&catalog, Architecture::Tds, &rows).unwrap_err();
    let TopologyError::MalformedInput(malformed) = err else {
        panic!("expected malformed input");
    };
    assert_eq!(malformed.origin.tab, "NMN");
    assert_eq!(malformed.origin.row, 7);
    assert_eq!(malformed.column.as_deref(), Some("source port"));
}

#[test]
fn test_unknown_name_is_kept_as_unknown() {
    let catalog = RuleCatalog::load();
    let rows = vec![cable("25G_10G", 1, ("mystery-box", "", "1"), ("sw-spine-001", "", "9"), "25")];
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &rows).unwrap();
    let node = topology.find("mystery-box").unwrap();
    assert_eq!(node.role(), Role::Unknown);
    assert_eq!(node.vendor(), "none");
    assert!(node.require_role().is_err());
}

#[test]
fn test_parent_column_sets_source_parent() {
    let catalog = RuleCatalog::load();
    let rows = vec![RawRow::new(
        "MTN_TDS",
        1,
        ["cec-x1000", "x1000", "u00", "", "1", "sw-cdu-001", "x3000", "u38", "", "2", "x1000", "1"],
    )];
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &rows).unwrap();
    assert_eq!(
        topology.find("cec-x1000").unwrap().location(),
        &Location::new("x1000", "u00").with_parent("x1000")
    );
    assert_eq!(topology.find("sw-cdu-001").unwrap().location().parent, None);
}

#[test]
fn test_parent_survives_mirror_row() {
    let catalog = RuleCatalog::load();
    let rows = vec![
        RawRow::new(
            "NMN",
            1,
            [
                "cn001", "x3000", "u17", "bmc", "1", "sw-leaf-bmc-001", "x3000", "u14", "", "10",
                "SubRack-001-CMC", "1",
            ],
        ),
        RawRow::new(
            "NMN",
            2,
            ["sw-leaf-bmc-001", "x3000", "u14", "", "10", "cn001", "x3000", "u17", "bmc", "1"],
        ),
    ];
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &rows).unwrap();
    assert_eq!(
        topology.find("cn001").unwrap().location(),
        &Location::new("x3000", "u17").with_parent("SubRack-001-CMC")
    );
    assert_eq!(topology.port_count(), 2);
}

#[test]
fn test_fixture_locations_are_stable() {
    let catalog = RuleCatalog::load();
    let topology = TopologyBuilder::build(&catalog, Architecture::Tds, &tds_rows()).unwrap();
    for node in topology.nodes() {
        assert_eq!(
            node.location(),
            &Location::new(RACK, elevation(node.common_name())),
            "{}",
            node.common_name()
        );
    }
}
