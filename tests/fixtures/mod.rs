// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-fabric-topology
//!
//! Deterministic cabling rows for integration tests. Every fixture sits in
//! rack x3000 and each node keeps one elevation, so node locations never
//! change between rows.

#![allow(dead_code)]

use cim_fabric_topology::RawRow;

pub const RACK: &str = "x3000";

/// Node names in the discovery order of [`tds_rows`]
pub const TDS_NODES: [&str; 18] = [
    "sw-spine-001",
    "sw-spine-002",
    "sw-leaf-bmc-001",
    "sw-leaf-bmc-002",
    "sw-cdu-001",
    "sw-cdu-002",
    "ncn-m001",
    "ncn-m002",
    "ncn-m003",
    "ncn-w001",
    "ncn-w002",
    "ncn-w003",
    "ncn-s001",
    "ncn-s002",
    "ncn-s003",
    "uan001",
    "x3000p0",
    "cmm-x1000-000",
];

/// Servers cabled to both spines and to the first BMC leaf
const SERVERS: [&str; 10] = [
    "ncn-m001", "ncn-m002", "ncn-m003", "ncn-w001", "ncn-w002", "ncn-w003", "ncn-s001", "ncn-s002",
    "ncn-s003", "uan001",
];

/// Fixed elevation per node: `u01` for the first TDS node onwards, `u00`
/// for names outside the TDS system
pub fn elevation(name: &str) -> String {
    let position = TDS_NODES.iter().position(|n| *n == name).map_or(0, |i| i + 1);
    format!("u{position:02}")
}

/// One row: `(name, slot, port)` cabled to `(name, slot, port)` at `speed`
pub fn cable(
    tab: &str,
    row: usize,
    source: (&str, &str, &str),
    destination: (&str, &str, &str),
    speed: &str,
) -> RawRow {
    let (src, src_slot, src_port) = source;
    let (dst, dst_slot, dst_port) = destination;
    let (src_elevation, dst_elevation) = (elevation(src), elevation(dst));
    RawRow::new(
        tab,
        row,
        [
            src,
            RACK,
            src_elevation.as_str(),
            src_slot,
            src_port,
            dst,
            RACK,
            dst_elevation.as_str(),
            dst_slot,
            dst_port,
            "",
            speed,
        ],
    )
}

/// Slotless row on the 25G_10G tab
pub fn switch_link(row: usize, src: &str, src_port: &str, dst: &str, dst_port: &str, speed: &str) -> RawRow {
    cable("25G_10G", row, (src, "", src_port), (dst, "", dst_port), speed)
}

/// A clean 18-node TDS system: two spines, two BMC leaves, two CDUs, nine
/// NCNs, one UAN, one PDU and one chassis
pub fn tds_rows() -> Vec<RawRow> {
    let mut rows = vec![
        switch_link(1, "sw-spine-001", "1", "sw-spine-002", "1", "100"),
        switch_link(2, "sw-spine-001", "2", "sw-spine-002", "2", "100"),
        switch_link(3, "sw-spine-002", "48", "sw-leaf-bmc-001", "48", "25"),
        switch_link(4, "sw-spine-002", "47", "sw-leaf-bmc-002", "48", "25"),
        switch_link(5, "sw-spine-001", "47", "sw-leaf-bmc-002", "47", "25"),
        switch_link(6, "sw-spine-001", "48", "sw-leaf-bmc-001", "47", "25"),
        switch_link(7, "sw-spine-002", "49", "sw-cdu-001", "49", "100"),
        switch_link(8, "sw-spine-002", "50", "sw-cdu-002", "49", "100"),
        switch_link(9, "sw-spine-001", "50", "sw-cdu-002", "50", "100"),
        switch_link(10, "sw-spine-001", "49", "sw-cdu-001", "50", "100"),
        switch_link(11, "sw-cdu-001", "51", "sw-cdu-002", "51", "100"),
    ];

    let mut next = rows.len() + 1;
    for (i, server) in SERVERS.iter().enumerate() {
        let spine_port = (3 + i).to_string();
        rows.push(cable(
            "25G_10G",
            next,
            (server, "ocp", "1"),
            ("sw-spine-001", "", &spine_port),
            "25",
        ));
        rows.push(cable(
            "25G_10G",
            next + 1,
            (server, "ocp", "2"),
            ("sw-spine-002", "", &spine_port),
            "25",
        ));
        next += 2;
    }

    for (i, server) in SERVERS.iter().enumerate() {
        let leaf_port = (1 + i).to_string();
        rows.push(cable("NMN", i + 1, (server, "bmc", "1"), ("sw-leaf-bmc-001", "", &leaf_port), "1"));
    }
    rows.push(cable(
        "NMN",
        SERVERS.len() + 1,
        ("x3000p0", "", "i0"),
        ("sw-leaf-bmc-002", "", "1"),
        "1",
    ));

    rows.push(cable("MTN_TDS", 1, ("cmm-x1000-000", "", "1"), ("sw-cdu-001", "", "1"), "1"));
    rows.push(cable("MTN_TDS", 2, ("cmm-x1000-000", "", "2"), ("sw-cdu-002", "", "1"), "1"));
    rows
}

/// A spine cabled straight to a compute node, which TDS forbids
pub fn spine_to_compute_rows() -> Vec<RawRow> {
    vec![
        switch_link(1, "sw-spine-001", "1", "sw-spine-002", "1", "100"),
        cable("25G_10G", 2, ("sw-spine-001", "", "5"), ("cn001", "bmc", "1"), "1"),
    ]
}

/// Port 51 of the first spine claimed twice with different peers
pub fn port_conflict_rows() -> Vec<RawRow> {
    vec![
        switch_link(1, "sw-spine-001", "51", "sw-spine-002", "51", "100"),
        switch_link(2, "sw-spine-001", "51", "sw-cdu-001", "49", "100"),
    ]
}
