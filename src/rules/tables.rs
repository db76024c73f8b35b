// Copyright (c) 2025 - Cowboy AI, Inc.
//! Static wiring tables
//!
//! Speeds are in Gb/s. `max_links` bounds parallel cables between one pair of
//! nodes. Expected connection counts are `(min, max)` distinct neighbors; a
//! role absent from a variant's expectation table expects none.

use super::catalog::LinkRule;
use crate::domain::{DeviceType, HardwareProfile, Role};

const ISL: &[u32] = &[100];
const SWITCH_UPLINK: &[u32] = &[10, 25];
const LEGACY_UPLINK: &[u32] = &[10];
const NCN_UPLINK: &[u32] = &[25, 40];
const BMC: &[u32] = &[1];
const CHASSIS: &[u32] = &[1, 10];

const fn link(a: Role, b: Role, speeds: &'static [u32], max_links: usize) -> LinkRule {
    LinkRule {
        a,
        b,
        speeds,
        max_links,
    }
}

const fn hw(vendor: &'static str, model: &'static str, device_type: DeviceType) -> HardwareProfile {
    HardwareProfile {
        vendor,
        model,
        device_type,
    }
}

const UNBOUNDED: usize = usize::MAX;

pub(super) const TDS_LINKS: &[LinkRule] = &[
    link(Role::Spine, Role::Spine, ISL, 2),
    link(Role::Spine, Role::LeafBmc, SWITCH_UPLINK, 2),
    link(Role::Spine, Role::Cdu, ISL, 2),
    link(Role::Spine, Role::ManagementNode, NCN_UPLINK, 2),
    link(Role::Spine, Role::WorkerNode, NCN_UPLINK, 2),
    link(Role::Spine, Role::StorageNode, NCN_UPLINK, 2),
    link(Role::Spine, Role::ApplicationNode, NCN_UPLINK, 2),
    link(Role::LeafBmc, Role::ManagementNode, BMC, 1),
    link(Role::LeafBmc, Role::WorkerNode, BMC, 1),
    link(Role::LeafBmc, Role::StorageNode, BMC, 1),
    link(Role::LeafBmc, Role::ApplicationNode, BMC, 1),
    link(Role::LeafBmc, Role::ComputeNode, BMC, 1),
    link(Role::LeafBmc, Role::Pdu, BMC, 1),
    link(Role::Cdu, Role::Cdu, ISL, 2),
    link(Role::Cdu, Role::Cmm, CHASSIS, 1),
    link(Role::Cdu, Role::Cec, BMC, 1),
];

pub(super) const FULL_LINKS: &[LinkRule] = &[
    link(Role::Spine, Role::Spine, ISL, 2),
    link(Role::Spine, Role::Leaf, ISL, 2),
    link(Role::Spine, Role::Cdu, ISL, 2),
    link(Role::Leaf, Role::Leaf, ISL, 2),
    link(Role::Leaf, Role::LeafBmc, SWITCH_UPLINK, 2),
    link(Role::Leaf, Role::ManagementNode, NCN_UPLINK, 2),
    link(Role::Leaf, Role::WorkerNode, NCN_UPLINK, 2),
    link(Role::Leaf, Role::StorageNode, NCN_UPLINK, 2),
    link(Role::Leaf, Role::ApplicationNode, NCN_UPLINK, 2),
    link(Role::LeafBmc, Role::ManagementNode, BMC, 1),
    link(Role::LeafBmc, Role::WorkerNode, BMC, 1),
    link(Role::LeafBmc, Role::StorageNode, BMC, 1),
    link(Role::LeafBmc, Role::ApplicationNode, BMC, 1),
    link(Role::LeafBmc, Role::ComputeNode, BMC, 1),
    link(Role::LeafBmc, Role::Pdu, BMC, 1),
    link(Role::Cdu, Role::Cdu, ISL, 2),
    link(Role::Cdu, Role::Cmm, CHASSIS, 1),
    link(Role::Cdu, Role::Cec, BMC, 1),
];

pub(super) const V1_LINKS: &[LinkRule] = &[
    link(Role::Spine, Role::Spine, ISL, 2),
    link(Role::Spine, Role::Leaf, ISL, 2),
    link(Role::Spine, Role::LeafBmc, LEGACY_UPLINK, 2),
    link(Role::Spine, Role::Cdu, ISL, 2),
    link(Role::Spine, Role::ManagementNode, NCN_UPLINK, 2),
    link(Role::Spine, Role::WorkerNode, NCN_UPLINK, 2),
    link(Role::Spine, Role::StorageNode, NCN_UPLINK, 2),
    link(Role::Leaf, Role::Leaf, ISL, 2),
    link(Role::Leaf, Role::ApplicationNode, NCN_UPLINK, 2),
    link(Role::LeafBmc, Role::ManagementNode, BMC, 1),
    link(Role::LeafBmc, Role::WorkerNode, BMC, 1),
    link(Role::LeafBmc, Role::StorageNode, BMC, 1),
    link(Role::LeafBmc, Role::ApplicationNode, BMC, 1),
    link(Role::LeafBmc, Role::ComputeNode, BMC, 1),
    link(Role::LeafBmc, Role::Pdu, BMC, 1),
    link(Role::Cdu, Role::Cdu, ISL, 2),
    link(Role::Cdu, Role::Cmm, CHASSIS, 1),
    link(Role::Cdu, Role::Cec, BMC, 1),
];

pub(super) const MOUNTAIN_LINKS: &[LinkRule] = &[
    link(Role::Spine, Role::Spine, ISL, 2),
    link(Role::Spine, Role::Cdu, ISL, 2),
    link(Role::Cdu, Role::Cdu, ISL, 2),
    link(Role::Cdu, Role::Cmm, CHASSIS, 1),
    link(Role::Cdu, Role::Cec, BMC, 1),
];

pub(super) const TDS_EXPECTED: &[(Role, usize, usize)] = &[
    (Role::Spine, 1, UNBOUNDED),
    (Role::LeafBmc, 1, UNBOUNDED),
    (Role::Cdu, 1, UNBOUNDED),
    (Role::ManagementNode, 1, 3),
    (Role::WorkerNode, 1, 3),
    (Role::StorageNode, 1, 3),
    (Role::ApplicationNode, 1, 3),
    (Role::ComputeNode, 1, 1),
    (Role::Pdu, 1, 1),
    (Role::Cmm, 1, 2),
    (Role::Cec, 1, 1),
];

pub(super) const FULL_EXPECTED: &[(Role, usize, usize)] = &[
    (Role::Spine, 1, UNBOUNDED),
    (Role::Leaf, 1, UNBOUNDED),
    (Role::LeafBmc, 1, UNBOUNDED),
    (Role::Cdu, 1, UNBOUNDED),
    (Role::ManagementNode, 1, 3),
    (Role::WorkerNode, 1, 3),
    (Role::StorageNode, 1, 3),
    (Role::ApplicationNode, 1, 3),
    (Role::ComputeNode, 1, 1),
    (Role::Pdu, 1, 1),
    (Role::Cmm, 1, 2),
    (Role::Cec, 1, 1),
];

pub(super) const MOUNTAIN_EXPECTED: &[(Role, usize, usize)] = &[
    (Role::Spine, 1, UNBOUNDED),
    (Role::Cdu, 1, UNBOUNDED),
    (Role::Cmm, 1, 2),
    (Role::Cec, 1, 1),
];

pub(super) const TDS_HARDWARE: &[(Role, HardwareProfile)] = &[
    (Role::Spine, hw("aruba", "8325", DeviceType::Switch)),
    (Role::LeafBmc, hw("aruba", "6300M", DeviceType::Switch)),
    (Role::Cdu, hw("aruba", "8360", DeviceType::Switch)),
];

pub(super) const FULL_HARDWARE: &[(Role, HardwareProfile)] = &[
    (Role::Spine, hw("aruba", "8325", DeviceType::Switch)),
    (Role::Leaf, hw("aruba", "8325", DeviceType::Switch)),
    (Role::LeafBmc, hw("aruba", "6300M", DeviceType::Switch)),
    (Role::Cdu, hw("aruba", "8360", DeviceType::Switch)),
];

pub(super) const V1_HARDWARE: &[(Role, HardwareProfile)] = &[
    (Role::Spine, hw("mellanox", "sn2700", DeviceType::Switch)),
    (Role::Leaf, hw("aruba", "8325", DeviceType::Switch)),
    (Role::LeafBmc, hw("dell", "s3048-on", DeviceType::Switch)),
    (Role::Cdu, hw("dell", "s4148t-on", DeviceType::Switch)),
];

pub(super) const MOUNTAIN_HARDWARE: &[(Role, HardwareProfile)] = &[
    (Role::Spine, hw("aruba", "8325", DeviceType::Switch)),
    (Role::Cdu, hw("aruba", "8360", DeviceType::Switch)),
];

/// Hardware shared by every variant
pub(super) const COMMON_HARDWARE: &[(Role, HardwareProfile)] = &[
    (Role::ManagementNode, hw("hpe", "server", DeviceType::Server)),
    (Role::WorkerNode, hw("hpe", "server", DeviceType::Server)),
    (Role::StorageNode, hw("hpe", "server", DeviceType::Server)),
    (Role::ApplicationNode, hw("hpe", "server", DeviceType::Server)),
    (Role::ComputeNode, hw("hpe", "server", DeviceType::Server)),
    (Role::Pdu, hw("hpe", "pdu", DeviceType::Pdu)),
    (Role::Cmm, hw("hpe", "cmm", DeviceType::Cmm)),
    (Role::Cec, hw("hpe", "cec", DeviceType::Cec)),
];
