// Copyright (c) 2025 - Cowboy AI, Inc.
//! Node Entity
//!
//! A node is created the first time a row names it and accumulates ports as
//! later rows reference it. Mutation is reserved to the registry and builder;
//! once a [`Topology`](crate::builder::Topology) is frozen, nodes are only
//! reachable through shared references.

use super::{Hardware, Location, NodeIndex, Port, PortLabel, Role};
use crate::errors::RoleResolutionError;

/// A device in the fabric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    index: NodeIndex,
    common_name: String,
    role: Role,
    hardware: Hardware,
    location: Location,
    ports: Vec<Port>,
}

impl Node {
    pub(crate) fn new(index: NodeIndex, common_name: impl Into<String>) -> Self {
        Self {
            index,
            common_name: common_name.into(),
            role: Role::Unknown,
            hardware: Hardware::unresolved(),
            location: Location::default(),
            ports: Vec::new(),
        }
    }

    pub fn index(&self) -> NodeIndex {
        self.index
    }

    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The node's role, or an error if it was never classified
    pub fn require_role(&self) -> Result<Role, RoleResolutionError> {
        if self.role.is_known() {
            Ok(self.role)
        } else {
            Err(RoleResolutionError {
                node: self.common_name.clone(),
                index: self.index,
            })
        }
    }

    pub fn hardware(&self) -> &Hardware {
        &self.hardware
    }

    pub fn vendor(&self) -> &str {
        &self.hardware.vendor
    }

    pub fn model(&self) -> &str {
        &self.hardware.model
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Ports in discovery order
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Look up the port at `(port, slot)`
    pub fn port(&self, port: &PortLabel, slot: Option<&str>) -> Option<&Port> {
        self.ports.iter().find(|p| p.is_at(port, slot))
    }

    /// Distinct neighbor indices in port discovery order
    ///
    /// The order is load-bearing: configuration generators allocate
    /// link-aggregation groups by walking this list.
    pub fn neighbors(&self) -> Vec<NodeIndex> {
        let mut seen = Vec::new();
        for port in &self.ports {
            if !seen.contains(&port.destination_node) {
                seen.push(port.destination_node);
            }
        }
        seen
    }

    pub(crate) fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub(crate) fn set_hardware(&mut self, hardware: Hardware) {
        self.hardware = hardware;
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub(crate) fn port_mut(&mut self, port: &PortLabel, slot: Option<&str>) -> Option<&mut Port> {
        self.ports.iter_mut().find(|p| p.is_at(port, slot))
    }

    pub(crate) fn push_port(&mut self, port: Port) {
        self.ports.push(port);
    }
}
