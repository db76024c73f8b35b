// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fabric Domain Models
//!
//! Core domain concepts for management-network fabrics: node roles, hardware,
//! rack locations, ports and the node entity that owns them.
//!
//! # Value Objects
//!
//! - [`Role`] - closed role taxonomy with explicit name classification
//! - [`PortLabel`] - opaque, trimmed port label
//! - [`LinkSpeed`] - link speed in Gb/s
//! - [`NodeIndex`] - stable discovery index
//! - [`Location`] - rack, elevation and optional parent enclosure
//! - [`Hardware`] - vendor, model and device type
//!
//! # Entities
//!
//! - [`Node`] - a device and its ports in discovery order

pub mod hardware;
pub mod location;
pub mod node;
pub mod port;
pub mod role;

pub use hardware::{DeviceType, Hardware, HardwareProfile};
pub use location::Location;
pub use node::Node;
pub use port::{normalize_slot, LinkSpeed, NodeIndex, Port, PortLabel, PortRef};
pub use role::Role;
