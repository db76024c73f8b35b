// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canonical Topology Document
//!
//! The stable JSON form of a frozen topology consumed by downstream tooling:
//!
//! ```json
//! {
//!   "architecture": "tds",
//!   "source_reference": "system-shcd.xlsx",
//!   "tool_version": "0.1.0",
//!   "topology": [
//!     {
//!       "common_name": "sw-spine-001",
//!       "id": 0,
//!       "architecture": "spine",
//!       "model": "8325",
//!       "type": "switch",
//!       "vendor": "aruba",
//!       "ports": [
//!         {"port": "1", "slot": null, "speed": 100,
//!          "destination_node_id": 1, "destination_port": "1", "destination_slot": null}
//!       ],
//!       "location": {"rack": "x3000", "elevation": "u40"}
//!     }
//!   ]
//! }
//! ```
//!
//! Emitting a topology and rebuilding it from the document reproduces the
//! same graph: nodes stay in index order and ports in discovery order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::builder::Topology;
use crate::domain::{DeviceType, LinkSpeed, Location, Node, NodeIndex, Port, PortLabel, Role};
use crate::errors::{TopologyError, TopologyResult};
use crate::rules::Architecture;

/// Version stamped into emitted documents
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical topology document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalDocument {
    pub architecture: Architecture,
    pub source_reference: String,
    pub tool_version: String,
    pub topology: Vec<CanonicalNode>,
}

/// A node as written in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalNode {
    pub common_name: String,
    pub id: NodeIndex,
    #[serde(rename = "architecture")]
    pub role: Role,
    pub model: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub vendor: String,
    #[serde(default)]
    pub ports: Vec<CanonicalPort>,
    #[serde(default)]
    pub location: Location,
}

/// A port as written in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalPort {
    pub port: PortLabel,
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub speed: Option<LinkSpeed>,
    pub destination_node_id: NodeIndex,
    pub destination_port: PortLabel,
    #[serde(default)]
    pub destination_slot: Option<String>,
}

/// Everything but the architecture, which is checked by hand so that its
/// absence gets a descriptive error.
#[derive(Deserialize)]
struct DocumentBody {
    #[serde(default)]
    source_reference: String,
    #[serde(default)]
    tool_version: String,
    topology: Vec<CanonicalNode>,
}

impl CanonicalDocument {
    /// Render a frozen topology
    pub fn from_topology(topology: &Topology, source_reference: impl Into<String>) -> Self {
        Self {
            architecture: topology.architecture(),
            source_reference: source_reference.into(),
            tool_version: TOOL_VERSION.to_string(),
            topology: topology.nodes().iter().map(CanonicalNode::from).collect(),
        }
    }

    /// Parse document text
    ///
    /// # Errors
    /// - [`TopologyError::MissingArchitecture`] if the `architecture` key is absent
    /// - [`TopologyError::UnknownArchitecture`] if it names no known variant
    /// - [`TopologyError::Deserialization`] for any other shape problem
    pub fn parse(text: &str) -> TopologyResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| TopologyError::Deserialization(e.to_string()))?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON value
    pub fn from_value(value: Value) -> TopologyResult<Self> {
        let Value::Object(ref object) = value else {
            return Err(TopologyError::Deserialization(
                "canonical document must be a JSON object".to_string(),
            ));
        };
        let architecture = match object.get("architecture") {
            None | Some(Value::Null) => return Err(TopologyError::MissingArchitecture),
            Some(Value::String(name)) => name.parse::<Architecture>()?,
            Some(other) => {
                return Err(TopologyError::Deserialization(format!(
                    "architecture must be a string, found {other}"
                )))
            }
        };
        let body: DocumentBody =
            serde_json::from_value(value).map_err(|e| TopologyError::Deserialization(e.to_string()))?;
        Ok(Self {
            architecture,
            source_reference: body.source_reference,
            tool_version: body.tool_version,
            topology: body.topology,
        })
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> TopologyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> TopologyResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<&Node> for CanonicalNode {
    fn from(node: &Node) -> Self {
        Self {
            common_name: node.common_name().to_string(),
            id: node.index(),
            role: node.role(),
            model: node.model().to_string(),
            device_type: node.hardware().device_type,
            vendor: node.vendor().to_string(),
            ports: node.ports().iter().map(CanonicalPort::from).collect(),
            location: node.location().clone(),
        }
    }
}

impl From<&Port> for CanonicalPort {
    fn from(port: &Port) -> Self {
        Self {
            port: port.port.clone(),
            slot: port.slot.clone(),
            speed: port.speed,
            destination_node_id: port.destination_node,
            destination_port: port.destination_port.clone(),
            destination_slot: port.destination_slot.clone(),
        }
    }
}
