// Copyright (c) 2025 - Cowboy AI, Inc.
//! Port Value Objects
//!
//! Port labels are opaque: `"14"` and `"j3"` are both legitimate and are only
//! ever compared as strings. Nothing in the crate assumes a numeric ordering
//! across the ports of a node.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable discovery index of a node within one build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque port label
///
/// Surrounding whitespace is trimmed on construction; the label is never
/// coerced to a number. Documents written by older tooling carry numeric
/// labels, so deserialization accepts JSON integers as well as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PortLabel(String);

impl PortLabel {
    /// Build a label from raw cell text, `None` if blank
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PortLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(u64),
        }

        let text = match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text,
            Repr::Number(number) => number.to_string(),
        };
        PortLabel::new(&text).ok_or_else(|| serde::de::Error::custom("port label is blank"))
    }
}

/// Normalize a slot cell: blank or a bare `-` placeholder means "no slot"
pub fn normalize_slot(raw: &str) -> Option<String> {
    match raw.trim() {
        "" | "-" => None,
        slot => Some(slot.to_string()),
    }
}

/// Link speed in gigabits per second
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSpeed(u32);

impl LinkSpeed {
    pub const fn gbps(value: u32) -> Self {
        Self(value)
    }

    pub const fn as_gbps(&self) -> u32 {
        self.0
    }

    /// Parse speed cell text such as `25`, `25G`, `100gb` or `10Gbps`
    ///
    /// Blank text is `Ok(None)`; anything else that is not a positive whole
    /// number of gigabits is an error carrying the offending text.
    pub fn parse(raw: &str) -> Result<Option<Self>, String> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return Ok(None);
        }
        let digits = ["gbps", "gb", "g"]
            .iter()
            .find_map(|suffix| text.strip_suffix(suffix))
            .unwrap_or(&text)
            .trim();
        match digits.parse::<u32>() {
            Ok(value) if value > 0 => Ok(Some(Self(value))),
            _ => Err(raw.trim().to_string()),
        }
    }
}

impl fmt::Display for LinkSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}G", self.0)
    }
}

/// A physical port address: (node, port, slot)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortRef {
    pub node: NodeIndex,
    pub port: PortLabel,
    pub slot: Option<String>,
}

impl PortRef {
    pub fn new(node: NodeIndex, port: PortLabel, slot: Option<String>) -> Self {
        Self { node, port, slot }
    }
}

impl fmt::Display for PortRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(slot) => write!(f, "node {} slot {} port {}", self.node, slot, self.port),
            None => write!(f, "node {} port {}", self.node, self.port),
        }
    }
}

/// One claimed port on a node, pointing at its peer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Port {
    pub port: PortLabel,
    pub slot: Option<String>,
    pub speed: Option<LinkSpeed>,
    pub destination_node: NodeIndex,
    pub destination_port: PortLabel,
    pub destination_slot: Option<String>,
}

impl Port {
    /// Address of this port given the node that owns it
    pub fn local(&self, owner: NodeIndex) -> PortRef {
        PortRef::new(owner, self.port.clone(), self.slot.clone())
    }

    /// Address of the peer port
    pub fn peer(&self) -> PortRef {
        PortRef::new(
            self.destination_node,
            self.destination_port.clone(),
            self.destination_slot.clone(),
        )
    }

    /// True when this port sits at `(port, slot)`
    pub fn is_at(&self, port: &PortLabel, slot: Option<&str>) -> bool {
        &self.port == port && self.slot.as_deref() == slot
    }

    /// True when this port points at `peer`
    pub fn points_at(&self, peer: &PortRef) -> bool {
        self.destination_node == peer.node
            && self.destination_port == peer.port
            && self.destination_slot == peer.slot
    }
}
