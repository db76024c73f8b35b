// Copyright (c) 2025 - Cowboy AI, Inc.
//! Device Type and Hardware Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical device type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Switch,
    Server,
    Pdu,
    Cmm,
    Cec,
}

impl DeviceType {
    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Server => "server",
            Self::Pdu => "pdu",
            Self::Cmm => "cmm",
            Self::Cec => "cec",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static hardware description as stored in the rule catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareProfile {
    pub vendor: &'static str,
    pub model: &'static str,
    pub device_type: DeviceType,
}

/// Hardware stamped on a node
///
/// Nodes built from rows receive this from the catalog; nodes rebuilt from a
/// canonical document carry whatever the document says.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hardware {
    pub vendor: String,
    pub model: String,
    pub device_type: DeviceType,
}

impl Hardware {
    /// Placeholder hardware for a node whose role is not yet known
    pub fn unresolved() -> Self {
        Self {
            vendor: "none".to_string(),
            model: "none".to_string(),
            device_type: DeviceType::Server,
        }
    }
}

impl From<HardwareProfile> for Hardware {
    fn from(profile: HardwareProfile) -> Self {
        Self {
            vendor: profile.vendor.to_string(),
            model: profile.model.to_string(),
            device_type: profile.device_type,
        }
    }
}
