// Copyright (c) 2025 - Cowboy AI, Inc.
//! Node Role Domain Model
//!
//! Defines the closed set of functional roles a device can play in a
//! management-network fabric, and the explicit classification of common
//! names into those roles.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::error;

use super::DeviceType;

/// Functional role of a node in the fabric
///
/// `Unknown` is a real variant: a name that matches no classification
/// pattern keeps it until a consumer demands a concrete role, at which point
/// [`RoleResolutionError`](crate::errors::RoleResolutionError) is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    // Switches
    /// Spine switch
    Spine,
    /// River NCN leaf switch
    Leaf,
    /// BMC / out-of-band leaf switch
    LeafBmc,
    /// Mountain cabinet distribution switch
    Cdu,

    // Servers
    /// Management (master) NCN
    ManagementNode,
    /// Worker NCN
    WorkerNode,
    /// Storage NCN
    StorageNode,
    /// User access / login / gateway node
    ApplicationNode,
    /// River compute node
    ComputeNode,

    // Power and chassis management
    /// Power distribution unit
    Pdu,
    /// Chassis management module
    Cmm,
    /// Cabinet environmental controller
    Cec,

    /// Unclassified name
    Unknown,
}

/// Classification table, first match wins.
///
/// Order matters: `sw-leaf-bmc` must be tried before `sw-leaf`.
static CLASSIFIERS: LazyLock<Vec<(Regex, Role)>> = LazyLock::new(|| {
    [
        (r"^sw-(spine|100g)", Role::Spine),
        (r"^sw-(leaf-bmc|smn)", Role::LeafBmc),
        (r"^sw-(leaf|25g)", Role::Leaf),
        (r"^sw-cdu", Role::Cdu),
        (r"^(ncn-m|mn)\d", Role::ManagementNode),
        (r"^(ncn-w|wn)\d", Role::WorkerNode),
        (r"^(ncn-s|sn)\d", Role::StorageNode),
        (r"^(uan|login|gateway|lnet)", Role::ApplicationNode),
        (r"^(cn|nid)-?\d", Role::ComputeNode),
        (r"^(pdu|x\d+p\d+$)", Role::Pdu),
        (r"^cmm", Role::Cmm),
        (r"^cec", Role::Cec),
    ]
    .into_iter()
    .filter_map(|(pattern, role)| match Regex::new(pattern) {
        Ok(re) => Some((re, role)),
        Err(e) => {
            error!(pattern, error = %e, "invalid role classifier");
            None
        }
    })
    .collect()
});

impl Role {
    /// All concrete roles (everything except `Unknown`)
    pub const CONCRETE: [Role; 12] = [
        Role::Spine,
        Role::Leaf,
        Role::LeafBmc,
        Role::Cdu,
        Role::ManagementNode,
        Role::WorkerNode,
        Role::StorageNode,
        Role::ApplicationNode,
        Role::ComputeNode,
        Role::Pdu,
        Role::Cmm,
        Role::Cec,
    ];

    /// Classify a common name into a role
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Names that match no pattern classify as `Unknown`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cim_fabric_topology::domain::Role;
    ///
    /// assert_eq!(Role::classify("sw-leaf-bmc-001"), Role::LeafBmc);
    /// assert_eq!(Role::classify("sw-leaf-001"), Role::Leaf);
    /// assert_eq!(Role::classify("x3000p0"), Role::Pdu);
    /// assert_eq!(Role::classify("mystery-box"), Role::Unknown);
    /// ```
    pub fn classify(common_name: &str) -> Self {
        let name = common_name.trim().to_lowercase();
        CLASSIFIERS
            .iter()
            .find(|(pattern, _)| pattern.is_match(&name))
            .map(|(_, role)| *role)
            .unwrap_or(Role::Unknown)
    }

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spine => "spine",
            Self::Leaf => "leaf",
            Self::LeafBmc => "leaf-bmc",
            Self::Cdu => "cdu",
            Self::ManagementNode => "management-node",
            Self::WorkerNode => "worker-node",
            Self::StorageNode => "storage-node",
            Self::ApplicationNode => "application-node",
            Self::ComputeNode => "compute-node",
            Self::Pdu => "pdu",
            Self::Cmm => "cmm",
            Self::Cec => "cec",
            Self::Unknown => "unknown",
        }
    }

    /// Physical device type implied by the role
    pub fn device_type(&self) -> DeviceType {
        match self {
            Self::Spine | Self::Leaf | Self::LeafBmc | Self::Cdu => DeviceType::Switch,
            Self::Pdu => DeviceType::Pdu,
            Self::Cmm => DeviceType::Cmm,
            Self::Cec => DeviceType::Cec,
            Self::ManagementNode
            | Self::WorkerNode
            | Self::StorageNode
            | Self::ApplicationNode
            | Self::ComputeNode
            | Self::Unknown => DeviceType::Server,
        }
    }

    /// Check if this is a switch role
    pub fn is_switch(&self) -> bool {
        self.device_type() == DeviceType::Switch
    }

    /// Check if the role is concrete
    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Role::CONCRETE
            .iter()
            .chain(std::iter::once(&Role::Unknown))
            .find(|role| role.as_str() == wanted)
            .copied()
            .ok_or_else(|| format!("unrecognised role: {s}"))
    }
}
