// Copyright (c) 2025 - Cowboy AI, Inc.
//! Validation findings
//!
//! Findings are values, not raised errors: the validator collects every one
//! of them so a single pass surfaces all wiring problems.

use std::fmt;
use thiserror::Error;

use crate::domain::{LinkSpeed, Role};
use crate::errors::RoleResolutionError;
use crate::rules::Architecture;

/// Why a link broke the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    /// No rule covers the role pair
    IllegalPair,
    /// The pair is legal but not at this speed
    UnsupportedSpeed {
        speed: LinkSpeed,
        permitted: &'static [u32],
    },
    /// More parallel links than the rule allows
    TooManyLinks { count: usize, max: usize },
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalPair => f.write_str("role pair is not permitted"),
            Self::UnsupportedSpeed { speed, permitted } => {
                let permitted: Vec<String> = permitted.iter().map(|s| format!("{s}G")).collect();
                write!(f, "speed {speed} is not permitted (allowed: {})", permitted.join(", "))
            }
            Self::TooManyLinks { count, max } => {
                write!(f, "{count} parallel links exceed the limit of {max}")
            }
        }
    }
}

/// A link that the architecture's rule catalog does not allow
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{architecture} architecture: {node} ({node_role}) to {peer} ({peer_role}): {reason}")]
pub struct ArchitecturalRuleViolation {
    pub architecture: Architecture,
    pub node: String,
    pub node_role: Role,
    pub peer: String,
    pub peer_role: Role,
    pub reason: ViolationReason,
}

/// A claimed port whose peer does not point back
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to connect {node} to {peer} bi-directionally ({node} {node_port} -> {peer} {peer_port} has no matching return port)")]
pub struct ReciprocityError {
    pub node: String,
    pub node_port: String,
    pub peer: String,
    pub peer_port: String,
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Finding {
    #[error(transparent)]
    RuleViolation(#[from] ArchitecturalRuleViolation),

    #[error(transparent)]
    Reciprocity(#[from] ReciprocityError),

    #[error(transparent)]
    RoleResolution(#[from] RoleResolutionError),
}

impl Finding {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RuleViolation(_) => "rule-violation",
            Self::Reciprocity(_) => "reciprocity",
            Self::RoleResolution(_) => "role-resolution",
        }
    }

    /// True if the finding mentions `common_name`
    pub fn involves(&self, common_name: &str) -> bool {
        match self {
            Self::RuleViolation(v) => v.node == common_name || v.peer == common_name,
            Self::Reciprocity(r) => r.node == common_name || r.peer == common_name,
            Self::RoleResolution(r) => r.node == common_name,
        }
    }
}
