// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for topology build operations
//!
//! Build-time errors are fatal and short-circuit the pipeline. Validation
//! findings are never raised; see [`crate::validate::Finding`].

use std::fmt;
use thiserror::Error;

use crate::domain::NodeIndex;
use crate::ledger::PortConflictError;

/// Where a row came from: workbook tab and row number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowOrigin {
    pub tab: String,
    pub row: usize,
}

impl RowOrigin {
    pub fn new(tab: impl Into<String>, row: usize) -> Self {
        Self {
            tab: tab.into(),
            row,
        }
    }
}

impl fmt::Display for RowOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab '{}' row {}", self.tab, self.row)
    }
}

/// A structurally broken input row or document entry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed input in {origin}{}: {reason}", column_suffix(.column))]
pub struct MalformedInputError {
    pub origin: RowOrigin,
    pub column: Option<String>,
    pub reason: String,
}

fn column_suffix(column: &Option<String>) -> String {
    column
        .as_ref()
        .map(|c| format!(", column '{c}'"))
        .unwrap_or_default()
}

impl MalformedInputError {
    pub fn new(origin: RowOrigin, reason: impl Into<String>) -> Self {
        Self {
            origin,
            column: None,
            reason: reason.into(),
        }
    }

    pub fn in_column(origin: RowOrigin, column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            origin,
            column: Some(column.into()),
            reason: reason.into(),
        }
    }
}

/// A consumer required a concrete role for a node still tagged `unknown`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve a role for node {node} (index {index}): name matches no known pattern")]
pub struct RoleResolutionError {
    pub node: String,
    pub index: NodeIndex,
}

/// Fatal errors that stop a build
#[derive(Debug, Error)]
pub enum TopologyError {
    /// A row or document entry is missing a required field or is otherwise unusable
    #[error(transparent)]
    MalformedInput(#[from] MalformedInputError),

    /// A physical port was claimed by two different links
    #[error("port conflict on {node}: already connected to {existing_peer}, cannot also connect to {attempted_peer} ({conflict})")]
    PortConflict {
        node: String,
        existing_peer: String,
        attempted_peer: String,
        #[source]
        conflict: PortConflictError,
    },

    /// Architecture variant name not present in the rule catalog
    #[error("unknown architecture variant '{0}' (expected one of: tds, full, v1, mountain)")]
    UnknownArchitecture(String),

    /// Canonical document has no `architecture` key
    #[error("architecture key missing from document")]
    MissingArchitecture,

    /// Configured architecture disagrees with the document's
    #[error("configured architecture '{configured}' does not match document architecture '{document}'")]
    ArchitectureMismatch { configured: String, document: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Result type for topology build operations
pub type TopologyResult<T> = Result<T, TopologyError>;

impl From<serde_json::Error> for TopologyError {
    fn from(err: serde_json::Error) -> Self {
        TopologyError::Serialization(err.to_string())
    }
}
