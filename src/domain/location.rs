// Copyright (c) 2025 - Cowboy AI, Inc.
//! Physical Location Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rack position of a device
///
/// `parent` names the sub-enclosure (chassis) a device sits in when it is
/// not mounted directly in the rack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub rack: String,
    pub elevation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Location {
    pub fn new(rack: impl Into<String>, elevation: impl Into<String>) -> Self {
        Self {
            rack: rack.into(),
            elevation: elevation.into(),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// True until a row has supplied rack and elevation
    pub fn is_unset(&self) -> bool {
        self.rack.is_empty() && self.elevation.is_empty()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "{}/{} in {}", self.rack, self.elevation, parent),
            None => write!(f, "{}/{}", self.rack, self.elevation),
        }
    }
}
