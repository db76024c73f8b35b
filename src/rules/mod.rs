// Copyright (c) 2025 - Cowboy AI, Inc.
//! Architecture Rule Catalog
//!
//! Static, versioned wiring rules per architecture variant. The catalog is
//! loaded once into an immutable [`RuleCatalog`] value and handed to the
//! builder and validator explicitly.

pub mod catalog;
mod tables;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TopologyError;

pub use catalog::{LinkRule, RuleCatalog, VariantRules};

/// Version of the wiring rule tables
pub const CATALOG_VERSION: &str = "1.4.0";

/// Architecture variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// Reduced test/development system: NCNs cable straight to the spines
    Tds,
    /// Full-scale system with a river leaf tier
    Full,
    /// Legacy dual-vendor layout
    V1,
    /// Mountain-only subset: spines, CDUs and cabinet controllers
    Mountain,
}

impl Architecture {
    pub const ALL: [Architecture; 4] = [
        Architecture::Tds,
        Architecture::Full,
        Architecture::V1,
        Architecture::Mountain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tds => "tds",
            Self::Full => "full",
            Self::V1 => "v1",
            Self::Mountain => "mountain",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = TopologyError;

    /// Parse a variant name; unknown names are a fatal configuration error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Architecture::ALL
            .into_iter()
            .find(|arch| arch.as_str() == wanted)
            .ok_or_else(|| TopologyError::UnknownArchitecture(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("tds", Architecture::Tds)]
    #[test_case("FULL", Architecture::Full)]
    #[test_case(" v1 ", Architecture::V1)]
    #[test_case("mountain", Architecture::Mountain)]
    fn test_parse(name: &str, expected: Architecture) {
        assert_eq!(name.parse::<Architecture>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_variant_is_fatal() {
        let err = "river".parse::<Architecture>().unwrap_err();
        assert!(matches!(err, TopologyError::UnknownArchitecture(ref name) if name == "river"));
    }
}
