// Copyright (c) 2025 - Cowboy AI, Inc.
//! Rule catalog lookups
//!
//! All lookups are pure functions of `(variant, roles, speed)`. Rules are
//! symmetric: a rule for `(a, b)` also covers `(b, a)`.

use std::ops::RangeInclusive;

use super::{tables, Architecture, CATALOG_VERSION};
use crate::domain::{HardwareProfile, LinkSpeed, Role};
use crate::errors::TopologyResult;

/// One legal role-to-role wiring pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRule {
    pub a: Role,
    pub b: Role,
    /// Permitted speeds in Gb/s
    pub speeds: &'static [u32],
    /// Maximum parallel links between one pair of nodes
    pub max_links: usize,
}

impl LinkRule {
    /// True if the rule covers the unordered pair `{x, y}`
    pub fn covers(&self, x: Role, y: Role) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// An unspecified speed is always permitted
    pub fn permits_speed(&self, speed: Option<LinkSpeed>) -> bool {
        speed.map_or(true, |s| self.speeds.contains(&s.as_gbps()))
    }
}

/// The rule set for a single architecture variant
#[derive(Debug, Clone)]
pub struct VariantRules {
    architecture: Architecture,
    links: &'static [LinkRule],
    expected: &'static [(Role, usize, usize)],
    hardware: &'static [(Role, HardwareProfile)],
}

impl VariantRules {
    pub fn architecture(&self) -> Architecture {
        self.architecture
    }

    pub fn links(&self) -> &'static [LinkRule] {
        self.links
    }

    pub fn rule(&self, a: Role, b: Role) -> Option<&'static LinkRule> {
        self.links.iter().find(|rule| rule.covers(a, b))
    }

    pub fn expected_count(&self, role: Role) -> RangeInclusive<usize> {
        self.expected
            .iter()
            .find(|(r, _, _)| *r == role)
            .map_or(0..=0, |(_, min, max)| *min..=*max)
    }

    pub fn hardware(&self, role: Role) -> HardwareProfile {
        self.hardware
            .iter()
            .chain(tables::COMMON_HARDWARE.iter())
            .find(|(r, _)| *r == role)
            .map(|(_, profile)| *profile)
            .unwrap_or(HardwareProfile {
                vendor: "none",
                model: "none",
                device_type: role.device_type(),
            })
    }
}

/// Immutable wiring rule catalog covering every architecture variant
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    version: &'static str,
    tds: VariantRules,
    full: VariantRules,
    v1: VariantRules,
    mountain: VariantRules,
}

impl RuleCatalog {
    /// Load the built-in tables
    pub fn load() -> Self {
        Self {
            version: CATALOG_VERSION,
            tds: VariantRules {
                architecture: Architecture::Tds,
                links: tables::TDS_LINKS,
                expected: tables::TDS_EXPECTED,
                hardware: tables::TDS_HARDWARE,
            },
            full: VariantRules {
                architecture: Architecture::Full,
                links: tables::FULL_LINKS,
                expected: tables::FULL_EXPECTED,
                hardware: tables::FULL_HARDWARE,
            },
            v1: VariantRules {
                architecture: Architecture::V1,
                links: tables::V1_LINKS,
                expected: tables::FULL_EXPECTED,
                hardware: tables::V1_HARDWARE,
            },
            mountain: VariantRules {
                architecture: Architecture::Mountain,
                links: tables::MOUNTAIN_LINKS,
                expected: tables::MOUNTAIN_EXPECTED,
                hardware: tables::MOUNTAIN_HARDWARE,
            },
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn variant(&self, architecture: Architecture) -> &VariantRules {
        match architecture {
            Architecture::Tds => &self.tds,
            Architecture::Full => &self.full,
            Architecture::V1 => &self.v1,
            Architecture::Mountain => &self.mountain,
        }
    }

    /// Look up a variant by name; an unknown name is fatal
    pub fn variant_named(&self, name: &str) -> TopologyResult<&VariantRules> {
        let architecture: Architecture = name.parse()?;
        Ok(self.variant(architecture))
    }

    /// Is a link between `a` and `b` at `speed` legal under `architecture`?
    pub fn allowed(
        &self,
        architecture: Architecture,
        a: Role,
        b: Role,
        speed: Option<LinkSpeed>,
    ) -> bool {
        self.variant(architecture)
            .rule(a, b)
            .is_some_and(|rule| rule.permits_speed(speed))
    }

    /// Parallel-link ceiling for the pair, `None` if the pair is illegal
    pub fn max_links(&self, architecture: Architecture, a: Role, b: Role) -> Option<usize> {
        self.variant(architecture).rule(a, b).map(|rule| rule.max_links)
    }

    /// Expected number of distinct neighbors for a node of `role`
    pub fn expected_count(&self, architecture: Architecture, role: Role) -> RangeInclusive<usize> {
        self.variant(architecture).expected_count(role)
    }

    /// Hardware stamped on nodes of `role`
    pub fn hardware(&self, architecture: Architecture, role: Role) -> HardwareProfile {
        self.variant(architecture).hardware(role)
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeviceType;
    use crate::errors::TopologyError;
    use test_case::test_case;

    fn speed(gbps: u32) -> Option<LinkSpeed> {
        Some(LinkSpeed::gbps(gbps))
    }

    #[test_case(Architecture::Tds, Role::Spine, Role::ManagementNode, speed(25), true)]
    #[test_case(Architecture::Tds, Role::ManagementNode, Role::Spine, speed(25), true ; "symmetric")]
    #[test_case(Architecture::Tds, Role::Spine, Role::ComputeNode, None, false)]
    #[test_case(Architecture::Tds, Role::Spine, Role::Leaf, speed(100), false)]
    #[test_case(Architecture::Tds, Role::LeafBmc, Role::Pdu, speed(1), true)]
    #[test_case(Architecture::Tds, Role::LeafBmc, Role::Pdu, speed(25), false ; "wrong speed")]
    #[test_case(Architecture::Full, Role::Spine, Role::ManagementNode, speed(25), false)]
    #[test_case(Architecture::Full, Role::Leaf, Role::WorkerNode, None, true)]
    #[test_case(Architecture::V1, Role::Spine, Role::LeafBmc, speed(10), true)]
    #[test_case(Architecture::V1, Role::Spine, Role::LeafBmc, speed(25), false)]
    #[test_case(Architecture::Mountain, Role::Cdu, Role::Cmm, speed(10), true)]
    #[test_case(Architecture::Mountain, Role::LeafBmc, Role::Pdu, speed(1), false)]
    fn test_allowed(arch: Architecture, a: Role, b: Role, s: Option<LinkSpeed>, expected: bool) {
        let catalog = RuleCatalog::load();
        assert_eq!(catalog.allowed(arch, a, b, s), expected);
    }

    #[test]
    fn test_unknown_role_is_never_allowed() {
        let catalog = RuleCatalog::load();
        for arch in Architecture::ALL {
            for role in Role::CONCRETE {
                assert!(!catalog.allowed(arch, Role::Unknown, role, None));
            }
        }
    }

    #[test]
    fn test_expected_counts() {
        let catalog = RuleCatalog::load();
        assert_eq!(catalog.expected_count(Architecture::Tds, Role::Pdu), 1..=1);
        assert_eq!(catalog.expected_count(Architecture::Tds, Role::Leaf), 0..=0);
        assert_eq!(catalog.expected_count(Architecture::Full, Role::Leaf), 1..=usize::MAX);
        assert_eq!(catalog.expected_count(Architecture::Mountain, Role::WorkerNode), 0..=0);
        assert_eq!(catalog.expected_count(Architecture::V1, Role::Unknown), 0..=0);
    }

    #[test]
    fn test_max_links() {
        let catalog = RuleCatalog::load();
        assert_eq!(catalog.max_links(Architecture::Tds, Role::Spine, Role::Spine), Some(2));
        assert_eq!(catalog.max_links(Architecture::Tds, Role::Pdu, Role::LeafBmc), Some(1));
        assert_eq!(catalog.max_links(Architecture::Tds, Role::Spine, Role::ComputeNode), None);
    }

    #[test]
    fn test_hardware_per_variant() {
        let catalog = RuleCatalog::load();
        assert_eq!(catalog.hardware(Architecture::V1, Role::Spine).vendor, "mellanox");
        assert_eq!(catalog.hardware(Architecture::Tds, Role::Spine).vendor, "aruba");
        assert_eq!(catalog.hardware(Architecture::Full, Role::Pdu).device_type, DeviceType::Pdu);
        let missing = catalog.hardware(Architecture::Mountain, Role::Leaf);
        assert_eq!(missing.vendor, "none");
        assert_eq!(missing.device_type, DeviceType::Switch);
    }

    #[test]
    fn test_variant_named() {
        let catalog = RuleCatalog::load();
        assert_eq!(catalog.variant_named("tds").unwrap().architecture(), Architecture::Tds);
        assert!(matches!(
            catalog.variant_named("river"),
            Err(TopologyError::UnknownArchitecture(_))
        ));
    }

    #[test]
    fn test_every_rule_has_a_speed_and_a_link() {
        let catalog = RuleCatalog::load();
        for arch in Architecture::ALL {
            for rule in catalog.variant(arch).links() {
                assert!(!rule.speeds.is_empty(), "{arch}: {:?}", rule);
                assert!(rule.max_links >= 1, "{arch}: {:?}", rule);
                assert!(rule.a.is_known() && rule.b.is_known());
            }
        }
    }
}
