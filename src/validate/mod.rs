// Copyright (c) 2025 - Cowboy AI, Inc.
//! Architectural Validator
//!
//! A pure function of `(frozen topology, rule catalog)`. Walks every node in
//! index order and every port in discovery order, collecting:
//!
//! - [`ArchitecturalRuleViolation`] for illegal role pairs, speeds and
//!   parallel-link counts
//! - [`ReciprocityError`] for ports whose peer does not point back
//! - [`RoleResolutionError`](crate::errors::RoleResolutionError) for linked
//!   nodes whose role could not be classified
//!
//! It never stops early: workbook mistakes cluster, and one pass has to show
//! all of them.

pub mod findings;
pub mod invariants;
pub mod summary;

use std::collections::BTreeSet;
use std::fmt;
use tracing::{info, warn};

use crate::builder::Topology;
use crate::domain::NodeIndex;
use crate::rules::{Architecture, RuleCatalog};

pub use findings::{ArchitecturalRuleViolation, Finding, ReciprocityError, ViolationReason};
pub use summary::{NodeSummary, SummaryStatus};

/// Overall outcome of validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("PASS"),
            Self::Fail => f.write_str("FAIL"),
        }
    }
}

/// Everything one validation pass found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub architecture: Architecture,
    /// Findings in walk order
    pub findings: Vec<Finding>,
    /// One summary per node in discovery-index order
    pub summaries: Vec<NodeSummary>,
}

impl ValidationReport {
    /// Any finding fails validation; SKIP and out-of-range summaries do not
    pub fn verdict(&self) -> Verdict {
        if self.findings.is_empty() {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    pub fn is_pass(&self) -> bool {
        self.verdict() == Verdict::Pass
    }

    pub fn rule_violations(&self) -> impl Iterator<Item = &ArchitecturalRuleViolation> {
        self.findings.iter().filter_map(|f| match f {
            Finding::RuleViolation(v) => Some(v),
            _ => None,
        })
    }

    pub fn reciprocity_errors(&self) -> impl Iterator<Item = &ReciprocityError> {
        self.findings.iter().filter_map(|f| match f {
            Finding::Reciprocity(r) => Some(r),
            _ => None,
        })
    }

    pub fn summary(&self, index: NodeIndex) -> Option<&NodeSummary> {
        self.summaries.iter().find(|s| s.index == index)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &NodeSummary> {
        self.summaries.iter().filter(|s| s.is_skip())
    }
}

/// Validator bound to an explicit rule catalog
#[derive(Debug, Clone, Copy)]
pub struct ArchitecturalValidator<'c> {
    catalog: &'c RuleCatalog,
}

impl<'c> ArchitecturalValidator<'c> {
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self { catalog }
    }

    /// Check every link of a frozen topology
    pub fn validate(&self, topology: &Topology) -> ValidationReport {
        let mut findings = Vec::new();
        let mut unresolved = BTreeSet::new();

        for node in topology.nodes() {
            for port in node.ports() {
                if let Some(err) = invariants::check_reciprocity(topology, node, port) {
                    findings.push(Finding::Reciprocity(err));
                }

                let Some(peer) = topology.node(port.destination_node) else {
                    continue;
                };
                let mut concrete = true;
                for end in [node, peer] {
                    if let Err(err) = end.require_role() {
                        concrete = false;
                        if unresolved.insert(end.index()) {
                            findings.push(Finding::RoleResolution(err));
                        }
                    }
                }
                if !concrete || !invariants::is_reporting_side(topology, node.index(), port) {
                    continue;
                }
                if let Some(violation) = invariants::check_link(self.catalog, topology, node, port) {
                    findings.push(Finding::RuleViolation(violation));
                }
            }
            findings.extend(invariants::check_multiplicity(self.catalog, topology, node));
        }

        let summaries = summary::summarize(self.catalog, topology);

        for finding in &findings {
            warn!(kind = finding.kind(), "{finding}");
        }
        for summary in &summaries {
            if let SummaryStatus::OutOfRange { expected } = &summary.status {
                warn!(
                    node = %summary.common_name,
                    connections = summary.connection_count(),
                    min = expected.start(),
                    max = expected.end(),
                    "connection count outside expected range"
                );
            }
        }

        let report = ValidationReport {
            architecture: topology.architecture(),
            findings,
            summaries,
        };
        info!(
            architecture = %report.architecture,
            findings = report.findings.len(),
            verdict = %report.verdict(),
            "validation complete"
        );
        report
    }
}
