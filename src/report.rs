// Copyright (c) 2025 - Cowboy AI, Inc.
//! Text report over a validated topology
//!
//! Node lines follow discovery-index order and port lines follow port
//! discovery order; nothing is re-sorted.

use std::fmt::Write;

use crate::builder::Topology;
use crate::pipeline::Validated;
use crate::validate::{SummaryStatus, ValidationReport};

/// "Node Connections" section: one summary line per node
pub fn render_connections(report: &ValidationReport) -> String {
    let mut out = String::from("Node Connections\n");
    for summary in &report.summaries {
        let _ = match &summary.status {
            SummaryStatus::Ok => writeln!(out, "{summary}"),
            SummaryStatus::Skip => writeln!(out, "{summary} SKIP"),
            SummaryStatus::Unresolved => writeln!(out, "{summary} UNRESOLVED"),
            SummaryStatus::OutOfRange { expected } => {
                let max = if *expected.end() == usize::MAX {
                    "any".to_string()
                } else {
                    expected.end().to_string()
                };
                writeln!(out, "{summary} WARN expected {} to {max}", expected.start())
            }
        };
    }
    out
}

/// "Port Usage" section: every port of every node
pub fn render_port_usage(topology: &Topology) -> String {
    let mut out = String::from("Port Usage\n");
    for node in topology.nodes() {
        let _ = writeln!(out, "{}: {}", node.index(), node.common_name());
        for port in node.ports() {
            let local = match &port.slot {
                Some(slot) => format!("{slot}:{}", port.port),
                None => port.port.to_string(),
            };
            let remote = match &port.destination_slot {
                Some(slot) => format!("{slot}:{}", port.destination_port),
                None => port.destination_port.to_string(),
            };
            let speed = port.speed.map(|s| format!(" ({s})")).unwrap_or_default();
            let _ = writeln!(
                out,
                "    {local} ==> {} {remote}{speed}",
                topology.name_of(port.destination_node)
            );
        }
    }
    out
}

/// Full report: connections, port usage, findings and the verdict
pub fn render(validated: &Validated) -> String {
    let report = &validated.report;
    let mut out = render_connections(report);
    out.push('\n');
    out.push_str(&render_port_usage(&validated.topology));
    out.push('\n');
    if report.findings.is_empty() {
        out.push_str("Findings: none\n");
    } else {
        let _ = writeln!(out, "Findings ({})", report.findings.len());
        for finding in &report.findings {
            let _ = writeln!(out, "  [{}] {finding}", finding.kind());
        }
    }
    let _ = writeln!(out, "\nResult: {}", report.verdict());
    out
}
