// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Validation Command
//!
//! Builds a topology from extracted workbook rows (a JSON array of
//! `{tab, row, cells}`) or loads a canonical document (a JSON object), runs
//! the architectural validator and prints the report.
//!
//! Run with: cargo run --bin topology-validate -- rows.json --architecture tds
//!
//! Environment:
//! - `TOPOLOGY_ARCHITECTURE` - architecture variant when `--architecture` is absent
//! - `TOPOLOGY_SOURCE` - source reference stamped into emitted documents
//! - `TOPOLOGY_LOG` - log filter when `RUST_LOG` is unset
//!
//! Exit codes: 0 completed (SKIPs allowed), 1 fatal or failed, 2 usage error.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use cim_fabric_topology::config::{init_tracing, PipelineConfig};
use cim_fabric_topology::pipeline::{Pipeline, TopologyInput, EXIT_FAILURE};
use cim_fabric_topology::{report, Architecture, RuleCatalog};

#[derive(Debug, Parser)]
#[command(name = "topology-validate", version, about = "Build and validate a fabric topology")]
struct Args {
    /// Row array or canonical document (JSON)
    input: PathBuf,

    /// Architecture variant: tds, full, v1 or mountain
    #[arg(short, long, value_parser = parse_architecture)]
    architecture: Option<Architecture>,

    /// Print the canonical document instead of the text report
    #[arg(long)]
    json: bool,

    /// Also write the canonical document to this path
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Log filter directive
    #[arg(long)]
    log: Option<String>,
}

/// Unknown names are rejected by clap as a usage error
fn parse_architecture(name: &str) -> Result<Architecture, String> {
    name.parse::<Architecture>().map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FAILURE as u8)
        }
    }
}

fn run(args: Args) -> Result<i32> {
    let mut config = PipelineConfig::from_env()?;
    if args.architecture.is_some() {
        config.architecture = args.architecture;
    }
    if let Some(filter) = args.log {
        config.log_filter = filter;
    }
    if config.source_reference == PipelineConfig::default().source_reference {
        config.source_reference = args.input.display().to_string();
    }

    init_tracing(&config.log_filter)?;

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let input = TopologyInput::from_json(&text)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let catalog = RuleCatalog::load();
    info!(catalog = catalog.version(), "rule catalog loaded");
    let validated = Pipeline::new(&catalog, config).run(&input)?;

    let document = validated.document().to_json()?;
    if args.json {
        println!("{document}");
    } else {
        print!("{}", report::render(&validated));
    }
    if let Some(path) = args.out {
        std::fs::write(&path, &document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "canonical document written");
    }

    Ok(validated.exit_code())
}
