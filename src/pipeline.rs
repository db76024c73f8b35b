// Copyright (c) 2025 - Cowboy AI, Inc.
//! Build-and-validate pipeline
//!
//! Two-tier result: a fatal build error comes back as `Err(TopologyError)`;
//! a completed build comes back as [`Validated`], whose findings the caller
//! has to inspect to learn the verdict.

use serde_json::Value;
use tracing::info;

use crate::builder::{RawRow, Topology, TopologyBuilder};
use crate::canonical::CanonicalDocument;
use crate::config::PipelineConfig;
use crate::errors::{TopologyError, TopologyResult};
use crate::rules::RuleCatalog;
use crate::validate::{ArchitecturalValidator, ValidationReport, Verdict};

/// Build and validation completed; SKIPs allowed
pub const EXIT_OK: i32 = 0;
/// Fatal build error or failed validation
pub const EXIT_FAILURE: i32 = 1;
/// Usage error in the surrounding command
pub const EXIT_USAGE: i32 = 2;

/// What to build from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyInput {
    /// Extracted workbook rows, in workbook order
    Rows(Vec<RawRow>),
    /// A canonical document; row folding is skipped
    Document(CanonicalDocument),
}

impl TopologyInput {
    /// Interpret JSON input: an array is a row list, an object a document
    pub fn from_json(text: &str) -> TopologyResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| TopologyError::Deserialization(e.to_string()))?;
        match value {
            Value::Array(_) => {
                let rows: Vec<RawRow> = serde_json::from_value(value)
                    .map_err(|e| TopologyError::Deserialization(e.to_string()))?;
                Ok(Self::Rows(rows))
            }
            Value::Object(_) => Ok(Self::Document(CanonicalDocument::from_value(value)?)),
            _ => Err(TopologyError::Deserialization(
                "input must be a row array or a canonical document object".to_string(),
            )),
        }
    }
}

/// A completed build with its validation results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    pub topology: Topology,
    pub report: ValidationReport,
    pub source_reference: String,
}

impl Validated {
    pub fn verdict(&self) -> Verdict {
        self.report.verdict()
    }

    /// Canonical document for the validated topology
    pub fn document(&self) -> CanonicalDocument {
        CanonicalDocument::from_topology(&self.topology, self.source_reference.clone())
    }

    pub fn exit_code(&self) -> i32 {
        match self.verdict() {
            Verdict::Pass => EXIT_OK,
            Verdict::Fail => EXIT_FAILURE,
        }
    }
}

/// Exit status for a pipeline outcome
pub fn exit_code(result: &TopologyResult<Validated>) -> i32 {
    match result {
        Ok(validated) => validated.exit_code(),
        Err(_) => EXIT_FAILURE,
    }
}

/// Builder + validator bound to one catalog and configuration
#[derive(Debug, Clone)]
pub struct Pipeline<'c> {
    catalog: &'c RuleCatalog,
    config: PipelineConfig,
}

impl<'c> Pipeline<'c> {
    pub fn new(catalog: &'c RuleCatalog, config: PipelineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build, freeze, then validate
    ///
    /// # Errors
    /// Any fatal build error; validation findings are never errors.
    pub fn run(&self, input: &TopologyInput) -> TopologyResult<Validated> {
        let (topology, source_reference) = match input {
            TopologyInput::Rows(rows) => {
                let architecture = self.config.architecture.ok_or_else(|| {
                    TopologyError::Configuration(
                        "an architecture must be selected to build from rows".to_string(),
                    )
                })?;
                info!(%architecture, rows = rows.len(), "building topology from rows");
                let topology = TopologyBuilder::build(self.catalog, architecture, rows)?;
                (topology, self.config.source_reference.clone())
            }
            TopologyInput::Document(document) => {
                if let Some(configured) = self.config.architecture {
                    if configured != document.architecture {
                        return Err(TopologyError::ArchitectureMismatch {
                            configured: configured.to_string(),
                            document: document.architecture.to_string(),
                        });
                    }
                }
                let topology = TopologyBuilder::from_document(document)?;
                (topology, document.source_reference.clone())
            }
        };

        let report = ArchitecturalValidator::new(self.catalog).validate(&topology);
        Ok(Validated {
            topology,
            report,
            source_reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Architecture;

    fn spine_rows() -> Vec<RawRow> {
        vec![RawRow::new(
            "25G_10G",
            1,
            ["sw-spine-001", "x3000", "u40", "", "1", "sw-spine-002", "x3000", "u41", "", "1"],
        )]
    }

    #[test]
    fn test_rows_need_an_architecture() {
        let catalog = RuleCatalog::load();
        let pipeline = Pipeline::new(&catalog, PipelineConfig::default());
        let result = pipeline.run(&TopologyInput::Rows(spine_rows()));
        assert!(matches!(result, Err(TopologyError::Configuration(_))));
        assert_eq!(exit_code(&result), EXIT_FAILURE);
    }

    #[test]
    fn test_rows_pass() {
        let catalog = RuleCatalog::load();
        let pipeline = Pipeline::new(&catalog, PipelineConfig::new(Architecture::Tds).with_source("unit"));
        let result = pipeline.run(&TopologyInput::Rows(spine_rows()));
        assert_eq!(exit_code(&result), EXIT_OK);
        let validated = result.unwrap();
        assert_eq!(validated.document().source_reference, "unit");
    }

    #[test]
    fn test_document_architecture_must_match_config() {
        let catalog = RuleCatalog::load();
        let built = Pipeline::new(&catalog, PipelineConfig::new(Architecture::Tds))
            .run(&TopologyInput::Rows(spine_rows()))
            .unwrap();
        let input = TopologyInput::Document(built.document());
        let result = Pipeline::new(&catalog, PipelineConfig::new(Architecture::Full)).run(&input);
        assert!(matches!(result, Err(TopologyError::ArchitectureMismatch { .. })));
        let result = Pipeline::new(&catalog, PipelineConfig::default()).run(&input);
        assert!(result.is_ok());
    }

    #[test]
    fn test_input_from_json() {
        let rows = r#"[{"tab": "NMN", "row": 1, "cells": ["sw-spine-001", "x3000", "u40", "", 1, "sw-spine-002", "x3000", "u41", "", 1]}]"#;
        assert!(matches!(TopologyInput::from_json(rows), Ok(TopologyInput::Rows(r)) if r.len() == 1));
        assert!(matches!(
            TopologyInput::from_json(r#"{"topology": []}"#),
            Err(TopologyError::MissingArchitecture)
        ));
        assert!(matches!(
            TopologyInput::from_json("42"),
            Err(TopologyError::Deserialization(_))
        ));
    }
}
