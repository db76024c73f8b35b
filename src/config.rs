// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pipeline configuration and logging setup

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::errors::{TopologyError, TopologyResult};
use crate::rules::Architecture;

/// Architecture variant for row input
pub const ENV_ARCHITECTURE: &str = "TOPOLOGY_ARCHITECTURE";
/// Free-form reference to the workbook the rows came from
pub const ENV_SOURCE: &str = "TOPOLOGY_SOURCE";
/// `tracing` filter directive, used when `RUST_LOG` is unset
pub const ENV_LOG: &str = "TOPOLOGY_LOG";

/// Settings for one build-and-validate run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Required for row input; for document input it must match the
    /// document when set
    pub architecture: Option<Architecture>,
    /// Stamped into emitted documents as `source_reference`
    pub source_reference: String,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            architecture: None,
            source_reference: "unknown".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn new(architecture: Architecture) -> Self {
        Self {
            architecture: Some(architecture),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, source_reference: impl Into<String>) -> Self {
        self.source_reference = source_reference.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> TopologyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    ///
    /// # Errors
    /// [`TopologyError::UnknownArchitecture`] if the architecture variable
    /// names no known variant.
    pub fn from_lookup<F>(lookup: F) -> TopologyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let architecture = lookup(ENV_ARCHITECTURE)
            .filter(|value| !value.trim().is_empty())
            .map(|value| value.parse::<Architecture>())
            .transpose()?;
        Ok(Self {
            architecture,
            source_reference: lookup(ENV_SOURCE).unwrap_or(defaults.source_reference),
            log_filter: lookup(ENV_LOG).unwrap_or(defaults.log_filter),
        })
    }
}

/// Install a `tracing` subscriber writing to stderr
///
/// `RUST_LOG` wins over `filter` when set.
pub fn init_tracing(filter: &str) -> TopologyResult<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::try_new(filter)
            .map_err(|e| TopologyError::Configuration(format!("invalid log filter '{filter}': {e}")))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| TopologyError::Configuration(e.to_string()))
}
