//! Cabling topology builder and architectural validator for HPC
//! management-network fabrics
//!
//! Turns extracted cabling-workbook rows (or a canonical topology document)
//! into a node/port graph, enforces port-uniqueness and bidirectional-link
//! invariants, checks every link against the wiring rules of an architecture
//! variant, and serializes the verified result.
//!
//! ```text
//! rows ──▶ TopologyBuilder ──finish──▶ Topology ──▶ ArchitecturalValidator ──▶ ValidationReport
//!            │        │                   ▲  │
//!     NodeRegistry  PortLedger            │  └──▶ CanonicalDocument (JSON)
//!                                         │
//! document ───────── from_document ───────┘
//! ```

pub mod builder;
pub mod canonical;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod rules;
pub mod validate;

// Re-export commonly used types
pub use builder::{RawRow, Topology, TopologyBuilder};
pub use canonical::{CanonicalDocument, CanonicalNode, CanonicalPort};
pub use config::PipelineConfig;
pub use domain::{Node, NodeIndex, Port, PortLabel, Role};
pub use errors::{MalformedInputError, RoleResolutionError, RowOrigin, TopologyError, TopologyResult};
pub use ledger::{PortConflictError, PortLedger};
pub use pipeline::{Pipeline, TopologyInput, Validated};
pub use registry::NodeRegistry;
pub use rules::{Architecture, RuleCatalog};
pub use validate::{
    ArchitecturalRuleViolation, ArchitecturalValidator, Finding, ReciprocityError, ValidationReport, Verdict,
};
