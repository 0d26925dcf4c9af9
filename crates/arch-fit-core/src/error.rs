//! Discovery errors: soft failures while building the catalog or model.
//!
//! None of these abort a run. The affected component is omitted (or the
//! losing candidate of an ambiguous slot is ignored), the error is logged
//! and carried in the final report.

use miette::Diagnostic;
use serde::Serialize;
use std::path::PathBuf;

/// A component or artifact could not be introspected or placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error, Diagnostic)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiscoveryError {
    /// Artifact could not be read from disk.
    #[error("failed to read artifact {path}: {message}")]
    #[diagnostic(code(arch_fit::discovery::unreadable))]
    Unreadable {
        /// Artifact path.
        path: PathBuf,
        /// Underlying I/O error.
        message: String,
    },

    /// Artifact content is not a valid component manifest.
    #[error("invalid component manifest {path}: {message}")]
    #[diagnostic(
        code(arch_fit::discovery::invalid_manifest),
        help("manifests need at least a `name`; see `arch-fit init` for the format")
    )]
    InvalidManifest {
        /// Artifact path.
        path: PathBuf,
        /// Parse error detail.
        message: String,
    },

    /// Two artifacts describe the same component identifier.
    #[error("duplicate component `{id}`, keeping the first occurrence")]
    #[diagnostic(
        code(arch_fit::discovery::duplicate_component),
        help("remove stale build output so each component is described once")
    )]
    DuplicateComponent {
        /// Component identifier.
        id: String,
    },

    /// Two components compete for one module layer slot.
    #[error("module `{module}` {layer} slot: kept `{kept}`, ignored `{ignored}`")]
    #[diagnostic(
        code(arch_fit::discovery::ambiguous_slot),
        help("a module should expose a single Api component (Api > RestApi > Graphql > GraphQL)")
    )]
    AmbiguousSlot {
        /// Module name.
        module: String,
        /// Layer of the slot.
        layer: crate::Layer,
        /// Component placed in the slot.
        kept: String,
        /// Component left out.
        ignored: String,
    },
}
