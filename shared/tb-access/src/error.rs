//! Catalog error types.

use smol_str::SmolStr;
use thiserror::Error;

/// A name used in a requirement that the catalog does not know.
///
/// Evaluation treats such names as "not granted"; these findings only make
/// the typo visible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
    /// Permission name not present in the catalog.
    #[error("unknown permission '{name}' at {location}")]
    UnknownPermission { name: SmolStr, location: String },

    /// Role name not present in the catalog.
    #[error("unknown role '{name}' at {location}")]
    UnknownRole { name: SmolStr, location: String },
}

/// Catalog loading and validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON of the expected shape.
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Validation found names outside the catalog.
    #[error("{} unknown name(s) in access configuration", .0.len())]
    Invalid(Vec<CatalogIssue>),
}
