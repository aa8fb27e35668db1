//! Problems found while checking the corpus.
//!
//! Issues are always collected into a list and reported together; none of
//! them aborts a check on its own.

use thiserror::Error;

/// A single integrity problem in the element or reaction corpus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    /// A record does not match the expected shape (missing field, wrong
    /// type, value outside a closed enumeration, or a violated field rule).
    #[error("{record}: {details}")]
    SchemaViolation {
        /// File name, optionally followed by `/` and the record id.
        record: String,
        /// Description of the mismatch.
        details: String,
    },

    /// The same reaction id appears more than once anywhere in the corpus.
    #[error("duplicate reaction id: {id}")]
    DuplicateId { id: String },

    /// Two element records share an atomic number, symbol, or name.
    #[error("duplicate element {field}: {value}")]
    DuplicateElement { field: &'static str, value: String },

    /// A reaction lists an element symbol with no element record.
    #[error("{reaction}: unknown element symbol '{symbol}'")]
    UnknownElementReference { reaction: String, symbol: String },

    /// A reaction id does not have exactly three `-`-separated segments.
    #[error("{id}: id should have the form Symbol-category-NNN")]
    MalformedId { id: String },

    /// The symbol segment of a reaction id is not a known element.
    #[error("{id}: id symbol '{symbol}' is not a known element")]
    IdSymbolUnknown { id: String, symbol: String },

    /// The category segment of a reaction id disagrees with its category field.
    #[error("{id}: id category '{id_category}' does not match category '{category}'")]
    CategoryMismatch {
        id: String,
        id_category: String,
        category: String,
    },

    /// A derived file on disk no longer matches what the records produce.
    #[error("{artifact} is out of date: {details}")]
    StaleArtifact { artifact: String, details: String },
}

impl Issue {
    pub fn schema(record: impl Into<String>, details: impl Into<String>) -> Self {
        Self::SchemaViolation {
            record: record.into(),
            details: details.into(),
        }
    }

    pub fn stale(artifact: impl Into<String>, details: impl Into<String>) -> Self {
        Self::StaleArtifact {
            artifact: artifact.into(),
            details: details.into(),
        }
    }

    /// Short machine-friendly label for grouping in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SchemaViolation { .. } => "schema",
            Self::DuplicateId { .. } | Self::DuplicateElement { .. } => "duplicate",
            Self::UnknownElementReference { .. } => "cross-reference",
            Self::MalformedId { .. }
            | Self::IdSymbolUnknown { .. }
            | Self::CategoryMismatch { .. } => "id-format",
            Self::StaleArtifact { .. } => "stale",
        }
    }
}
