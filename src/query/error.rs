use thiserror::Error;

/// A problem with user-supplied query input.
///
/// These are reported to the user and fail only the current query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The property name is not in the filterable whitelist.
    #[error("unknown property '{name}' (available: {available})")]
    UnknownProperty { name: String, available: String },

    /// The threshold is missing or is not a number.
    #[error("invalid threshold '{value}' for property '{property}'")]
    InvalidThreshold { property: String, value: String },

    /// A filter argument does not have the expected form.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// An element identifier matched no element.
    #[error("element not found: {0}")]
    UnresolvedIdentifier(String),

    /// A boolean flag value is not one of the accepted spellings.
    #[error("invalid boolean '{0}' (expected true/false, yes/no or 1/0)")]
    InvalidBool(String),
}
