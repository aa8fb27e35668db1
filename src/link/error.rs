use thiserror::Error;

use crate::validate::Issue;

/// Errors from regenerating derived reaction artifacts.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The reaction corpus has integrity problems; nothing was derived.
    #[error("reaction corpus failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<Issue>),
}

impl GenerateError {
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Invalid(issues) => issues,
        }
    }
}
