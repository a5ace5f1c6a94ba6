//! Error types for the taskparams CLI.
//!
//! Substitution itself never fails; errors come from reading and parsing
//! documents and from strict-mode checks.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for taskparams operations.
#[derive(Error, Debug)]
pub enum TaskParamsError {
    /// User provided invalid arguments or an input file could not be read.
    #[error("{0}")]
    UserError(String),

    /// A task, run, or config document is malformed.
    #[error("Parse failed: {0}")]
    ParseError(String),

    /// Strict mode found placeholders with no replacement.
    #[error("unresolved placeholders: {}", .0.join(", "))]
    UnresolvedPlaceholders(Vec<String>),
}

impl TaskParamsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskParamsError::UserError(_) => exit_codes::USER_ERROR,
            TaskParamsError::ParseError(_) => exit_codes::PARSE_FAILURE,
            TaskParamsError::UnresolvedPlaceholders(_) => exit_codes::UNRESOLVED_PLACEHOLDERS,
        }
    }
}

/// Result type alias for taskparams operations.
pub type Result<T> = std::result::Result<T, TaskParamsError>;
