//! Errors reported by tableau operations.

use lira_linear::VarId;
use thiserror::Error;

/// Result type for tableau operations.
pub type TableauResult<T> = Result<T, TableauError>;

/// A rejected tableau operation or a broken internal invariant.
///
/// Every operation checks its preconditions before mutating anything, so a
/// returned error (other than [`TableauError::InvariantViolation`]) leaves
/// the tableau exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableauError {
    /// The variable was never allocated by this tableau.
    #[error("unknown variable {0}")]
    UnknownVariable(VarId),

    /// A row was added for a variable that already has one.
    #[error("{0} is already basic")]
    AlreadyBasic(VarId),

    /// The leaving variable of a pivot has no row.
    #[error("{0} is not basic")]
    NotBasic(VarId),

    /// The entering variable of a pivot already has a row.
    #[error("entering variable {0} is basic")]
    EnteringIsBasic(VarId),

    /// The leaving variable still occurs in other rows.
    #[error("leaving variable {var} still occurs in {watchers} row(s)")]
    LeavingStillWatched {
        /// The leaving variable.
        var: VarId,
        /// Number of rows mentioning it.
        watchers: usize,
    },

    /// The entering variable has a zero coefficient in the leaving row.
    #[error("entering variable {entering} does not occur in the row of {leaving}")]
    EnteringNotInRow {
        /// The leaving (basic) variable.
        leaving: VarId,
        /// The entering (non-basic) variable.
        entering: VarId,
    },

    /// A row mentions its own basic variable.
    #[error("row of {0} mentions {0}")]
    SelfReference(VarId),

    /// A row mentions a variable that is basic.
    #[error("row of {row} mentions basic variable {var}")]
    BasicInExpression {
        /// The basic variable of the new row.
        row: VarId,
        /// The offending basic variable.
        var: VarId,
    },

    /// The variable made basic already occurs in another row.
    #[error("{var} already occurs in the row of {row}")]
    ReferencedVariable {
        /// The variable that was to become basic.
        var: VarId,
        /// A row mentioning it.
        row: VarId,
    },

    /// The rows and watch lists disagree.
    #[error("tableau invariant violated: {0}")]
    InvariantViolation(String),
}

impl TableauError {
    /// Creates an invariant violation error.
    #[must_use]
    pub fn violation(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }
}
