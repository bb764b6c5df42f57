//! # Lira
//!
//! Exact arithmetic and tableau kernel for linear real arithmetic.
//!
//! ## Features
//!
//! - **Extended Numbers**: integers and rationals with `±inf`, and
//!   infinitesimal rationals `a + b·ε` for strict bounds
//! - **Linear Expressions**: sparse, always free of zero coefficients
//! - **Sparse Tableau**: rows over non-basic variables with watch lists and
//!   incremental pivoting
//!
//! ## Quick Start
//!
//! ```
//! use lira::prelude::*;
//!
//! # fn main() -> Result<(), lira::Error> {
//! let mut tableau = Tableau::new();
//! let x = tableau.new_var();
//! let y = tableau.new_var();
//! let s = tableau.new_var();
//!
//! // s = x + 2y
//! let sum = [(x, ExtRational::ONE), (y, ExtRational::from(2))];
//! tableau.add_row(s, LinExpr::from_terms(sum, 0))?;
//! tableau.pivot(s, x)?;
//! assert_eq!(tableau.row_to_string(x).unwrap(), "x0 = -2*x1 + x2");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lira_linear as linear;
pub use lira_numeric as numeric;
pub use lira_tableau as tableau;

use thiserror::Error;

/// Any error raised by the lira crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Extended arithmetic hit an indeterminate form or `0/0`.
    #[error(transparent)]
    Arith(#[from] lira_numeric::ArithError),

    /// A tableau operation was rejected.
    #[error(transparent)]
    Tableau(#[from] lira_tableau::TableauError),
}

/// Result type for fallible lira operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lira_linear::{LinExpr, TermChange, VarId};
    pub use lira_numeric::{ArithError, ExtInteger, ExtRational, IndeterminateForm, InfRational};
    pub use lira_tableau::{Tableau, TableauConfig, TableauError};
}
