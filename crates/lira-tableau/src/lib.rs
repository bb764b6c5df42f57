//! # lira-tableau
//!
//! A sparse simplex tableau over extended rationals.
//!
//! Each basic variable owns one row `x = Σ aⱼ·yⱼ + c` over the non-basic
//! variables. Watch lists index, for every variable, the rows that
//! mention it, so a pivot touches only the rows it changes.
//!
//! ## Example
//!
//! ```
//! use lira_linear::LinExpr;
//! use lira_numeric::ExtRational;
//! use lira_tableau::Tableau;
//!
//! let mut tableau = Tableau::new();
//! let x = tableau.new_var();
//! let y = tableau.new_var();
//!
//! // x = 2y + 1
//! tableau
//!     .add_row(x, LinExpr::from_terms([(y, ExtRational::from(2))], 1))
//!     .unwrap();
//! tableau.pivot(x, y).unwrap();
//!
//! assert_eq!(tableau.row_to_string(y).unwrap(), "x1 = 1/2*x0 - 1/2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod tableau;

#[cfg(test)]
mod proptests;

pub use config::TableauConfig;
pub use error::{TableauError, TableauResult};
pub use tableau::Tableau;
