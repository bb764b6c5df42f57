//! # lira-linear
//!
//! Sparse linear expressions over extended rationals.
//!
//! A [`LinExpr`] maps [`VarId`]s to nonzero [`ExtRational`](lira_numeric::ExtRational)
//! coefficients plus a known term. It is the row type of the tableau and
//! supports the algebra the pivot step needs: merging, scaling and
//! substitution of one variable by an expression.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lin_expr;
pub mod var;

#[cfg(test)]
mod proptests;

pub use lin_expr::{LinExpr, TermChange};
pub use var::VarId;
