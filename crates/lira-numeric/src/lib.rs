//! # lira-numeric
//!
//! Exact extended arithmetic for linear constraint solving.
//!
//! This crate provides three layered numeric domains:
//! - Extended integers (`ExtInteger`): `i64` plus `±inf`, saturating
//! - Extended rationals (`ExtRational`): reduced fractions plus `±inf`
//! - Infinitesimal rationals (`InfRational`): `a + b·ε`, used to encode
//!   strict inequalities as non-strict ones
//!
//! ## Indeterminate Forms
//!
//! `inf - inf`, `0 * inf`, `inf / inf` and `0 / 0` have no value. The
//! `checked_*` methods report them as [`ArithError`]; the operator traits
//! panic with the same message.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

pub mod error;
pub mod inf_rational;
pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::{ArithError, ArithResult, IndeterminateForm};
pub use inf_rational::InfRational;
pub use integer::ExtInteger;
pub use rational::ExtRational;
