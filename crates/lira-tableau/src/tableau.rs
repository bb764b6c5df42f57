//! Sparse tableau with watch lists.
//!
//! The tableau stores one row `xᵢ = Σ aᵢⱼ·xⱼ + cᵢ` per basic variable.
//! Alongside the rows it keeps, for every variable `v`, the set of basic
//! variables whose row mentions `v`, so pivoting only visits the rows that
//! actually change.
//!
//! # Invariants
//!
//! - The basic variables are exactly the row keys, and no basic variable
//!   occurs as a term of any row.
//! - `r ∈ watches[v]` if and only if `v` has a nonzero coefficient in the
//!   row of `r`.
//!
//! All edits of `rows` and `watches` go through four helpers
//! (`insert_row`, `remove_row`, `remove_term`, `add_to_term`) that update
//! both together.

use std::collections::BTreeMap;
use std::fmt;

use lira_linear::{LinExpr, TermChange, VarId};
use lira_numeric::{ArithResult, ExtRational};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::config::TableauConfig;
use crate::error::{TableauError, TableauResult};

/// A sparse tableau over extended rationals.
#[derive(Debug, Clone, Default)]
pub struct Tableau {
    /// Rows keyed by their basic variable.
    rows: BTreeMap<VarId, LinExpr>,
    /// Per variable, the basic variables whose row mentions it.
    watches: Vec<FxHashSet<VarId>>,
    config: TableauConfig,
}

impl Tableau {
    /// Creates an empty tableau with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TableauConfig::default())
    }

    /// Creates an empty tableau.
    #[must_use]
    pub fn with_config(config: TableauConfig) -> Self {
        Self {
            rows: BTreeMap::new(),
            watches: Vec::with_capacity(config.var_capacity),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TableauConfig {
        &self.config
    }

    /// Allocates a fresh non-basic variable.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` variables are allocated.
    pub fn new_var(&mut self) -> VarId {
        let Ok(index) = u32::try_from(self.watches.len()) else {
            panic!("variable space exhausted");
        };
        let var = VarId::new(index);
        self.watches.push(FxHashSet::default());
        var
    }

    /// Returns the number of allocated variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.watches.len()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if `var` was allocated by this tableau.
    #[must_use]
    pub fn is_known(&self, var: VarId) -> bool {
        var.as_usize() < self.watches.len()
    }

    /// Returns true if `var` has a row.
    #[must_use]
    pub fn is_basic(&self, var: VarId) -> bool {
        self.rows.contains_key(&var)
    }

    /// Returns the row of a basic variable.
    #[must_use]
    pub fn row(&self, var: VarId) -> Option<&LinExpr> {
        self.rows.get(&var)
    }

    /// Iterates over the rows in basic-variable order.
    pub fn rows(&self) -> impl Iterator<Item = (VarId, &LinExpr)> + '_ {
        self.rows.iter().map(|(&var, row)| (var, row))
    }

    /// Iterates over the basic variables in order.
    pub fn basic_vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.rows.keys().copied()
    }

    /// Returns the basic variables whose row mentions `var`.
    #[must_use]
    pub fn watches(&self, var: VarId) -> Option<&FxHashSet<VarId>> {
        self.watches.get(var.as_usize())
    }

    /// Renders one row as `x<i> = <expr>`.
    #[must_use]
    pub fn row_to_string(&self, var: VarId) -> Option<String> {
        self.rows.get(&var).map(|row| format!("{var} = {row}"))
    }

    /// Adds the row `basic = expr`.
    ///
    /// # Errors
    ///
    /// Fails without modifying the tableau if `basic` is unknown, already
    /// basic, mentioned by `expr` or by another row, or if `expr` mentions
    /// an unknown or basic variable.
    pub fn add_row(&mut self, basic: VarId, expr: LinExpr) -> TableauResult<()> {
        self.check_new_row(basic, &expr).map_err(reject)?;

        debug!("add_row {basic}: {} terms", expr.len());
        self.insert_row(basic, expr);
        self.verify()
    }

    /// Swaps the basic variable `leaving` with the non-basic `entering`.
    ///
    /// The row of `leaving` is solved for `entering` and substituted into
    /// every other row mentioning `entering`. The set of solutions of the
    /// tableau is unchanged.
    ///
    /// # Errors
    ///
    /// Fails without modifying the tableau unless `leaving` is basic and
    /// unwatched, `entering` is non-basic, and `entering` occurs in the
    /// row of `leaving`.
    pub fn pivot(&mut self, leaving: VarId, entering: VarId) -> TableauResult<()> {
        let coeff = self.check_pivot(leaving, entering).map_err(reject)?;

        let mut expr = self
            .remove_row(leaving)
            .ok_or(TableauError::NotBasic(leaving))?;

        // leaving = coeff·entering + rest  ⇒  entering = (leaving - rest) / coeff
        expr.remove(entering);
        let inv = coeff.recip();
        expr *= &-&inv;
        expr.add_to_coeff(leaving, &inv);

        let mut watchers: Vec<VarId> = self.watches[entering.as_usize()]
            .iter()
            .copied()
            .collect();
        watchers.sort_unstable();

        for &basic in &watchers {
            let Some(k) = self.remove_term(basic, entering) else {
                continue;
            };
            for (var, c) in expr.terms() {
                self.add_to_term(basic, var, &(&k * c));
            }
            if let Some(row) = self.rows.get_mut(&basic) {
                if !expr.constant().is_zero() {
                    *row += &(&k * expr.constant());
                }
                trace!("rewrote {basic} = {row}");
            }
        }

        debug!(
            "pivot {leaving} -> {entering}: {} rows rewritten",
            watchers.len()
        );
        self.insert_row(entering, expr);
        self.verify()
    }

    /// Evaluates every basic variable from an assignment of the non-basic
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a row evaluates to an indeterminate form.
    pub fn evaluate_basic<F>(&self, mut value: F) -> ArithResult<BTreeMap<VarId, ExtRational>>
    where
        F: FnMut(VarId) -> ExtRational,
    {
        self.rows
            .iter()
            .map(|(&basic, row)| row.evaluate(&mut value).map(|v| (basic, v)))
            .collect()
    }

    /// Verifies the row and watch invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TableauError::InvariantViolation`] describing the first
    /// inconsistency found.
    pub fn check_invariants(&self) -> TableauResult<()> {
        for (&basic, row) in &self.rows {
            if !self.is_known(basic) {
                return Err(TableauError::violation(format!(
                    "row of unknown variable {basic}"
                )));
            }
            for (var, coeff) in row.terms() {
                if coeff.is_zero() {
                    return Err(TableauError::violation(format!(
                        "zero coefficient of {var} in row of {basic}"
                    )));
                }
                if self.is_basic(var) {
                    return Err(TableauError::violation(format!(
                        "basic variable {var} occurs in row of {basic}"
                    )));
                }
                match self.watches.get(var.as_usize()) {
                    Some(watchers) if watchers.contains(&basic) => {}
                    Some(_) => {
                        return Err(TableauError::violation(format!(
                            "{basic} missing from watches of {var}"
                        )))
                    }
                    None => {
                        return Err(TableauError::violation(format!(
                            "row of {basic} mentions unknown variable {var}"
                        )))
                    }
                }
            }
        }

        for (index, watchers) in self.watches.iter().enumerate() {
            let var = VarId::new(u32::try_from(index).unwrap_or(u32::MAX));
            for &basic in watchers {
                if !self.rows.get(&basic).is_some_and(|row| row.contains(var)) {
                    return Err(TableauError::violation(format!(
                        "{basic} watches {var} but its row does not mention it"
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify(&self) -> TableauResult<()> {
        if self.config.verify_invariants {
            self.check_invariants()
        } else {
            Ok(())
        }
    }

    fn known(&self, var: VarId) -> TableauResult<()> {
        if self.is_known(var) {
            Ok(())
        } else {
            Err(TableauError::UnknownVariable(var))
        }
    }

    fn check_new_row(&self, basic: VarId, expr: &LinExpr) -> TableauResult<()> {
        self.known(basic)?;
        if self.is_basic(basic) {
            return Err(TableauError::AlreadyBasic(basic));
        }
        if expr.contains(basic) {
            return Err(TableauError::SelfReference(basic));
        }
        for var in expr.vars() {
            self.known(var)?;
            if self.is_basic(var) {
                return Err(TableauError::BasicInExpression { row: basic, var });
            }
        }
        if let Some(&row) = self.watches[basic.as_usize()].iter().min() {
            return Err(TableauError::ReferencedVariable { var: basic, row });
        }
        Ok(())
    }

    /// Checks every pivot precondition and returns the coefficient of
    /// `entering` in the row of `leaving`.
    fn check_pivot(&self, leaving: VarId, entering: VarId) -> TableauResult<ExtRational> {
        self.known(leaving)?;
        self.known(entering)?;
        let row = self
            .rows
            .get(&leaving)
            .ok_or(TableauError::NotBasic(leaving))?;
        let watchers = self.watches[leaving.as_usize()].len();
        if watchers > 0 {
            return Err(TableauError::LeavingStillWatched {
                var: leaving,
                watchers,
            });
        }
        if self.is_basic(entering) {
            return Err(TableauError::EnteringIsBasic(entering));
        }
        row.get(entering)
            .cloned()
            .ok_or(TableauError::EnteringNotInRow { leaving, entering })
    }

    fn insert_row(&mut self, basic: VarId, expr: LinExpr) {
        for var in expr.vars() {
            self.watches[var.as_usize()].insert(basic);
        }
        self.rows.insert(basic, expr);
    }

    fn remove_row(&mut self, basic: VarId) -> Option<LinExpr> {
        let expr = self.rows.remove(&basic)?;
        for var in expr.vars() {
            self.watches[var.as_usize()].remove(&basic);
        }
        Some(expr)
    }

    fn remove_term(&mut self, basic: VarId, var: VarId) -> Option<ExtRational> {
        let coeff = self.rows.get_mut(&basic)?.remove(var)?;
        self.watches[var.as_usize()].remove(&basic);
        Some(coeff)
    }

    fn add_to_term(&mut self, basic: VarId, var: VarId, delta: &ExtRational) {
        let Some(row) = self.rows.get_mut(&basic) else {
            return;
        };
        match row.add_to_coeff(var, delta) {
            TermChange::Inserted => {
                self.watches[var.as_usize()].insert(basic);
            }
            TermChange::Removed => {
                self.watches[var.as_usize()].remove(&basic);
            }
            TermChange::Updated | TermChange::Unchanged => {}
        }
    }
}

fn reject(err: TableauError) -> TableauError {
    debug!("rejected tableau operation: {err}");
    err
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (basic, row) in &self.rows {
            writeln!(f, "{basic} = {row}")?;
        }
        Ok(())
    }
}
