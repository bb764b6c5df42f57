//! Sparse linear expressions.
//!
//! A [`LinExpr`] is `c₀ + Σ cᵢ·xᵢ` with coefficients in [`ExtRational`].
//! Terms live in an ordered map keyed by variable, and a zero coefficient is
//! never stored: every operation that can cancel a term prunes it.

use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use lira_numeric::{ArithResult, ExtRational, InfRational};
use num_traits::One;

use crate::VarId;

/// What happened to a single term after its coefficient was adjusted.
///
/// Callers that index expressions by variable (the tableau watch lists)
/// use this to keep their index in step with the term map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermChange {
    /// The variable was absent and now has a nonzero coefficient.
    Inserted,
    /// The variable was present and still is.
    Updated,
    /// The coefficient cancelled to zero and the term was dropped.
    Removed,
    /// The adjustment was zero; nothing changed.
    Unchanged,
}

/// A linear expression `constant + Σ coeff·var`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct LinExpr {
    /// Nonzero coefficients, sorted by variable.
    terms: BTreeMap<VarId, ExtRational>,
    /// The known term.
    constant: ExtRational,
}

impl LinExpr {
    /// Creates the zero expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a constant expression.
    #[must_use]
    pub fn from_constant(constant: impl Into<ExtRational>) -> Self {
        Self {
            terms: BTreeMap::new(),
            constant: constant.into(),
        }
    }

    /// Creates the single term `coeff·var`.
    ///
    /// A zero coefficient gives the zero expression.
    #[must_use]
    pub fn term(var: VarId, coeff: impl Into<ExtRational>) -> Self {
        let coeff = coeff.into();
        let mut terms = BTreeMap::new();
        if !coeff.is_zero() {
            terms.insert(var, coeff);
        }
        Self {
            terms,
            constant: ExtRational::ZERO,
        }
    }

    /// Creates an expression from `(var, coeff)` pairs and a constant.
    ///
    /// Repeated variables are summed and zero coefficients dropped.
    #[must_use]
    pub fn from_terms<I>(terms: I, constant: impl Into<ExtRational>) -> Self
    where
        I: IntoIterator<Item = (VarId, ExtRational)>,
    {
        let mut expr = Self::from_constant(constant);
        for (var, coeff) in terms {
            expr.add_to_coeff(var, &coeff);
        }
        expr
    }

    /// Returns the coefficient of `var`, zero if absent.
    #[must_use]
    pub fn coeff(&self, var: VarId) -> ExtRational {
        self.terms.get(&var).cloned().unwrap_or_default()
    }

    /// Returns the coefficient of `var` if it has a term.
    #[must_use]
    pub fn get(&self, var: VarId) -> Option<&ExtRational> {
        self.terms.get(&var)
    }

    /// Returns true if `var` has a (necessarily nonzero) term.
    #[must_use]
    pub fn contains(&self, var: VarId) -> bool {
        self.terms.contains_key(&var)
    }

    /// Iterates over `(var, coeff)` in variable order.
    pub fn terms(&self) -> impl Iterator<Item = (VarId, &ExtRational)> + '_ {
        self.terms.iter().map(|(&var, coeff)| (var, coeff))
    }

    /// Iterates over the variables with a term, in order.
    pub fn vars(&self) -> impl Iterator<Item = VarId> + '_ {
        self.terms.keys().copied()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms. The constant may be nonzero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the zero expression.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty() && self.constant.is_zero()
    }

    /// Returns the known term.
    #[must_use]
    pub fn constant(&self) -> &ExtRational {
        &self.constant
    }

    /// Adds `delta` to the coefficient of `var`, pruning the term if it
    /// cancels.
    ///
    /// # Panics
    ///
    /// Panics if the new coefficient is an indeterminate form.
    pub fn add_to_coeff(&mut self, var: VarId, delta: &ExtRational) -> TermChange {
        if delta.is_zero() {
            return TermChange::Unchanged;
        }
        match self.terms.entry(var) {
            Entry::Vacant(entry) => {
                entry.insert(delta.clone());
                TermChange::Inserted
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += delta;
                if entry.get().is_zero() {
                    entry.remove();
                    TermChange::Removed
                } else {
                    TermChange::Updated
                }
            }
        }
    }

    /// Removes the term of `var`, returning its coefficient.
    pub fn remove(&mut self, var: VarId) -> Option<ExtRational> {
        self.terms.remove(&var)
    }

    /// Adds `factor·other` to `self` in one pass.
    ///
    /// A zero factor leaves `self` unchanged even if `other` has infinite
    /// coefficients.
    ///
    /// # Panics
    ///
    /// Panics if a resulting coefficient is an indeterminate form.
    pub fn add_scaled(&mut self, factor: &ExtRational, other: &LinExpr) {
        if factor.is_zero() {
            return;
        }
        for (var, coeff) in other.terms() {
            self.add_to_coeff(var, &(factor * coeff));
        }
        if !other.constant.is_zero() {
            self.constant += factor * &other.constant;
        }
    }

    /// Replaces `var` by `replacement`.
    ///
    /// If `var` has coefficient `c`, its term is removed and
    /// `c·replacement` added. Returns `c`, or `None` (and leaves `self`
    /// untouched) when `var` does not occur.
    pub fn substitute(&mut self, var: VarId, replacement: &LinExpr) -> Option<ExtRational> {
        let coeff = self.terms.remove(&var)?;
        self.add_scaled(&coeff, replacement);
        Some(coeff)
    }

    /// Evaluates the expression under an assignment of its variables.
    ///
    /// # Errors
    ///
    /// Returns an error if infinite values combine into an indeterminate
    /// form.
    pub fn evaluate<F>(&self, mut value: F) -> ArithResult<ExtRational>
    where
        F: FnMut(VarId) -> ExtRational,
    {
        self.terms
            .iter()
            .try_fold(self.constant.clone(), |acc, (&var, coeff)| {
                acc.checked_add(&coeff.checked_mul(&value(var))?)
            })
    }

    /// Evaluates the expression under an assignment of infinitesimal
    /// values, as used when propagating strict bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if infinite values combine into an indeterminate
    /// form.
    pub fn evaluate_inf<F>(&self, mut value: F) -> ArithResult<InfRational>
    where
        F: FnMut(VarId) -> InfRational,
    {
        self.terms.iter().try_fold(
            InfRational::from(self.constant.clone()),
            |acc, (&var, coeff)| acc.checked_add(&value(var).checked_mul_rational(coeff)?),
        )
    }

    fn scale(&mut self, factor: &ExtRational) {
        if factor.is_zero() {
            *self = Self::new();
            return;
        }
        for coeff in self.terms.values_mut() {
            *coeff *= factor;
        }
        self.constant *= factor;
    }

    fn divide(&mut self, divisor: &ExtRational) {
        if divisor.is_infinite() {
            *self = Self::new();
            return;
        }
        for coeff in self.terms.values_mut() {
            *coeff /= divisor;
        }
        self.constant /= divisor;
    }
}

impl fmt::Debug for LinExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinExpr({self})")
    }
}

impl fmt::Display for LinExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "{}", self.constant);
        }

        for (i, (var, coeff)) in self.terms.iter().enumerate() {
            let unit = coeff.is_one();
            let neg_unit = (-coeff).is_one();
            match (i, unit, neg_unit) {
                (0, true, _) => write!(f, "{var}")?,
                (0, _, true) => write!(f, "-{var}")?,
                (0, _, _) => write!(f, "{coeff}*{var}")?,
                (_, true, _) => write!(f, " + {var}")?,
                (_, _, true) => write!(f, " - {var}")?,
                _ if coeff.is_positive() => write!(f, " + {coeff}*{var}")?,
                _ => write!(f, " - {}*{var}", -coeff)?,
            }
        }

        if self.constant.is_positive() {
            write!(f, " + {}", self.constant)?;
        } else if self.constant.is_negative() {
            write!(f, " - {}", -&self.constant)?;
        }
        Ok(())
    }
}

impl AddAssign<&LinExpr> for LinExpr {
    fn add_assign(&mut self, rhs: &LinExpr) {
        self.add_scaled(&ExtRational::ONE, rhs);
    }
}

impl SubAssign<&LinExpr> for LinExpr {
    fn sub_assign(&mut self, rhs: &LinExpr) {
        self.add_scaled(&-ExtRational::ONE, rhs);
    }
}

impl AddAssign<&ExtRational> for LinExpr {
    fn add_assign(&mut self, rhs: &ExtRational) {
        self.constant += rhs;
    }
}

impl SubAssign<&ExtRational> for LinExpr {
    fn sub_assign(&mut self, rhs: &ExtRational) {
        self.constant -= rhs;
    }
}

impl MulAssign<&ExtRational> for LinExpr {
    fn mul_assign(&mut self, rhs: &ExtRational) {
        self.scale(rhs);
    }
}

impl DivAssign<&ExtRational> for LinExpr {
    fn div_assign(&mut self, rhs: &ExtRational) {
        self.divide(rhs);
    }
}

/// Derives the by-value and by-reference forms of an operator from its
/// `OpAssign<&Rhs>` impl.
macro_rules! forward_expr_ops {
    ($($rhs:ty: $trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident;)+) => {$(
        impl $assign_trait<$rhs> for LinExpr {
            fn $assign_method(&mut self, rhs: $rhs) {
                $assign_trait::$assign_method(self, &rhs);
            }
        }

        impl $trait<$rhs> for LinExpr {
            type Output = LinExpr;

            fn $method(mut self, rhs: $rhs) -> LinExpr {
                $assign_trait::$assign_method(&mut self, &rhs);
                self
            }
        }

        impl $trait<&$rhs> for LinExpr {
            type Output = LinExpr;

            fn $method(mut self, rhs: &$rhs) -> LinExpr {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl $trait<$rhs> for &LinExpr {
            type Output = LinExpr;

            fn $method(self, rhs: $rhs) -> LinExpr {
                let mut out = self.clone();
                $assign_trait::$assign_method(&mut out, &rhs);
                out
            }
        }

        impl $trait<&$rhs> for &LinExpr {
            type Output = LinExpr;

            fn $method(self, rhs: &$rhs) -> LinExpr {
                let mut out = self.clone();
                $assign_trait::$assign_method(&mut out, rhs);
                out
            }
        }
    )+};
}

forward_expr_ops! {
    LinExpr: Add::add, AddAssign::add_assign;
    LinExpr: Sub::sub, SubAssign::sub_assign;
    ExtRational: Add::add, AddAssign::add_assign;
    ExtRational: Sub::sub, SubAssign::sub_assign;
    ExtRational: Mul::mul, MulAssign::mul_assign;
    ExtRational: Div::div, DivAssign::div_assign;
}

impl Mul<LinExpr> for ExtRational {
    type Output = LinExpr;

    fn mul(self, mut rhs: LinExpr) -> LinExpr {
        rhs.scale(&self);
        rhs
    }
}

impl Mul<&LinExpr> for &ExtRational {
    type Output = LinExpr;

    fn mul(self, rhs: &LinExpr) -> LinExpr {
        let mut out = rhs.clone();
        out.scale(self);
        out
    }
}

impl Add<LinExpr> for ExtRational {
    type Output = LinExpr;

    fn add(self, mut rhs: LinExpr) -> LinExpr {
        rhs += &self;
        rhs
    }
}

impl Add<&LinExpr> for &ExtRational {
    type Output = LinExpr;

    fn add(self, rhs: &LinExpr) -> LinExpr {
        rhs + self
    }
}

impl Sub<LinExpr> for ExtRational {
    type Output = LinExpr;

    fn sub(self, rhs: LinExpr) -> LinExpr {
        -rhs + self
    }
}

impl Sub<&LinExpr> for &ExtRational {
    type Output = LinExpr;

    fn sub(self, rhs: &LinExpr) -> LinExpr {
        -rhs + self
    }
}

impl Neg for LinExpr {
    type Output = LinExpr;

    fn neg(mut self) -> LinExpr {
        for coeff in self.terms.values_mut() {
            *coeff = -&*coeff;
        }
        self.constant = -&self.constant;
        self
    }
}

impl Neg for &LinExpr {
    type Output = LinExpr;

    fn neg(self) -> LinExpr {
        -self.clone()
    }
}

impl From<ExtRational> for LinExpr {
    fn from(constant: ExtRational) -> Self {
        Self::from_constant(constant)
    }
}

impl From<VarId> for LinExpr {
    fn from(var: VarId) -> Self {
        Self::term(var, ExtRational::ONE)
    }
}

impl FromIterator<(VarId, ExtRational)> for LinExpr {
    fn from_iter<I: IntoIterator<Item = (VarId, ExtRational)>>(iter: I) -> Self {
        Self::from_terms(iter, ExtRational::ZERO)
    }
}
