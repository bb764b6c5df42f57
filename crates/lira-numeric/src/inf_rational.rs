//! Rationals extended with a symbolic infinitesimal.
//!
//! An `InfRational` is `standard + infinitesimal·ε` where `ε` is positive
//! and smaller than every positive rational. Strict bounds become
//! non-strict ones: `x < b` is `x ≤ b - ε`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{fatal, ArithResult};
use crate::ExtRational;

/// A pair `(standard, infinitesimal)` ordered lexicographically.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InfRational {
    standard: ExtRational,
    infinitesimal: ExtRational,
}

impl InfRational {
    /// The value 0.
    pub const ZERO: Self = Self {
        standard: ExtRational::ZERO,
        infinitesimal: ExtRational::ZERO,
    };

    /// The infinitesimal `ε` itself.
    pub const EPSILON: Self = Self {
        standard: ExtRational::ZERO,
        infinitesimal: ExtRational::ONE,
    };

    /// Creates `standard + infinitesimal·ε`.
    #[must_use]
    pub fn new(standard: impl Into<ExtRational>, infinitesimal: impl Into<ExtRational>) -> Self {
        Self {
            standard: standard.into(),
            infinitesimal: infinitesimal.into(),
        }
    }

    /// Returns `ε`.
    #[must_use]
    pub fn epsilon() -> Self {
        Self::EPSILON
    }

    /// The tightest non-strict encoding of `x < bound`, namely `bound - ε`.
    #[must_use]
    pub fn strict_upper_bound(bound: impl Into<ExtRational>) -> Self {
        Self::new(bound, -1)
    }

    /// The tightest non-strict encoding of `x > bound`, namely `bound + ε`.
    #[must_use]
    pub fn strict_lower_bound(bound: impl Into<ExtRational>) -> Self {
        Self::new(bound, 1)
    }

    /// Returns the standard part.
    #[must_use]
    pub fn standard(&self) -> &ExtRational {
        &self.standard
    }

    /// Returns the coefficient of `ε`.
    #[must_use]
    pub fn infinitesimal(&self) -> &ExtRational {
        &self.infinitesimal
    }

    /// Returns true if both parts are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.standard.is_zero() && self.infinitesimal.is_zero()
    }

    /// Returns true if strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.standard.is_positive()
            || (self.standard.is_zero() && self.infinitesimal.is_positive())
    }

    /// Returns true if positive or zero.
    #[must_use]
    pub fn is_positive_or_zero(&self) -> bool {
        self.standard.is_positive()
            || (self.standard.is_zero() && self.infinitesimal.is_positive_or_zero())
    }

    /// Returns true if strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.standard.is_negative()
            || (self.standard.is_zero() && self.infinitesimal.is_negative())
    }

    /// Returns true if negative or zero.
    #[must_use]
    pub fn is_negative_or_zero(&self) -> bool {
        self.standard.is_negative()
            || (self.standard.is_zero() && self.infinitesimal.is_negative_or_zero())
    }

    /// Returns true if the standard part is infinite.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.standard.is_infinite()
    }

    /// Returns true for `+inf + kε`.
    #[must_use]
    pub fn is_positive_infinite(&self) -> bool {
        self.standard.is_positive_infinite()
    }

    /// Returns true for `-inf + kε`.
    #[must_use]
    pub fn is_negative_infinite(&self) -> bool {
        self.standard.is_negative_infinite()
    }

    /// Component-wise sum.
    ///
    /// # Errors
    ///
    /// Returns an error if either component sum is indeterminate.
    pub fn checked_add(&self, rhs: &Self) -> ArithResult<Self> {
        Ok(Self {
            standard: self.standard.checked_add(&rhs.standard)?,
            infinitesimal: self.infinitesimal.checked_add(&rhs.infinitesimal)?,
        })
    }

    /// Component-wise difference.
    ///
    /// # Errors
    ///
    /// Returns an error if either component difference is indeterminate.
    pub fn checked_sub(&self, rhs: &Self) -> ArithResult<Self> {
        Ok(Self {
            standard: self.standard.checked_sub(&rhs.standard)?,
            infinitesimal: self.infinitesimal.checked_sub(&rhs.infinitesimal)?,
        })
    }

    /// Adds a rational to the standard part.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard sum is indeterminate.
    pub fn checked_add_rational(&self, rhs: &ExtRational) -> ArithResult<Self> {
        Ok(Self {
            standard: self.standard.checked_add(rhs)?,
            infinitesimal: self.infinitesimal.clone(),
        })
    }

    /// Subtracts a rational from the standard part.
    ///
    /// # Errors
    ///
    /// Returns an error if the standard difference is indeterminate.
    pub fn checked_sub_rational(&self, rhs: &ExtRational) -> ArithResult<Self> {
        Ok(Self {
            standard: self.standard.checked_sub(rhs)?,
            infinitesimal: self.infinitesimal.clone(),
        })
    }

    /// Scales both parts by a rational.
    ///
    /// # Errors
    ///
    /// Returns an error if either product is indeterminate, e.g. scaling a
    /// value with a zero infinitesimal part by an infinity.
    pub fn checked_mul_rational(&self, rhs: &ExtRational) -> ArithResult<Self> {
        Ok(Self {
            standard: self.standard.checked_mul(rhs)?,
            infinitesimal: self.infinitesimal.checked_mul(rhs)?,
        })
    }

    /// Divides both parts by a rational.
    ///
    /// # Errors
    ///
    /// Returns an error if either quotient is indeterminate.
    pub fn checked_div_rational(&self, rhs: &ExtRational) -> ArithResult<Self> {
        Ok(Self {
            standard: self.standard.checked_div(rhs)?,
            infinitesimal: self.infinitesimal.checked_div(rhs)?,
        })
    }

    fn cmp_rational(&self, rhs: &ExtRational) -> Ordering {
        match self.standard.cmp(rhs) {
            Ordering::Equal => self.infinitesimal.signum().cmp(&0),
            ord => ord,
        }
    }
}

impl fmt::Debug for InfRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfRational({self})")
    }
}

impl fmt::Display for InfRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.standard.is_infinite() || self.infinitesimal.is_zero() {
            return write!(f, "{}", self.standard);
        }

        let bare = self.standard.is_zero();
        if !bare {
            write!(f, "{}", self.standard)?;
        }

        let inf = &self.infinitesimal;
        if *inf == 1 {
            f.write_str(if bare { "ε" } else { " + ε" })
        } else if *inf == -1 {
            f.write_str(if bare { "-ε" } else { " - ε" })
        } else if bare {
            write!(f, "{inf}ε")
        } else if inf.is_negative() {
            write!(f, " {inf}ε")
        } else {
            write!(f, " +{inf}ε")
        }
    }
}

impl From<ExtRational> for InfRational {
    fn from(standard: ExtRational) -> Self {
        Self {
            standard,
            infinitesimal: ExtRational::ZERO,
        }
    }
}

impl From<i64> for InfRational {
    fn from(value: i64) -> Self {
        Self::from(ExtRational::from(value))
    }
}

impl PartialEq<ExtRational> for InfRational {
    fn eq(&self, other: &ExtRational) -> bool {
        self.standard == *other && self.infinitesimal.is_zero()
    }
}

impl PartialOrd<ExtRational> for InfRational {
    fn partial_cmp(&self, other: &ExtRational) -> Option<Ordering> {
        Some(self.cmp_rational(other))
    }
}

impl PartialEq<InfRational> for ExtRational {
    fn eq(&self, other: &InfRational) -> bool {
        other == self
    }
}

impl PartialOrd<InfRational> for ExtRational {
    fn partial_cmp(&self, other: &InfRational) -> Option<Ordering> {
        Some(other.cmp_rational(self).reverse())
    }
}

impl PartialEq<i64> for InfRational {
    fn eq(&self, other: &i64) -> bool {
        *self == ExtRational::from(*other)
    }
}

impl PartialOrd<i64> for InfRational {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp_rational(&ExtRational::from(*other)))
    }
}

macro_rules! forward_inf_ops {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $checked:ident($rhs:ty, |$r:ident| $arg:expr);)+) => {$(
        impl $trait<$rhs> for InfRational {
            type Output = InfRational;

            #[track_caller]
            fn $method(self, rhs: $rhs) -> InfRational {
                let $r = rhs;
                fatal(self.$checked($arg))
            }
        }

        impl $trait<$rhs> for &InfRational {
            type Output = InfRational;

            #[track_caller]
            fn $method(self, rhs: $rhs) -> InfRational {
                let $r = rhs;
                fatal(self.$checked($arg))
            }
        }

        impl $assign_trait<$rhs> for InfRational {
            #[track_caller]
            fn $assign_method(&mut self, rhs: $rhs) {
                let $r = rhs;
                *self = fatal(self.$checked($arg));
            }
        }
    )+};
}

forward_inf_ops! {
    Add::add, AddAssign::add_assign => checked_add(InfRational, |rhs| &rhs);
    Add::add, AddAssign::add_assign => checked_add(&InfRational, |rhs| rhs);
    Sub::sub, SubAssign::sub_assign => checked_sub(InfRational, |rhs| &rhs);
    Sub::sub, SubAssign::sub_assign => checked_sub(&InfRational, |rhs| rhs);

    Add::add, AddAssign::add_assign => checked_add_rational(ExtRational, |rhs| &rhs);
    Add::add, AddAssign::add_assign => checked_add_rational(&ExtRational, |rhs| rhs);
    Add::add, AddAssign::add_assign => checked_add_rational(i64, |rhs| &ExtRational::from(rhs));
    Sub::sub, SubAssign::sub_assign => checked_sub_rational(ExtRational, |rhs| &rhs);
    Sub::sub, SubAssign::sub_assign => checked_sub_rational(&ExtRational, |rhs| rhs);
    Sub::sub, SubAssign::sub_assign => checked_sub_rational(i64, |rhs| &ExtRational::from(rhs));
    Mul::mul, MulAssign::mul_assign => checked_mul_rational(ExtRational, |rhs| &rhs);
    Mul::mul, MulAssign::mul_assign => checked_mul_rational(&ExtRational, |rhs| rhs);
    Mul::mul, MulAssign::mul_assign => checked_mul_rational(i64, |rhs| &ExtRational::from(rhs));
    Div::div, DivAssign::div_assign => checked_div_rational(ExtRational, |rhs| &rhs);
    Div::div, DivAssign::div_assign => checked_div_rational(&ExtRational, |rhs| rhs);
    Div::div, DivAssign::div_assign => checked_div_rational(i64, |rhs| &ExtRational::from(rhs));
}

/// Operators with a rational or integer on the left; `$l` is the left
/// operand and `$r` a reference to the `InfRational` on the right.
macro_rules! forward_inf_lhs {
    ($($lhs:ty: $trait:ident::$method:ident => |$l:ident, $r:ident| $body:expr;)+) => {$(
        impl $trait<InfRational> for $lhs {
            type Output = InfRational;

            #[track_caller]
            fn $method(self, rhs: InfRational) -> InfRational {
                let ($l, $r) = (self, &rhs);
                fatal($body)
            }
        }

        impl $trait<&InfRational> for $lhs {
            type Output = InfRational;

            #[track_caller]
            fn $method(self, rhs: &InfRational) -> InfRational {
                let ($l, $r) = (self, rhs);
                fatal($body)
            }
        }
    )+};
}

forward_inf_lhs! {
    ExtRational: Add::add => |lhs, rhs| rhs.checked_add_rational(&lhs);
    ExtRational: Sub::sub => |lhs, rhs| InfRational::from(lhs).checked_sub(rhs);
    ExtRational: Mul::mul => |lhs, rhs| rhs.checked_mul_rational(&lhs);
    &ExtRational: Add::add => |lhs, rhs| rhs.checked_add_rational(lhs);
    &ExtRational: Sub::sub => |lhs, rhs| InfRational::from(lhs.clone()).checked_sub(rhs);
    &ExtRational: Mul::mul => |lhs, rhs| rhs.checked_mul_rational(lhs);
    i64: Add::add => |lhs, rhs| rhs.checked_add_rational(&ExtRational::from(lhs));
    i64: Sub::sub => |lhs, rhs| InfRational::from(lhs).checked_sub(rhs);
    i64: Mul::mul => |lhs, rhs| rhs.checked_mul_rational(&ExtRational::from(lhs));
}

impl Neg for InfRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            standard: -self.standard,
            infinitesimal: -self.infinitesimal,
        }
    }
}

impl Neg for &InfRational {
    type Output = InfRational;

    fn neg(self) -> Self::Output {
        InfRational {
            standard: -&self.standard,
            infinitesimal: -&self.infinitesimal,
        }
    }
}
