//! Exact rationals extended with signed infinities.
//!
//! The finite part is an arbitrary precision fraction, always stored in
//! lowest terms with a positive denominator, so arithmetic never overflows.
//! Infinities follow the classic `(±1, 0)` encoding when observed through
//! [`ExtRational::numerator`] and [`ExtRational::denominator`].

use std::fmt;

use dashu::base::Signed as DashuSigned;
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::{One, Zero};

use crate::error::{validate, ArithError, ArithResult, BinOp, Class};
use crate::ExtInteger;

/// A rational number or one of the two signed infinities.
///
/// The derived order is the intended one: `-inf` is below every finite
/// value, `+inf` above, and equal-signed infinities are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtRational {
    /// Negative infinity, `-1/0`.
    NegInfinity,
    /// A finite rational in lowest terms.
    Finite(RBig),
    /// Positive infinity, `1/0`.
    PosInfinity,
}

impl ExtRational {
    /// The rational 0.
    pub const ZERO: Self = Self::Finite(RBig::ZERO);
    /// The rational 1.
    pub const ONE: Self = Self::Finite(RBig::ONE);
    /// Positive infinity.
    pub const POSITIVE_INFINITY: Self = Self::PosInfinity;
    /// Negative infinity.
    pub const NEGATIVE_INFINITY: Self = Self::NegInfinity;

    /// Creates the rational `numerator / denominator`.
    ///
    /// A zero denominator with a nonzero numerator gives the infinity of the
    /// numerator's sign.
    ///
    /// # Panics
    ///
    /// Panics if both arguments are zero.
    #[must_use]
    #[track_caller]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        crate::error::fatal(Self::try_new(numerator, denominator))
    }

    /// Creates the rational `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::Undefined`] for `0 / 0`.
    pub fn try_new(numerator: i64, denominator: i64) -> ArithResult<Self> {
        match (numerator, denominator) {
            (0, 0) => Err(ArithError::Undefined),
            (n, 0) => Ok(Self::infinity(n > 0)),
            (n, d) => {
                let num = if d < 0 { -IBig::from(n) } else { IBig::from(n) };
                Ok(Self::Finite(RBig::from_parts(num, UBig::from(d.unsigned_abs()))))
            }
        }
    }

    /// Creates an integral rational.
    #[must_use]
    pub fn from_integer(value: i64) -> Self {
        Self::Finite(RBig::from(IBig::from(value)))
    }

    /// Returns the infinity with the given sign.
    #[must_use]
    pub const fn infinity(positive: bool) -> Self {
        if positive {
            Self::PosInfinity
        } else {
            Self::NegInfinity
        }
    }

    /// Returns the numerator: `±1` for the infinities.
    #[must_use]
    pub fn numerator(&self) -> IBig {
        match self {
            Self::NegInfinity => IBig::NEG_ONE,
            Self::Finite(value) => value.numerator().clone(),
            Self::PosInfinity => IBig::ONE,
        }
    }

    /// Returns the denominator: `0` for the infinities.
    #[must_use]
    pub fn denominator(&self) -> UBig {
        match self {
            Self::Finite(value) => value.denominator().clone(),
            _ => UBig::ZERO,
        }
    }

    /// Returns the finite value, or `None` for an infinity.
    #[must_use]
    pub fn as_finite(&self) -> Option<&RBig> {
        match self {
            Self::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if this is a finite integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Finite(value) if value.denominator().is_one())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        match self {
            Self::NegInfinity => -1,
            Self::Finite(value) if value.is_zero() => 0,
            Self::Finite(value) if DashuSigned::is_positive(value) => 1,
            Self::Finite(_) => -1,
            Self::PosInfinity => 1,
        }
    }

    /// Returns true if zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(value) if value.is_zero())
    }

    /// Returns true if strictly positive (including `+inf`).
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns true if positive or zero.
    #[must_use]
    pub fn is_positive_or_zero(&self) -> bool {
        self.signum() >= 0
    }

    /// Returns true if strictly negative (including `-inf`).
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if negative or zero.
    #[must_use]
    pub fn is_negative_or_zero(&self) -> bool {
        self.signum() <= 0
    }

    /// Returns true for either infinity.
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Returns true for finite values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns true for `+inf`.
    #[must_use]
    pub fn is_positive_infinite(&self) -> bool {
        matches!(self, Self::PosInfinity)
    }

    /// Returns true for `-inf`.
    #[must_use]
    pub fn is_negative_infinite(&self) -> bool {
        matches!(self, Self::NegInfinity)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Returns the reciprocal `1 / self`.
    ///
    /// The reciprocal of an infinity is zero and the reciprocal of zero is
    /// `+inf`.
    #[must_use]
    pub fn recip(&self) -> Self {
        match self {
            Self::Finite(value) if value.is_zero() => Self::PosInfinity,
            Self::Finite(value) => Self::Finite(RBig::ONE / value),
            _ => Self::ZERO,
        }
    }

    /// Approximates the value as an `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::NegInfinity => f64::NEG_INFINITY,
            Self::Finite(value) => value.to_f64().value(),
            Self::PosInfinity => f64::INFINITY,
        }
    }

    pub(crate) fn class(&self) -> Class {
        match self {
            Self::NegInfinity => Class::NegInfinity,
            Self::Finite(value) if value.is_zero() => Class::Zero,
            Self::Finite(_) => Class::Finite,
            Self::PosInfinity => Class::PosInfinity,
        }
    }

    /// Adds two extended rationals.
    ///
    /// # Errors
    ///
    /// Returns an error for `+inf + -inf` and `-inf + +inf`.
    pub fn checked_add(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Add, self.class(), rhs.class())?;
        Ok(match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a + b),
            (Self::Finite(_), infinite) | (infinite, _) => infinite.clone(),
        })
    }

    /// Subtracts two extended rationals.
    ///
    /// # Errors
    ///
    /// Returns an error when both operands are infinities of the same sign.
    pub fn checked_sub(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Sub, self.class(), rhs.class())?;
        Ok(match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a - b),
            (Self::Finite(_), infinite) => -infinite,
            (infinite, _) => infinite.clone(),
        })
    }

    /// Multiplies two extended rationals.
    ///
    /// # Errors
    ///
    /// Returns an error for `inf * 0` and `0 * inf`.
    pub fn checked_mul(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Mul, self.class(), rhs.class())?;
        Ok(match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a * b),
            (lhs, rhs) => Self::infinity(lhs.is_positive() == rhs.is_positive()),
        })
    }

    /// Divides two extended rationals.
    ///
    /// A nonzero value divided by zero is the infinity of its sign, and a
    /// finite value divided by an infinity is zero.
    ///
    /// # Errors
    ///
    /// Returns an error for `inf / inf` and `0 / 0`.
    pub fn checked_div(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Div, self.class(), rhs.class())?;
        Ok(match (self, rhs) {
            (Self::Finite(a), Self::Finite(b)) if b.is_zero() => {
                Self::infinity(DashuSigned::is_positive(a))
            }
            (Self::Finite(a), Self::Finite(b)) => Self::Finite(a / b),
            (Self::Finite(_), _) => Self::ZERO,
            (lhs, rhs) => Self::infinity(lhs.is_positive() == rhs.is_positive_or_zero()),
        })
    }
}

impl Default for ExtRational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for ExtRational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        ExtRational::is_zero(self)
    }
}

impl One for ExtRational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        matches!(self, Self::Finite(value) if *value == RBig::ONE)
    }
}

impl fmt::Debug for ExtRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtRational({self})")
    }
}

impl fmt::Display for ExtRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegInfinity => f.write_str("-inf"),
            Self::PosInfinity => f.write_str("+inf"),
            Self::Finite(value) if value.denominator().is_one() => {
                write!(f, "{}", value.numerator())
            }
            Self::Finite(value) => write!(f, "{}/{}", value.numerator(), value.denominator()),
        }
    }
}

forward_binops! {
    ExtRational;
    Add::add, AddAssign::add_assign => checked_add;
    Sub::sub, SubAssign::sub_assign => checked_sub;
    Mul::mul, MulAssign::mul_assign => checked_mul;
    Div::div, DivAssign::div_assign => checked_div;
}

forward_i64_cmp!(ExtRational);

impl std::ops::Neg for ExtRational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::NegInfinity => Self::PosInfinity,
            Self::Finite(value) => Self::Finite(-value),
            Self::PosInfinity => Self::NegInfinity,
        }
    }
}

impl std::ops::Neg for &ExtRational {
    type Output = ExtRational;

    fn neg(self) -> Self::Output {
        match self {
            ExtRational::NegInfinity => ExtRational::PosInfinity,
            ExtRational::Finite(value) => ExtRational::Finite(-value),
            ExtRational::PosInfinity => ExtRational::NegInfinity,
        }
    }
}

impl From<i64> for ExtRational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for ExtRational {
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl From<RBig> for ExtRational {
    fn from(value: RBig) -> Self {
        Self::Finite(value)
    }
}

impl From<ExtInteger> for ExtRational {
    fn from(value: ExtInteger) -> Self {
        match value {
            ExtInteger::NegInfinity => Self::NegInfinity,
            ExtInteger::Finite(n) => Self::from_integer(n),
            ExtInteger::PosInfinity => Self::PosInfinity,
        }
    }
}
