//! Machine integers extended with signed infinities.
//!
//! This module provides `ExtInteger`, an `i64` with explicit `+inf` and
//! `-inf` values. Arithmetic saturates: a finite result that does not fit
//! in an `i64` becomes the infinity of its sign.

use std::fmt;

use num_traits::{One, Zero};

use crate::error::{validate, ArithResult, BinOp, Class};

/// A machine integer or one of the two signed infinities.
///
/// The variant order gives the total order: `-inf` is below every finite
/// value, `+inf` above, and equal-signed infinities compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtInteger {
    /// Negative infinity.
    NegInfinity,
    /// A finite value.
    Finite(i64),
    /// Positive infinity.
    PosInfinity,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
impl ExtInteger {
    /// The integer 0.
    pub const ZERO: Self = Self::Finite(0);
    /// The integer 1.
    pub const ONE: Self = Self::Finite(1);
    /// Positive infinity.
    pub const POSITIVE_INFINITY: Self = Self::PosInfinity;
    /// Negative infinity.
    pub const NEGATIVE_INFINITY: Self = Self::NegInfinity;

    /// Creates a finite integer.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self::Finite(value)
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

    /// Converts a wide intermediate result, saturating to the infinities.
    fn from_wide(value: i128) -> Self {
        i64::try_from(value).map_or_else(|_| Self::infinity(value > 0), Self::Finite)
    }

    /// Returns the finite value, or `None` for an infinity.
    #[must_use]
    pub const fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Finite(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(&self) -> i8 {
        match self {
            Self::NegInfinity => -1,
            Self::Finite(value) => value.signum() as i8,
            Self::PosInfinity => 1,
        }
    }

    /// Returns true for the finite value 0.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(0))
    }

    /// Returns true if strictly positive (including `+inf`).
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    /// Returns true if positive or zero.
    #[must_use]
    pub const fn is_positive_or_zero(&self) -> bool {
        self.signum() >= 0
    }

    /// Returns true if strictly negative (including `-inf`).
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    /// Returns true if negative or zero.
    #[must_use]
    pub const fn is_negative_or_zero(&self) -> bool {
        self.signum() <= 0
    }

    /// Returns true for either infinity.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Returns true for finite values.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns true for `+inf`.
    #[must_use]
    pub const fn is_positive_infinite(&self) -> bool {
        matches!(self, Self::PosInfinity)
    }

    /// Returns true for `-inf`.
    #[must_use]
    pub const fn is_negative_infinite(&self) -> bool {
        matches!(self, Self::NegInfinity)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        match self {
            Self::Finite(value) => Self::from_wide(i128::from(*value).abs()),
            _ => Self::PosInfinity,
        }
    }

    pub(crate) fn class(&self) -> Class {
        match self {
            Self::NegInfinity => Class::NegInfinity,
            Self::Finite(0) => Class::Zero,
            Self::Finite(_) => Class::Finite,
            Self::PosInfinity => Class::PosInfinity,
        }
    }

    /// Adds two extended integers.
    ///
    /// # Errors
    ///
    /// Returns an error for `+inf + -inf` and `-inf + +inf`.
    pub fn checked_add(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Add, self.class(), rhs.class())?;
        Ok(match (*self, *rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::from_wide(i128::from(a) + i128::from(b)),
            (Self::Finite(_), infinite) => infinite,
            (infinite, _) => infinite,
        })
    }

    /// Subtracts two extended integers.
    ///
    /// # Errors
    ///
    /// Returns an error when both operands are infinities of the same sign.
    pub fn checked_sub(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Sub, self.class(), rhs.class())?;
        Ok(match (*self, *rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::from_wide(i128::from(a) - i128::from(b)),
            (Self::Finite(_), infinite) => -infinite,
            (infinite, _) => infinite,
        })
    }

    /// Multiplies two extended integers.
    ///
    /// # Errors
    ///
    /// Returns an error for `inf * 0` and `0 * inf`.
    pub fn checked_mul(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Mul, self.class(), rhs.class())?;
        Ok(match (*self, *rhs) {
            (Self::Finite(a), Self::Finite(b)) => Self::from_wide(i128::from(a) * i128::from(b)),
            (lhs, rhs) => Self::infinity(lhs.is_positive() == rhs.is_positive()),
        })
    }

    /// Divides two extended integers, truncating toward zero.
    ///
    /// A nonzero value divided by zero is the infinity of its sign, and a
    /// finite value divided by an infinity is zero.
    ///
    /// # Errors
    ///
    /// Returns an error for `inf / inf` and `0 / 0`.
    pub fn checked_div(&self, rhs: &Self) -> ArithResult<Self> {
        validate(BinOp::Div, self.class(), rhs.class())?;
        Ok(match (*self, *rhs) {
            (Self::Finite(a), Self::Finite(0)) => Self::infinity(a > 0),
            (Self::Finite(a), Self::Finite(b)) => Self::from_wide(i128::from(a) / i128::from(b)),
            (Self::Finite(_), _) => Self::ZERO,
            (lhs, rhs) => Self::infinity(lhs.is_positive() == rhs.is_positive_or_zero()),
        })
    }
}

impl Default for ExtInteger {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for ExtInteger {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        ExtInteger::is_zero(self)
    }
}

impl One for ExtInteger {
    fn one() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ExtInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegInfinity => f.write_str("-inf"),
            Self::Finite(value) => write!(f, "{value}"),
            Self::PosInfinity => f.write_str("inf"),
        }
    }
}

forward_binops! {
    ExtInteger;
    Add::add, AddAssign::add_assign => checked_add;
    Sub::sub, SubAssign::sub_assign => checked_sub;
    Mul::mul, MulAssign::mul_assign => checked_mul;
    Div::div, DivAssign::div_assign => checked_div;
}

forward_i64_cmp!(ExtInteger);

impl std::ops::Neg for ExtInteger {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::NegInfinity => Self::PosInfinity,
            Self::Finite(value) => Self::from_wide(-i128::from(value)),
            Self::PosInfinity => Self::NegInfinity,
        }
    }
}

impl std::ops::Neg for &ExtInteger {
    type Output = ExtInteger;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl From<i64> for ExtInteger {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for ExtInteger {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}
