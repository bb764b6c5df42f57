//! Arithmetic errors and the indeterminate-form check shared by every
//! extended numeric type.

use std::fmt;

use thiserror::Error;

/// An arithmetic combination of infinities and zeros with no defined value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndeterminateForm {
    /// `+inf + -inf`
    PosInfPlusNegInf,
    /// `-inf + +inf`
    NegInfPlusPosInf,
    /// `+inf - +inf` or `-inf - -inf`
    InfMinusInf,
    /// `inf * 0`
    InfTimesZero,
    /// `0 * inf`
    ZeroTimesInf,
    /// `inf / inf`
    InfOverInf,
    /// `0 / 0`
    ZeroOverZero,
}

impl fmt::Display for IndeterminateForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = match self {
            Self::PosInfPlusNegInf => "+inf + -inf",
            Self::NegInfPlusPosInf => "-inf + +inf",
            Self::InfMinusInf => "inf - inf",
            Self::InfTimesZero => "inf * 0",
            Self::ZeroTimesInf => "0 * inf",
            Self::InfOverInf => "inf / inf",
            Self::ZeroOverZero => "0 / 0",
        };
        f.write_str(form)
    }
}

/// Errors raised by extended arithmetic.
///
/// Both variants are precondition violations: a caller that respects the
/// contracts of this crate never observes them. The operator traits turn
/// them into panics; the `checked_*` methods return them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithError {
    /// The operands form an indeterminate expression.
    #[error("indeterminate form: {0}")]
    Indeterminate(IndeterminateForm),

    /// The fraction `0/0` was requested as a literal value.
    #[error("undefined value: 0/0 is not a rational")]
    Undefined,
}

impl ArithError {
    /// Returns the indeterminate form, if this is one.
    #[must_use]
    pub fn form(&self) -> Option<IndeterminateForm> {
        match self {
            Self::Indeterminate(form) => Some(*form),
            Self::Undefined => None,
        }
    }
}

/// Result type for checked extended arithmetic.
pub type ArithResult<T> = Result<T, ArithError>;

/// Coarse classification of an extended value, enough to decide whether a
/// binary operation is defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Class {
    NegInfinity,
    Zero,
    Finite,
    PosInfinity,
}

impl Class {
    pub(crate) fn is_infinite(self) -> bool {
        matches!(self, Self::NegInfinity | Self::PosInfinity)
    }

    pub(crate) fn is_zero(self) -> bool {
        self == Self::Zero
    }
}

/// The four binary operators subject to indeterminate-form checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Rejects the indeterminate forms of `lhs op rhs`.
///
/// Every binary operator on `ExtInteger` and `ExtRational` goes through
/// here before computing anything.
pub(crate) fn validate(op: BinOp, lhs: Class, rhs: Class) -> ArithResult<()> {
    use Class::{NegInfinity, PosInfinity};

    let form = match op {
        BinOp::Add => match (lhs, rhs) {
            (PosInfinity, NegInfinity) => Some(IndeterminateForm::PosInfPlusNegInf),
            (NegInfinity, PosInfinity) => Some(IndeterminateForm::NegInfPlusPosInf),
            _ => None,
        },
        BinOp::Sub => match (lhs, rhs) {
            (PosInfinity, PosInfinity) | (NegInfinity, NegInfinity) => {
                Some(IndeterminateForm::InfMinusInf)
            }
            _ => None,
        },
        BinOp::Mul if lhs.is_infinite() && rhs.is_zero() => Some(IndeterminateForm::InfTimesZero),
        BinOp::Mul if lhs.is_zero() && rhs.is_infinite() => Some(IndeterminateForm::ZeroTimesInf),
        BinOp::Div if lhs.is_infinite() && rhs.is_infinite() => Some(IndeterminateForm::InfOverInf),
        BinOp::Div if lhs.is_zero() && rhs.is_zero() => Some(IndeterminateForm::ZeroOverZero),
        BinOp::Mul | BinOp::Div => None,
    };

    form.map_or(Ok(()), |form| Err(ArithError::Indeterminate(form)))
}

/// Unwraps the result of a checked operation inside an operator trait.
#[track_caller]
pub(crate) fn fatal<T>(result: ArithResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_add() {
        assert_eq!(
            validate(BinOp::Add, Class::PosInfinity, Class::NegInfinity),
            Err(ArithError::Indeterminate(IndeterminateForm::PosInfPlusNegInf))
        );
        assert!(validate(BinOp::Add, Class::PosInfinity, Class::PosInfinity).is_ok());
        assert!(validate(BinOp::Add, Class::PosInfinity, Class::Finite).is_ok());
    }

    #[test]
    fn test_validate_sub() {
        assert_eq!(
            validate(BinOp::Sub, Class::NegInfinity, Class::NegInfinity),
            Err(ArithError::Indeterminate(IndeterminateForm::InfMinusInf))
        );
        assert!(validate(BinOp::Sub, Class::PosInfinity, Class::NegInfinity).is_ok());
    }

    #[test]
    fn test_validate_mul_div() {
        assert_eq!(
            validate(BinOp::Mul, Class::Zero, Class::NegInfinity)
                .unwrap_err()
                .form(),
            Some(IndeterminateForm::ZeroTimesInf)
        );
        assert_eq!(
            validate(BinOp::Div, Class::Zero, Class::Zero)
                .unwrap_err()
                .form(),
            Some(IndeterminateForm::ZeroOverZero)
        );
        assert!(validate(BinOp::Div, Class::Finite, Class::Zero).is_ok());
        assert!(validate(BinOp::Div, Class::Finite, Class::PosInfinity).is_ok());
    }

    #[test]
    fn test_error_message() {
        let err = ArithError::Indeterminate(IndeterminateForm::InfOverInf);
        assert_eq!(err.to_string(), "indeterminate form: inf / inf");
    }
}
