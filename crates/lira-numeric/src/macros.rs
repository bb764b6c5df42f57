//! Operator boilerplate shared by the extended numeric types.
//!
//! Each type provides `checked_*(&self, &Self) -> ArithResult<Self>` and a
//! `From<i64>` conversion; these macros derive the by-value, by-reference,
//! mixed-`i64` and compound-assignment operator impls from them.

macro_rules! forward_binops {
    ($ty:ty; $($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $checked:ident;)+) => {$(
        impl std::ops::$trait for $ty {
            type Output = $ty;

            #[track_caller]
            fn $method(self, rhs: $ty) -> $ty {
                crate::error::fatal(self.$checked(&rhs))
            }
        }

        impl std::ops::$trait<&$ty> for $ty {
            type Output = $ty;

            #[track_caller]
            fn $method(self, rhs: &$ty) -> $ty {
                crate::error::fatal(self.$checked(rhs))
            }
        }

        impl std::ops::$trait<$ty> for &$ty {
            type Output = $ty;

            #[track_caller]
            fn $method(self, rhs: $ty) -> $ty {
                crate::error::fatal(self.$checked(&rhs))
            }
        }

        impl std::ops::$trait<&$ty> for &$ty {
            type Output = $ty;

            #[track_caller]
            fn $method(self, rhs: &$ty) -> $ty {
                crate::error::fatal(self.$checked(rhs))
            }
        }

        impl std::ops::$trait<i64> for $ty {
            type Output = $ty;

            #[track_caller]
            fn $method(self, rhs: i64) -> $ty {
                crate::error::fatal(self.$checked(&<$ty>::from(rhs)))
            }
        }

        impl std::ops::$trait<i64> for &$ty {
            type Output = $ty;

            #[track_caller]
            fn $method(self, rhs: i64) -> $ty {
                crate::error::fatal(self.$checked(&<$ty>::from(rhs)))
            }
        }

        impl std::ops::$trait<$ty> for i64 {
            type Output = $ty;

            #[track_caller]
            fn $method(self, rhs: $ty) -> $ty {
                crate::error::fatal(<$ty>::from(self).$checked(&rhs))
            }
        }

        impl std::ops::$assign_trait for $ty {
            #[track_caller]
            fn $assign_method(&mut self, rhs: $ty) {
                *self = crate::error::fatal(self.$checked(&rhs));
            }
        }

        impl std::ops::$assign_trait<&$ty> for $ty {
            #[track_caller]
            fn $assign_method(&mut self, rhs: &$ty) {
                *self = crate::error::fatal(self.$checked(rhs));
            }
        }

        impl std::ops::$assign_trait<i64> for $ty {
            #[track_caller]
            fn $assign_method(&mut self, rhs: i64) {
                *self = crate::error::fatal(self.$checked(&<$ty>::from(rhs)));
            }
        }
    )+};
}

macro_rules! forward_i64_cmp {
    ($ty:ty) => {
        impl PartialEq<i64> for $ty {
            fn eq(&self, other: &i64) -> bool {
                *self == <$ty>::from(*other)
            }
        }

        impl PartialOrd<i64> for $ty {
            fn partial_cmp(&self, other: &i64) -> Option<std::cmp::Ordering> {
                Some(self.cmp(&<$ty>::from(*other)))
            }
        }

        impl PartialEq<$ty> for i64 {
            fn eq(&self, other: &$ty) -> bool {
                <$ty>::from(*self) == *other
            }
        }

        impl PartialOrd<$ty> for i64 {
            fn partial_cmp(&self, other: &$ty) -> Option<std::cmp::Ordering> {
                Some(<$ty>::from(*self).cmp(other))
            }
        }
    };
}
