//! Property-based tests for extended arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{ExtInteger, ExtRational, InfRational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = ExtRational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| ExtRational::new(n, d))
    }

    fn extended() -> impl Strategy<Value = ExtRational> {
        prop_oneof![
            8 => rational(),
            1 => Just(ExtRational::POSITIVE_INFINITY),
            1 => Just(ExtRational::NEGATIVE_INFINITY),
        ]
    }

    fn ext_integer() -> impl Strategy<Value = ExtInteger> {
        prop_oneof![
            4 => any::<i64>().prop_map(ExtInteger::new),
            1 => Just(ExtInteger::new(i64::MAX)),
            1 => Just(ExtInteger::new(i64::MIN)),
            1 => Just(ExtInteger::new(0)),
            1 => Just(ExtInteger::POSITIVE_INFINITY),
            1 => Just(ExtInteger::NEGATIVE_INFINITY),
        ]
    }

    /// The exact result clamped to the extended range.
    fn clamp(value: i128) -> ExtInteger {
        if value > i128::from(i64::MAX) {
            ExtInteger::POSITIVE_INFINITY
        } else if value < i128::from(i64::MIN) {
            ExtInteger::NEGATIVE_INFINITY
        } else {
            ExtInteger::new(i64::try_from(value).unwrap())
        }
    }

    proptest! {
        // Normalization

        #[test]
        fn rational_scaled_fraction_is_equal(
            num in small_int(),
            den in non_zero_int(),
            k in non_zero_int()
        ) {
            prop_assert_eq!(ExtRational::new(num, den), ExtRational::new(num * k, den * k));
        }

        #[test]
        fn rational_denominator_is_positive(num in small_int(), den in non_zero_int()) {
            let r = ExtRational::new(num, den);
            prop_assert!(r.denominator() > dashu::integer::UBig::ZERO);
        }

        // Field axioms on the finite part

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_sub_inverts_add(a in rational(), b in rational()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = ExtRational::new(num, den);
            prop_assert_eq!(&a * a.recip(), ExtRational::ONE);
        }

        // Infinities

        #[test]
        fn infinities_bound_everything(a in rational()) {
            prop_assert!(ExtRational::NEGATIVE_INFINITY < a);
            prop_assert!(a < ExtRational::POSITIVE_INFINITY);
        }

        #[test]
        fn infinity_absorbs_finite(a in rational()) {
            prop_assert_eq!(ExtRational::POSITIVE_INFINITY + &a, ExtRational::POSITIVE_INFINITY);
            prop_assert_eq!(&a - ExtRational::POSITIVE_INFINITY, ExtRational::NEGATIVE_INFINITY);
        }

        #[test]
        fn checked_ops_never_panic(a in extended(), b in extended()) {
            // either a value or an indeterminate form, never a panic
            let _ = a.checked_add(&b);
            let _ = a.checked_sub(&b);
            let _ = a.checked_mul(&b);
            let _ = a.checked_div(&b);
        }

        #[test]
        fn negation_reverses_order(a in extended(), b in extended()) {
            prop_assert_eq!(a.cmp(&b), (-&b).cmp(&-&a));
        }

        // Extended integers

        #[test]
        fn integer_matches_i64_when_in_range(a in small_int(), b in small_int()) {
            prop_assert_eq!(ExtInteger::new(a) + ExtInteger::new(b), ExtInteger::new(a + b));
            prop_assert_eq!(ExtInteger::new(a) * ExtInteger::new(b), ExtInteger::new(a * b));
        }

        #[test]
        fn integer_checked_ops_never_panic(a in ext_integer(), b in ext_integer()) {
            let _ = a.checked_add(&b);
            let _ = a.checked_sub(&b);
            let _ = a.checked_mul(&b);
            let _ = a.checked_div(&b);
        }

        #[test]
        fn integer_finite_ops_saturate(
            a in prop_oneof![any::<i64>(), Just(i64::MIN), Just(i64::MAX)],
            b in prop_oneof![any::<i64>(), Just(i64::MIN), Just(i64::MAX), Just(-1i64)]
        ) {
            let (x, y) = (ExtInteger::new(a), ExtInteger::new(b));
            let (wa, wb) = (i128::from(a), i128::from(b));
            prop_assert_eq!(x.checked_add(&y).unwrap(), clamp(wa + wb));
            prop_assert_eq!(x.checked_sub(&y).unwrap(), clamp(wa - wb));
            prop_assert_eq!(x.checked_mul(&y).unwrap(), clamp(wa * wb));
            if b != 0 {
                prop_assert_eq!(x.checked_div(&y).unwrap(), clamp(wa / wb));
            }
        }

        #[test]
        fn integer_overflow_saturates(a in 1i64..1000i64) {
            prop_assert_eq!(ExtInteger::new(i64::MAX) * a + 1, ExtInteger::POSITIVE_INFINITY);
            prop_assert_eq!(ExtInteger::new(i64::MIN) - a, ExtInteger::NEGATIVE_INFINITY);
        }

        // Infinitesimals

        #[test]
        fn epsilon_below_every_positive(num in 1i64..1000i64, den in 1i64..1000i64) {
            let r = ExtRational::new(num, den);
            prop_assert!(InfRational::EPSILON < r);
            prop_assert!(InfRational::strict_upper_bound(r.clone()) < r);
            prop_assert!(InfRational::strict_lower_bound(r.clone()) > r);
        }

        #[test]
        fn inf_rational_order_is_lexicographic(
            a in rational(),
            b in rational(),
            c in rational(),
            d in rational()
        ) {
            let x = InfRational::new(a.clone(), b.clone());
            let y = InfRational::new(c.clone(), d.clone());
            prop_assert_eq!(x.cmp(&y), a.cmp(&c).then(b.cmp(&d)));
        }
    }
}
