//! Property-based tests for linear expressions.

#[cfg(test)]
mod tests {
    use lira_numeric::ExtRational;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::{LinExpr, VarId};

    fn coeff() -> impl Strategy<Value = ExtRational> {
        (-20i64..20i64, 1i64..10i64).prop_map(|(n, d)| ExtRational::new(n, d))
    }

    fn expr() -> impl Strategy<Value = LinExpr> {
        (vec((0u32..6u32, coeff()), 0..6), coeff()).prop_map(|(terms, constant)| {
            LinExpr::from_terms(
                terms.into_iter().map(|(v, c)| (VarId::new(v), c)),
                constant,
            )
        })
    }

    fn assignment() -> impl Strategy<Value = Vec<ExtRational>> {
        vec(coeff(), 6)
    }

    proptest! {
        #[test]
        fn no_zero_coefficients(e in expr()) {
            prop_assert!(e.terms().all(|(_, c)| !c.is_zero()));
        }

        #[test]
        fn add_then_sub_is_identity(a in expr(), b in expr()) {
            prop_assert_eq!((&a + &b) - &b, a);
        }

        #[test]
        fn add_commutative(a in expr(), b in expr()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_by_zero_is_zero(a in expr()) {
            prop_assert!((a * ExtRational::ZERO).is_zero());
        }

        #[test]
        fn add_scaled_matches_operators(a in expr(), b in expr(), k in coeff()) {
            let mut fused = a.clone();
            fused.add_scaled(&k, &b);
            prop_assert_eq!(fused, &a + &(&k * &b));
        }

        #[test]
        fn substitution_agrees_with_evaluation(
            e in expr(),
            r in expr(),
            v in 0u32..6u32,
            values in assignment()
        ) {
            let var = VarId::new(v);
            // a self-referencing replacement is only sound where var = r
            prop_assume!(!r.contains(var));

            let mut substituted = e.clone();
            substituted.substitute(var, &r);

            let lookup = |w: VarId| values[w.as_usize()].clone();
            let r_value = r.evaluate(lookup).unwrap();
            let expected = e
                .evaluate(|w| if w == var { r_value.clone() } else { lookup(w) })
                .unwrap();
            prop_assert_eq!(substituted.evaluate(lookup).unwrap(), expected);
        }

        #[test]
        fn evaluation_is_linear(a in expr(), b in expr(), values in assignment()) {
            let lookup = |w: VarId| values[w.as_usize()].clone();
            let sum = (&a + &b).evaluate(lookup).unwrap();
            prop_assert_eq!(sum, a.evaluate(lookup).unwrap() + b.evaluate(lookup).unwrap());
        }
    }
}
