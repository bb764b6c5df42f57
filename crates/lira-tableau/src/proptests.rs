//! Property-based tests for pivoting.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use lira_linear::{LinExpr, VarId};
    use lira_numeric::ExtRational;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::{Tableau, TableauConfig};

    const FREE: usize = 5;

    fn row() -> impl Strategy<Value = (Vec<i64>, i64)> {
        (vec(-3i64..=3i64, FREE), -5i64..=5i64)
    }

    fn build(rows: &[(Vec<i64>, i64)]) -> Tableau {
        let mut t = Tableau::with_config(TableauConfig::default().with_verify_invariants(true));
        let free: Vec<VarId> = (0..FREE).map(|_| t.new_var()).collect();
        for (coeffs, constant) in rows {
            let basic = t.new_var();
            let terms = free
                .iter()
                .zip(coeffs)
                .map(|(&v, &c)| (v, ExtRational::from(c)));
            t.add_row(basic, LinExpr::from_terms(terms, *constant)).unwrap();
        }
        t
    }

    /// Values of all variables from the values of the non-basic ones.
    fn complete(
        t: &Tableau,
        values: &BTreeMap<VarId, ExtRational>,
    ) -> BTreeMap<VarId, ExtRational> {
        let free: BTreeMap<VarId, ExtRational> = values
            .iter()
            .filter(|(v, _)| !t.is_basic(**v))
            .map(|(v, value)| (*v, value.clone()))
            .collect();
        let mut all = free.clone();
        all.extend(
            t.evaluate_basic(|v| free.get(&v).cloned().unwrap_or_default())
                .unwrap(),
        );
        all
    }

    /// Watch lists are the transpose of the row terms.
    fn watches_are_transpose(t: &Tableau) -> bool {
        (0..t.num_vars()).all(|i| {
            let var = VarId::new(u32::try_from(i).unwrap());
            let watchers = t.watches(var).unwrap();
            let expected: Vec<VarId> = t
                .rows()
                .filter(|(_, row)| row.contains(var))
                .map(|(basic, _)| basic)
                .collect();
            watchers.len() == expected.len() && expected.iter().all(|b| watchers.contains(b))
        })
    }

    proptest! {
        #[test]
        fn pivots_preserve_invariants_and_solutions(
            rows in vec(row(), 1..4),
            values in vec(-4i64..=4i64, FREE),
            steps in vec((any::<usize>(), any::<usize>()), 0..8)
        ) {
            let mut t = build(&rows);
            let seed: BTreeMap<VarId, ExtRational> = values
                .iter()
                .enumerate()
                .map(|(i, &v)| (VarId::new(u32::try_from(i).unwrap()), ExtRational::from(v)))
                .collect();
            let expected = complete(&t, &seed);

            for (a, b) in steps {
                let basics: Vec<VarId> = t.basic_vars().collect();
                let leaving = basics[a % basics.len()];
                let terms: Vec<VarId> = t.row(leaving).unwrap().vars().collect();
                if terms.is_empty() {
                    continue;
                }
                let entering = terms[b % terms.len()];

                prop_assert!(t.pivot(leaving, entering).is_ok());
                prop_assert!(t.is_basic(entering) && !t.is_basic(leaving));
                prop_assert!(t.check_invariants().is_ok());
                prop_assert!(watches_are_transpose(&t));
                prop_assert_eq!(complete(&t, &expected), expected.clone());
            }

            prop_assert_eq!(t.num_rows(), rows.len());
        }
    }
}
