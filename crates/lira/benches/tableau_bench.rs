//! Benchmarks for extended rational arithmetic and tableau pivoting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use lira::prelude::*;

/// Builds `rows` dense rows over `cols` non-basic variables.
fn dense_tableau(rows: usize, cols: usize) -> (Tableau, Vec<VarId>, Vec<VarId>) {
    let config = TableauConfig::default().with_verify_invariants(false);
    let mut tableau = Tableau::with_config(config.with_var_capacity(rows + cols));
    let free: Vec<VarId> = (0..cols).map(|_| tableau.new_var()).collect();
    let basic: Vec<VarId> = (0..rows).map(|_| tableau.new_var()).collect();

    for (i, &b) in basic.iter().enumerate() {
        let terms = free.iter().enumerate().map(|(j, &v)| {
            let n = i64::try_from((i * 7 + j * 3) % 11).unwrap_or(0) - 5;
            (v, ExtRational::new(if n == 0 { 1 } else { n }, 3))
        });
        tableau.add_row(b, LinExpr::from_terms(terms, 1)).unwrap();
    }
    (tableau, basic, free)
}

fn bench_rational_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("ext_rational");

    let values: Vec<ExtRational> = (1..=64).map(|i| ExtRational::new(i, i + 1)).collect();

    group.bench_function("sum", |b| {
        b.iter(|| {
            values
                .iter()
                .fold(ExtRational::ZERO, |acc, v| acc + black_box(v))
        });
    });

    group.bench_function("product", |b| {
        b.iter(|| values.iter().fold(ExtRational::ONE, |acc, v| acc * black_box(v)));
    });

    group.finish();
}

fn bench_pivot(c: &mut Criterion) {
    let mut group = c.benchmark_group("tableau_pivot");

    for size in [4, 16, 64] {
        let (tableau, basic, free) = dense_tableau(size, size);

        group.bench_with_input(BenchmarkId::new("single", size), &size, |b, _| {
            b.iter_batched(
                || tableau.clone(),
                |mut t| {
                    t.pivot(basic[0], free[0]).unwrap();
                    black_box(t)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("diagonal", size), &size, |b, _| {
            b.iter_batched(
                || tableau.clone(),
                |mut t| {
                    for (&leaving, &entering) in basic.iter().zip(&free) {
                        // earlier pivots may cancel a term; skip those
                        if t.row(leaving).is_some_and(|row| row.contains(entering)) {
                            t.pivot(leaving, entering).unwrap();
                        }
                    }
                    black_box(t)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rational_arithmetic, bench_pivot);
criterion_main!(benches);
