//! Benchmarks for rental cost calculation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_decimal_macros::dec;

use rentflow_pricing::{build_payment_schedule, calculate_rental_costs};

fn bench_calculate(c: &mut Criterion) {
    c.bench_function("calculate_rental_costs/monthly", |b| {
        b.iter(|| {
            calculate_rental_costs(
                black_box(dec!(15000)),
                black_box(dec!(15000)),
                black_box(dec!(1000)),
                black_box("2024-01-16"),
                black_box(6),
                black_box("monthly"),
                black_box(dec!(500)),
            )
        })
    });

    c.bench_function("calculate_rental_costs/upfront", |b| {
        b.iter(|| {
            calculate_rental_costs(
                black_box(dec!(10000)),
                black_box(dec!(10000)),
                black_box(dec!(0)),
                black_box("2024-03-01"),
                black_box(12),
                black_box("upfront"),
                black_box(dec!(0)),
            )
        })
    });
}

fn bench_schedule(c: &mut Criterion) {
    let result = calculate_rental_costs(
        dec!(15000),
        dec!(15000),
        dec!(1000),
        "2024-01-16",
        24,
        "monthly",
        dec!(500),
    )
    .unwrap();

    c.bench_function("build_payment_schedule/24_months", |b| {
        b.iter(|| build_payment_schedule(black_box(&result)))
    });
}

criterion_group!(benches, bench_calculate, bench_schedule);
criterion_main!(benches);
