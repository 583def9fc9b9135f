//! Criterion benchmarks for the fipath_core projection engine
//!
//! Run with: cargo bench -p fipath_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fipath_core::config::{HoldingRecord, PlanBuilder, PlanConfig};
use fipath_core::model::TaxStatus;
use fipath_core::simulation::run_simulation;

fn wide_plan(assets: usize) -> PlanConfig {
    let mut builder = PlanBuilder::new().start_age(30).annual_spend(80_000.0);
    for i in 0..assets {
        builder = builder.holding(HoldingRecord::asset(
            format!("Asset {i}"),
            "Stock Market",
            50_000.0 + i as f64 * 1_000.0,
            500.0,
            0.06,
            match i % 3 {
                0 => TaxStatus::Taxable,
                1 => TaxStatus::Roth,
                _ => TaxStatus::PreTax,
            },
        ));
    }
    builder
        .holding(HoldingRecord::liability("Mortgage", 300_000.0, 0.04, 2_000.0))
        .event("Down Payment", 35, 50_000.0)
        .event("College", 48, 120_000.0)
        .build()
}

fn bench_full_horizon(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_horizon");

    for assets in [3, 10, 50] {
        let plan = wide_plan(assets);
        group.bench_with_input(BenchmarkId::from_parameter(assets), &plan, |b, plan| {
            b.iter(|| run_simulation(black_box(plan), 2025).unwrap());
        });
    }

    group.finish();
}

fn bench_example_plan(c: &mut Criterion) {
    let plan = PlanConfig::example();
    c.bench_function("example_plan", |b| {
        b.iter(|| run_simulation(black_box(&plan), 2025).unwrap());
    });
}

criterion_group!(benches, bench_full_horizon, bench_example_plan);
criterion_main!(benches);
