use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use poker_payout::{
    PaymentField, PaymentLedger,
    report::render_payouts,
    tournament::{DEFAULT_WEIGHTS, compute_payouts},
};
use std::hint::black_box;

/// Helper to create a ledger with a mix of paid and unpaid players
fn setup_ledger(n_players: usize) -> PaymentLedger {
    let mut ledger = PaymentLedger::new(n_players);
    for i in 0..n_players {
        match i % 3 {
            0 => ledger.set_all_flag(i, true).unwrap(),
            1 => ledger.set_payment_flag(i, PaymentField::BuyIn, true).unwrap(),
            _ => ledger.set_eliminated(i, true).unwrap(),
        }
    }
    ledger
}

/// Benchmark payout computation with the default weights
fn bench_compute_payouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_payouts");
    for players in [3u32, 9, 30] {
        group.bench_with_input(BenchmarkId::from_parameter(players), &players, |b, &p| {
            b.iter(|| compute_payouts(black_box(p), 20.0, 5.0, 2.0, &DEFAULT_WEIGHTS));
        });
    }
    group.finish();
}

/// Benchmark payout computation with a long custom weight list
fn bench_compute_payouts_many_weights(c: &mut Criterion) {
    let weights: Vec<u32> = (1..=100).rev().collect();
    c.bench_function("compute_payouts_100_weights", |b| {
        b.iter(|| compute_payouts(black_box(300), 20.0, 5.0, 2.0, &weights));
    });
}

/// Benchmark ledger reconciliation
fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    for players in [9usize, 30, 1000] {
        let ledger = setup_ledger(players);
        group.bench_with_input(BenchmarkId::from_parameter(players), &ledger, |b, l| {
            b.iter(|| l.summarize(black_box(20.0), 5.0, 2.0));
        });
    }
    group.finish();
}

/// Benchmark text report rendering
fn bench_render_payouts(c: &mut Criterion) {
    let plan = compute_payouts(30, 20.0, 5.0, 2.0, &DEFAULT_WEIGHTS).unwrap();
    c.bench_function("render_payouts_30_players", |b| {
        b.iter(|| render_payouts(black_box(&plan), 30));
    });
}

criterion_group!(
    benches,
    bench_compute_payouts,
    bench_compute_payouts_many_weights,
    bench_summarize,
    bench_render_payouts
);
criterion_main!(benches);
