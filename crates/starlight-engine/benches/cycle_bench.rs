// ─────────────────────────────────────────────────────────────────────
// Star Light Guide — Engine Cycle Benchmarks
// ─────────────────────────────────────────────────────────────────────
//! Criterion benchmarks for the cognitive cycle and the telemetry
//! physics transform.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use starlight_engine::{analyze, EngineConfig, StarLightEngine};
use starlight_types::{MonitoredService, PlatformState};

// ── StarLightEngine.run_cycle() ─────────────────────────────────────

fn bench_run_cycle_50(c: &mut Criterion) {
    let Ok(mut engine) = StarLightEngine::new(EngineConfig::default()) else {
        return;
    };
    let stimulus = engine.encode("latency spike in accountservice");
    c.bench_function("run_cycle_50d", |b| {
        b.iter(|| engine.run_cycle(black_box(&stimulus)))
    });
}

fn bench_run_cycle_512(c: &mut Criterion) {
    let cfg = EngineConfig {
        dimensions: 512,
        ..EngineConfig::default()
    };
    let Ok(mut engine) = StarLightEngine::new(cfg) else {
        return;
    };
    let stimulus = engine.encode("latency spike in accountservice");
    c.bench_function("run_cycle_512d", |b| {
        b.iter(|| engine.run_cycle(black_box(&stimulus)))
    });
}

// ── StarLightEngine.ingest() ────────────────────────────────────────

fn bench_ingest(c: &mut Criterion) {
    let Ok(mut engine) = StarLightEngine::new(EngineConfig::default()) else {
        return;
    };
    c.bench_function("ingest_5cycles", |b| {
        b.iter(|| engine.ingest(black_box("why is ledgerwriter slow?")))
    });
}

// ── analyze() ───────────────────────────────────────────────────────

fn platform(n: usize, latency: f64, error_rate: f64) -> PlatformState {
    PlatformState::from_services(
        (0..n)
            .map(|i| MonitoredService::new(format!("svc-{i}"), latency + i as f64, error_rate))
            .collect(),
    )
}

fn bench_analyze_20_services(c: &mut Criterion) {
    let prev = platform(20, 120.0, 0.2);
    let curr = platform(20, 180.0, 0.9);
    c.bench_function("analyze_20svc", |b| {
        b.iter(|| analyze(black_box(Some(&curr)), black_box(Some(&prev))))
    });
}

criterion_group!(
    benches,
    bench_run_cycle_50,
    bench_run_cycle_512,
    bench_ingest,
    bench_analyze_20_services,
);
criterion_main!(benches);
