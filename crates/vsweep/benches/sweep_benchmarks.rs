//! Criterion benchmarks for vsweep
//!
//! Run with: cargo bench -p vsweep

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vsweep::{AdaptiveSweep, LinearSweep, LogSweep, Sweep, SweepConfig};

fn bench_linear_sweep(c: &mut Criterion) {
    c.bench_function("linear_10k_steps", |b| {
        b.iter(|| {
            LinearSweep::with_steps(black_box(0.0), black_box(1.0), 10_000)
                .run(|step| step.set_y(step.x.sin()))
        })
    });
}

fn bench_log_roundtrip(c: &mut Criterion) {
    c.bench_function("log_roundtrip_5_passes", |b| {
        b.iter(|| {
            LogSweep::with_max_step_factor(black_box(1e-3), black_box(1e3), 1.01)
                .map(|sweep| sweep.roundtrip(true).passes(5).run(|step| step.set_y(step.x.ln())))
        })
    });
}

fn bench_adaptive_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive");

    for nsteps in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("nsteps", nsteps), nsteps, |b, &nsteps| {
            b.iter(|| {
                AdaptiveSweep::new(black_box(-5.0), black_box(8.0), nsteps).map(|mut sweep| {
                    sweep.run(|step| {
                        let z = (step.x - 2.0) / 0.1;
                        step.set_y((-0.5 * z * z).exp());
                    })
                })
            })
        });
    }

    group.finish();
}

fn bench_config_build(c: &mut Criterion) {
    let yaml = "kind: linear\nstart: 0.0\nstop: 10.0\nmax_step_size: 0.01\nroundtrip: true\n";

    c.bench_function("config_parse_and_build", |b| {
        b.iter(|| {
            SweepConfig::from_yaml(black_box(yaml))
                .ok()
                .and_then(|config| config.build().ok())
                .map(|sweep| sweep.len())
        })
    });
}

criterion_group!(
    benches,
    bench_linear_sweep,
    bench_log_roundtrip,
    bench_adaptive_sweep,
    bench_config_build,
);
criterion_main!(benches);
