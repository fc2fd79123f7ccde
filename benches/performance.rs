use criterion::{black_box, criterion_group, criterion_main, Criterion};

// We can't easily benchmark the GUI parts, but we can benchmark the per-frame
// float math by recreating the minimal version here

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Unit {
    amplitude: f32,
    speed: f32,
    phase: f32,
    noise: f32,
}

fn make_units(count: usize) -> Vec<Unit> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| Unit {
            amplitude: 6.0 + rng.gen_range(0.0..3.0),
            speed: 0.0018 + rng.gen_range(0.0..0.0007),
            phase: rng.gen_range(0.0..std::f32::consts::TAU),
            noise: 0.4,
        })
        .collect()
}

fn offset(unit: &Unit, t: f32) -> f32 {
    (t * unit.speed + unit.phase).sin() * unit.amplitude
        + (t * 0.0005 + unit.phase).sin() * unit.noise
}

fn benchmark_frame(c: &mut Criterion) {
    c.bench_function("float_tick_100_glyphs", |b| {
        let units = make_units(100);
        let mut t = 0.0f32;
        b.iter(|| {
            t += 16.7;
            let sum: f32 = units.iter().map(|unit| offset(unit, t)).sum();
            black_box(sum)
        })
    });
}

fn benchmark_long_session(c: &mut Criterion) {
    c.bench_function("float_tick_one_minute", |b| {
        let units = make_units(100);
        b.iter(|| {
            let mut sum = 0.0f32;
            // 60 fps for 60 seconds
            for frame in 0..3600u32 {
                let t = frame as f32 * 16.7;
                for unit in &units {
                    sum += offset(unit, t);
                }
            }
            black_box(sum)
        })
    });
}

fn benchmark_classify(c: &mut Criterion) {
    c.bench_function("classify_width_sweep", |b| {
        b.iter(|| {
            let mut desktop = 0u32;
            for width in 0..4000u32 {
                let width = width as f32;
                if width >= 1200.0 {
                    desktop += 1;
                } else if width > 865.0 {
                    black_box(width);
                }
            }
            black_box(desktop)
        })
    });
}

criterion_group!(benches, benchmark_frame, benchmark_long_session, benchmark_classify);
criterion_main!(benches);
