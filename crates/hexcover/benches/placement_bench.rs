//! Criterion benches for the placement pipeline and its hot stages.
//!
//! - full solve on a square room, an L-shaped floor and random star rooms;
//! - seed lattice, coarse sample grid and coverage evaluation in isolation.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexcover::api::{
    draw_polygon_radial, hex_lattice, AreaReplay, Coverage, EvenOdd, LatticePhase, RadialCfg,
    Region, SampleSet, VertexCount,
};
use hexcover::prelude::*;

fn job(area: Polygon, exclusions: Vec<Polygon>, radius: f64) -> PlacementInput {
    PlacementInput {
        service_areas: vec![area],
        exclusions,
        scale: Some(1.0),
        radius,
        power: None,
        params: PlacementCfg::default(),
    }
}

fn l_floor() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(800.0, 0.0),
        Point::new(800.0, 400.0),
        Point::new(400.0, 400.0),
        Point::new(400.0, 800.0),
        Point::new(0.0, 800.0),
    ])
}

fn star_cfg() -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Uniform { min: 6, max: 14 },
        ..RadialCfg::default()
    }
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);
    let square = job(Polygon::rect(0.0, 0.0, 100.0, 100.0), Vec::new(), 30.0);
    group.bench_function(BenchmarkId::new("place_devices", "square-100"), |b| {
        b.iter(|| place_devices(&square))
    });
    let floor = job(
        l_floor(),
        vec![Polygon::rect(100.0, 100.0, 250.0, 250.0)],
        40.0,
    );
    group.bench_function(BenchmarkId::new("place_devices", "l-floor-800"), |b| {
        b.iter(|| place_devices(&floor))
    });
    group.bench_function(BenchmarkId::new("place_devices", "star-room"), |b| {
        b.iter_batched(
            || {
                let area = draw_polygon_radial(star_cfg(), AreaReplay { seed: 42, index: 0 });
                job(area, Vec::new(), 35.0)
            },
            |input| place_devices(&input),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let area = l_floor();
    let region = Region::new(&area, &[], EvenOdd);
    let r = 40.0;
    group.bench_function(BenchmarkId::new("hex_lattice", "l-floor"), |b| {
        b.iter(|| hex_lattice(&region, r, 0.9, LatticePhase::Even, 250_000))
    });
    group.bench_function(BenchmarkId::new("sample_grid", "fine"), |b| {
        b.iter(|| SampleSet::grid(&region, r, 0.35, 250_000))
    });
    let samples = SampleSet::grid(&region, r, 0.35, 250_000);
    let seeds = hex_lattice(&region, r, 0.9, LatticePhase::Even, 250_000);
    group.bench_function(BenchmarkId::new("coverage", "evaluate"), |b| {
        b.iter(|| Coverage::evaluate(&samples, &seeds.pts, r))
    });
    group.finish();
}

criterion_group!(benches, bench_solve, bench_stages);
criterion_main!(benches);
