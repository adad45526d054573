use std::f64::consts::TAU;
use std::fs::File;
use std::io::BufReader;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;

use ringlabel::geometry::geo_enums::AreaScaling;
use ringlabel::geometry::geo_traits::CollidesWith;
use ringlabel::geometry::primitives::{Point, Ring};
use ringlabel::io::ext_repr::ExtFixtureSet;
use ringlabel::io::import::import_fixture;
use ringlabel::label::LabelPlacer;
use ringlabel::util::LabelConfig;

criterion_main!(benches);
criterion_group!(benches, fixture_bench, star_bench);

const SHAPES_PATH: &str = "../assets/shapes.json";
const STAR_SIZES: [usize; 4] = [8, 64, 512, 4096];

/// Star shaped ring with `n_points` spikes around the origin.
fn star(n_points: usize) -> Ring {
    let n_vertices = 2 * n_points;
    let mut vertices = (0..n_vertices)
        .map(|i| {
            let angle = TAU * i as f64 / n_vertices as f64;
            let radius = if i % 2 == 0 { 10.0 } else { 2.0 };
            //one deep notch breaks the symmetry
            let radius = if i == 1 { 0.1 } else { radius };
            Point(radius * angle.cos(), radius * angle.sin())
        })
        .collect_vec();
    vertices.push(vertices[0]);
    Ring::new(vertices)
}

fn fixture_bench(c: &mut Criterion) {
    let file = File::open(SHAPES_PATH).unwrap();
    let fixture_set: ExtFixtureSet = serde_json::from_reader(BufReader::new(file)).unwrap();
    let placer = LabelPlacer::new(LabelConfig::planar());

    let mut group = c.benchmark_group("fixture_label_bench");
    for fixture in &fixture_set.fixtures {
        let ring = import_fixture(fixture);
        let name = fixture.name.clone().unwrap_or(fixture.id.to_string());
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| placer.place(&ring).ok())
        });
    }
    group.finish();
}

fn star_bench(c: &mut Criterion) {
    let placer = LabelPlacer::new(LabelConfig::planar());

    let mut group = c.benchmark_group("star_bench");
    for n_points in STAR_SIZES {
        let ring = star(n_points);
        group.bench_with_input(BenchmarkId::new("area", n_points), &ring, |b, ring| {
            b.iter(|| ring.area(AreaScaling::Planar))
        });
        group.bench_with_input(BenchmarkId::new("contains", n_points), &ring, |b, ring| {
            b.iter(|| ring.collides_with(&Point(0.5, 0.5)))
        });
        group.bench_with_input(BenchmarkId::new("label", n_points), &ring, |b, ring| {
            b.iter(|| placer.place(ring))
        });
    }
    group.finish();
}
