use criterion::{black_box, criterion_group, criterion_main, Criterion};

use routegeo::proj::datum::{NAD27_CONUS, WGS84};
use routegeo::{
    convert_datum, decode_polyline, distance, quick_distance, route::route_distances, Coordinate,
    PlanarProjection, TransverseMercator, UTM_K0,
};

const EXAMPLE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

fn make_route(n: usize) -> Vec<Coordinate> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Coordinate::new(37.0 + t * 5.0, -122.0 + t * 8.0)
        })
        .collect()
}

fn bench_distance(c: &mut Criterion) {
    let a = Coordinate::new(38.5, -120.2);
    let b = Coordinate::new(43.252, -126.453);

    c.bench_function("vincenty_distance", |bench| {
        bench.iter(|| black_box(distance(black_box(&a), black_box(&b), &WGS84).unwrap()))
    });
    c.bench_function("quick_distance", |bench| {
        bench.iter(|| {
            black_box(quick_distance(black_box(&a), black_box(&b), &WGS84.ellipsoid).unwrap())
        })
    });
}

fn bench_convert_datum(c: &mut Criterion) {
    let p = Coordinate::new(38.5, -120.2);
    c.bench_function("convert_datum_nad27_to_wgs84", |bench| {
        bench.iter(|| black_box(convert_datum(black_box(p), &NAD27_CONUS, &WGS84).unwrap()))
    });
}

fn bench_projection_throughput(c: &mut Criterion) {
    for &n in &[1_000, 100_000] {
        let route = make_route(n);
        let tm = TransverseMercator::new(Coordinate::new(39.5, -118.0), UTM_K0, &WGS84).unwrap();
        c.bench_function(&format!("transverse_mercator_{n}_points"), |bench| {
            bench.iter(|| black_box(tm.project_array(&route).unwrap()))
        });
    }
}

fn bench_route_distances(c: &mut Criterion) {
    let route = make_route(10_000);
    c.bench_function("route_distances_10k", |bench| {
        bench.iter(|| black_box(route_distances(&route, &WGS84).unwrap()))
    });
}

fn bench_decode_polyline(c: &mut Criterion) {
    let long = EXAMPLE.repeat(1_000);
    c.bench_function("decode_polyline_example", |bench| {
        bench.iter(|| black_box(decode_polyline(black_box(EXAMPLE)).unwrap()))
    });
    c.bench_function("decode_polyline_3k_points", |bench| {
        bench.iter(|| black_box(decode_polyline(black_box(&long)).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_distance,
    bench_convert_datum,
    bench_projection_throughput,
    bench_route_distances,
    bench_decode_polyline
);
criterion_main!(benches);
