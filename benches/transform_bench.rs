use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array1;

use _rust::batch::from_rd_array;
use _rust::proj::ellipsoid::ETRS89;
use _rust::proj::geocentric::{geocentric_to_geodetic, geodetic_to_geocentric};
use _rust::proj::polynomial::bessel_arcseconds;
use _rust::{from_rd, GeodeticCoordinate, SolverConfig};

fn make_columns(n: usize) -> (Array1<f64>, Array1<f64>, Array1<f64>) {
    let x = Array1::from_iter((0..n).map(|i| -7.0 + 307.0 * (i as f64 / n as f64)));
    let y = Array1::from_iter((0..n).map(|i| 289.0 + 340.0 * ((i * 7919 % n) as f64 / n as f64)));
    let h = Array1::from_iter((0..n).map(|i| (i % 100) as f64 - 10.0));
    (x, y, h)
}

fn bench_single_point(c: &mut Criterion) {
    c.bench_function("from_rd_single", |b| {
        b.iter(|| from_rd(black_box(155.0), black_box(463.0), black_box(Some(10.0))).unwrap())
    });
}

fn bench_stages(c: &mut Criterion) {
    c.bench_function("polynomial_series", |b| {
        b.iter(|| bessel_arcseconds(black_box(0.42), black_box(-0.37)))
    });

    let config = SolverConfig::default();
    let xyz = geodetic_to_geocentric(&GeodeticCoordinate::new(52.1, 5.3, 40.0), &ETRS89);
    c.bench_function("geocentric_to_geodetic", |b| {
        b.iter(|| geocentric_to_geodetic(black_box(&xyz), &ETRS89, &config).unwrap())
    });
}

fn bench_batch(c: &mut Criterion) {
    for &n in &[1_000, 100_000, 1_000_000] {
        let (x, y, h) = make_columns(n);
        c.bench_function(&format!("from_rd_array_{n}"), |b| {
            b.iter(|| black_box(from_rd_array(x.view(), y.view(), Some(h.view())).unwrap()))
        });
    }
}

criterion_group!(benches, bench_single_point, bench_stages, bench_batch);
criterion_main!(benches);
