#![allow(unused_results)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vantage::camera::core::Camera;
use vantage::math::convert::EulerAngles;
use vantage::math::matrix::Matrix4;
use vantage::math::rotation::Rotation;
use vantage::math::vector::Vector3;

fn slerp_benchmark(c: &mut Criterion) {
    let a = Rotation::from_euler(EulerAngles::new(0.1, 0.4, -0.2));
    let b = Rotation::from_euler(EulerAngles::new(-0.7, 1.2, 0.5));
    c.bench_function("rotation_slerp", |bencher| {
        bencher.iter(|| black_box(a.slerp(b, black_box(0.37))))
    });
}

fn matrix_inverse_benchmark(c: &mut Criterion) {
    let m = Matrix4::from_rows([
        [4.0, 7.0, 2.0, 1.0],
        [3.0, 6.0, 1.0, -2.0],
        [2.0, 5.0, 3.0, 0.5],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    c.bench_function("matrix_inverse", |bencher| {
        bencher.iter(|| black_box(black_box(m).inverse()))
    });
}

fn orbit_translate_benchmark(c: &mut Criterion) {
    let mut camera =
        Camera::new(Vector3::new(0.0, 0.0, 10.0), Rotation::IDENTITY);
    if camera.look_at(Vector3::ZERO).is_ok() {
        camera.set_focus_locked(true);
    }
    c.bench_function("orbit_translate", |bencher| {
        bencher.iter(|| {
            camera.translate(
                black_box(Vector3::new(0.01, 0.005, 0.0)),
                true,
            );
            black_box(camera.position())
        })
    });
}

criterion_group!(
    benches,
    slerp_benchmark,
    matrix_inverse_benchmark,
    orbit_translate_benchmark
);
criterion_main!(benches);
