use criterion::{Criterion, criterion_group, criterion_main};
use rotation_algebra::{Matrix3, Quaternion, Vector3, quaternion_from_rotation_matrix};
use std::hint::black_box;

fn rotation() -> Quaternion {
    Quaternion::new(0.5, -0.3, 0.7, 0.1).normalized().unwrap()
}

pub fn rotate_vector(c: &mut Criterion) {
    let quaternion = rotation();
    let vector = Vector3::new(1.0, -2.0, 3.0);
    c.bench_function("rotate_vector", |b| {
        b.iter(|| black_box(&quaternion).rotate(black_box(&vector)));
    });
}

pub fn mul_quaternion(c: &mut Criterion) {
    let a = rotation();
    let b = Quaternion::new(-0.2, 0.9, 0.1, 0.4);
    c.bench_function("mul_quaternion", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b));
    });
}

pub fn quaternion_to_rotation_matrix(c: &mut Criterion) {
    let quaternion = rotation();
    c.bench_function("quaternion_to_rotation_matrix", |b| {
        b.iter(|| black_box(&quaternion).to_rotation_matrix());
    });
}

pub fn rotation_matrix_to_quaternion(c: &mut Criterion) {
    // One matrix per branch of the conversion: largest trace, then largest
    // diagonal element at (0, 0), (1, 1) and (2, 2)
    let matrices = [
        ("trace", Quaternion::new(0.9, 0.1, 0.2, 0.3)),
        ("m00", Quaternion::new(0.1, 0.9, 0.2, 0.3)),
        ("m11", Quaternion::new(0.1, 0.2, 0.9, 0.3)),
        ("m22", Quaternion::new(0.1, 0.2, 0.3, 0.9)),
    ]
    .map(|(name, quaternion)| {
        let matrix: Matrix3 = quaternion.normalized().unwrap().to_rotation_matrix();
        (name, matrix)
    });

    let mut group = c.benchmark_group("rotation_matrix_to_quaternion");
    for (name, matrix) in &matrices {
        group.bench_function(*name, |b| {
            b.iter(|| quaternion_from_rotation_matrix(black_box(matrix)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    rotate_vector,
    mul_quaternion,
    quaternion_to_rotation_matrix,
    rotation_matrix_to_quaternion,
);
criterion_main!(benches);
