//! Criterion comparison of the scalar and 4-lane kernels.
//!
//! The text-file harness gives one averaged number per operation; this
//! bench gives criterion's full distribution for the same kernels on the
//! same sizes, plus `ndarray` as an outside baseline.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

use simdbench::backend::{Backend, Simd, Sisd};
use simdbench::{Operation, TEST_SIZES};

fn bench_kernels(c: &mut Criterion) {
    for &size in TEST_SIZES.iter() {
        let mut group = c.benchmark_group(format!("Kernels/{size}"));
        group.throughput(Throughput::Elements(size as u64));

        // Same seed for both layouts, so both see identical values.
        let mut rng = StdRng::seed_from_u64(12345);
        let xs = Sisd::generate(size, &mut rng).unwrap();
        let ys = Sisd::generate(size, &mut rng).unwrap();
        let mut zs = Sisd::generate(size, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(12345);
        let xv = Simd::generate(size, &mut rng).unwrap();
        let yv = Simd::generate(size, &mut rng).unwrap();
        let mut zv = Simd::generate(size, &mut rng).unwrap();

        let xa = Array1::from_vec(xs.as_slice().to_vec());
        let ya = Array1::from_vec(ys.as_slice().to_vec());

        for op in Operation::ALL {
            group.bench_function(BenchmarkId::new("SISD", op), |bencher| {
                bencher.iter(|| {
                    Sisd::apply(op, black_box(&xs), black_box(&ys), &mut zs);
                    black_box(&mut zs);
                });
            });

            group.bench_function(BenchmarkId::new("SIMD", op), |bencher| {
                bencher.iter(|| {
                    Simd::apply(op, black_box(&xv), black_box(&yv), &mut zv);
                    black_box(&mut zv);
                });
            });

            // ndarray allocates its output on every call
            group.bench_function(BenchmarkId::new("ndarray", op), |bencher| {
                bencher.iter(|| match op {
                    Operation::Add => black_box(&xa + &ya),
                    Operation::Sub => black_box(&xa - &ya),
                    Operation::Mul => black_box(&xa * &ya),
                    Operation::Div => black_box(&xa / &ya),
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
