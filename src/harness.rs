//! Timing loop shared by every backend.
//!
//! For one input size the harness generates `x`, `y` and `z`, then runs
//! each of the four kernels once per iteration, timing every full pass on
//! its own. Per-operation samples are averaged with a plain arithmetic mean.

use std::hint::black_box;
use std::time::Instant;

use log::{debug, trace};
use rand::Rng;

use crate::backend::Backend;
use crate::error::{validation_error, Result};
use crate::kernels::Operation;
use crate::report::BenchmarkResult;

/// Source of elapsed-time measurements.
pub trait Stopwatch {
    /// Runs `f` and returns how long it took, in milliseconds.
    fn measure<F: FnOnce()>(&mut self, f: F) -> f64;
}

/// Monotonic wall-clock stopwatch backed by [`Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Stopwatch for WallClock {
    #[inline(always)]
    fn measure<F: FnOnce()>(&mut self, f: F) -> f64 {
        let start = Instant::now();
        f();
        start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Per-operation elapsed times, one sample per iteration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingSamples {
    samples: [Vec<f64>; 4],
}

impl TimingSamples {
    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            samples: std::array::from_fn(|_| Vec::with_capacity(iterations)),
        }
    }

    pub fn record(&mut self, op: Operation, elapsed_ms: f64) {
        self.samples[op.index()].push(elapsed_ms);
    }

    pub fn samples(&self, op: Operation) -> &[f64] {
        &self.samples[op.index()]
    }

    /// Mean of each operation's samples, in [`Operation::ALL`] order.
    pub fn averages(&self) -> [f64; 4] {
        Operation::ALL.map(|op| mean(self.samples(op)))
    }
}

/// Arithmetic mean, `sum / len`. NaN for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Benchmarks backend `B` for one input size.
///
/// # Arguments
///
/// * `count` - Requested number of scalar values per array
/// * `iterations` - Passes per operation; each pass is one sample
/// * `rng` - Generator for the three input arrays
/// * `stopwatch` - Clock used around each kernel pass
///
/// # Errors
///
/// Returns a validation error for `iterations == 0`, and allocation errors
/// from array generation.
pub fn measure<B, R, S>(
    count: usize,
    iterations: usize,
    rng: &mut R,
    stopwatch: &mut S,
) -> Result<BenchmarkResult>
where
    B: Backend,
    R: Rng,
    S: Stopwatch,
{
    if iterations == 0 {
        return Err(validation_error("iteration count must be at least 1"));
    }

    let x = B::generate(count, rng)?;
    let y = B::generate(count, rng)?;
    let mut z = B::generate(count, rng)?;

    let mut samples = TimingSamples::with_capacity(iterations);

    for iteration in 0..iterations {
        for op in Operation::ALL {
            let elapsed = stopwatch.measure(|| {
                B::apply(op, &x, &y, &mut z);
                black_box(&mut z);
            });
            samples.record(op, elapsed);
        }

        trace!("{} n={count} iteration {iteration} done", B::LABEL);
    }

    let result = BenchmarkResult::new(B::LABEL, count, samples.averages());

    debug!(
        "{} n={count}: + {:.6} - {:.6} * {:.6} / {:.6} ms",
        B::LABEL,
        result.average(Operation::Add),
        result.average(Operation::Sub),
        result.average(Operation::Mul),
        result.average(Operation::Div)
    );

    Ok(result)
}
