//! Scalar (SISD) vs 4-wide vector (SIMD) `f32` arithmetic benchmark.
//!
//! Both backends share one harness: generate three random arrays, time
//! `+ - * /` over them for a fixed number of iterations, average, and
//! append a fixed-format block to a results file.
//!
//! ```no_run
//! use simdbench::{driver, BenchConfig, Simd};
//!
//! let config = BenchConfig::for_backend::<Simd>();
//! driver::run::<Simd>(&config)?;
//! # Ok::<(), simdbench::error::BenchError>(())
//! ```

pub mod backend;
pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod harness;
pub mod kernels;
pub mod report;
pub mod simd;
pub mod utils;

pub use backend::{Backend, FloatArray, Simd, Sisd, VectorArray};
pub use config::BenchConfig;
pub use kernels::Operation;
pub use report::BenchmarkResult;

/// Input sizes benchmarked by the binaries, in report order.
pub const TEST_SIZES: [usize; 3] = [2048, 4096, 8192];

/// Timed passes per operation and input size.
pub const ITERATIONS: usize = 10;

pub const VALUE_MIN: f32 = -1.0e6;
pub const VALUE_MAX: f32 = 1.0e6;
