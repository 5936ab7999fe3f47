//! Fixed-format result blocks.
//!
//! One block per (backend, input size):
//!
//! ```text
//! Typ obliczen: SISD
//! Liczba liczb: 2048
//! Sredni czas [ms]:
//! + 0.001200
//! - 0.001100
//! * 0.001150
//! / 0.002300
//!
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::kernels::Operation;

/// Averaged timings of one backend for one input size.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    label: &'static str,
    count: usize,
    averages: [f64; 4],
}

impl BenchmarkResult {
    /// `averages` are in milliseconds, indexed by [`Operation::index`].
    pub fn new(label: &'static str, count: usize, averages: [f64; 4]) -> Self {
        Self {
            label,
            count,
            averages,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Requested element count (before any grouping).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean elapsed time of `op` in milliseconds.
    pub fn average(&self, op: Operation) -> f64 {
        self.averages[op.index()]
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Typ obliczen: {}", self.label)?;
        writeln!(f, "Liczba liczb: {}", self.count)?;
        writeln!(f, "Sredni czas [ms]:")?;
        for op in Operation::ALL {
            writeln!(f, "{} {:.6}", op.symbol(), self.average(op))?;
        }
        writeln!(f)
    }
}

/// Appends one block for `result` to `out`.
pub fn write_report<W: Write>(out: &mut W, result: &BenchmarkResult) -> io::Result<()> {
    write!(out, "{result}")
}
