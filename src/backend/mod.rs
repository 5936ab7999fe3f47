//! Data layouts the harness can benchmark.
//!
//! A [`Backend`] owns three things: how an input array is laid out in
//! memory, how it is filled with random values, and how the four kernels
//! run over it. The harness, report and driver are written once against
//! this trait.

use rand::Rng;

use crate::error::Result;
use crate::kernels::Operation;

pub mod simd;
pub mod sisd;

pub use simd::{Simd, VectorArray};
pub use sisd::{FloatArray, Sisd};

pub trait Backend {
    /// Label written on the `Typ obliczen:` line of each report block.
    const LABEL: &'static str;

    /// File the driver writes to when no other path is configured.
    const OUTPUT_FILE: &'static str;

    type Array;

    /// Allocates and fills one array for `count` requested scalars.
    fn generate<R: Rng>(count: usize, rng: &mut R) -> Result<Self::Array>;

    /// Runs one full pass of `op`, `z = x op y`.
    fn apply(op: Operation, x: &Self::Array, y: &Self::Array, z: &mut Self::Array);
}
