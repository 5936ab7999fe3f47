use rand::Rng;

use crate::backend::Backend;
use crate::error::Result;
use crate::generator::random_value;
use crate::kernels::{self, Operation};
use crate::utils::try_alloc_vec;

/// Scalar backend: one `f32` per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sisd;

/// Owned, contiguous buffer of `f32` values.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatArray {
    data: Vec<f32>,
}

impl FloatArray {
    /// Allocates exactly `count` values drawn from `rng`.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Result<Self> {
        let mut data = try_alloc_vec(count)?;
        data.extend((0..count).map(|_| random_value(rng)));

        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

impl From<Vec<f32>> for FloatArray {
    fn from(data: Vec<f32>) -> Self {
        Self { data }
    }
}

impl Backend for Sisd {
    const LABEL: &'static str = "SISD";
    const OUTPUT_FILE: &'static str = "sisd_wyniki.txt";

    type Array = FloatArray;

    fn generate<R: Rng>(count: usize, rng: &mut R) -> Result<FloatArray> {
        FloatArray::random(count, rng)
    }

    #[inline]
    fn apply(op: Operation, x: &FloatArray, y: &FloatArray, z: &mut FloatArray) {
        kernels::apply(op, x.as_slice(), y.as_slice(), z.as_mut_slice());
    }
}
