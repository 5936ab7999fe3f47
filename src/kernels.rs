//! The four elementwise arithmetic kernels.
//!
//! A kernel maps two equally sized inputs onto an output of the same size,
//! `z[i] = x[i] op y[i]`. The same generic loop serves both backends: for
//! plain `f32` it runs one value per step, for [`F32x4`](crate::simd::F32x4)
//! it runs one 4-lane group per step and the operator works lane-wise.
//!
//! Division is never guarded. Zero or NaN divisors produce IEEE-754
//! infinities and NaN, exactly as the hardware does.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// One arithmetic operation of the benchmark, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    /// All operations in the order they are timed and reported.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
    ];

    /// Symbol used as the line prefix in reports.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Sub => '-',
            Operation::Mul => '*',
            Operation::Div => '/',
        }
    }

    /// Position of this operation inside [`Operation::ALL`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Element types the kernels can run over.
pub trait Arithmetic:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
}

impl<T> Arithmetic for T where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>
{
}

#[inline(always)]
fn elementwise<T: Copy>(x: &[T], y: &[T], z: &mut [T], op: impl Fn(T, T) -> T) {
    assert_eq!(x.len(), y.len(), "Vectors must be the same length");
    assert_eq!(x.len(), z.len(), "Output must be the same length as inputs");

    for ((out, &a), &b) in z.iter_mut().zip(x).zip(y) {
        *out = op(a, b);
    }
}

/// Runs one full pass of `op` over `x` and `y`, writing into `z`.
///
/// The operation is matched once, outside the loop, so each arm is its own
/// monomorphized loop with no per-element branching.
///
/// # Panics
///
/// Panics if the three slices do not have the same length.
#[inline]
pub fn apply<T: Arithmetic>(op: Operation, x: &[T], y: &[T], z: &mut [T]) {
    match op {
        Operation::Add => elementwise(x, y, z, |a, b| a + b),
        Operation::Sub => elementwise(x, y, z, |a, b| a - b),
        Operation::Mul => elementwise(x, y, z, |a, b| a * b),
        Operation::Div => elementwise(x, y, z, |a, b| a / b),
    }
}
