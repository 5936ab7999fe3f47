use std::ops::{Add, Div, Mul, Sub};

use crate::simd::traits::SimdVec;
use crate::simd::{LANE_COUNT, SIMD_ALIGNMENT};
use crate::utils::is_aligned;

/// Portable 4-lane group for targets without SSE or NEON.
///
/// Each operator is a fixed-length loop over the lanes, which the compiler
/// is free to vectorize for whatever the target offers.
#[derive(Copy, Clone, Debug)]
#[repr(C, align(16))]
pub struct F32x4 {
    elements: [f32; LANE_COUNT],
}

impl F32x4 {
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        self.elements
    }

    #[inline(always)]
    fn zip_with(self, rhs: Self, op: impl Fn(f32, f32) -> f32) -> Self {
        let mut elements = [0.0f32; LANE_COUNT];
        for (lane, out) in elements.iter_mut().enumerate() {
            *out = op(self.elements[lane], rhs.elements[lane]);
        }
        Self { elements }
    }
}

impl From<[f32; LANE_COUNT]> for F32x4 {
    #[inline(always)]
    fn from(elements: [f32; LANE_COUNT]) -> Self {
        Self { elements }
    }
}

impl SimdVec<f32> for F32x4 {
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(
            is_aligned(ptr, SIMD_ALIGNMENT),
            "Pointer must be 16-byte aligned"
        );

        Self {
            elements: std::ptr::read(ptr as *const [f32; LANE_COUNT]),
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: std::ptr::read_unaligned(ptr as *const [f32; LANE_COUNT]),
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        assert!(!ptr.is_null(), "Pointer must not be null");

        std::ptr::write_unaligned(ptr as *mut [f32; LANE_COUNT], self.elements);
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a / b)
    }
}
