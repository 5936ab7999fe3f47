#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::traits::SimdVec;
use crate::simd::{LANE_COUNT, SIMD_ALIGNMENT};
use crate::utils::is_aligned;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
#[repr(C, align(16))]
pub struct F32x4 {
    elements: float32x4_t,
}

impl F32x4 {
    /// Copies the four lanes out into an array.
    #[inline(always)]
    pub fn to_array(self) -> [f32; LANE_COUNT] {
        let mut out = [0.0f32; LANE_COUNT];
        unsafe { self.store_at(out.as_mut_ptr()) };
        out
    }
}

impl From<[f32; LANE_COUNT]> for F32x4 {
    #[inline(always)]
    fn from(values: [f32; LANE_COUNT]) -> Self {
        unsafe { Self::load_unaligned(values.as_ptr()) }
    }
}

impl SimdVec<f32> for F32x4 {
    // vld1q has no alignment requirement, both loads use it
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(
            is_aligned(ptr, SIMD_ALIGNMENT),
            "Pointer must be 16-byte aligned"
        );

        Self {
            elements: vld1q_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1q_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        assert!(!ptr.is_null(), "Pointer must not be null");

        vst1q_f32(ptr, self.elements);
    }
}

/// Implementing the arithmetic operators for F32x4
/// This allows for using `+ - * /` directly on 4-lane groups.
impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vdivq_f32(self.elements, rhs.elements) },
        }
    }
}
