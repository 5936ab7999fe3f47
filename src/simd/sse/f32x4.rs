#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::traits::SimdVec;
use crate::simd::{LANE_COUNT, SIMD_ALIGNMENT};
use crate::utils::is_aligned;

/// A SIMD vector of 4 32-bit floating point values held in an SSE register.
#[derive(Copy, Clone, Debug)]
#[repr(C, align(16))]
pub struct F32x4 {
    elements: __m128,
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
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f32) -> Self {
        debug_assert!(
            is_aligned(ptr, SIMD_ALIGNMENT),
            "Pointer must be 16-byte aligned"
        );

        Self {
            elements: _mm_load_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f32) -> Self {
        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        assert!(!ptr.is_null(), "Pointer must not be null");

        _mm_storeu_ps(ptr, self.elements);
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    // divps follows IEEE-754: x/0 is ±inf, 0/0 is NaN
    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_div_ps(self.elements, rhs.elements) },
        }
    }
}
