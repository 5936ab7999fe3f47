//! 4-lane `f32` vector type used by the SIMD backend.
//!
//! Exactly one implementation is compiled, chosen by `build.rs`:
//!
//! - `sse`: x86/x86_64 (`__m128`)
//! - `neon`: aarch64 (`float32x4_t`)
//! - `fallback`: everything else (`[f32; 4]`)
//!
//! All three expose the same [`F32x4`] type with `+ - * /` applied
//! lane-wise and a guaranteed 16-byte alignment.

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

#[cfg(fallback)]
pub mod fallback;

pub mod traits;

#[cfg(sse)]
pub use sse::f32x4::F32x4;

#[cfg(neon)]
pub use neon::f32x4::F32x4;

#[cfg(fallback)]
pub use fallback::f32x4::F32x4;

pub use traits::SimdVec;

/// Number of `f32` lanes in one [`F32x4`].
pub const LANE_COUNT: usize = 4;

/// Byte alignment of one [`F32x4`] and of every buffer of them.
pub const SIMD_ALIGNMENT: usize = 16;

const _: () = assert!(std::mem::align_of::<F32x4>() == SIMD_ALIGNMENT);
const _: () = assert!(std::mem::size_of::<F32x4>() == LANE_COUNT * std::mem::size_of::<f32>());
