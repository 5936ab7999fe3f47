//! SSE implementation of the 4-lane `f32` group.
//!
//! `__m128` holds 4 × f32. Every x86_64 CPU has SSE and SSE2, and the build
//! script only selects this module when rustc reports the `sse` target
//! feature, so no runtime detection is needed.
//!
//! `movaps`/`addps`/`subps`/`mulps`/`divps` are reached through the
//! `_mm_*_ps` intrinsics rather than inline assembly, which lets the
//! compiler allocate registers and keep the loops tight.

pub mod f32x4;
