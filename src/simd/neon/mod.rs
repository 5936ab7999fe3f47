//! ARM NEON implementation of the 4-lane `f32` group.
//!
//! NEON is part of the AArch64 baseline, so every aarch64 target gets this
//! module. `float32x4_t` is a 128-bit register holding 4 × f32; loads and
//! stores through `vld1q`/`vst1q` accept any alignment.

pub mod f32x4;
