use log::warn;
use rand::Rng;

use crate::backend::Backend;
use crate::error::Result;
use crate::generator::random_value;
use crate::kernels::{self, Operation};
use crate::simd::{F32x4, SimdVec, LANE_COUNT};
use crate::utils::try_alloc_vec;

/// Vector backend: one 4-lane [`F32x4`] group per step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simd;

/// Owned, contiguous, 16-byte aligned buffer of 4-lane groups.
///
/// Alignment comes from the element type itself, so every group can be
/// loaded with an aligned vector load.
#[derive(Debug, Clone)]
pub struct VectorArray {
    groups: Vec<F32x4>,
}

/// Staging area for one group, aligned for `load_aligned`.
#[repr(C, align(16))]
struct AlignedLanes([f32; LANE_COUNT]);

impl VectorArray {
    /// Allocates `count / 4` groups of values drawn from `rng`.
    ///
    /// A `count` that is not a multiple of 4 loses its remainder: the
    /// trailing `count % 4` values are never generated or computed.
    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Result<Self> {
        let group_count = count / LANE_COUNT;
        let dropped = count % LANE_COUNT;

        if dropped != 0 {
            warn!(
                "{count} is not a multiple of {LANE_COUNT}; \
                 the last {dropped} value(s) are dropped ({group_count} groups)"
            );
        }

        let mut groups = try_alloc_vec(group_count)?;
        groups.extend((0..group_count).map(|_| {
            let mut lanes = AlignedLanes([0.0; LANE_COUNT]);
            for lane in lanes.0.iter_mut() {
                *lane = random_value(rng);
            }
            // SAFETY: `AlignedLanes` holds exactly LANE_COUNT f32s at 16-byte alignment.
            unsafe { F32x4::load_aligned(lanes.0.as_ptr()) }
        }));

        Ok(Self { groups })
    }

    /// Number of 4-lane groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of scalar values held, always `len() * 4`.
    pub fn lanes(&self) -> usize {
        self.groups.len() * LANE_COUNT
    }

    pub fn as_slice(&self) -> &[F32x4] {
        &self.groups
    }

    pub fn as_mut_slice(&mut self) -> &mut [F32x4] {
        &mut self.groups
    }

    pub fn as_ptr(&self) -> *const F32x4 {
        self.groups.as_ptr()
    }

    /// Flattens the groups back into lane order.
    pub fn to_scalars(&self) -> Vec<f32> {
        let mut out = vec![0.0f32; self.lanes()];
        for (group, chunk) in self.groups.iter().zip(out.chunks_exact_mut(LANE_COUNT)) {
            // SAFETY: every chunk is exactly LANE_COUNT writable f32s.
            unsafe { group.store_at(chunk.as_mut_ptr()) };
        }
        out
    }
}

impl From<&[f32]> for VectorArray {
    /// Packs full groups of 4 from `values`, dropping any remainder.
    fn from(values: &[f32]) -> Self {
        let groups = values
            .chunks_exact(LANE_COUNT)
            // SAFETY: `chunks_exact` yields exactly LANE_COUNT readable f32s.
            .map(|chunk| unsafe { F32x4::load_unaligned(chunk.as_ptr()) })
            .collect();

        Self { groups }
    }
}

impl Backend for Simd {
    const LABEL: &'static str = "SIMD";
    const OUTPUT_FILE: &'static str = "simd_wyniki_asm.txt";

    type Array = VectorArray;

    fn generate<R: Rng>(count: usize, rng: &mut R) -> Result<VectorArray> {
        VectorArray::random(count, rng)
    }

    #[inline]
    fn apply(op: Operation, x: &VectorArray, y: &VectorArray, z: &mut VectorArray) {
        kernels::apply(op, x.as_slice(), y.as_slice(), z.as_mut_slice());
    }
}
