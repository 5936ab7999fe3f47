/// Load/store surface shared by every 4-lane register wrapper.
///
/// Arithmetic goes through the `std::ops` operators (`+ - * /`), which each
/// implementation maps onto its native lane-wise instruction.
pub trait SimdVec<T>: Copy {
    /// Loads `LANE_COUNT` elements from an aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANE_COUNT` reads and aligned to
    /// `SIMD_ALIGNMENT` bytes.
    unsafe fn load_aligned(ptr: *const T) -> Self;

    /// Loads `LANE_COUNT` elements from a pointer with no alignment
    /// requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANE_COUNT` reads.
    unsafe fn load_unaligned(ptr: *const T) -> Self;

    /// Stores all lanes at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for `LANE_COUNT` writes.
    unsafe fn store_at(&self, ptr: *mut T);
}
