use std::alloc::Layout;

use crate::error::{allocation_error, layout_error, Result};

/// Allocates an empty `Vec<T>` with room for exactly `len` elements.
///
/// The buffer uses `T`'s own alignment, so types declared with
/// `#[repr(align(N))]` (or wrapping a vector register) come back N-byte
/// aligned without any pointer casting.
///
/// # Arguments
///
/// * `len` - Number of elements the buffer must hold without reallocating
///
/// # Errors
///
/// * [`BenchError::LayoutError`](crate::error::BenchError::LayoutError) if
///   `len * size_of::<T>()` overflows `isize`.
/// * [`BenchError::AllocationError`](crate::error::BenchError::AllocationError)
///   if the allocator refuses the request.
pub fn try_alloc_vec<T>(len: usize) -> Result<Vec<T>> {
    let align = std::mem::align_of::<T>();

    let layout = Layout::array::<T>(len)
        .map_err(|_| layout_error(len, align, "element count overflows the address space"))?;

    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|err| allocation_error(layout.size(), align, err.to_string()))?;

    Ok(vec)
}

/// Checks whether `ptr` is a multiple of `align` bytes.
#[inline(always)]
pub fn is_aligned<T>(ptr: *const T, align: usize) -> bool {
    (ptr as usize) % align == 0
}
