//! Aligned buffers for vector loads and stores.
//!
//! Slice loads through [`Simd::try_from_slice`](crate::vector::Simd) are
//! unaligned and always correct; these helpers exist for callers that want
//! their data cache-line aligned so the loads hit the aligned fast path.

use aligned_vec::{AVec, ConstAlign};

/// Alignment used for vector buffers: one cache line, which also satisfies
/// every vector width in the crate.
pub const VECTOR_ALIGN: usize = 64;

/// A growable buffer whose storage is aligned to [`VECTOR_ALIGN`].
pub type AlignedBuf<T> = AVec<T, ConstAlign<VECTOR_ALIGN>>;

/// Empty aligned buffer with room for `capacity` elements.
pub fn aligned_buf<T>(capacity: usize) -> AlignedBuf<T> {
    AVec::with_capacity(VECTOR_ALIGN, capacity)
}

/// Aligned copy of `data`.
pub fn aligned_from_slice<T: Clone>(data: &[T]) -> AlignedBuf<T> {
    AVec::from_slice(VECTOR_ALIGN, data)
}
