//! Generic cross-lane reduction.
//!
//! [`horizontal_reduce`] folds every lane into one scalar with an arbitrary
//! lane-wise combiner in `log2(LANES)` steps instead of a linear pass: swap
//! the two vector halves and combine, then quarters, down to adjacent pairs,
//! after which every lane holds the full result and lane 0 is extracted.
//! The swap is the XOR-block permutation from
//! [`SimdLanes::swap_adjacent`](crate::traits::SimdLanes::swap_adjacent).
//!
//! The combiner must be associative and commutative for the tree order to
//! agree with a linear fold. Float addition is neither in the strict sense,
//! which is exactly why [`Simd::reduce_add`](crate::vector::Simd::reduce_add)
//! is its own trait method: it pins the tree shape per element type so a sum
//! is reproducible across runs, if not identical to a scalar loop.

use crate::traits::SimdLanes;
use crate::vector::Simd;
use crate::width::VectorWidth;

/// Fold all lanes of `v` into one scalar with `combine`.
///
/// `combine` receives the running vector and its block-swapped counterpart
/// and must combine them lane-wise.
pub fn horizontal_reduce<T, W, F>(v: Simd<T, W>, mut combine: F) -> T
where
    T: SimdLanes<W>,
    W: VectorWidth,
    F: FnMut(Simd<T, W>, Simd<T, W>) -> Simd<T, W>,
{
    let mut acc = v;
    let mut block = T::LANES / 2;
    while block >= 1 {
        let swapped = acc.swap_adjacent(block);
        acc = combine(acc, swapped);
        block /= 2;
    }
    acc.extract::<0>()
}
