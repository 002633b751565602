//! Generic algorithms over vectors: lane visitation, in-register sorting,
//! and sorted-run merging.
//!
//! The sorting entry points are bitonic networks driven entirely by
//! [`swap_adjacent`](crate::traits::SimdLanes::swap_adjacent) and masked
//! min/max selection, so one generic body serves every (element, width) row.
//! The network shape depends only on the lane count and is fixed at compile
//! time.

use crate::mask::Direction;
use crate::traits::{SimdCompare, SimdElement, SimdLanes};
use crate::vector::Simd;
use crate::width::VectorWidth;

/// Visit every lane of `v` in `dir` order, passing the lane index and value.
///
/// The visitor returns `true` to continue and `false` to stop the walk
/// early. It is returned to the caller afterwards, so accumulating state
/// can be recovered.
pub fn for_each_lane<T, W, F>(v: Simd<T, W>, dir: Direction, mut visit: F) -> F
where
    T: SimdElement<W>,
    W: VectorWidth,
    F: FnMut(usize, T) -> bool,
{
    let lanes = v.to_lanes();
    let lanes = lanes.as_ref();
    match dir {
        Direction::Ascending => {
            for (i, &lane) in lanes.iter().enumerate() {
                if !visit(i, lane) {
                    break;
                }
            }
        }
        Direction::Descending => {
            for (i, &lane) in lanes.iter().enumerate().rev() {
                if !visit(i, lane) {
                    break;
                }
            }
        }
    }
    visit
}

/// Mask vector whose lane `i` is all-ones when `((i & j) != 0) != ((i & k)
/// != 0)`, the lane-selection predicate of the bitonic network stages.
fn stage_mask<T, W>(j: usize, k: usize) -> Simd<T, W>
where
    T: SimdLanes<W>,
    W: VectorWidth,
{
    let set = Simd::<T, W>::ones().extract::<0>();
    let mut lanes = T::to_lanes(T::zero());
    for (i, lane) in lanes.as_mut().iter_mut().enumerate() {
        if ((i & j) != 0) != ((i & k) != 0) {
            *lane = set;
        }
    }
    Simd::from_lanes(lanes)
}

/// One compare-exchange stage: pair lanes across stride `j`, direction
/// alternating per `k`-block, maxima landing on the mask side.
fn compare_exchange<T, W>(v: Simd<T, W>, j: usize, k: usize) -> Simd<T, W>
where
    T: SimdLanes<W> + SimdCompare<W>,
    W: VectorWidth,
{
    let partner = v.swap_adjacent(j);
    let maxs = v.simd_max(partner);
    let mins = v.simd_min(partner);
    stage_mask::<T, W>(j, k).blend(maxs, mins)
}

/// Sort the lanes of `v` ascending, lane 0 smallest.
///
/// Bitonic sorting network: `log2(LANES) * (log2(LANES) + 1) / 2`
/// compare-exchange stages, no branches on lane values. Like any sorting
/// network this is not stable; duplicate values may not keep their original
/// relative lane order.
///
/// NaN lanes make float ordering unreliable; callers sorting floats are
/// expected to have screened NaN out, e.g. with a
/// [`simd_eq`](Simd::simd_eq) self-comparison.
pub fn sort_lanes<T, W>(v: Simd<T, W>) -> Simd<T, W>
where
    T: SimdLanes<W> + SimdCompare<W>,
    W: VectorWidth,
{
    let mut v = v;
    let mut k = 2;
    while k <= T::LANES {
        let mut j = k / 2;
        while j >= 1 {
            v = compare_exchange(v, j, k);
            j /= 2;
        }
        k *= 2;
    }
    v
}

/// Merge step of the network: `v` must be bitonic; the result is sorted
/// ascending.
fn bitonic_merge<T, W>(v: Simd<T, W>) -> Simd<T, W>
where
    T: SimdLanes<W> + SimdCompare<W>,
    W: VectorWidth,
{
    let mut v = v;
    let mut j = T::LANES / 2;
    while j >= 1 {
        v = compare_exchange(v, j, 0);
        j /= 2;
    }
    v
}

/// Merge two sorted vectors into one sorted run of `2 * LANES` values.
///
/// Both inputs must be sorted ascending. The result's lower half comes back
/// in the first vector and the upper half in the second, each sorted, with
/// every lane of the first `<=` every lane of the second.
pub fn merge_sorted<T, W>(a: Simd<T, W>, b: Simd<T, W>) -> (Simd<T, W>, Simd<T, W>)
where
    T: SimdLanes<W> + SimdCompare<W>,
    W: VectorWidth,
{
    // Reversing b makes the concatenation bitonic; one min/max pass then
    // splits it into a low half and a high half, each bitonic.
    let rb = b.reverse_lanes();
    let lo = a.simd_min(rb);
    let hi = a.simd_max(rb);
    (bitonic_merge(lo), bitonic_merge(hi))
}
