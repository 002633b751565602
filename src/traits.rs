//! Capability and per-operation traits defining the vector interface.
//!
//! These traits form the compile-time dispatch table of the crate: for every
//! supported (element type, width tag) pair there is exactly one impl per
//! operation family, provided in [`crate::portable`]. Requesting an
//! unimplemented combination, such as integer division, is a build error,
//! never a silent runtime fallback.
//!
//! Trait functions operate on the raw native container. Application code
//! should go through [`crate::vector::Simd`], which wraps these in operator
//! sugar; the trait surface is the extension point for new element/width
//! rows.

use crate::width::VectorWidth;
use std::fmt::Debug;

/// Fixed-size lane storage for an element type.
///
/// Always `[T; LANES]` in practice; the trait lets generic code slice into
/// lane arrays without const-generic plumbing on every signature.
pub trait LaneArray<T>: Copy + AsRef<[T]> + AsMut<[T]> {}

impl<T: Copy, const N: usize> LaneArray<T> for [T; N] {}

/// Capability row for one (element type, width tag) pair.
///
/// Describes the native container, the lane count, the bitmask granularity,
/// and the constructors every other operation builds on.
///
/// Invariant: `size_of::<Native>() == LANES * size_of::<Self>()`, and `LANES`
/// is a nonzero compile-time constant.
pub trait SimdElement<W: VectorWidth>:
    Copy + PartialEq + PartialOrd + Debug + Default + Send + Sync + 'static
{
    /// The hardware-backed vector container for this pair.
    type Native: Copy + Send + Sync;

    /// `[Self; LANES]`.
    type Lanes: LaneArray<Self>;

    /// Number of lanes in the native vector.
    const LANES: usize;

    /// Width in bits of one lane's run inside the packed bitmask.
    ///
    /// One bit per byte for sub-word integers (so 1 for `i8`, 2 for `i16`),
    /// one bit per lane for 32/64-bit integers and floats. This is the
    /// granularity the hardware movemask produces; index and iteration
    /// functions in [`crate::mask`] normalize it back to lane indices.
    const MASK_BITS_PER_LANE: usize;

    /// Total meaningful bits in this pair's bitmask.
    const MASK_BITS: usize = Self::LANES * Self::MASK_BITS_PER_LANE;

    /// Vector with every lane zero.
    fn zero() -> Self::Native;

    /// Vector with every bit set.
    ///
    /// This is the bitwise-NOT identity and the all-true comparison mask,
    /// not the value `1`. For floats the lane value is a NaN bit pattern.
    fn ones() -> Self::Native;

    /// Broadcast one scalar into every lane.
    fn splat(value: Self) -> Self::Native;

    /// Vector with lane `i` equal to `start + i` (wrapping for integers).
    fn sequence(start: Self) -> Self::Native;

    /// Build a vector from lanes in index order: element 0 becomes lane 0.
    fn from_lanes(lanes: Self::Lanes) -> Self::Native;

    /// Read the lanes back out in index order.
    fn to_lanes(v: Self::Native) -> Self::Lanes;
}

/// Lane-wise arithmetic.
pub trait SimdArith<W: VectorWidth>: SimdElement<W> {
    /// Lane-wise addition (wrapping for integers).
    fn add(a: Self::Native, b: Self::Native) -> Self::Native;

    /// Lane-wise subtraction (wrapping for integers).
    fn sub(a: Self::Native, b: Self::Native) -> Self::Native;

    /// Lane-wise multiplication keeping the low half of each product.
    fn mul_low(a: Self::Native, b: Self::Native) -> Self::Native;

    /// Sum of all lanes.
    ///
    /// Impls are free to use a hardware shuffle tree; the generic tree for
    /// arbitrary combiners lives in [`crate::reduce`].
    fn reduce_add(v: Self::Native) -> Self;
}

/// Operations specific to integer elements.
pub trait SimdInt<W: VectorWidth>: SimdArith<W> {
    /// Lane-wise multiplication keeping the high half of the widening
    /// product.
    fn mul_high(a: Self::Native, b: Self::Native) -> Self::Native;
}

/// Operations specific to floating-point elements.
///
/// Integer elements deliberately do not implement this trait, so integer
/// lane division is a compile error rather than a hidden scalar loop.
pub trait SimdFloat<W: VectorWidth>: SimdArith<W> {
    /// Lane-wise division.
    fn divide(a: Self::Native, b: Self::Native) -> Self::Native;
}

/// Lane-wise bitwise operations.
///
/// `bit_not` is intentionally absent: it is derived once, generically, as
/// `bit_xor(v, ones())` on the vector wrapper.
pub trait SimdBits<W: VectorWidth>: SimdElement<W> {
    /// Lane-wise AND.
    fn bit_and(a: Self::Native, b: Self::Native) -> Self::Native;

    /// Lane-wise OR.
    fn bit_or(a: Self::Native, b: Self::Native) -> Self::Native;

    /// Lane-wise XOR.
    fn bit_xor(a: Self::Native, b: Self::Native) -> Self::Native;
}

/// Lane-wise comparison, selection, and bitmask derivation.
pub trait SimdCompare<W: VectorWidth>: SimdElement<W> {
    /// Lane-wise `a > b`, producing all-ones lanes where true.
    ///
    /// For floats this is an ordered, quiet comparison: any comparison
    /// involving NaN is false, on every target.
    fn greater_than(a: Self::Native, b: Self::Native) -> Self::Native;

    /// Lane-wise `a == b`, producing all-ones lanes where true.
    ///
    /// Same NaN policy as [`greater_than`](Self::greater_than): `NaN == x`
    /// is false for every `x`, including NaN.
    fn equal_to(a: Self::Native, b: Self::Native) -> Self::Native;

    /// Bitwise select: where `mask` bits are set take `t`, else `f`.
    fn blend(mask: Self::Native, t: Self::Native, f: Self::Native) -> Self::Native;

    /// Pack a comparison result into a bitmask.
    ///
    /// The input must be a proper mask vector (all-ones or all-zeros lanes);
    /// bit runs follow [`SimdElement::MASK_BITS_PER_LANE`].
    fn to_bitmask(v: Self::Native) -> u32;
}

/// Lane access and cross-lane permutation.
///
/// Every method has a portable default over `to_lanes`/`from_lanes`; impls
/// are empty unless a row wants a hardware shuffle.
pub trait SimdLanes<W: VectorWidth>: SimdElement<W> {
    /// Read lane `index`. Panics if `index >= LANES`; the vector wrapper
    /// exposes a compile-time-checked and a `Result`-returning form instead.
    fn extract(v: Self::Native, index: usize) -> Self {
        Self::to_lanes(v).as_ref()[index]
    }

    /// Write `value` into lane `index`. Panics if `index >= LANES`.
    fn replace(v: Self::Native, index: usize, value: Self) -> Self::Native {
        let mut lanes = Self::to_lanes(v);
        lanes.as_mut()[index] = value;
        Self::from_lanes(lanes)
    }

    /// Swap adjacent blocks of `block` lanes: output lane `i` takes input
    /// lane `i ^ block`. `block` must be a power of two below `LANES`.
    ///
    /// This XOR permutation is the building block of the cross-lane
    /// reduction tree: halves for `block = LANES / 2`, quarters, down to
    /// adjacent pairs at `block = 1`.
    fn swap_adjacent(v: Self::Native, block: usize) -> Self::Native {
        debug_assert!(block.is_power_of_two() && block < Self::LANES);
        let src = Self::to_lanes(v);
        let mut out = src;
        {
            let (s, o) = (src.as_ref(), out.as_mut());
            for i in 0..Self::LANES {
                o[i] = s[i ^ block];
            }
        }
        Self::from_lanes(out)
    }

    /// Reverse lane order.
    fn reverse(v: Self::Native) -> Self::Native {
        let src = Self::to_lanes(v);
        let mut out = src;
        {
            let (s, o) = (src.as_ref(), out.as_mut());
            for i in 0..Self::LANES {
                o[i] = s[Self::LANES - 1 - i];
            }
        }
        Self::from_lanes(out)
    }

    /// Shift every lane down one position and insert `value` at the highest
    /// lane: output lane `i` takes input lane `i + 1`, and lane `LANES - 1`
    /// takes `value`. The building block for streaming a sequence through a
    /// fixed-width window from the top.
    fn shift_in_high(v: Self::Native, value: Self) -> Self::Native {
        let src = Self::to_lanes(v);
        let mut out = src;
        {
            let (s, o) = (src.as_ref(), out.as_mut());
            for i in 0..Self::LANES - 1 {
                o[i] = s[i + 1];
            }
            o[Self::LANES - 1] = value;
        }
        Self::from_lanes(out)
    }

    /// Mirror of [`shift_in_high`](Self::shift_in_high): every lane moves up
    /// one position and `value` enters at lane 0.
    fn shift_in_low(v: Self::Native, value: Self) -> Self::Native {
        let src = Self::to_lanes(v);
        let mut out = src;
        {
            let (s, o) = (src.as_ref(), out.as_mut());
            for i in 1..Self::LANES {
                o[i] = s[i - 1];
            }
            o[0] = value;
        }
        Self::from_lanes(out)
    }
}
