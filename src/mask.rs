//! Packed comparison bitmasks and lane iteration.
//!
//! A [`LaneMask`] is the integer form of a comparison result, one bit run
//! per lane, bit 0 belonging to lane 0. The run width follows the hardware
//! movemask for the element type: one bit per lane for 32/64-bit elements
//! and `i8`, two bits per lane for `i16` (byte-granular movemask). Every
//! index-returning and iterating function on this type deals in *lane*
//! indices; the run width is an internal detail.
//!
//! The widest mask in the table is 32 bits (`i8` at `W256`), so `u32` holds
//! every mask and the type parameters only pin down the valid-bit range and
//! the run width.

use crate::traits::SimdElement;
use crate::width::VectorWidth;
use std::fmt;
use std::marker::PhantomData;

/// Lane traversal order for iteration entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lane 0 upward.
    Ascending,
    /// Highest lane downward.
    Descending,
}

/// A packed per-lane bitmask for vectors of `T` at width `W`.
pub struct LaneMask<T, W>
where
    T: SimdElement<W>,
    W: VectorWidth,
{
    bits: u32,
    _marker: PhantomData<fn() -> (T, W)>,
}

impl<T: SimdElement<W>, W: VectorWidth> Clone for LaneMask<T, W> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement<W>, W: VectorWidth> Copy for LaneMask<T, W> {}

impl<T: SimdElement<W>, W: VectorWidth> PartialEq for LaneMask<T, W> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: SimdElement<W>, W: VectorWidth> Eq for LaneMask<T, W> {}

impl<T: SimdElement<W>, W: VectorWidth> fmt::Debug for LaneMask<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LaneMask<{}>({:0width$b})",
            W::NAME,
            self.bits,
            width = T::MASK_BITS
        )
    }
}

impl<T: SimdElement<W>, W: VectorWidth> LaneMask<T, W> {
    /// All meaningful bits for this (element, width) pair.
    pub const VALID_BITS: u32 = if T::MASK_BITS >= 32 {
        u32::MAX
    } else {
        (1u32 << T::MASK_BITS) - 1
    };

    const RUN: u32 = (1u32 << T::MASK_BITS_PER_LANE) - 1;

    /// Mask with no lanes set.
    #[inline]
    pub fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Mask with every lane set.
    #[inline]
    pub fn all() -> Self {
        Self::from_bits(Self::VALID_BITS)
    }

    /// Wrap raw movemask bits. Bits beyond the valid range are discarded.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        Self {
            bits: bits & Self::VALID_BITS,
            _marker: PhantomData,
        }
    }

    /// The raw packed bits, one run of
    /// [`MASK_BITS_PER_LANE`](SimdElement::MASK_BITS_PER_LANE) bits per lane.
    #[inline]
    pub fn bits(self) -> u32 {
        self.bits
    }

    /// True when no lane is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// True when every lane is set.
    #[inline]
    pub fn all_lanes(self) -> bool {
        self.bits == Self::VALID_BITS
    }

    /// True when lane `lane` is set.
    #[inline]
    pub fn contains(self, lane: usize) -> bool {
        lane < T::LANES && (self.bits >> (lane * T::MASK_BITS_PER_LANE)) & Self::RUN != 0
    }

    /// Number of set lanes.
    #[inline]
    pub fn count(self) -> usize {
        self.bits.count_ones() as usize / T::MASK_BITS_PER_LANE
    }

    /// Lowest set lane index, or `None` when the mask is empty.
    #[inline]
    pub fn first_lane(self) -> Option<usize> {
        if self.bits == 0 {
            None
        } else {
            Some(self.bits.trailing_zeros() as usize / T::MASK_BITS_PER_LANE)
        }
    }

    /// Highest set lane index, or `None` when the mask is empty.
    #[inline]
    pub fn last_lane(self) -> Option<usize> {
        if self.bits == 0 {
            None
        } else {
            Some((31 - self.bits.leading_zeros() as usize) / T::MASK_BITS_PER_LANE)
        }
    }

    /// Set lane `lane`, returning the updated mask.
    #[inline]
    pub fn with_lane(self, lane: usize) -> Self {
        debug_assert!(lane < T::LANES);
        Self::from_bits(self.bits | (Self::RUN << (lane * T::MASK_BITS_PER_LANE)))
    }

    /// Clear lane `lane`, returning the updated mask.
    #[inline]
    pub fn without_lane(self, lane: usize) -> Self {
        debug_assert!(lane < T::LANES);
        Self::from_bits(self.bits & !(Self::RUN << (lane * T::MASK_BITS_PER_LANE)))
    }

    /// Visit every set lane in `dir` order.
    ///
    /// The visitor returns `true` to continue and `false` to stop early.
    /// Iteration works off a snapshot of the bits taken at entry.
    pub fn for_each_lane<F>(self, dir: Direction, mut visit: F)
    where
        F: FnMut(usize) -> bool,
    {
        let mut bits = self.bits;
        match dir {
            Direction::Ascending => {
                while bits != 0 {
                    let lane = bits.trailing_zeros() as usize / T::MASK_BITS_PER_LANE;
                    if !visit(lane) {
                        return;
                    }
                    bits &= !(Self::RUN << (lane * T::MASK_BITS_PER_LANE));
                }
            }
            Direction::Descending => {
                while bits != 0 {
                    let lane = (31 - bits.leading_zeros() as usize) / T::MASK_BITS_PER_LANE;
                    if !visit(lane) {
                        return;
                    }
                    bits &= !(Self::RUN << (lane * T::MASK_BITS_PER_LANE));
                }
            }
        }
    }
}

impl<T: SimdElement<W>, W: VectorWidth> std::ops::BitAnd for LaneMask<T, W> {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_bits(self.bits & rhs.bits)
    }
}

impl<T: SimdElement<W>, W: VectorWidth> std::ops::BitOr for LaneMask<T, W> {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl<T: SimdElement<W>, W: VectorWidth> std::ops::Not for LaneMask<T, W> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_bits(!self.bits)
    }
}
