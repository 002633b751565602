//! The generic vector wrapper.
//!
//! [`Simd<T, W>`] pairs an element type with a width tag and exposes the
//! whole operation surface as inherent methods and operator impls. All
//! dispatch happens through the trait bounds on each method, so the set of
//! operations available on a given `Simd<T, W>` is exactly the set of
//! capability traits `T` implements at that width. `Simd<i32>::zero() / 2`
//! does not compile; `Simd<f32>` division does.
//!
//! Lane order convention: constructor argument 0 is lane 0, lane 0 is the
//! lowest memory address when stored, and bit 0 of a bitmask corresponds to
//! lane 0.

use crate::error::{LaneError, Result};
use crate::mask::LaneMask;
use crate::traits::{
    SimdArith, SimdBits, SimdCompare, SimdElement, SimdFloat, SimdInt, SimdLanes,
};
use crate::width::{DefaultWidth, VectorWidth};
use std::fmt;
use std::ops::{Add, AddAssign, BitAnd, BitOr, BitXor, Div, Mul, Not, Sub, SubAssign};

/// A SIMD vector of `T` lanes at width `W`.
///
/// `W` defaults to [`DefaultWidth`], the widest width the compile target
/// supports, so `Simd<f32>` is the right type for code that does not care
/// about an exact register size. Code that needs a specific width names the
/// tag: `Simd<f32, W128>`.
pub struct Simd<T, W = DefaultWidth>(pub(crate) T::Native)
where
    T: SimdElement<W>,
    W: VectorWidth;

impl<T: SimdElement<W>, W: VectorWidth> Clone for Simd<T, W> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement<W>, W: VectorWidth> Copy for Simd<T, W> {}

impl<T: SimdElement<W>, W: VectorWidth> Default for Simd<T, W> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: SimdElement<W>, W: VectorWidth> PartialEq for Simd<T, W> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_lanes().as_ref() == other.to_lanes().as_ref()
    }
}

impl<T: SimdElement<W>, W: VectorWidth> fmt::Debug for Simd<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Simd<{}>{:?}", W::NAME, self.to_lanes().as_ref())
    }
}

impl<T: SimdElement<W> + fmt::Display, W: VectorWidth> fmt::Display for Simd<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, lane) in self.to_lanes().as_ref().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lane}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Construction and lane access
// ============================================================================

impl<T: SimdElement<W>, W: VectorWidth> Simd<T, W> {
    /// Number of lanes in this vector type.
    pub const LANES: usize = T::LANES;

    /// Width of the native vector in bytes.
    pub const BYTES: usize = W::BYTES;

    /// Vector with every lane zero.
    #[inline]
    pub fn zero() -> Self {
        Self(T::zero())
    }

    /// Vector with every bit set.
    ///
    /// This is the all-true comparison mask and the bitwise-NOT identity.
    /// For float elements each lane carries a NaN bit pattern, not `1.0`.
    #[inline]
    pub fn ones() -> Self {
        Self(T::ones())
    }

    /// Broadcast one scalar into every lane.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self(T::splat(value))
    }

    /// Vector with lane `i` equal to `start + i` (wrapping for integers).
    #[inline]
    pub fn sequence(start: T) -> Self {
        Self(T::sequence(start))
    }

    /// [`sequence`](Self::sequence) starting from zero: lane `i` holds `i`.
    #[inline]
    pub fn iota() -> Self {
        Self(T::sequence(T::default()))
    }

    /// Build a vector from a lane array; element 0 becomes lane 0.
    #[inline]
    pub fn from_lanes(lanes: T::Lanes) -> Self {
        Self(T::from_lanes(lanes))
    }

    /// Read the lanes back out in index order.
    #[inline]
    pub fn to_lanes(self) -> T::Lanes {
        T::to_lanes(self.0)
    }

    /// Wrap a native container directly. The escape hatch for code that
    /// interoperates with `wide` types; `From` impls exist in both
    /// directions for every supported container.
    #[inline]
    pub fn from_raw(raw: T::Native) -> Self {
        Self(raw)
    }

    /// Unwrap back to the native container.
    #[inline]
    pub fn into_raw(self) -> T::Native {
        self.0
    }

    /// Load the first `LANES` elements of `slice`.
    ///
    /// Fails with [`LaneError::SliceTooShort`] when the slice cannot fill a
    /// whole vector; extra elements beyond `LANES` are ignored.
    pub fn try_from_slice(slice: &[T]) -> Result<Self> {
        if slice.len() < T::LANES {
            return Err(LaneError::SliceTooShort {
                lanes: T::LANES,
                got: slice.len(),
            });
        }
        let mut lanes = T::to_lanes(T::zero());
        lanes.as_mut().copy_from_slice(&slice[..T::LANES]);
        Ok(Self(T::from_lanes(lanes)))
    }

    /// Store all lanes into the front of `out`.
    pub fn write_to_slice(self, out: &mut [T]) -> Result<()> {
        if out.len() < T::LANES {
            return Err(LaneError::SliceTooShort {
                lanes: T::LANES,
                got: out.len(),
            });
        }
        out[..T::LANES].copy_from_slice(self.to_lanes().as_ref());
        Ok(())
    }

    /// Read lane `index`, checked at runtime.
    ///
    /// Prefer [`extract`](Self::extract) when the index is a constant; it
    /// moves the bounds check to compile time.
    pub fn lane(self, index: usize) -> Result<T>
    where
        T: SimdLanes<W>,
    {
        if index >= T::LANES {
            return Err(LaneError::LaneOutOfRange {
                lanes: T::LANES,
                index,
            });
        }
        Ok(T::extract(self.0, index))
    }
}

impl<T: SimdLanes<W>, W: VectorWidth> Simd<T, W> {
    /// Read lane `I`. The index is checked at compile time; an out-of-range
    /// constant fails the build.
    #[inline]
    pub fn extract<const I: usize>(self) -> T {
        const {
            assert!(I < T::LANES, "lane index out of range");
        }
        T::extract(self.0, I)
    }

    /// Copy of `self` with lane `I` replaced by `value`. The index is
    /// checked at compile time.
    #[inline]
    pub fn replace<const I: usize>(self, value: T) -> Self {
        const {
            assert!(I < T::LANES, "lane index out of range");
        }
        Self(T::replace(self.0, I, value))
    }

    /// Swap adjacent blocks of `block` lanes: output lane `i` takes input
    /// lane `i ^ block`. `block` must be a power of two below `LANES`.
    #[inline]
    pub fn swap_adjacent(self, block: usize) -> Self {
        Self(T::swap_adjacent(self.0, block))
    }

    /// Reverse lane order.
    #[inline]
    pub fn reverse_lanes(self) -> Self {
        Self(T::reverse(self.0))
    }

    /// Shift every lane down one position and insert `value` at the highest
    /// lane. Lane 0 falls off.
    #[inline]
    pub fn shift_in_high(self, value: T) -> Self {
        Self(T::shift_in_high(self.0, value))
    }

    /// Shift every lane up one position and insert `value` at lane 0. The
    /// highest lane falls off.
    #[inline]
    pub fn shift_in_low(self, value: T) -> Self {
        Self(T::shift_in_low(self.0, value))
    }
}

// ============================================================================
// Comparison, selection, bitmask
// ============================================================================

impl<T: SimdCompare<W>, W: VectorWidth> Simd<T, W> {
    /// Lane-wise `self > other`, producing an all-ones lane where true.
    ///
    /// For floats any comparison involving NaN is false.
    #[inline]
    pub fn simd_gt(self, other: impl Into<Self>) -> Self {
        Self(T::greater_than(self.0, other.into().0))
    }

    /// Lane-wise `self < other`.
    #[inline]
    pub fn simd_lt(self, other: impl Into<Self>) -> Self {
        Self(T::greater_than(other.into().0, self.0))
    }

    /// Lane-wise `self == other`. `NaN == NaN` is false.
    #[inline]
    pub fn simd_eq(self, other: impl Into<Self>) -> Self {
        Self(T::equal_to(self.0, other.into().0))
    }

    /// Bitwise select: where `self`'s bits are set take `t`, else `f`.
    ///
    /// `self` must be a proper mask vector, i.e. the output of a comparison.
    #[inline]
    pub fn blend(self, t: Self, f: Self) -> Self {
        Self(T::blend(self.0, t.0, f.0))
    }

    /// Lane-wise maximum.
    ///
    /// Ties and NaN lanes resolve to `other`: the comparison `self > other`
    /// is false there, so the blend takes the right-hand lane.
    #[inline]
    pub fn simd_max(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self(T::blend(T::greater_than(self.0, other.0), self.0, other.0))
    }

    /// Lane-wise minimum. Same tie and NaN resolution as
    /// [`simd_max`](Self::simd_max).
    #[inline]
    pub fn simd_min(self, other: impl Into<Self>) -> Self {
        let other = other.into();
        Self(T::blend(T::greater_than(other.0, self.0), self.0, other.0))
    }

    /// Pack this mask vector into a [`LaneMask`].
    ///
    /// `self` must be a proper mask vector (all-ones or all-zeros lanes);
    /// for arbitrary data the result only reflects lane sign bits.
    #[inline]
    pub fn to_bitmask(self) -> LaneMask<T, W> {
        LaneMask::from_bits(T::to_bitmask(self.0))
    }
}

// ============================================================================
// Reductions
// ============================================================================

impl<T: SimdArith<W>, W: VectorWidth> Simd<T, W> {
    /// Sum of all lanes.
    #[inline]
    pub fn reduce_add(self) -> T {
        T::reduce_add(self.0)
    }
}

impl<T: SimdLanes<W> + SimdCompare<W>, W: VectorWidth> Simd<T, W> {
    /// Maximum over all lanes, via the cross-lane shuffle tree.
    #[inline]
    pub fn reduce_max(self) -> T {
        crate::reduce::horizontal_reduce(self, |a, b| a.simd_max(b))
    }

    /// Minimum over all lanes, via the cross-lane shuffle tree.
    #[inline]
    pub fn reduce_min(self) -> T {
        crate::reduce::horizontal_reduce(self, |a, b| a.simd_min(b))
    }
}

// ============================================================================
// Operators
// ============================================================================

impl<T: SimdArith<W>, W: VectorWidth> Add for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(T::add(self.0, rhs.0))
    }
}

impl<T: SimdArith<W>, W: VectorWidth> Sub for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(T::sub(self.0, rhs.0))
    }
}

/// Lane-wise multiplication keeping the low half of each product.
impl<T: SimdArith<W>, W: VectorWidth> Mul for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(T::mul_low(self.0, rhs.0))
    }
}

/// Lane-wise division. Float elements only; integer division does not
/// compile.
impl<T: SimdFloat<W>, W: VectorWidth> Div for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self(T::divide(self.0, rhs.0))
    }
}

impl<T: SimdArith<W>, W: VectorWidth> AddAssign for Simd<T, W> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: SimdArith<W>, W: VectorWidth> SubAssign for Simd<T, W> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: SimdBits<W>, W: VectorWidth> BitAnd for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(T::bit_and(self.0, rhs.0))
    }
}

impl<T: SimdBits<W>, W: VectorWidth> BitOr for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(T::bit_or(self.0, rhs.0))
    }
}

impl<T: SimdBits<W>, W: VectorWidth> BitXor for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(T::bit_xor(self.0, rhs.0))
    }
}

impl<T: SimdBits<W>, W: VectorWidth> Not for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(T::bit_xor(self.0, T::ones()))
    }
}

impl<T: SimdInt<W>, W: VectorWidth> Simd<T, W> {
    /// Lane-wise multiplication keeping the high half of the widening
    /// product. The counterpart to the `*` operator's low half.
    #[inline]
    pub fn mul_high(self, rhs: Self) -> Self {
        Self(T::mul_high(self.0, rhs.0))
    }
}

// ============================================================================
// Scalar sugar
// ============================================================================

/// Broadcast conversion, so scalar arguments work anywhere a vector is
/// expected: `v.simd_gt(25)`.
impl<T: SimdElement<W>, W: VectorWidth> From<T> for Simd<T, W> {
    #[inline]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: SimdArith<W>, W: VectorWidth> Add<T> for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: T) -> Self {
        self + Self::splat(rhs)
    }
}

impl<T: SimdArith<W>, W: VectorWidth> Sub<T> for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: T) -> Self {
        self - Self::splat(rhs)
    }
}

impl<T: SimdArith<W>, W: VectorWidth> Mul<T> for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        self * Self::splat(rhs)
    }
}

impl<T: SimdFloat<W>, W: VectorWidth> Div<T> for Simd<T, W> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        self / Self::splat(rhs)
    }
}

// Scalar on the left-hand side needs one impl per concrete element type;
// a blanket impl over T would fall foul of the orphan rules.
macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<W: VectorWidth> Add<Simd<$t, W>> for $t
            where
                $t: SimdArith<W>,
            {
                type Output = Simd<$t, W>;
                #[inline]
                fn add(self, rhs: Simd<$t, W>) -> Simd<$t, W> {
                    Simd::splat(self) + rhs
                }
            }

            impl<W: VectorWidth> Sub<Simd<$t, W>> for $t
            where
                $t: SimdArith<W>,
            {
                type Output = Simd<$t, W>;
                #[inline]
                fn sub(self, rhs: Simd<$t, W>) -> Simd<$t, W> {
                    Simd::splat(self) - rhs
                }
            }

            impl<W: VectorWidth> Mul<Simd<$t, W>> for $t
            where
                $t: SimdArith<W>,
            {
                type Output = Simd<$t, W>;
                #[inline]
                fn mul(self, rhs: Simd<$t, W>) -> Simd<$t, W> {
                    Simd::splat(self) * rhs
                }
            }
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, f32, f64);

macro_rules! impl_scalar_lhs_div {
    ($($t:ty),*) => {
        $(
            impl<W: VectorWidth> Div<Simd<$t, W>> for $t
            where
                $t: SimdFloat<W>,
            {
                type Output = Simd<$t, W>;
                #[inline]
                fn div(self, rhs: Simd<$t, W>) -> Simd<$t, W> {
                    Simd::splat(self) / rhs
                }
            }
        )*
    };
}

impl_scalar_lhs_div!(f32, f64);
