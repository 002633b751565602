//! The (element type, width tag) specialization table.
//!
//! One impl of each operation trait per supported pair, generated by macros
//! over the `wide` crate's native containers. `wide` covers the containers
//! and the lane-wise operations the hardware has a direct instruction for;
//! the handful of operations it does not expose (8/64-bit lane multiplies,
//! 64-bit compares) go through explicit lane loops, and the hot movemask and
//! horizontal-add paths take the intrinsic route in [`crate::x86`] when the
//! target allows it.
//!
//! Every element type implements [`SimdElement`] at both widths, so the
//! macro bodies name the native container and the width tag explicitly
//! instead of going through `Self::` associated paths.
//!
//! Adding a row means adding macro invocations here; nothing else in the
//! crate changes.

use crate::traits::{
    SimdArith, SimdBits, SimdCompare, SimdElement, SimdFloat, SimdInt, SimdLanes,
};
use crate::width::{W128, W256};
use wide::{
    f32x4, f32x8, f64x2, f64x4, i16x16, i16x8, i32x4, i32x8, i64x2, i64x4, i8x16, i8x32, CmpEq,
    CmpGt,
};

// ============================================================================
// Scalar helpers shared by the macro bodies
// ============================================================================

/// Per-scalar plumbing the table needs: all-bits values, sign tests, and
/// wrapping arithmetic with one spelling across integers and floats.
pub(crate) trait LaneScalar: Copy {
    fn all_bits() -> Self;
    fn msb_set(self) -> bool;
    fn lane_offset(self, i: usize) -> Self;
    fn scalar_add(self, other: Self) -> Self;
}

macro_rules! impl_lane_scalar_int {
    ($($t:ty),*) => {
        $(
            impl LaneScalar for $t {
                #[inline]
                fn all_bits() -> Self {
                    !0
                }
                #[inline]
                fn msb_set(self) -> bool {
                    self < 0
                }
                #[inline]
                fn lane_offset(self, i: usize) -> Self {
                    self.wrapping_add(i as $t)
                }
                #[inline]
                fn scalar_add(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
    };
}

macro_rules! impl_lane_scalar_float {
    ($($t:ty => $bits:ty),*) => {
        $(
            impl LaneScalar for $t {
                #[inline]
                fn all_bits() -> Self {
                    <$t>::from_bits(<$bits>::MAX)
                }
                #[inline]
                fn msb_set(self) -> bool {
                    self.is_sign_negative()
                }
                #[inline]
                fn lane_offset(self, i: usize) -> Self {
                    self + i as $t
                }
                #[inline]
                fn scalar_add(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_lane_scalar_int!(i8, i16, i32, i64);
impl_lane_scalar_float!(f32 => u32, f64 => u64);

// ============================================================================
// Capability rows
// ============================================================================

macro_rules! impl_simd_element {
    ($elem:ty, $width:ty, $native:ty, lanes: $lanes:expr, mask_bits: $mask_bits:expr) => {
        impl SimdElement<$width> for $elem {
            type Native = $native;
            type Lanes = [$elem; $lanes];

            const LANES: usize = $lanes;
            const MASK_BITS_PER_LANE: usize = $mask_bits;

            #[inline]
            fn zero() -> $native {
                <$native>::ZERO
            }

            #[inline]
            fn ones() -> $native {
                <$native>::splat(<$elem as LaneScalar>::all_bits())
            }

            #[inline]
            fn splat(value: Self) -> $native {
                <$native>::splat(value)
            }

            #[inline]
            fn sequence(start: Self) -> $native {
                let mut lanes = [start; $lanes];
                for i in 1..$lanes {
                    lanes[i] = start.lane_offset(i);
                }
                <$native>::new(lanes)
            }

            #[inline]
            fn from_lanes(lanes: [$elem; $lanes]) -> $native {
                <$native>::new(lanes)
            }

            #[inline]
            fn to_lanes(v: $native) -> [$elem; $lanes] {
                v.to_array()
            }
        }
    };
}

impl_simd_element!(i8, W128, i8x16, lanes: 16, mask_bits: 1);
impl_simd_element!(i16, W128, i16x8, lanes: 8, mask_bits: 2);
impl_simd_element!(i32, W128, i32x4, lanes: 4, mask_bits: 1);
impl_simd_element!(i64, W128, i64x2, lanes: 2, mask_bits: 1);
impl_simd_element!(f32, W128, f32x4, lanes: 4, mask_bits: 1);
impl_simd_element!(f64, W128, f64x2, lanes: 2, mask_bits: 1);

impl_simd_element!(i8, W256, i8x32, lanes: 32, mask_bits: 1);
impl_simd_element!(i16, W256, i16x16, lanes: 16, mask_bits: 2);
impl_simd_element!(i32, W256, i32x8, lanes: 8, mask_bits: 1);
impl_simd_element!(i64, W256, i64x4, lanes: 4, mask_bits: 1);
impl_simd_element!(f32, W256, f32x8, lanes: 8, mask_bits: 1);
impl_simd_element!(f64, W256, f64x4, lanes: 4, mask_bits: 1);

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! arith_reduce_add_fold {
    ($native:ty) => {
        #[inline]
        fn reduce_add(v: $native) -> Self {
            let lanes = v.to_array();
            let mut acc = lanes[0];
            for &lane in &lanes[1..] {
                acc = acc.scalar_add(lane);
            }
            acc
        }
    };
}

macro_rules! impl_simd_arith {
    ($elem:ty, $width:ty, $native:ty, mul: wide) => {
        impl SimdArith<$width> for $elem {
            #[inline]
            fn add(a: $native, b: $native) -> $native {
                a + b
            }
            #[inline]
            fn sub(a: $native, b: $native) -> $native {
                a - b
            }
            #[inline]
            fn mul_low(a: $native, b: $native) -> $native {
                a * b
            }
            arith_reduce_add_fold!($native);
        }
    };
    // No packed multiply for this row; lane loop instead.
    ($elem:ty, $width:ty, $native:ty, mul: lanes) => {
        impl SimdArith<$width> for $elem {
            #[inline]
            fn add(a: $native, b: $native) -> $native {
                a + b
            }
            #[inline]
            fn sub(a: $native, b: $native) -> $native {
                a - b
            }
            #[inline]
            fn mul_low(a: $native, b: $native) -> $native {
                let (a, b) = (a.to_array(), b.to_array());
                let mut out = a;
                for i in 0..a.len() {
                    out[i] = a[i].wrapping_mul(b[i]);
                }
                <$native>::new(out)
            }
            arith_reduce_add_fold!($native);
        }
    };
}

impl_simd_arith!(i8, W128, i8x16, mul: lanes);
impl_simd_arith!(i16, W128, i16x8, mul: wide);
impl_simd_arith!(i64, W128, i64x2, mul: lanes);
impl_simd_arith!(f64, W128, f64x2, mul: wide);

impl_simd_arith!(i8, W256, i8x32, mul: lanes);
impl_simd_arith!(i16, W256, i16x16, mul: wide);
impl_simd_arith!(i64, W256, i64x4, mul: lanes);
impl_simd_arith!(f64, W256, f64x4, mul: wide);

// f32 and i32 get the intrinsic shuffle trees where the target has them.

impl SimdArith<W128> for f32 {
    #[inline]
    fn add(a: f32x4, b: f32x4) -> f32x4 {
        a + b
    }
    #[inline]
    fn sub(a: f32x4, b: f32x4) -> f32x4 {
        a - b
    }
    #[inline]
    fn mul_low(a: f32x4, b: f32x4) -> f32x4 {
        a * b
    }
    #[inline]
    fn reduce_add(v: f32x4) -> f32 {
        #[cfg(target_arch = "x86_64")]
        {
            crate::x86::reduce_add_f32x4(v.to_array())
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            v.to_array().iter().sum()
        }
    }
}

impl SimdArith<W256> for f32 {
    #[inline]
    fn add(a: f32x8, b: f32x8) -> f32x8 {
        a + b
    }
    #[inline]
    fn sub(a: f32x8, b: f32x8) -> f32x8 {
        a - b
    }
    #[inline]
    fn mul_low(a: f32x8, b: f32x8) -> f32x8 {
        a * b
    }
    #[inline]
    fn reduce_add(v: f32x8) -> f32 {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
        {
            crate::x86::reduce_add_f32x8(v.to_array())
        }
        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
        {
            v.to_array().iter().sum()
        }
    }
}

impl SimdArith<W128> for i32 {
    #[inline]
    fn add(a: i32x4, b: i32x4) -> i32x4 {
        a + b
    }
    #[inline]
    fn sub(a: i32x4, b: i32x4) -> i32x4 {
        a - b
    }
    #[inline]
    fn mul_low(a: i32x4, b: i32x4) -> i32x4 {
        a * b
    }
    #[inline]
    fn reduce_add(v: i32x4) -> i32 {
        #[cfg(target_arch = "x86_64")]
        {
            crate::x86::reduce_add_i32x4(v.to_array())
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            v.to_array().iter().fold(0i32, |acc, &x| acc.wrapping_add(x))
        }
    }
}

impl SimdArith<W256> for i32 {
    #[inline]
    fn add(a: i32x8, b: i32x8) -> i32x8 {
        a + b
    }
    #[inline]
    fn sub(a: i32x8, b: i32x8) -> i32x8 {
        a - b
    }
    #[inline]
    fn mul_low(a: i32x8, b: i32x8) -> i32x8 {
        a * b
    }
    #[inline]
    fn reduce_add(v: i32x8) -> i32 {
        #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
        {
            crate::x86::reduce_add_i32x8(v.to_array())
        }
        #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
        {
            v.to_array().iter().fold(0i32, |acc, &x| acc.wrapping_add(x))
        }
    }
}

// ============================================================================
// Integer / float extensions
// ============================================================================

macro_rules! impl_simd_int {
    ($elem:ty, $width:ty, $native:ty, via: $wider:ty, shift: $bits:expr) => {
        impl SimdInt<$width> for $elem {
            #[inline]
            fn mul_high(a: $native, b: $native) -> $native {
                let (a, b) = (a.to_array(), b.to_array());
                let mut out = a;
                for i in 0..a.len() {
                    out[i] = (((a[i] as $wider) * (b[i] as $wider)) >> $bits) as $elem;
                }
                <$native>::new(out)
            }
        }
    };
}

impl_simd_int!(i8, W128, i8x16, via: i16, shift: 8);
impl_simd_int!(i16, W128, i16x8, via: i32, shift: 16);
impl_simd_int!(i32, W128, i32x4, via: i64, shift: 32);
impl_simd_int!(i64, W128, i64x2, via: i128, shift: 64);
impl_simd_int!(i8, W256, i8x32, via: i16, shift: 8);
impl_simd_int!(i16, W256, i16x16, via: i32, shift: 16);
impl_simd_int!(i32, W256, i32x8, via: i64, shift: 32);
impl_simd_int!(i64, W256, i64x4, via: i128, shift: 64);

macro_rules! impl_simd_float {
    ($($elem:ty, $width:ty, $native:ty);* $(;)?) => {
        $(
            impl SimdFloat<$width> for $elem {
                #[inline]
                fn divide(a: $native, b: $native) -> $native {
                    a / b
                }
            }
        )*
    };
}

impl_simd_float! {
    f32, W128, f32x4;
    f64, W128, f64x2;
    f32, W256, f32x8;
    f64, W256, f64x4;
}

// ============================================================================
// Bitwise
// ============================================================================

macro_rules! impl_simd_bits {
    ($($elem:ty, $width:ty, $native:ty);* $(;)?) => {
        $(
            impl SimdBits<$width> for $elem {
                #[inline]
                fn bit_and(a: $native, b: $native) -> $native {
                    a & b
                }
                #[inline]
                fn bit_or(a: $native, b: $native) -> $native {
                    a | b
                }
                #[inline]
                fn bit_xor(a: $native, b: $native) -> $native {
                    a ^ b
                }
            }
        )*
    };
}

impl_simd_bits! {
    i8, W128, i8x16; i16, W128, i16x8; i32, W128, i32x4;
    i64, W128, i64x2; f32, W128, f32x4; f64, W128, f64x2;
    i8, W256, i8x32; i16, W256, i16x16; i32, W256, i32x8;
    i64, W256, i64x4; f32, W256, f32x8; f64, W256, f64x4;
}

// ============================================================================
// Comparison, selection, bitmask
// ============================================================================

macro_rules! compare_common {
    ($elem:ty, $width:ty, $native:ty, mm: $mm:ident, cfg: ($($c:tt)*)) => {
        #[inline]
        fn blend(mask: $native, t: $native, f: $native) -> $native {
            let ones = <$native>::splat(<$elem as LaneScalar>::all_bits());
            (mask & t) | ((mask ^ ones) & f)
        }

        #[inline]
        fn to_bitmask(v: $native) -> u32 {
            #[cfg($($c)*)]
            {
                crate::x86::$mm(v.to_array())
            }
            #[cfg(not($($c)*))]
            {
                let lanes = v.to_array();
                let per_lane = <$elem as SimdElement<$width>>::MASK_BITS_PER_LANE;
                let run = (1u32 << per_lane) - 1;
                let mut bits = 0u32;
                for (i, lane) in lanes.iter().enumerate() {
                    if lane.msb_set() {
                        bits |= run << (i * per_lane);
                    }
                }
                bits
            }
        }
    };
}

macro_rules! impl_simd_compare {
    ($elem:ty, $width:ty, $native:ty, cmp: wide, mm: $mm:ident, cfg: ($($c:tt)*)) => {
        impl SimdCompare<$width> for $elem {
            #[inline]
            fn greater_than(a: $native, b: $native) -> $native {
                a.cmp_gt(b)
            }
            #[inline]
            fn equal_to(a: $native, b: $native) -> $native {
                a.cmp_eq(b)
            }
            compare_common!($elem, $width, $native, mm: $mm, cfg: ($($c)*));
        }
    };
    // No packed 64-bit compare in wide's portable surface; lane loops.
    ($elem:ty, $width:ty, $native:ty, cmp: lanes, mm: $mm:ident, cfg: ($($c:tt)*)) => {
        impl SimdCompare<$width> for $elem {
            #[inline]
            fn greater_than(a: $native, b: $native) -> $native {
                let (a, b) = (a.to_array(), b.to_array());
                let mut out = a;
                for i in 0..a.len() {
                    out[i] = if a[i] > b[i] {
                        <$elem as LaneScalar>::all_bits()
                    } else {
                        0
                    };
                }
                <$native>::new(out)
            }
            #[inline]
            fn equal_to(a: $native, b: $native) -> $native {
                let (a, b) = (a.to_array(), b.to_array());
                let mut out = a;
                for i in 0..a.len() {
                    out[i] = if a[i] == b[i] {
                        <$elem as LaneScalar>::all_bits()
                    } else {
                        0
                    };
                }
                <$native>::new(out)
            }
            compare_common!($elem, $width, $native, mm: $mm, cfg: ($($c)*));
        }
    };
}

impl_simd_compare!(
    i8, W128, i8x16, cmp: wide, mm: movemask_i8x16,
    cfg: (target_arch = "x86_64")
);
impl_simd_compare!(
    i16, W128, i16x8, cmp: wide, mm: movemask_i16x8,
    cfg: (target_arch = "x86_64")
);
impl_simd_compare!(
    i32, W128, i32x4, cmp: wide, mm: movemask_i32x4,
    cfg: (target_arch = "x86_64")
);
impl_simd_compare!(
    i64, W128, i64x2, cmp: lanes, mm: movemask_i64x2,
    cfg: (target_arch = "x86_64")
);
impl_simd_compare!(
    f32, W128, f32x4, cmp: wide, mm: movemask_f32x4,
    cfg: (target_arch = "x86_64")
);
impl_simd_compare!(
    f64, W128, f64x2, cmp: wide, mm: movemask_f64x2,
    cfg: (target_arch = "x86_64")
);

impl_simd_compare!(
    i8, W256, i8x32, cmp: wide, mm: movemask_i8x32,
    cfg: (all(target_arch = "x86_64", target_feature = "avx2"))
);
impl_simd_compare!(
    i16, W256, i16x16, cmp: wide, mm: movemask_i16x16,
    cfg: (all(target_arch = "x86_64", target_feature = "avx2"))
);
impl_simd_compare!(
    i32, W256, i32x8, cmp: wide, mm: movemask_i32x8,
    cfg: (all(target_arch = "x86_64", target_feature = "avx2"))
);
impl_simd_compare!(
    i64, W256, i64x4, cmp: lanes, mm: movemask_i64x4,
    cfg: (all(target_arch = "x86_64", target_feature = "avx2"))
);
impl_simd_compare!(
    f32, W256, f32x8, cmp: wide, mm: movemask_f32x8,
    cfg: (all(target_arch = "x86_64", target_feature = "avx2"))
);
impl_simd_compare!(
    f64, W256, f64x4, cmp: wide, mm: movemask_f64x4,
    cfg: (all(target_arch = "x86_64", target_feature = "avx2"))
);

// ============================================================================
// Lane access (portable defaults cover every row)
// ============================================================================

macro_rules! impl_simd_lanes {
    ($($elem:ty, $width:ty);* $(;)?) => {
        $(
            impl SimdLanes<$width> for $elem {}
        )*
    };
}

impl_simd_lanes! {
    i8, W128; i16, W128; i32, W128; i64, W128; f32, W128; f64, W128;
    i8, W256; i16, W256; i32, W256; i64, W256; f32, W256; f64, W256;
}

// ============================================================================
// Raw conversions: the escape hatch to and from the native containers
// ============================================================================

macro_rules! impl_raw_conversions {
    ($($elem:ty, $width:ty, $native:ty);* $(;)?) => {
        $(
            impl From<$native> for crate::vector::Simd<$elem, $width> {
                #[inline]
                fn from(raw: $native) -> Self {
                    Self(raw)
                }
            }
            impl From<crate::vector::Simd<$elem, $width>> for $native {
                #[inline]
                fn from(v: crate::vector::Simd<$elem, $width>) -> Self {
                    v.0
                }
            }
        )*
    };
}

impl_raw_conversions! {
    i8, W128, i8x16;
    i16, W128, i16x8;
    i32, W128, i32x4;
    i64, W128, i64x2;
    f32, W128, f32x4;
    f64, W128, f64x2;
    i8, W256, i8x32;
    i16, W256, i16x16;
    i32, W256, i32x8;
    i64, W256, i64x4;
    f32, W256, f32x8;
    f64, W256, f64x4;
}
