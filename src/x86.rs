//! x86_64 intrinsic fast paths.
//!
//! Hardware movemask and horizontal-add shuffle trees for the rows where the
//! instruction exists. Everything here is selected at compile time: the SSE2
//! entry points rely on SSE2 being part of the x86_64 baseline, and the
//! 256-bit entry points only exist when the build enables AVX2
//! (`-C target-feature=+avx2`). The portable bodies in [`crate::portable`]
//! cover every other configuration with identical semantics.

#![cfg(target_arch = "x86_64")]

use std::arch::x86_64::*;

// ============================================================================
// Movemask: pack lane sign bits into an integer
// ============================================================================

#[inline]
pub(crate) fn movemask_i8x16(lanes: [i8; 16]) -> u32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_si128(lanes.as_ptr() as *const __m128i);
        (_mm_movemask_epi8(v) as u32) & 0xFFFF
    }
}

#[inline]
pub(crate) fn movemask_i16x8(lanes: [i16; 8]) -> u32 {
    // Byte-granular: each i16 lane owns a 2-bit run.
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_si128(lanes.as_ptr() as *const __m128i);
        (_mm_movemask_epi8(v) as u32) & 0xFFFF
    }
}

#[inline]
pub(crate) fn movemask_i32x4(lanes: [i32; 4]) -> u32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_si128(lanes.as_ptr() as *const __m128i);
        _mm_movemask_ps(_mm_castsi128_ps(v)) as u32
    }
}

#[inline]
pub(crate) fn movemask_i64x2(lanes: [i64; 2]) -> u32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_si128(lanes.as_ptr() as *const __m128i);
        _mm_movemask_pd(_mm_castsi128_pd(v)) as u32
    }
}

#[inline]
pub(crate) fn movemask_f32x4(lanes: [f32; 4]) -> u32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_ps(lanes.as_ptr());
        _mm_movemask_ps(v) as u32
    }
}

#[inline]
pub(crate) fn movemask_f64x2(lanes: [f64; 2]) -> u32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_pd(lanes.as_ptr());
        _mm_movemask_pd(v) as u32
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn movemask_i8x32(lanes: [i8; 32]) -> u32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_si256(lanes.as_ptr() as *const __m256i);
        _mm256_movemask_epi8(v) as u32
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn movemask_i16x16(lanes: [i16; 16]) -> u32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_si256(lanes.as_ptr() as *const __m256i);
        _mm256_movemask_epi8(v) as u32
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn movemask_i32x8(lanes: [i32; 8]) -> u32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_si256(lanes.as_ptr() as *const __m256i);
        _mm256_movemask_ps(_mm256_castsi256_ps(v)) as u32
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn movemask_i64x4(lanes: [i64; 4]) -> u32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_si256(lanes.as_ptr() as *const __m256i);
        _mm256_movemask_pd(_mm256_castsi256_pd(v)) as u32
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn movemask_f32x8(lanes: [f32; 8]) -> u32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_ps(lanes.as_ptr());
        _mm256_movemask_ps(v) as u32
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn movemask_f64x4(lanes: [f64; 4]) -> u32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_pd(lanes.as_ptr());
        _mm256_movemask_pd(v) as u32
    }
}

// ============================================================================
// Horizontal-add shuffle trees
// ============================================================================

#[inline]
pub(crate) fn reduce_add_f32x4(lanes: [f32; 4]) -> f32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_ps(lanes.as_ptr());
        // Pair swap: [1, 0, 3, 2]
        let shuf = _mm_shuffle_ps::<0b1011_0001>(v, v);
        let sums = _mm_add_ps(v, shuf);
        // Half swap: [2, 3, 0, 1]
        let shuf = _mm_shuffle_ps::<0b0100_1110>(sums, sums);
        let sums = _mm_add_ss(sums, shuf);
        _mm_cvtss_f32(sums)
    }
}

#[inline]
pub(crate) fn reduce_add_i32x4(lanes: [i32; 4]) -> i32 {
    // SAFETY: SSE2 is part of the x86_64 baseline.
    unsafe {
        let v = _mm_loadu_si128(lanes.as_ptr() as *const __m128i);
        let hi64 = _mm_unpackhi_epi64(v, v);
        let sum = _mm_add_epi32(v, hi64);
        let hi32 = _mm_shuffle_epi32::<0b01>(sum);
        let sum = _mm_add_epi32(sum, hi32);
        _mm_cvtsi128_si32(sum)
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn reduce_add_f32x8(lanes: [f32; 8]) -> f32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_ps(lanes.as_ptr());
        // Sum within 128-bit halves
        let hi = _mm256_extractf128_ps(v, 1);
        let lo = _mm256_castps256_ps128(v);
        let sum128 = _mm_add_ps(lo, hi);
        // Horizontal add within the 128-bit register
        let shuf = _mm_movehdup_ps(sum128);
        let sums = _mm_add_ps(sum128, shuf);
        let shuf = _mm_movehl_ps(sums, sums);
        let sums = _mm_add_ss(sums, shuf);
        _mm_cvtss_f32(sums)
    }
}

#[cfg(target_feature = "avx2")]
#[inline]
pub(crate) fn reduce_add_i32x8(lanes: [i32; 8]) -> i32 {
    // SAFETY: AVX2 is statically enabled for this build.
    unsafe {
        let v = _mm256_loadu_si256(lanes.as_ptr() as *const __m256i);
        let hi = _mm256_extracti128_si256(v, 1);
        let lo = _mm256_castsi256_si128(v);
        let sum128 = _mm_add_epi32(lo, hi);
        let hi64 = _mm_unpackhi_epi64(sum128, sum128);
        let sum64 = _mm_add_epi32(sum128, hi64);
        let hi32 = _mm_shuffle_epi32::<0b01>(sum64);
        let sum32 = _mm_add_epi32(sum64, hi32);
        _mm_cvtsi128_si32(sum32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movemask_i8x16() {
        let mut lanes = [0i8; 16];
        lanes[0] = -1;
        lanes[5] = -1;
        lanes[15] = -1;
        assert_eq!(movemask_i8x16(lanes), (1 << 0) | (1 << 5) | (1 << 15));
    }

    #[test]
    fn test_movemask_i16x8_runs() {
        let mut lanes = [0i16; 8];
        lanes[1] = -1;
        lanes[7] = -1;
        // 2-bit runs per lane
        assert_eq!(movemask_i16x8(lanes), (0b11 << 2) | (0b11 << 14));
    }

    #[test]
    fn test_movemask_f32x4() {
        let mask = f32::from_bits(u32::MAX);
        assert_eq!(movemask_f32x4([mask, 0.0, mask, 0.0]), 0b0101);
    }

    #[test]
    fn test_reduce_add_f32x4() {
        assert_eq!(reduce_add_f32x4([1.0, 2.0, 3.0, 4.0]), 10.0);
    }

    #[test]
    fn test_reduce_add_i32x4() {
        assert_eq!(reduce_add_i32x4([1, 2, 3, 4]), 10);
        assert_eq!(reduce_add_i32x4([-5, 5, 100, -100]), 0);
    }

    #[cfg(target_feature = "avx2")]
    #[test]
    fn test_reduce_add_f32x8() {
        assert_eq!(
            reduce_add_f32x8([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]),
            36.0
        );
    }

    #[cfg(target_feature = "avx2")]
    #[test]
    fn test_reduce_add_i32x8() {
        assert_eq!(reduce_add_i32x8([1, 2, 3, 4, 5, 6, 7, 8]), 36);
    }
}
