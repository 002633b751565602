//! Crate-internal tests for the dispatch table and lane-level semantics.

use crate::prelude::*;

mod layout {
    use super::*;

    #[test]
    fn test_native_container_sizes() {
        assert_eq!(std::mem::size_of::<<i8 as SimdElement<W128>>::Native>(), 16);
        assert_eq!(std::mem::size_of::<<i16 as SimdElement<W128>>::Native>(), 16);
        assert_eq!(std::mem::size_of::<<f64 as SimdElement<W128>>::Native>(), 16);
        assert_eq!(std::mem::size_of::<<i8 as SimdElement<W256>>::Native>(), 32);
        assert_eq!(std::mem::size_of::<<f32 as SimdElement<W256>>::Native>(), 32);
    }

    #[test]
    fn test_lane_counts() {
        assert_eq!(Simd::<i8, W128>::LANES, 16);
        assert_eq!(Simd::<i16, W128>::LANES, 8);
        assert_eq!(Simd::<i32, W128>::LANES, 4);
        assert_eq!(Simd::<i64, W128>::LANES, 2);
        assert_eq!(Simd::<f32, W128>::LANES, 4);
        assert_eq!(Simd::<f64, W128>::LANES, 2);
        assert_eq!(Simd::<i8, W256>::LANES, 32);
        assert_eq!(Simd::<i16, W256>::LANES, 16);
        assert_eq!(Simd::<i32, W256>::LANES, 8);
        assert_eq!(Simd::<i64, W256>::LANES, 4);
        assert_eq!(Simd::<f32, W256>::LANES, 8);
        assert_eq!(Simd::<f64, W256>::LANES, 4);
    }

    #[test]
    fn test_mask_granularity() {
        assert_eq!(<i16 as SimdElement<W128>>::MASK_BITS_PER_LANE, 2);
        assert_eq!(<i16 as SimdElement<W128>>::MASK_BITS, 16);
        assert_eq!(<i32 as SimdElement<W128>>::MASK_BITS_PER_LANE, 1);
        assert_eq!(<i8 as SimdElement<W256>>::MASK_BITS, 32);
    }
}

mod construction {
    use super::*;

    #[test]
    fn test_splat_fills_every_lane() {
        let v = Simd::<i32, W128>::splat(7);
        assert_eq!(v.to_lanes(), [7; 4]);
        let v = Simd::<f64, W256>::splat(2.5);
        assert_eq!(v.to_lanes(), [2.5; 4]);
    }

    #[test]
    fn test_sequence_and_iota() {
        assert_eq!(Simd::<i32, W128>::sequence(5).to_lanes(), [5, 6, 7, 8]);
        assert_eq!(Simd::<i32, W128>::iota().to_lanes(), [0, 1, 2, 3]);
        assert_eq!(Simd::<f32, W128>::sequence(0.5).to_lanes(), [0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_sequence_wraps_small_integers() {
        let v = Simd::<i8, W256>::sequence(100);
        assert_eq!(v.extract::<27>(), 127);
        assert_eq!(v.extract::<28>(), -128);
    }

    #[test]
    fn test_ones_is_all_bits_not_one() {
        assert_eq!(Simd::<i32, W128>::ones().to_lanes(), [-1; 4]);
        assert!(Simd::<f32, W128>::ones().extract::<0>().is_nan());
    }

    #[test]
    fn test_lane_order_is_index_order() {
        let v = Simd::<i16, W128>::from_lanes([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(v.extract::<0>(), 1);
        assert_eq!(v.extract::<7>(), 8);
    }

    #[test]
    fn test_try_from_slice() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let v = Simd::<f32, W128>::try_from_slice(&data).unwrap();
        assert_eq!(v.to_lanes(), [1.0, 2.0, 3.0, 4.0]);

        let err = Simd::<f32, W128>::try_from_slice(&data[..3]).unwrap_err();
        assert_eq!(err, LaneError::SliceTooShort { lanes: 4, got: 3 });
    }

    #[test]
    fn test_write_to_slice() {
        let v = Simd::<i32, W128>::sequence(1);
        let mut out = [0i32; 6];
        v.write_to_slice(&mut out).unwrap();
        assert_eq!(out, [1, 2, 3, 4, 0, 0]);
        assert!(v.write_to_slice(&mut out[..2]).is_err());
    }
}

mod lane_access {
    use super::*;

    #[test]
    fn test_extract_replace() {
        let v = Simd::<i32, W128>::from_lanes([10, 20, 30, 40]);
        assert_eq!(v.extract::<2>(), 30);
        let v = v.replace::<2>(99);
        assert_eq!(v.to_lanes(), [10, 20, 99, 40]);
    }

    #[test]
    fn test_dynamic_lane_is_checked() {
        let v = Simd::<i64, W128>::from_lanes([4, 8]);
        assert_eq!(v.lane(1).unwrap(), 8);
        assert_eq!(
            v.lane(2).unwrap_err(),
            LaneError::LaneOutOfRange { lanes: 2, index: 2 }
        );
    }

    #[test]
    fn test_swap_adjacent_blocks() {
        let v = Simd::<i32, W128>::from_lanes([0, 1, 2, 3]);
        assert_eq!(v.swap_adjacent(1).to_lanes(), [1, 0, 3, 2]);
        assert_eq!(v.swap_adjacent(2).to_lanes(), [2, 3, 0, 1]);
    }

    #[test]
    fn test_reverse_lanes() {
        let v = Simd::<i16, W128>::sequence(0);
        assert_eq!(v.reverse_lanes().to_lanes(), [7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_shift_in() {
        let v = Simd::<i32, W128>::from_lanes([1, 2, 3, 4]);
        assert_eq!(v.shift_in_high(9).to_lanes(), [2, 3, 4, 9]);
        assert_eq!(v.shift_in_low(9).to_lanes(), [9, 1, 2, 3]);
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Simd::<i32, W128>::from_lanes([1, 2, 3, 4]);
        let b = Simd::<i32, W128>::splat(10);
        assert_eq!((a + b).to_lanes(), [11, 12, 13, 14]);
        assert_eq!((b - a).to_lanes(), [9, 8, 7, 6]);
    }

    #[test]
    fn test_integer_add_wraps() {
        let v = Simd::<i8, W128>::splat(i8::MAX) + Simd::<i8, W128>::splat(1);
        assert_eq!(v.extract::<0>(), i8::MIN);
    }

    #[test]
    fn test_mul_low_keeps_low_half() {
        // 300 * 300 = 90000; low 16 bits are 24464.
        let v = Simd::<i16, W128>::splat(300) * Simd::<i16, W128>::splat(300);
        assert_eq!(v.extract::<0>(), 24464);
        // Lane-loop rows behave the same.
        let v = Simd::<i8, W128>::splat(16) * Simd::<i8, W128>::splat(16);
        assert_eq!(v.extract::<0>(), 0);
        let v = Simd::<i64, W256>::splat(3) * Simd::<i64, W256>::splat(-7);
        assert_eq!(v.extract::<0>(), -21);
    }

    #[test]
    fn test_mul_high_keeps_high_half() {
        let v = Simd::<i16, W128>::splat(300).mul_high(Simd::splat(300));
        assert_eq!(v.extract::<0>(), 1);
        let v = Simd::<i32, W128>::splat(1 << 20).mul_high(Simd::splat(1 << 20));
        assert_eq!(v.extract::<0>(), 256);
        let v = Simd::<i64, W128>::splat(1 << 40).mul_high(Simd::splat(1 << 40));
        assert_eq!(v.extract::<0>(), 1 << 16);
    }

    #[test]
    fn test_float_division() {
        let v = Simd::<f32, W128>::from_lanes([2.0, 4.0, 8.0, 16.0]) / Simd::splat(2.0);
        assert_eq!(v.to_lanes(), [1.0, 2.0, 4.0, 8.0]);
    }

    #[test]
    fn test_assign_ops() {
        let mut v = Simd::<f64, W128>::splat(1.0);
        v += Simd::splat(2.0);
        v -= Simd::splat(0.5);
        assert_eq!(v.to_lanes(), [2.5, 2.5]);
    }
}

mod bitwise {
    use super::*;

    #[test]
    fn test_and_or_xor() {
        let a = Simd::<i32, W128>::splat(0b1100);
        let b = Simd::<i32, W128>::splat(0b1010);
        assert_eq!((a & b).extract::<0>(), 0b1000);
        assert_eq!((a | b).extract::<0>(), 0b1110);
        assert_eq!((a ^ b).extract::<0>(), 0b0110);
    }

    #[test]
    fn test_not_via_ones() {
        let v = !Simd::<i16, W256>::zero();
        assert_eq!(v, Simd::ones());
        assert_eq!((!v), Simd::zero());
    }

    #[test]
    fn test_float_bitwise_ops() {
        // Sign-bit clear via AND is the classic use.
        let v = Simd::<f32, W128>::splat(-3.5);
        let abs_mask = Simd::<f32, W128>::splat(f32::from_bits(0x7FFF_FFFF));
        assert_eq!((v & abs_mask).extract::<0>(), 3.5);
    }
}

mod comparison {
    use super::*;

    #[test]
    fn test_greater_than_mask_lanes() {
        let v = Simd::<i32, W128>::from_lanes([1, 5, 3, 7]);
        let m = v.simd_gt(Simd::splat(3));
        assert_eq!(m.to_lanes(), [0, -1, 0, -1]);
    }

    #[test]
    fn test_i64_comparisons() {
        let a = Simd::<i64, W256>::from_lanes([1, -2, 3, -4]);
        let m = a.simd_gt(Simd::zero());
        assert_eq!(m.to_lanes(), [-1, 0, -1, 0]);
        let m = a.simd_eq(Simd::splat(3));
        assert_eq!(m.to_lanes(), [0, 0, -1, 0]);
    }

    #[test]
    fn test_blend_selects_per_lane() {
        let m = Simd::<i32, W128>::from_lanes([5, 1, 4, 2]).simd_gt(Simd::splat(3));
        let t = Simd::<i32, W128>::splat(100);
        let f = Simd::<i32, W128>::splat(-100);
        assert_eq!(m.blend(t, f).to_lanes(), [100, -100, 100, -100]);
    }

    #[test]
    fn test_min_max() {
        let a = Simd::<f32, W128>::from_lanes([1.0, 9.0, 3.0, 7.0]);
        let b = Simd::<f32, W128>::from_lanes([2.0, 8.0, 4.0, 6.0]);
        assert_eq!(a.simd_max(b).to_lanes(), [2.0, 9.0, 4.0, 7.0]);
        assert_eq!(a.simd_min(b).to_lanes(), [1.0, 8.0, 3.0, 6.0]);
    }

    #[test]
    fn test_nan_compares_false() {
        let v = Simd::<f32, W128>::splat(f32::NAN);
        assert!(v.simd_gt(Simd::zero()).to_bitmask().is_empty());
        assert!(v.simd_eq(v).to_bitmask().is_empty());
        assert!(Simd::<f32, W128>::zero().simd_gt(v).to_bitmask().is_empty());
    }
}

mod bitmask {
    use super::*;

    #[test]
    fn test_bitmask_lane_indices() {
        let v = Simd::<i32, W128>::from_lanes([1, 5, 3, 7]);
        let m = v.simd_gt(Simd::splat(3)).to_bitmask();
        assert_eq!(m.bits(), 0b1010);
        assert_eq!(m.first_lane(), Some(1));
        assert_eq!(m.last_lane(), Some(3));
        assert_eq!(m.count(), 2);
        assert!(m.contains(1) && m.contains(3));
        assert!(!m.contains(0) && !m.contains(2));
    }

    #[test]
    fn test_i16_runs_normalize_to_lane_indices() {
        let v = Simd::<i16, W128>::sequence(0);
        let m = v.simd_gt(5).to_bitmask();
        // Lanes 6 and 7, each a 2-bit run.
        assert_eq!(m.bits(), 0b1111 << 12);
        assert_eq!(m.first_lane(), Some(6));
        assert_eq!(m.last_lane(), Some(7));
        assert_eq!(m.count(), 2);
    }

    #[test]
    fn test_empty_mask_has_no_lanes() {
        let m = LaneMask::<f64, W128>::empty();
        assert!(m.is_empty());
        assert_eq!(m.first_lane(), None);
        assert_eq!(m.last_lane(), None);
        assert_eq!(m.count(), 0);
    }

    #[test]
    fn test_all_mask_widest_row() {
        // i8 at W256 uses all 32 bits of the carrier.
        let m = Simd::<i8, W256>::ones().simd_eq(Simd::ones()).to_bitmask();
        assert!(m.all_lanes());
        assert_eq!(m.bits(), u32::MAX);
        assert_eq!(m.count(), 32);
        assert_eq!(m.last_lane(), Some(31));
    }

    #[test]
    fn test_from_bits_discards_invalid() {
        let m = LaneMask::<i32, W128>::from_bits(0xFFFF_FF05);
        assert_eq!(m.bits(), 0b0101);
    }

    #[test]
    fn test_with_without_lane() {
        let m = LaneMask::<i16, W128>::empty().with_lane(3).with_lane(5);
        assert_eq!(m.count(), 2);
        assert!(m.contains(3));
        let m = m.without_lane(3);
        assert_eq!(m.first_lane(), Some(5));
    }

    #[test]
    fn test_mask_set_algebra() {
        let a = LaneMask::<i32, W128>::empty().with_lane(0).with_lane(2);
        let b = LaneMask::<i32, W128>::empty().with_lane(2).with_lane(3);
        assert_eq!((a & b).first_lane(), Some(2));
        assert_eq!((a | b).count(), 3);
        assert_eq!((!a).bits(), 0b1010);
    }
}

mod reduction {
    use super::*;

    #[test]
    fn test_reduce_add() {
        assert_eq!(Simd::<i32, W128>::sequence(1).reduce_add(), 10);
        assert_eq!(Simd::<i32, W256>::sequence(1).reduce_add(), 36);
        assert_eq!(Simd::<f32, W128>::sequence(1.0).reduce_add(), 10.0);
        assert_eq!(Simd::<f32, W256>::sequence(1.0).reduce_add(), 36.0);
        assert_eq!(Simd::<i64, W128>::from_lanes([40, 2]).reduce_add(), 42);
        assert_eq!(Simd::<i8, W256>::splat(1).reduce_add(), 32);
    }

    #[test]
    fn test_reduce_min_max() {
        let v = Simd::<i32, W128>::from_lanes([3, -1, 7, 2]);
        assert_eq!(v.reduce_max(), 7);
        assert_eq!(v.reduce_min(), -1);
        let v = Simd::<f64, W256>::from_lanes([1.5, -2.5, 0.0, 9.0]);
        assert_eq!(v.reduce_max(), 9.0);
        assert_eq!(v.reduce_min(), -2.5);
    }

    #[test]
    fn test_horizontal_reduce_custom_combiner() {
        let v = Simd::<i32, W128>::from_lanes([0b0001, 0b0010, 0b0100, 0b1000]);
        assert_eq!(horizontal_reduce(v, |a, b| a | b), 0b1111);
    }

    #[test]
    fn test_reduce_two_lane_vector() {
        let v = Simd::<f64, W128>::from_lanes([1.25, 2.75]);
        assert_eq!(v.reduce_add(), 4.0);
        assert_eq!(v.reduce_max(), 2.75);
    }
}

mod scalar_sugar {
    use super::*;

    #[test]
    fn test_scalar_rhs() {
        let v = Simd::<i32, W128>::sequence(0);
        assert_eq!((v + 10).to_lanes(), [10, 11, 12, 13]);
        assert_eq!((v - 1).to_lanes(), [-1, 0, 1, 2]);
        assert_eq!((v * 3).to_lanes(), [0, 3, 6, 9]);
        let f = Simd::<f32, W128>::splat(8.0);
        assert_eq!((f / 2.0).extract::<0>(), 4.0);
    }

    #[test]
    fn test_scalar_lhs() {
        let v = Simd::<i32, W128>::sequence(0);
        assert_eq!((10 + v).to_lanes(), [10, 11, 12, 13]);
        assert_eq!((3 - v).to_lanes(), [3, 2, 1, 0]);
        assert_eq!((2.0 / Simd::<f32, W128>::splat(4.0)).extract::<0>(), 0.5);
    }

    #[test]
    fn test_scalar_comparison_argument() {
        let v = Simd::<i32, W128>::from_lanes([10, 20, 30, 40]);
        assert_eq!(v.simd_gt(25).to_bitmask().count(), 2);
        assert_eq!(v.simd_eq(20).to_bitmask().first_lane(), Some(1));
        assert_eq!(v.simd_lt(15).to_bitmask().bits(), 0b0001);
    }
}
