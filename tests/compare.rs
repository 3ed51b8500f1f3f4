//! Comparison mask, predicate reduction, and select tests.
//!
//! Comparisons produce all-ones or all-zeros lane masks, the reductions
//! demand the exact all-ones pattern, and select blends bit by bit. NaN
//! makes every ordered comparison false and infinity detection is a bit
//! pattern test, so magnitude never stands in for either.

use quadly::simd::{SimdCompare, SimdLoad, SimdStore, F32x4};

const TRUE_BITS: u32 = u32::MAX;

/// Each comparison lane is exactly all-ones or all-zeros.
#[test]
fn test_comparison_masks_are_canonical() {
    let a = F32x4::new(1.0, 5.0, 3.0, -2.0);
    let b = F32x4::new(1.0, 2.0, 4.0, -2.0);

    let test_cases = [
        ("cmp_eq", a.cmp_eq(b).to_bits(), [TRUE_BITS, 0, 0, TRUE_BITS]),
        ("cmp_lt", a.cmp_lt(b).to_bits(), [0, 0, TRUE_BITS, 0]),
        (
            "cmp_le",
            a.cmp_le(b).to_bits(),
            [TRUE_BITS, 0, TRUE_BITS, TRUE_BITS],
        ),
        ("cmp_gt", a.cmp_gt(b).to_bits(), [0, TRUE_BITS, 0, 0]),
        (
            "cmp_ge",
            a.cmp_ge(b).to_bits(),
            [TRUE_BITS, TRUE_BITS, 0, TRUE_BITS],
        ),
    ];

    for (name, actual, expected) in test_cases {
        assert_eq!(actual, expected, "{name} produced a non-canonical mask");
    }
}

/// NaN lanes fail every ordered comparison, including against themselves.
#[test]
fn test_nan_comparisons_are_false() {
    let v = F32x4::new(f32::NAN, f32::NAN, 1.0, 1.0);
    let w = F32x4::new(f32::NAN, 1.0, f32::NAN, 1.0);

    assert_eq!(v.cmp_eq(w).to_bits(), [0, 0, 0, TRUE_BITS]);
    assert_eq!(v.cmp_lt(w).to_bits(), [0, 0, 0, 0]);
    assert_eq!(v.cmp_le(w).to_bits(), [0, 0, 0, TRUE_BITS]);
    assert_eq!(v.cmp_gt(w).to_bits(), [0, 0, 0, 0]);
    assert_eq!(v.cmp_ge(w).to_bits(), [0, 0, 0, TRUE_BITS]);
}

/// Whole-vector equality: eq_all needs every lane equal, ne_any fires on
/// any difference, and a NaN lane counts as a difference for both.
#[test]
fn test_equality_reductions() {
    let v = F32x4::new(1.0, 2.0, 3.0, 4.0);
    assert!(v.cmp_eq_all(v));
    assert!(!v.cmp_ne_any(v));

    let one_off = F32x4::new(1.0, 2.0, 3.25, 4.0);
    assert!(!v.cmp_eq_all(one_off));
    assert!(v.cmp_ne_any(one_off));

    let with_nan = F32x4::new(1.0, f32::NAN, 3.0, 4.0);
    assert!(!with_nan.cmp_eq_all(with_nan), "NaN lane breaks eq_all");
    assert!(with_nan.cmp_ne_any(with_nan), "NaN lane triggers ne_any");

    // +0.0 and -0.0 compare equal numerically.
    assert!(F32x4::splat(0.0).cmp_eq_all(F32x4::splat(-0.0)));
}

/// all_true and any_true test for the exact all-ones lane pattern.
#[test]
fn test_truth_reductions_need_exact_pattern() {
    assert!(F32x4::from_bits([TRUE_BITS; 4]).all_true());
    assert!(!F32x4::from_bits([0; 4]).any_true());

    // Almost-full patterns do not count as true lanes.
    let near_masks = [
        [0x8000_0000u32; 4],
        [0x7FFF_FFFF; 4],
        [0xFFFF_FFFE; 4],
        [0x0000_0001; 4],
    ];
    for bits in near_masks {
        let v = F32x4::from_bits(bits);
        assert!(!v.all_true(), "{bits:08x?} is not an all-ones lane");
        assert!(!v.any_true(), "{bits:08x?} is not an all-ones lane");
    }

    let one_lane = F32x4::from_bits([0, TRUE_BITS, 0, 0]);
    assert!(one_lane.any_true());
    assert!(!one_lane.all_true());
}

/// NaN detection fires for any NaN payload and nothing else.
#[test]
fn test_is_any_nan() {
    assert!(F32x4::new(f32::NAN, 0.0, 0.0, 0.0).is_any_nan());
    assert!(F32x4::new(0.0, 0.0, 0.0, -f32::NAN).is_any_nan());
    assert!(F32x4::from_bits([0x7FC0_0001, 0, 0, 0]).is_any_nan());
    assert!(F32x4::from_bits([0xFFC0_0000, 0, 0, 0]).is_any_nan());

    assert!(!F32x4::new(f32::INFINITY, f32::NEG_INFINITY, f32::MAX, f32::MIN).is_any_nan());
    assert!(!F32x4::splat(0.0).is_any_nan());
}

/// Infinity detection matches the bit pattern: the largest finite values
/// stay out and NaN never slips in.
#[test]
fn test_is_any_infinite_is_a_bit_pattern() {
    assert!(F32x4::new(f32::INFINITY, 0.0, 0.0, 0.0).is_any_infinite());
    assert!(F32x4::new(0.0, 0.0, f32::NEG_INFINITY, 0.0).is_any_infinite());

    let large_finite = F32x4::new(f32::MAX, f32::MIN, 3.4e38, -3.4e38);
    assert!(
        !large_finite.is_any_infinite(),
        "finite magnitudes must not read as infinity"
    );
    assert!(!F32x4::splat(f32::NAN).is_any_infinite());
    assert!(!F32x4::splat(0.0).is_any_infinite());
}

/// All 16 lane on/off combinations of a canonical mask route each lane to
/// the chosen source.
#[test]
fn test_select_all_mask_patterns() {
    let if_true = F32x4::new(1.0, 2.0, 3.0, 4.0);
    let if_false = F32x4::new(-1.0, -2.0, -3.0, -4.0);

    for pattern in 0u32..16 {
        let mask_bits = [
            if pattern & 1 != 0 { TRUE_BITS } else { 0 },
            if pattern & 2 != 0 { TRUE_BITS } else { 0 },
            if pattern & 4 != 0 { TRUE_BITS } else { 0 },
            if pattern & 8 != 0 { TRUE_BITS } else { 0 },
        ];
        let picked = F32x4::select(F32x4::from_bits(mask_bits), if_true, if_false).to_array();

        let t = if_true.to_array();
        let f = if_false.to_array();
        for lane in 0..4 {
            let expected = if pattern & (1 << lane) != 0 {
                t[lane]
            } else {
                f[lane]
            };
            assert_eq!(
                picked[lane].to_bits(),
                expected.to_bits(),
                "pattern {pattern:04b}, lane {lane}"
            );
        }
    }
}

/// Select is a bitwise blend, so a partial mask mixes bits within a lane.
#[test]
fn test_select_blends_individual_bits() {
    // Sign bit from if_true, everything else from if_false.
    let sign_only = F32x4::from_bits([0x8000_0000; 4]);
    let picked = F32x4::select(sign_only, F32x4::splat(-0.0), F32x4::splat(1.0));
    assert_eq!(
        picked.to_array(),
        [-1.0; 4],
        "sign bit and magnitude must come from different sources"
    );

    // Arbitrary bit soup: lane = (mask & t) | (!mask & f) exactly.
    let mask = F32x4::from_bits([0xF0F0_F0F0; 4]);
    let t = F32x4::from_bits([0xAAAA_AAAA; 4]);
    let f = F32x4::from_bits([0x5555_5555; 4]);
    let blended = F32x4::select(mask, t, f).to_bits();
    assert_eq!(blended, [0xA5A5_A5A5; 4]);
}

/// Select passes NaN payloads through untouched when a whole lane is taken.
#[test]
fn test_select_preserves_payloads() {
    let mask = F32x4::from_bits([TRUE_BITS, 0, TRUE_BITS, 0]);
    let t = F32x4::from_bits([0x7FC0_0123, 0x7FC0_0123, 0x8000_0000, 0x8000_0000]);
    let f = F32x4::from_bits([0x7F80_0000, 0x7F80_0000, 0, 0]);

    let picked = F32x4::select(mask, t, f);
    assert_eq!(
        picked.to_bits(),
        [0x7FC0_0123, 0x7F80_0000, 0x8000_0000, 0]
    );
}
