//! SSE4.1-optimized 4-lane f32 vector implementation.
//!
//! This module provides `F32x4`, a quad-float backed by a single `__m128`
//! register. Every operation maps to a short, branch-free SSE instruction
//! sequence with the exact lane semantics of the portable implementation in
//! [`crate::simd::scalar`].
//!
//! # Architecture Requirements
//!
//! - **x86/x86_64 with SSE4.1**: selected by the build script when the host
//!   CPU reports `sse4_1`
//!
//! # Performance Characteristics
//!
//! - **Single register**: the full vector lives in one XMM register
//! - **One instruction** for arithmetic, comparison, bitwise, and swizzle
//!   operations
//! - **Zero branches**: NaN handling, signed-zero tie-breaks, and lane
//!   selection are expressed with masks and blends

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{
    for_each_concat, for_each_swizzle, SimdCompare, SimdGeometry, SimdLoad, SimdMath, SimdShuffle,
    SimdStore,
};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

pub(crate) const LANE_COUNT: usize = 4;

/// SSE4.1 quad-float: four packed f32 lanes in one `__m128` register.
///
/// Lane order is `X, Y, Z, W` from the lowest-addressed element up, matching
/// the portable backend and the in-memory layout of `[f32; 4]`.
///
/// # Memory Layout
///
/// - **Size**: 16 bytes (four consecutive f32 lanes, no padding)
/// - **Alignment**: 16 bytes
///
/// # Examples
///
/// ```rust
/// use quadly::simd::{F32x4, SimdLoad, SimdStore};
///
/// let v = F32x4::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(pub __m128);

impl SimdLoad for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self::Output {
        F32x4(unsafe { _mm_setr_ps(x, y, z, w) })
    }

    #[inline(always)]
    fn splat(value: f32) -> Self::Output {
        F32x4(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self::Output {
        F32x4(unsafe { _mm_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn from_bits(bits: [u32; 4]) -> Self::Output {
        F32x4(unsafe {
            _mm_castsi128_ps(_mm_setr_epi32(
                bits[0] as i32,
                bits[1] as i32,
                bits[2] as i32,
                bits[3] as i32,
            ))
        })
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        F32x4(_mm_loadu_ps(ptr))
    }
}

impl SimdStore for F32x4 {
    #[inline(always)]
    fn to_array(&self) -> [f32; 4] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), self.0) };
        lanes
    }

    #[inline(always)]
    fn to_bits(&self) -> [u32; 4] {
        self.to_array().map(f32::to_bits)
    }

    #[inline(always)]
    fn x(&self) -> f32 {
        unsafe { _mm_cvtss_f32(self.0) }
    }

    #[inline(always)]
    fn y(&self) -> f32 {
        unsafe { _mm_cvtss_f32(self.splat_y().0) }
    }

    #[inline(always)]
    fn z(&self) -> f32 {
        unsafe { _mm_cvtss_f32(self.splat_z().0) }
    }

    #[inline(always)]
    fn w(&self) -> f32 {
        unsafe { _mm_cvtss_f32(self.splat_w().0) }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm_storeu_ps(ptr, self.0);
    }
}

// SHUFPS reads result lanes 0-1 from its first operand and lanes 2-3 from
// its second, with _MM_SHUFFLE taking the source indices high-lane first.
macro_rules! sse_swizzle {
    ($name:ident, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        #[inline(always)]
        fn $name(&self) -> Self::Output {
            F32x4(unsafe {
                _mm_shuffle_ps::<{ ($i3 << 6) | ($i2 << 4) | ($i1 << 2) | $i0 }>(self.0, self.0)
            })
        }
    };
}

macro_rules! sse_concat {
    ($name:ident, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        #[inline(always)]
        fn $name(&self, other: Self) -> Self::Output {
            F32x4(unsafe {
                _mm_shuffle_ps::<{ ($i3 << 6) | ($i2 << 4) | ($i1 << 2) | $i0 }>(self.0, other.0)
            })
        }
    };
}

impl SimdShuffle for F32x4 {
    type Output = Self;

    for_each_swizzle!(sse_swizzle);
    for_each_concat!(sse_concat);

    #[inline(always)]
    fn splat_x(&self) -> Self::Output {
        F32x4(unsafe { _mm_shuffle_ps::<{ (0 << 6) | (0 << 4) | (0 << 2) | 0 }>(self.0, self.0) })
    }

    #[inline(always)]
    fn splat_y(&self) -> Self::Output {
        F32x4(unsafe { _mm_shuffle_ps::<{ (1 << 6) | (1 << 4) | (1 << 2) | 1 }>(self.0, self.0) })
    }

    #[inline(always)]
    fn splat_z(&self) -> Self::Output {
        F32x4(unsafe { _mm_shuffle_ps::<{ (2 << 6) | (2 << 4) | (2 << 2) | 2 }>(self.0, self.0) })
    }

    #[inline(always)]
    fn splat_w(&self) -> Self::Output {
        F32x4(unsafe { _mm_shuffle_ps::<{ (3 << 6) | (3 << 4) | (3 << 2) | 3 }>(self.0, self.0) })
    }

    #[inline(always)]
    fn interleave_lower(&self, other: Self) -> Self::Output {
        F32x4(unsafe { _mm_unpacklo_ps(self.0, other.0) })
    }

    #[inline(always)]
    fn interleave_upper(&self, other: Self) -> Self::Output {
        F32x4(unsafe { _mm_unpackhi_ps(self.0, other.0) })
    }
}

impl SimdCompare for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn cmp_eq(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_cmpeq_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_lt(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_cmplt_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_le(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_cmple_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_gt(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_cmpgt_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_ge(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_cmpge_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cmp_eq_all(&self, rhs: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpeq_ps(self.0, rhs.0)) == 0xF }
    }

    // CMPNEQPS reports unordered lanes as not-equal, so NaN counts here.
    #[inline(always)]
    fn cmp_ne_any(&self, rhs: Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpneq_ps(self.0, rhs.0)) != 0 }
    }

    // MOVMSKPS only samples sign bits, so an exact all-ones check has to go
    // through an integer compare against -1 first.
    #[inline(always)]
    fn all_true(&self) -> bool {
        unsafe {
            let ones = _mm_cmpeq_epi32(_mm_castps_si128(self.0), _mm_set1_epi32(-1));
            _mm_movemask_ps(_mm_castsi128_ps(ones)) == 0xF
        }
    }

    #[inline(always)]
    fn any_true(&self) -> bool {
        unsafe {
            let ones = _mm_cmpeq_epi32(_mm_castps_si128(self.0), _mm_set1_epi32(-1));
            _mm_movemask_ps(_mm_castsi128_ps(ones)) != 0
        }
    }

    // A lane is NaN exactly when it compares not-equal to itself.
    #[inline(always)]
    fn is_any_nan(&self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpneq_ps(self.0, self.0)) != 0 }
    }

    // Infinity is a bit pattern, not a magnitude: clear the sign bit and
    // compare against the exponent-only encoding. f32::MAX stays below it
    // and NaN mantissa bits push past it, so neither can match.
    #[inline(always)]
    fn is_any_infinite(&self) -> bool {
        unsafe {
            let magnitude = _mm_and_si128(_mm_castps_si128(self.0), _mm_set1_epi32(0x7FFF_FFFF));
            let infinite = _mm_cmpeq_epi32(magnitude, _mm_set1_epi32(0x7F80_0000));
            _mm_movemask_ps(_mm_castsi128_ps(infinite)) != 0
        }
    }

    // Full bitwise blend. BLENDVPS would only read the mask sign bits, but
    // select has to honor every mask bit independently.
    #[inline(always)]
    fn select(mask: Self, if_true: Self, if_false: Self) -> Self::Output {
        F32x4(unsafe {
            _mm_or_ps(
                _mm_and_ps(mask.0, if_true.0),
                _mm_andnot_ps(mask.0, if_false.0),
            )
        })
    }
}

macro_rules! sse_by_lane {
    ($mul:ident, $mul_add:ident, $splat:ident) => {
        #[inline(always)]
        fn $mul(&self, rhs: Self) -> Self::Output {
            *self * rhs.$splat()
        }

        #[inline(always)]
        fn $mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
            self.mul_add(rhs.$splat(), addend)
        }
    };
}

impl SimdMath for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn abs(&self) -> Self::Output {
        F32x4(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.0) })
    }

    #[inline(always)]
    fn sqrt(&self) -> Self::Output {
        F32x4(unsafe { _mm_sqrt_ps(self.0) })
    }

    // MINPS returns its second operand when the compare is false or
    // unordered. Running it both ways and OR-ing keeps the NaN bits from
    // either side and keeps the sign bit on a +/-0 tie.
    #[inline(always)]
    fn min(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe {
            _mm_or_ps(
                _mm_min_ps(self.0, rhs.0),
                _mm_min_ps(rhs.0, self.0),
            )
        })
    }

    // The AND of both MAXPS orders clears the sign bit on a +/-0 tie, but
    // AND-ing a number with a NaN can destroy the NaN encoding, so
    // unordered lanes take the OR result instead.
    #[inline(always)]
    fn max(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe {
            let m1 = _mm_max_ps(self.0, rhs.0);
            let m2 = _mm_max_ps(rhs.0, self.0);
            let unordered = _mm_cmpunord_ps(self.0, rhs.0);
            _mm_blendv_ps(_mm_and_ps(m1, m2), _mm_or_ps(m1, m2), unordered)
        })
    }

    // ANDNPS complements its first operand, so the operands swap here to
    // get self AND NOT rhs.
    #[inline(always)]
    fn andnot(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_andnot_ps(rhs.0, self.0) })
    }

    // Multiply and add round separately; SSE4.1 predates FMA.
    #[inline(always)]
    fn mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
        F32x4(unsafe { _mm_add_ps(_mm_mul_ps(self.0, rhs.0), addend.0) })
    }

    #[inline(always)]
    fn neg_mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
        F32x4(unsafe { _mm_sub_ps(addend.0, _mm_mul_ps(self.0, rhs.0)) })
    }

    sse_by_lane!(mul_by_x, mul_add_by_x, splat_x);
    sse_by_lane!(mul_by_y, mul_add_by_y, splat_y);
    sse_by_lane!(mul_by_z, mul_add_by_z, splat_z);
    sse_by_lane!(mul_by_w, mul_add_by_w, splat_w);
}

impl SimdGeometry for F32x4 {
    type Output = Self;

    // DPPS with an all-lanes immediate multiplies, sums pairwise as
    // (x + y) + (z + w), and broadcasts the result.
    #[inline(always)]
    fn dot(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_dp_ps::<0xFF>(self.0, rhs.0) })
    }

    #[inline(always)]
    fn cross(&self, rhs: Self) -> Self::Output {
        // The W lanes cancel as w*w - w*w, which is NaN for non-finite
        // inputs, so W is forced to +0.0 by mask.
        let diff = self.yzxw() * rhs.zxyw() - self.zxyw() * rhs.yzxw();
        F32x4(unsafe {
            _mm_and_ps(diff.0, _mm_castsi128_ps(_mm_setr_epi32(-1, -1, -1, 0)))
        })
    }

    #[inline(always)]
    fn length(&self) -> Self::Output {
        self.length_squared().sqrt()
    }

    #[inline(always)]
    fn length_squared(&self) -> Self::Output {
        self.dot(*self)
    }

    #[inline(always)]
    fn normalize(&self) -> Self::Output {
        *self / self.length()
    }

    // Sign-bit XOR on X, Y, Z: zero lanes come out as -0.0 and NaN lanes
    // keep their payload with the sign flipped.
    #[inline(always)]
    fn quaternion_conjugate(&self) -> Self::Output {
        F32x4(unsafe { _mm_xor_ps(self.0, _mm_setr_ps(-0.0, -0.0, -0.0, 0.0)) })
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_add_ps(self.0, rhs.0) })
    }
}

impl AddAssign for F32x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_sub_ps(self.0, rhs.0) })
    }
}

impl SubAssign for F32x4 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_mul_ps(self.0, rhs.0) })
    }
}

/// Scalar broadcast multiply: `v * s` scales every lane by `s`.
impl Mul<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        self * F32x4::splat(rhs)
    }
}

impl MulAssign for F32x4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_div_ps(self.0, rhs.0) })
    }
}

impl DivAssign for F32x4 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for F32x4 {
    type Output = Self;

    // Sign-bit flip, so -0.0 and NaN lanes negate bitwise too.
    #[inline(always)]
    fn neg(self) -> Self::Output {
        F32x4(unsafe { _mm_xor_ps(self.0, _mm_set1_ps(-0.0)) })
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_and_ps(self.0, rhs.0) })
    }
}

impl BitAndAssign for F32x4 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOr for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_or_ps(self.0, rhs.0) })
    }
}

impl BitOrAssign for F32x4 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXor for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { _mm_xor_ps(self.0, rhs.0) })
    }
}

impl BitXorAssign for F32x4 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl Not for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        F32x4(unsafe { _mm_xor_ps(self.0, _mm_castsi128_ps(_mm_set1_epi32(-1))) })
    }
}

impl Eq for F32x4 {}

/// Bitwise equality over the four lanes: identical NaN patterns compare
/// equal, and `+0.0` does not equal `-0.0`.
impl PartialEq for F32x4 {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        unsafe {
            let eq = _mm_cmpeq_epi32(_mm_castps_si128(self.0), _mm_castps_si128(other.0));
            _mm_movemask_ps(_mm_castsi128_ps(eq)) == 0xF
        }
    }
}

impl Hash for F32x4 {
    #[inline(always)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits().hash(state);
    }
}

impl Default for F32x4 {
    #[inline(always)]
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        write!(f, "F32x4({x:?}, {y:?}, {z:?}, {w:?})")
    }
}

impl From<[f32; 4]> for F32x4 {
    #[inline(always)]
    fn from(lanes: [f32; 4]) -> Self {
        Self::from_array(lanes)
    }
}

impl From<F32x4> for [f32; 4] {
    #[inline(always)]
    fn from(v: F32x4) -> Self {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_f32_slice_eq_bitwise(a: &[f32], b: &[f32]) {
        assert_eq!(
            a.len(),
            b.len(),
            "Slice lengths differ (left: {}, right: {})",
            a.len(),
            b.len()
        );
        for i in 0..a.len() {
            assert_eq!(
                a[i].to_bits(),
                b[i].to_bits(),
                "Elements at index {} differ: left={}({:08x}), right={}({:08x})",
                i,
                a[i],
                a[i].to_bits(),
                b[i],
                b[i].to_bits()
            );
        }
    }

    const TRUE_MASK_F32: f32 = f32::from_bits(0xFFFFFFFFu32);

    mod construction {
        use super::*;

        #[test]
        fn test_new_lane_order() {
            let v = F32x4::new(1.0, 2.0, 3.0, 4.0);
            assert_f32_slice_eq_bitwise(&v.to_array(), &[1.0, 2.0, 3.0, 4.0]);
            assert_eq!(v.x(), 1.0);
            assert_eq!(v.y(), 2.0);
            assert_eq!(v.z(), 3.0);
            assert_eq!(v.w(), 4.0);
        }

        #[test]
        fn test_bits_round_trip() {
            let bits = [0x3F80_0000, 0x8000_0000, 0x7F80_0000, 0x7FC0_0000];
            assert_eq!(F32x4::from_bits(bits).to_bits(), bits);
        }

        #[test]
        fn test_load_store_round_trip() {
            let data = [0.0f32, -0.0, 1.5, f32::INFINITY];
            let v = unsafe { F32x4::load(data.as_ptr()) };

            let mut out = [0.0f32; LANE_COUNT];
            unsafe { v.store_at(out.as_mut_ptr()) };
            assert_f32_slice_eq_bitwise(&out, &data);
        }

        #[test]
        fn test_layout_is_four_packed_lanes() {
            assert_eq!(std::mem::size_of::<F32x4>(), 16);
            assert_eq!(std::mem::align_of::<F32x4>(), 16);
        }
    }

    mod swizzles {
        use super::*;

        #[test]
        fn test_single_vector_permutes() {
            let v = F32x4::new(1.0, 2.0, 3.0, 4.0);

            assert_f32_slice_eq_bitwise(&v.xyzw().to_array(), &[1.0, 2.0, 3.0, 4.0]);
            assert_f32_slice_eq_bitwise(&v.xzwy().to_array(), &[1.0, 3.0, 4.0, 2.0]);
            assert_f32_slice_eq_bitwise(&v.yzxw().to_array(), &[2.0, 3.0, 1.0, 4.0]);
            assert_f32_slice_eq_bitwise(&v.zxyw().to_array(), &[3.0, 1.0, 2.0, 4.0]);
            assert_f32_slice_eq_bitwise(&v.wzyx().to_array(), &[4.0, 3.0, 2.0, 1.0]);
            assert_f32_slice_eq_bitwise(&v.splat_z().to_array(), &[3.0; LANE_COUNT]);
        }

        #[test]
        fn test_concats_and_interleaves() {
            let a = F32x4::new(0.0, 1.0, 2.0, 3.0);
            let b = F32x4::new(4.0, 5.0, 6.0, 7.0);

            assert_f32_slice_eq_bitwise(&a.concat_xy_zw(b).to_array(), &[0.0, 1.0, 6.0, 7.0]);
            assert_f32_slice_eq_bitwise(&a.concat_xz_yw(b).to_array(), &[0.0, 2.0, 5.0, 7.0]);
            assert_f32_slice_eq_bitwise(&a.interleave_lower(b).to_array(), &[0.0, 4.0, 1.0, 5.0]);
            assert_f32_slice_eq_bitwise(&a.interleave_upper(b).to_array(), &[2.0, 6.0, 3.0, 7.0]);
        }
    }

    mod compare {
        use super::*;

        #[test]
        fn test_masks_are_canonical() {
            let v1 = F32x4::new(1.0, 2.0, 3.0, 4.0);
            let v2 = F32x4::new(1.0, 3.0, 2.0, 4.0);

            assert_eq!(v1.cmp_eq(v2).to_bits(), [u32::MAX, 0, 0, u32::MAX]);
            assert_eq!(v1.cmp_lt(v2).to_bits(), [0, u32::MAX, 0, 0]);
            assert_eq!(v1.cmp_ge(v2).to_bits(), [u32::MAX, 0, u32::MAX, u32::MAX]);
        }

        #[test]
        fn test_nan_lanes_compare_false() {
            let v = F32x4::new(f32::NAN, 1.0, 2.0, 3.0);
            assert_eq!(v.cmp_eq(v).to_bits()[0], 0);
            assert!(v.is_any_nan());
            assert!(!F32x4::splat(1.0).is_any_nan());
        }

        #[test]
        fn test_equality_reductions() {
            let v = F32x4::new(1.0, 2.0, 3.0, 4.0);
            let w = F32x4::new(1.0, 2.0, 3.5, 4.0);

            assert!(v.cmp_eq_all(v));
            assert!(!v.cmp_eq_all(w));
            assert!(v.cmp_ne_any(w));
            assert!(F32x4::splat(f32::NAN).cmp_ne_any(F32x4::splat(f32::NAN)));
        }

        #[test]
        fn test_all_any_true_need_full_lanes() {
            // A sign bit alone must not satisfy the exact all-ones test.
            let sign_only = F32x4::from_bits([0x8000_0000; 4]);
            assert!(!sign_only.all_true());
            assert!(!sign_only.any_true());

            let mixed = F32x4::from_bits([u32::MAX, 0, 0x7FFF_FFFF, 0]);
            assert!(!mixed.all_true());
            assert!(mixed.any_true());
            assert!(F32x4::splat(TRUE_MASK_F32).all_true());
        }

        #[test]
        fn test_infinity_is_a_bit_pattern() {
            assert!(F32x4::new(0.0, f32::INFINITY, 0.0, 0.0).is_any_infinite());
            assert!(F32x4::new(0.0, f32::NEG_INFINITY, 0.0, 0.0).is_any_infinite());
            assert!(!F32x4::new(f32::MAX, f32::MIN, f32::NAN, 0.0).is_any_infinite());
        }

        #[test]
        fn test_select_blends_all_bits() {
            let t = F32x4::new(1.0, 2.0, 3.0, 4.0);
            let f = F32x4::new(5.0, 6.0, 7.0, 8.0);

            let mask = F32x4::from_bits([u32::MAX, 0, u32::MAX, 0]);
            let picked = F32x4::select(mask, t, f);
            assert_f32_slice_eq_bitwise(&picked.to_array(), &[1.0, 6.0, 3.0, 8.0]);

            // Partial masks mix bits from both sources within a lane.
            let partial = F32x4::from_bits([0x8000_0000; 4]);
            let mixed = F32x4::select(partial, F32x4::splat(-0.0), F32x4::splat(1.0));
            assert_f32_slice_eq_bitwise(&mixed.to_array(), &[-1.0; LANE_COUNT]);
        }
    }

    mod math_ops {
        use super::*;

        #[test]
        fn test_abs_and_sqrt() {
            let v = F32x4::new(-1.0, 4.0, -0.0, 9.0);
            assert_f32_slice_eq_bitwise(&v.abs().to_array(), &[1.0, 4.0, 0.0, 9.0]);
            assert_f32_slice_eq_bitwise(
                &F32x4::new(4.0, 9.0, 16.0, 25.0).sqrt().to_array(),
                &[2.0, 3.0, 4.0, 5.0],
            );
        }

        #[test]
        fn test_min_max_signed_zero_ties() {
            let a = F32x4::new(0.0, -0.0, 0.0, -0.0);
            let b = F32x4::new(-0.0, 0.0, 0.0, -0.0);

            assert_eq!(a.max(b).to_bits(), [0, 0, 0, 0x8000_0000]);
            assert_eq!(
                a.min(b).to_bits(),
                [0x8000_0000, 0x8000_0000, 0, 0x8000_0000]
            );
        }

        #[test]
        fn test_min_max_nan_poisons() {
            let a = F32x4::new(f32::NAN, 1.0, f32::NAN, 5.0);
            let b = F32x4::new(2.0, f32::NAN, f32::NAN, 7.0);

            let max = a.max(b).to_array();
            assert!(max[0].is_nan() && max[1].is_nan() && max[2].is_nan());
            assert_eq!(max[3], 7.0);

            let min = a.min(b).to_array();
            assert!(min[0].is_nan() && min[1].is_nan() && min[2].is_nan());
            assert_eq!(min[3], 5.0);
        }

        #[test]
        fn test_min_max_ordinary_lanes() {
            let a = F32x4::new(1.0, -3.0, f32::INFINITY, 0.5);
            let b = F32x4::new(2.0, -7.0, 1.0, f32::NEG_INFINITY);

            assert_f32_slice_eq_bitwise(
                &a.max(b).to_array(),
                &[2.0, -3.0, f32::INFINITY, 0.5],
            );
            assert_f32_slice_eq_bitwise(
                &a.min(b).to_array(),
                &[1.0, -7.0, 1.0, f32::NEG_INFINITY],
            );
        }

        #[test]
        fn test_andnot_keeps_self_bits_only() {
            let a = F32x4::from_bits([0b1100; 4]);
            let b = F32x4::from_bits([0b1010; 4]);
            assert_eq!(a.andnot(b).to_bits(), [0b0100; 4]);
        }

        #[test]
        fn test_fused_and_by_lane_family() {
            let a = F32x4::new(1.0, 2.0, 3.0, 4.0);
            let b = F32x4::new(5.0, 6.0, 7.0, 8.0);
            let c = F32x4::new(10.0, 20.0, 30.0, 40.0);

            assert_f32_slice_eq_bitwise(&a.mul_add(b, c).to_array(), &[15.0, 32.0, 51.0, 72.0]);
            assert_f32_slice_eq_bitwise(&a.neg_mul_add(b, c).to_array(), &[5.0, 8.0, 9.0, 8.0]);
            assert_f32_slice_eq_bitwise(&a.mul_by_y(b).to_array(), &[6.0, 12.0, 18.0, 24.0]);
            assert_f32_slice_eq_bitwise(
                &a.mul_add_by_x(b, c).to_array(),
                &[15.0, 30.0, 45.0, 60.0],
            );
        }
    }

    mod geometry {
        use super::*;

        #[test]
        fn test_dot_broadcasts() {
            let a = F32x4::new(0.0, 1.0, 2.0, 3.0);
            let b = F32x4::new(4.0, 5.0, 6.0, 7.0);
            assert_f32_slice_eq_bitwise(&a.dot(b).to_array(), &[38.0; LANE_COUNT]);
        }

        #[test]
        fn test_cross_zeroes_w() {
            let a = F32x4::new(0.0, 1.0, 2.0, 3.0);
            let b = F32x4::new(4.0, 5.0, 6.0, 7.0);
            assert_f32_slice_eq_bitwise(&a.cross(b).to_array(), &[-4.0, 8.0, -4.0, 0.0]);

            let nan_w = F32x4::new(0.0, 1.0, 2.0, f32::NAN);
            let inf_w = F32x4::new(4.0, 5.0, 6.0, f32::INFINITY);
            assert_eq!(nan_w.cross(inf_w).to_bits()[3], 0);
        }

        #[test]
        fn test_length_and_normalize() {
            let v = F32x4::new(0.0, 3.0, 4.0, 0.0);
            assert_f32_slice_eq_bitwise(&v.length_squared().to_array(), &[25.0; LANE_COUNT]);
            assert_f32_slice_eq_bitwise(&v.length().to_array(), &[5.0; LANE_COUNT]);
            assert_f32_slice_eq_bitwise(&v.normalize().to_array(), &[0.0, 0.6, 0.8, 0.0]);
            assert!(F32x4::splat(0.0).normalize().is_any_nan());
        }

        #[test]
        fn test_quaternion_conjugate() {
            let q = F32x4::new(1.0, -2.0, 3.0, 4.0);
            assert_f32_slice_eq_bitwise(
                &q.quaternion_conjugate().to_array(),
                &[-1.0, 2.0, -3.0, 4.0],
            );
            assert_f32_slice_eq_bitwise(
                &F32x4::new(0.0, 0.0, 0.0, 1.0).quaternion_conjugate().to_array(),
                &[-0.0, -0.0, -0.0, 1.0],
            );
        }
    }

    mod operator_overloads {
        use super::*;

        #[test]
        fn test_arithmetic_ops() {
            let v1 = F32x4::new(1.0, 2.0, 3.0, 4.0);
            let v2 = F32x4::splat(2.0);

            assert_f32_slice_eq_bitwise(&(v1 + v2).to_array(), &[3.0, 4.0, 5.0, 6.0]);
            assert_f32_slice_eq_bitwise(&(v1 - v2).to_array(), &[-1.0, 0.0, 1.0, 2.0]);
            assert_f32_slice_eq_bitwise(&(v1 * v2).to_array(), &[2.0, 4.0, 6.0, 8.0]);
            assert_f32_slice_eq_bitwise(&(v1 / v2).to_array(), &[0.5, 1.0, 1.5, 2.0]);
            assert_f32_slice_eq_bitwise(&(v1 * 10.0).to_array(), &[10.0, 20.0, 30.0, 40.0]);
            assert_f32_slice_eq_bitwise(&(-v1).to_array(), &[-1.0, -2.0, -3.0, -4.0]);
        }

        #[test]
        fn test_assign_and_bitwise_ops() {
            let mut v = F32x4::new(1.0, 2.0, 3.0, 4.0);
            v += F32x4::splat(1.0);
            v *= F32x4::splat(2.0);
            assert_f32_slice_eq_bitwise(&v.to_array(), &[4.0, 6.0, 8.0, 10.0]);

            let pattern = F32x4::from_bits([u32::MAX, 0, u32::MAX, 0]);
            assert_eq!((!pattern).to_bits(), [0, u32::MAX, 0, u32::MAX]);
            assert_eq!(
                (pattern & F32x4::splat(TRUE_MASK_F32)).to_bits(),
                pattern.to_bits()
            );
            assert_eq!((pattern ^ pattern).to_bits(), [0; 4]);
            assert_eq!(
                (pattern | F32x4::from_bits([0, u32::MAX, 0, u32::MAX])).to_bits(),
                [u32::MAX; 4]
            );
        }

        #[test]
        fn test_neg_flips_zero_sign() {
            let v = F32x4::new(0.0, -0.0, 1.0, -1.0);
            assert_f32_slice_eq_bitwise(&(-v).to_array(), &[-0.0, 0.0, -1.0, 1.0]);
        }

        #[test]
        fn test_bitwise_identity() {
            assert_eq!(F32x4::splat(f32::NAN), F32x4::splat(f32::NAN));
            assert_ne!(F32x4::splat(0.0), F32x4::splat(-0.0));
            assert_eq!(F32x4::default(), F32x4::splat(0.0));
        }
    }
}
