//! NEON-optimized 4-lane f32 vector implementation.
//!
//! This module provides `F32x4`, a quad-float backed by a single
//! `float32x4_t` register. The AArch64 float instructions already order
//! `-0.0` below `+0.0` and propagate NaN through `FMIN`/`FMAX`, so most
//! operations are one intrinsic with no fixup.
//!
//! # Architecture Requirements
//!
//! - **aarch64 with NEON**: selected by the build script when the host CPU
//!   reports `neon`
//!
//! # Performance Characteristics
//!
//! - **Single register**: the full vector lives in one NEON register
//! - **One instruction** for arithmetic, comparison, min/max, and bitwise
//!   operations
//! - **Fused multiply-add**: the `mul_add` family rounds once via
//!   `FMLA`/`FMLS`, unlike the SSE4.1 and portable backends

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

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

/// NEON quad-float: four packed f32 lanes in one `float32x4_t` register.
///
/// Lane order is `X, Y, Z, W` from the lowest-addressed element up, matching
/// the portable backend and the in-memory layout of `[f32; 4]`.
///
/// # Memory Layout
///
/// - **Size**: 16 bytes (four consecutive f32 lanes, no padding)
/// - **Alignment**: 16 bytes
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(pub float32x4_t);

// TBL byte table moving source lane l to output lane i: output bytes
// 4i..4i+3 read source bytes 4l..4l+3.
const fn lane_table(lanes: [u8; 4]) -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut i = 0;
    while i < 4 {
        let base = lanes[i] * 4;
        table[i * 4] = base;
        table[i * 4 + 1] = base + 1;
        table[i * 4 + 2] = base + 2;
        table[i * 4 + 3] = base + 3;
        i += 1;
    }
    table
}

// Two-register TBL table: output lanes 0-1 read the first register, lanes
// 2-3 read the second, whose bytes start at offset 16.
const fn concat_table(lanes: [u8; 4]) -> [u8; 16] {
    let mut table = [0u8; 16];
    let mut i = 0;
    while i < 4 {
        let offset = if i < 2 { 0 } else { 16 };
        let base = lanes[i] * 4 + offset;
        table[i * 4] = base;
        table[i * 4 + 1] = base + 1;
        table[i * 4 + 2] = base + 2;
        table[i * 4 + 3] = base + 3;
        i += 1;
    }
    table
}

impl SimdLoad for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self::Output {
        let lanes = [x, y, z, w];
        F32x4(unsafe { vld1q_f32(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn splat(value: f32) -> Self::Output {
        F32x4(unsafe { vdupq_n_f32(value) })
    }

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self::Output {
        F32x4(unsafe { vld1q_f32(lanes.as_ptr()) })
    }

    #[inline(always)]
    fn from_bits(bits: [u32; 4]) -> Self::Output {
        F32x4(unsafe { vreinterpretq_f32_u32(vld1q_u32(bits.as_ptr())) })
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        F32x4(vld1q_f32(ptr))
    }
}

impl SimdStore for F32x4 {
    #[inline(always)]
    fn to_array(&self) -> [f32; 4] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { vst1q_f32(lanes.as_mut_ptr(), self.0) };
        lanes
    }

    #[inline(always)]
    fn to_bits(&self) -> [u32; 4] {
        let mut bits = [0u32; LANE_COUNT];
        unsafe { vst1q_u32(bits.as_mut_ptr(), vreinterpretq_u32_f32(self.0)) };
        bits
    }

    #[inline(always)]
    fn x(&self) -> f32 {
        unsafe { vgetq_lane_f32::<0>(self.0) }
    }

    #[inline(always)]
    fn y(&self) -> f32 {
        unsafe { vgetq_lane_f32::<1>(self.0) }
    }

    #[inline(always)]
    fn z(&self) -> f32 {
        unsafe { vgetq_lane_f32::<2>(self.0) }
    }

    #[inline(always)]
    fn w(&self) -> f32 {
        unsafe { vgetq_lane_f32::<3>(self.0) }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        vst1q_f32(ptr, self.0);
    }
}

macro_rules! neon_swizzle {
    ($name:ident, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        #[inline(always)]
        fn $name(&self) -> Self::Output {
            const TABLE: [u8; 16] = lane_table([$i0, $i1, $i2, $i3]);
            F32x4(unsafe {
                vreinterpretq_f32_u8(vqtbl1q_u8(
                    vreinterpretq_u8_f32(self.0),
                    vld1q_u8(TABLE.as_ptr()),
                ))
            })
        }
    };
}

macro_rules! neon_concat {
    ($name:ident, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        #[inline(always)]
        fn $name(&self, other: Self) -> Self::Output {
            const TABLE: [u8; 16] = concat_table([$i0, $i1, $i2, $i3]);
            F32x4(unsafe {
                let pair = uint8x16x2_t(
                    vreinterpretq_u8_f32(self.0),
                    vreinterpretq_u8_f32(other.0),
                );
                vreinterpretq_f32_u8(vqtbl2q_u8(pair, vld1q_u8(TABLE.as_ptr())))
            })
        }
    };
}

impl SimdShuffle for F32x4 {
    type Output = Self;

    for_each_swizzle!(neon_swizzle);
    for_each_concat!(neon_concat);

    #[inline(always)]
    fn splat_x(&self) -> Self::Output {
        F32x4(unsafe { vdupq_laneq_f32::<0>(self.0) })
    }

    #[inline(always)]
    fn splat_y(&self) -> Self::Output {
        F32x4(unsafe { vdupq_laneq_f32::<1>(self.0) })
    }

    #[inline(always)]
    fn splat_z(&self) -> Self::Output {
        F32x4(unsafe { vdupq_laneq_f32::<2>(self.0) })
    }

    #[inline(always)]
    fn splat_w(&self) -> Self::Output {
        F32x4(unsafe { vdupq_laneq_f32::<3>(self.0) })
    }

    #[inline(always)]
    fn interleave_lower(&self, other: Self) -> Self::Output {
        F32x4(unsafe { vzip1q_f32(self.0, other.0) })
    }

    #[inline(always)]
    fn interleave_upper(&self, other: Self) -> Self::Output {
        F32x4(unsafe { vzip2q_f32(self.0, other.0) })
    }
}

impl SimdCompare for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn cmp_eq(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vreinterpretq_f32_u32(vceqq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_lt(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vreinterpretq_f32_u32(vcltq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_le(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vreinterpretq_f32_u32(vcleq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_gt(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vreinterpretq_f32_u32(vcgtq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_ge(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vreinterpretq_f32_u32(vcgeq_f32(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn cmp_eq_all(&self, rhs: Self) -> bool {
        unsafe { vminvq_u32(vceqq_f32(self.0, rhs.0)) == u32::MAX }
    }

    // FCMEQ reports NaN lanes as not-equal, so they count here.
    #[inline(always)]
    fn cmp_ne_any(&self, rhs: Self) -> bool {
        unsafe { vminvq_u32(vceqq_f32(self.0, rhs.0)) != u32::MAX }
    }

    // Horizontal min/max against the exact all-ones pattern; a lane with
    // only some bits set satisfies neither reduction.
    #[inline(always)]
    fn all_true(&self) -> bool {
        unsafe { vminvq_u32(vreinterpretq_u32_f32(self.0)) == u32::MAX }
    }

    #[inline(always)]
    fn any_true(&self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_f32(self.0)) == u32::MAX }
    }

    // A lane is NaN exactly when it compares not-equal to itself.
    #[inline(always)]
    fn is_any_nan(&self) -> bool {
        unsafe { vminvq_u32(vceqq_f32(self.0, self.0)) != u32::MAX }
    }

    // Infinity is a bit pattern, not a magnitude: clear the sign bit and
    // compare against the exponent-only encoding.
    #[inline(always)]
    fn is_any_infinite(&self) -> bool {
        unsafe {
            let magnitude = vandq_u32(vreinterpretq_u32_f32(self.0), vdupq_n_u32(0x7FFF_FFFF));
            let infinite = vceqq_u32(magnitude, vdupq_n_u32(0x7F80_0000));
            vmaxvq_u32(infinite) != 0
        }
    }

    // BSL blends bit by bit, which is exactly the required semantics.
    #[inline(always)]
    fn select(mask: Self, if_true: Self, if_false: Self) -> Self::Output {
        F32x4(unsafe {
            vbslq_f32(
                vreinterpretq_u32_f32(mask.0),
                if_true.0,
                if_false.0,
            )
        })
    }
}

macro_rules! neon_by_lane {
    ($mul:ident, $mul_add:ident, $lane:literal) => {
        #[inline(always)]
        fn $mul(&self, rhs: Self) -> Self::Output {
            F32x4(unsafe { vmulq_laneq_f32::<$lane>(self.0, rhs.0) })
        }

        #[inline(always)]
        fn $mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
            F32x4(unsafe { vfmaq_laneq_f32::<$lane>(addend.0, self.0, rhs.0) })
        }
    };
}

impl SimdMath for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn abs(&self) -> Self::Output {
        F32x4(unsafe { vabsq_f32(self.0) })
    }

    #[inline(always)]
    fn sqrt(&self) -> Self::Output {
        F32x4(unsafe { vsqrtq_f32(self.0) })
    }

    // FMIN/FMAX already propagate NaN and break +/-0 ties by sign.
    #[inline(always)]
    fn min(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vminq_f32(self.0, rhs.0) })
    }

    #[inline(always)]
    fn max(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vmaxq_f32(self.0, rhs.0) })
    }

    // BIC clears the bits of its second operand: self AND NOT rhs.
    #[inline(always)]
    fn andnot(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe {
            vreinterpretq_f32_u32(vbicq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(rhs.0),
            ))
        })
    }

    // FMLA rounds once, so results may differ from the SSE4.1 and portable
    // backends by one unit in the last place.
    #[inline(always)]
    fn mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
        F32x4(unsafe { vfmaq_f32(addend.0, self.0, rhs.0) })
    }

    #[inline(always)]
    fn neg_mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
        F32x4(unsafe { vfmsq_f32(addend.0, self.0, rhs.0) })
    }

    neon_by_lane!(mul_by_x, mul_add_by_x, 0);
    neon_by_lane!(mul_by_y, mul_add_by_y, 1);
    neon_by_lane!(mul_by_z, mul_add_by_z, 2);
    neon_by_lane!(mul_by_w, mul_add_by_w, 3);
}

impl SimdGeometry for F32x4 {
    type Output = Self;

    // Two FADDP passes sum as (x + y) + (z + w), the same pairwise order as
    // the other backends, then leave the result in every lane.
    #[inline(always)]
    fn dot(&self, rhs: Self) -> Self::Output {
        F32x4(unsafe {
            let prod = vmulq_f32(self.0, rhs.0);
            let pairs = vpaddq_f32(prod, prod);
            vpaddq_f32(pairs, pairs)
        })
    }

    #[inline(always)]
    fn cross(&self, rhs: Self) -> Self::Output {
        // The W lanes cancel as w*w - w*w, which is NaN for non-finite
        // inputs, so W is forced to +0.0 by mask.
        const XYZ_MASK: [u32; 4] = [u32::MAX, u32::MAX, u32::MAX, 0];

        let diff = self.yzxw() * rhs.zxyw() - self.zxyw() * rhs.yzxw();
        F32x4(unsafe {
            vreinterpretq_f32_u32(vandq_u32(
                vreinterpretq_u32_f32(diff.0),
                vld1q_u32(XYZ_MASK.as_ptr()),
            ))
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
        const SIGN_XYZ: [u32; 4] = [0x8000_0000, 0x8000_0000, 0x8000_0000, 0];

        F32x4(unsafe {
            vreinterpretq_f32_u32(veorq_u32(
                vreinterpretq_u32_f32(self.0),
                vld1q_u32(SIGN_XYZ.as_ptr()),
            ))
        })
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        F32x4(unsafe { vaddq_f32(self.0, rhs.0) })
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
        F32x4(unsafe { vsubq_f32(self.0, rhs.0) })
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
        F32x4(unsafe { vmulq_f32(self.0, rhs.0) })
    }
}

/// Scalar broadcast multiply: `v * s` scales every lane by `s`.
impl Mul<f32> for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f32) -> Self::Output {
        F32x4(unsafe { vmulq_n_f32(self.0, rhs) })
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
        F32x4(unsafe { vdivq_f32(self.0, rhs.0) })
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

    // FNEG flips the sign bit, so -0.0 and NaN lanes negate bitwise too.
    #[inline(always)]
    fn neg(self) -> Self::Output {
        F32x4(unsafe { vnegq_f32(self.0) })
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        F32x4(unsafe {
            vreinterpretq_f32_u32(vandq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(rhs.0),
            ))
        })
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
        F32x4(unsafe {
            vreinterpretq_f32_u32(vorrq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(rhs.0),
            ))
        })
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
        F32x4(unsafe {
            vreinterpretq_f32_u32(veorq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(rhs.0),
            ))
        })
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
        F32x4(unsafe { vreinterpretq_f32_u32(vmvnq_u32(vreinterpretq_u32_f32(self.0))) })
    }
}

impl Eq for F32x4 {}

/// Bitwise equality over the four lanes: identical NaN patterns compare
/// equal, and `+0.0` does not equal `-0.0`.
impl PartialEq for F32x4 {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        unsafe {
            let eq = vceqq_u32(
                vreinterpretq_u32_f32(self.0),
                vreinterpretq_u32_f32(other.0),
            );
            vminvq_u32(eq) == u32::MAX
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
