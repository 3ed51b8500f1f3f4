//! Portable 4-lane f32 vector implementation.
//!
//! This is the reference `F32x4`: every operation is written as plain lane
//! arithmetic over a `[f32; 4]`, in the exact semantics the SIMD backends
//! must reproduce. The layout matches the hardware backends (four
//! consecutive f32 lanes, 16 bytes, 16-byte aligned), so values round-trip
//! through raw pointers identically on every backend.

use crate::math;
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

/// Portable quad-float: four f32 lanes in `X, Y, Z, W` order.
#[derive(Copy, Clone)]
#[repr(C, align(16))]
pub struct F32x4(pub [f32; 4]);

// Canonical lane mask value for a true comparison result.
#[inline(always)]
fn mask_lane(cond: bool) -> f32 {
    if cond {
        f32::from_bits(u32::MAX)
    } else {
        0.0
    }
}

impl SimdLoad for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self::Output {
        F32x4([x, y, z, w])
    }

    #[inline(always)]
    fn splat(value: f32) -> Self::Output {
        F32x4([value; LANE_COUNT])
    }

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self::Output {
        F32x4(lanes)
    }

    #[inline(always)]
    fn from_bits(bits: [u32; 4]) -> Self::Output {
        F32x4(bits.map(f32::from_bits))
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        F32x4([*ptr, *ptr.add(1), *ptr.add(2), *ptr.add(3)])
    }
}

impl SimdStore for F32x4 {
    #[inline(always)]
    fn to_array(&self) -> [f32; 4] {
        self.0
    }

    #[inline(always)]
    fn to_bits(&self) -> [u32; 4] {
        self.0.map(f32::to_bits)
    }

    #[inline(always)]
    fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    fn w(&self) -> f32 {
        self.0[3]
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        for (i, lane) in self.0.iter().enumerate() {
            *ptr.add(i) = *lane;
        }
    }
}

// Output lane i reads source lane $i, straight from the catalog table.
macro_rules! scalar_swizzle {
    ($name:ident, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        #[inline(always)]
        fn $name(&self) -> Self::Output {
            F32x4([self.0[$i0], self.0[$i1], self.0[$i2], self.0[$i3]])
        }
    };
}

// Lanes 0-1 from self, lanes 2-3 from other.
macro_rules! scalar_concat {
    ($name:ident, $i0:literal, $i1:literal, $i2:literal, $i3:literal) => {
        #[inline(always)]
        fn $name(&self, other: Self) -> Self::Output {
            F32x4([self.0[$i0], self.0[$i1], other.0[$i2], other.0[$i3]])
        }
    };
}

impl SimdShuffle for F32x4 {
    type Output = Self;

    for_each_swizzle!(scalar_swizzle);
    for_each_concat!(scalar_concat);

    #[inline(always)]
    fn splat_x(&self) -> Self::Output {
        F32x4([self.0[0]; LANE_COUNT])
    }

    #[inline(always)]
    fn splat_y(&self) -> Self::Output {
        F32x4([self.0[1]; LANE_COUNT])
    }

    #[inline(always)]
    fn splat_z(&self) -> Self::Output {
        F32x4([self.0[2]; LANE_COUNT])
    }

    #[inline(always)]
    fn splat_w(&self) -> Self::Output {
        F32x4([self.0[3]; LANE_COUNT])
    }

    #[inline(always)]
    fn interleave_lower(&self, other: Self) -> Self::Output {
        F32x4([self.0[0], other.0[0], self.0[1], other.0[1]])
    }

    #[inline(always)]
    fn interleave_upper(&self, other: Self) -> Self::Output {
        F32x4([self.0[2], other.0[2], self.0[3], other.0[3]])
    }
}

impl SimdCompare for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn cmp_eq(&self, rhs: Self) -> Self::Output {
        F32x4([
            mask_lane(self.0[0] == rhs.0[0]),
            mask_lane(self.0[1] == rhs.0[1]),
            mask_lane(self.0[2] == rhs.0[2]),
            mask_lane(self.0[3] == rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn cmp_lt(&self, rhs: Self) -> Self::Output {
        F32x4([
            mask_lane(self.0[0] < rhs.0[0]),
            mask_lane(self.0[1] < rhs.0[1]),
            mask_lane(self.0[2] < rhs.0[2]),
            mask_lane(self.0[3] < rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn cmp_le(&self, rhs: Self) -> Self::Output {
        F32x4([
            mask_lane(self.0[0] <= rhs.0[0]),
            mask_lane(self.0[1] <= rhs.0[1]),
            mask_lane(self.0[2] <= rhs.0[2]),
            mask_lane(self.0[3] <= rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn cmp_gt(&self, rhs: Self) -> Self::Output {
        F32x4([
            mask_lane(self.0[0] > rhs.0[0]),
            mask_lane(self.0[1] > rhs.0[1]),
            mask_lane(self.0[2] > rhs.0[2]),
            mask_lane(self.0[3] > rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn cmp_ge(&self, rhs: Self) -> Self::Output {
        F32x4([
            mask_lane(self.0[0] >= rhs.0[0]),
            mask_lane(self.0[1] >= rhs.0[1]),
            mask_lane(self.0[2] >= rhs.0[2]),
            mask_lane(self.0[3] >= rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn cmp_eq_all(&self, rhs: Self) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(a, b)| a == b)
    }

    #[inline(always)]
    fn cmp_ne_any(&self, rhs: Self) -> bool {
        // NaN lanes compare not-equal, so they count here.
        self.0
            .iter()
            .zip(rhs.0.iter())
            .any(|(a, b)| a != b)
    }

    #[inline(always)]
    fn all_true(&self) -> bool {
        self.to_bits().iter().all(|&lane| lane == u32::MAX)
    }

    #[inline(always)]
    fn any_true(&self) -> bool {
        self.to_bits().iter().any(|&lane| lane == u32::MAX)
    }

    #[inline(always)]
    fn is_any_nan(&self) -> bool {
        self.0.iter().any(|lane| lane.is_nan())
    }

    #[inline(always)]
    fn is_any_infinite(&self) -> bool {
        self.0.iter().any(|lane| lane.is_infinite())
    }

    #[inline(always)]
    fn select(mask: Self, if_true: Self, if_false: Self) -> Self::Output {
        let m = mask.to_bits();
        let t = if_true.to_bits();
        let f = if_false.to_bits();

        F32x4::from_bits([
            (m[0] & t[0]) | (!m[0] & f[0]),
            (m[1] & t[1]) | (!m[1] & f[1]),
            (m[2] & t[2]) | (!m[2] & f[2]),
            (m[3] & t[3]) | (!m[3] & f[3]),
        ])
    }
}

// Multiplies every lane by one broadcast lane of rhs, with and without an
// addend.
macro_rules! scalar_by_lane {
    ($mul:ident, $mul_add:ident, $lane:literal) => {
        #[inline(always)]
        fn $mul(&self, rhs: Self) -> Self::Output {
            let s = rhs.0[$lane];
            F32x4([self.0[0] * s, self.0[1] * s, self.0[2] * s, self.0[3] * s])
        }

        #[inline(always)]
        fn $mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
            let s = rhs.0[$lane];
            F32x4([
                self.0[0] * s + addend.0[0],
                self.0[1] * s + addend.0[1],
                self.0[2] * s + addend.0[2],
                self.0[3] * s + addend.0[3],
            ])
        }
    };
}

impl SimdMath for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn abs(&self) -> Self::Output {
        F32x4(self.0.map(f32::abs))
    }

    #[inline(always)]
    fn sqrt(&self) -> Self::Output {
        F32x4(self.0.map(f32::sqrt))
    }

    #[inline(always)]
    fn min(&self, rhs: Self) -> Self::Output {
        F32x4([
            math::min(self.0[0], rhs.0[0]),
            math::min(self.0[1], rhs.0[1]),
            math::min(self.0[2], rhs.0[2]),
            math::min(self.0[3], rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn max(&self, rhs: Self) -> Self::Output {
        F32x4([
            math::max(self.0[0], rhs.0[0]),
            math::max(self.0[1], rhs.0[1]),
            math::max(self.0[2], rhs.0[2]),
            math::max(self.0[3], rhs.0[3]),
        ])
    }

    #[inline(always)]
    fn andnot(&self, rhs: Self) -> Self::Output {
        let a = self.to_bits();
        let b = rhs.to_bits();

        F32x4::from_bits([a[0] & !b[0], a[1] & !b[1], a[2] & !b[2], a[3] & !b[3]])
    }

    // Multiply and add round separately here, matching the SSE backend.
    #[inline(always)]
    fn mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
        F32x4([
            self.0[0] * rhs.0[0] + addend.0[0],
            self.0[1] * rhs.0[1] + addend.0[1],
            self.0[2] * rhs.0[2] + addend.0[2],
            self.0[3] * rhs.0[3] + addend.0[3],
        ])
    }

    #[inline(always)]
    fn neg_mul_add(&self, rhs: Self, addend: Self) -> Self::Output {
        F32x4([
            addend.0[0] - self.0[0] * rhs.0[0],
            addend.0[1] - self.0[1] * rhs.0[1],
            addend.0[2] - self.0[2] * rhs.0[2],
            addend.0[3] - self.0[3] * rhs.0[3],
        ])
    }

    scalar_by_lane!(mul_by_x, mul_add_by_x, 0);
    scalar_by_lane!(mul_by_y, mul_add_by_y, 1);
    scalar_by_lane!(mul_by_z, mul_add_by_z, 2);
    scalar_by_lane!(mul_by_w, mul_add_by_w, 3);
}

impl SimdGeometry for F32x4 {
    type Output = Self;

    // Pairwise sum order (x + y) + (z + w) matches the SSE and NEON
    // reduction instructions, keeping finite results bitwise identical
    // across backends.
    #[inline(always)]
    fn dot(&self, rhs: Self) -> Self::Output {
        let p = [
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
            self.0[3] * rhs.0[3],
        ];
        let sum = (p[0] + p[1]) + (p[2] + p[3]);

        F32x4::splat(sum)
    }

    #[inline(always)]
    fn cross(&self, rhs: Self) -> Self::Output {
        let a = self.0;
        let b = rhs.0;

        // Lane W is +0.0 by construction, whatever the input W lanes hold.
        F32x4([
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
            0.0,
        ])
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

    #[inline(always)]
    fn quaternion_conjugate(&self) -> Self::Output {
        F32x4([-self.0[0], -self.0[1], -self.0[2], self.0[3]])
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        F32x4([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
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
        F32x4([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
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
        F32x4([
            self.0[0] * rhs.0[0],
            self.0[1] * rhs.0[1],
            self.0[2] * rhs.0[2],
            self.0[3] * rhs.0[3],
        ])
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
        F32x4([
            self.0[0] / rhs.0[0],
            self.0[1] / rhs.0[1],
            self.0[2] / rhs.0[2],
            self.0[3] / rhs.0[3],
        ])
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
        F32x4([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }
}

impl BitAnd for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        let a = self.to_bits();
        let b = rhs.to_bits();

        F32x4::from_bits([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
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
        let a = self.to_bits();
        let b = rhs.to_bits();

        F32x4::from_bits([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
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
        let a = self.to_bits();
        let b = rhs.to_bits();

        F32x4::from_bits([a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]])
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
        let a = self.to_bits();

        F32x4::from_bits([!a[0], !a[1], !a[2], !a[3]])
    }
}

impl Eq for F32x4 {}

/// Bitwise equality over the four lanes: identical NaN patterns compare
/// equal, and `+0.0` does not equal `-0.0`.
impl PartialEq for F32x4 {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
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
        let [x, y, z, w] = self.0;
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
