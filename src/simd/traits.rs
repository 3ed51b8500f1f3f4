//! Operation traits shared by every quad-float backend.
//!
//! Each backend (`scalar`, `sse`, `neon`) provides one `F32x4` type and
//! implements all of these traits for it, so code written against the traits
//! runs unchanged on whichever backend the build selected. The portable
//! scalar implementation doubles as the semantic reference: the integration
//! tests replay every operation through it and compare lane for lane.
//!
//! The traits are split by concern:
//!
//! - [`SimdLoad`] / [`SimdStore`] - construction, extraction and the raw
//!   pointer boundary
//! - [`SimdShuffle`] - the named lane-permutation catalog
//! - [`SimdCompare`] - lane masks, predicate reductions and blending
//! - [`SimdMath`] - elementwise math and the fused multiply family
//! - [`SimdGeometry`] - dot/cross/length and the quaternion primitive

/// Construction of quad-float values.
pub trait SimdLoad: Sized {
    type Output;

    /// Builds a vector from four lane values in `X, Y, Z, W` order.
    fn new(x: f32, y: f32, z: f32, w: f32) -> Self::Output;

    /// Broadcasts one value to all four lanes.
    fn splat(value: f32) -> Self::Output;

    /// Builds a vector from an array in lane order.
    fn from_array(lanes: [f32; 4]) -> Self::Output;

    /// Reinterprets four 32-bit patterns as lanes, without conversion.
    ///
    /// This is the entry point for hand-built masks and sign tricks.
    fn from_bits(bits: [u32; 4]) -> Self::Output;

    /// Loads four consecutive `f32` values starting at `ptr`.
    ///
    /// No alignment is required.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and point to at least four readable `f32`
    /// values.
    unsafe fn load(ptr: *const f32) -> Self::Output;
}

/// Extraction of lanes and the raw pointer boundary.
pub trait SimdStore {
    /// Returns the four lanes in `X, Y, Z, W` order.
    fn to_array(&self) -> [f32; 4];

    /// Returns the raw bit pattern of each lane.
    fn to_bits(&self) -> [u32; 4];

    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn z(&self) -> f32;
    fn w(&self) -> f32;

    /// Writes the four lanes to `ptr` as consecutive `f32` values.
    ///
    /// No alignment is required.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and point to at least four writable `f32`
    /// values.
    unsafe fn store_at(&self, ptr: *mut f32);
}

/// The named lane-permutation catalog.
///
/// Lane letters map `x = 0`, `y = 1`, `z = 2`, `w = 3`. Output lane `i` of a
/// four-letter name takes the source lane named by letter `i`, so `yzxw`
/// produces `(v.y, v.z, v.x, v.w)`.
///
/// The `concat_ab_cd` methods are the two-vector forms: output lanes 0-1
/// come from `self` (letters `ab`), lanes 2-3 from `other` (letters `cd`).
/// For every name that exists in both forms, the single-vector method equals
/// the two-vector method with `other = self`; the lane index table in
/// `crate::simd` is shared by all backends so the two can never drift.
pub trait SimdShuffle: Sized {
    type Output;

    fn xyzw(&self) -> Self::Output;
    fn xzwy(&self) -> Self::Output;
    fn xzyw(&self) -> Self::Output;
    fn xzxz(&self) -> Self::Output;
    fn ywyw(&self) -> Self::Output;
    fn xyxy(&self) -> Self::Output;
    fn zwzw(&self) -> Self::Output;
    fn yzxw(&self) -> Self::Output;
    fn zxyw(&self) -> Self::Output;
    fn yxwz(&self) -> Self::Output;
    fn zwxy(&self) -> Self::Output;
    fn zyxw(&self) -> Self::Output;
    fn xwyz(&self) -> Self::Output;
    fn wzyx(&self) -> Self::Output;

    /// Broadcasts lane X to all four lanes.
    fn splat_x(&self) -> Self::Output;
    /// Broadcasts lane Y to all four lanes.
    fn splat_y(&self) -> Self::Output;
    /// Broadcasts lane Z to all four lanes.
    fn splat_z(&self) -> Self::Output;
    /// Broadcasts lane W to all four lanes.
    fn splat_w(&self) -> Self::Output;

    fn concat_xy_zw(&self, other: Self) -> Self::Output;
    fn concat_xz_yw(&self, other: Self) -> Self::Output;
    fn concat_xy_xy(&self, other: Self) -> Self::Output;
    fn concat_zw_zw(&self, other: Self) -> Self::Output;
    fn concat_xz_xz(&self, other: Self) -> Self::Output;
    fn concat_yw_yw(&self, other: Self) -> Self::Output;

    /// Interleaves the lower halves: `(self.x, other.x, self.y, other.y)`.
    fn interleave_lower(&self, other: Self) -> Self::Output;
    /// Interleaves the upper halves: `(self.z, other.z, self.w, other.w)`.
    fn interleave_upper(&self, other: Self) -> Self::Output;
}

/// Lane masks, predicate reductions and blending.
///
/// The `cmp_*` methods return a lane mask: a vector whose lanes are exactly
/// `0xFFFFFFFF` where the comparison holds and exactly `0x00000000` where it
/// does not, never anything in between. Comparisons are IEEE ordered, so a
/// NaN in either operand makes that lane false.
pub trait SimdCompare: Sized {
    type Output;

    fn cmp_eq(&self, rhs: Self) -> Self::Output;
    fn cmp_lt(&self, rhs: Self) -> Self::Output;
    fn cmp_le(&self, rhs: Self) -> Self::Output;
    fn cmp_gt(&self, rhs: Self) -> Self::Output;
    fn cmp_ge(&self, rhs: Self) -> Self::Output;

    /// True when all four lanes compare equal. Any NaN lane makes this false.
    fn cmp_eq_all(&self, rhs: Self) -> bool;

    /// True when at least one lane compares not-equal.
    ///
    /// Unordered lanes count as not-equal, so a NaN anywhere makes this true.
    fn cmp_ne_any(&self, rhs: Self) -> bool;

    /// True when every lane of this mask is exactly `0xFFFFFFFF`.
    fn all_true(&self) -> bool;

    /// True when at least one lane of this mask is exactly `0xFFFFFFFF`.
    fn any_true(&self) -> bool;

    /// True when any lane is NaN.
    fn is_any_nan(&self) -> bool;

    /// True when any lane is `+inf` or `-inf`.
    ///
    /// This is a bit-pattern test (sign cleared, compared against the
    /// infinity pattern), not a magnitude compare, so large finite values
    /// never trip it.
    fn is_any_infinite(&self) -> bool;

    /// Bitwise blend: `(mask & if_true) | (!mask & if_false)`.
    ///
    /// With a lane mask from `cmp_*` this selects whole lanes; any other
    /// bit pattern blends bit by bit.
    fn select(mask: Self, if_true: Self, if_false: Self) -> Self::Output;
}

/// Elementwise math and the fused multiply family.
pub trait SimdMath: Sized {
    type Output;

    /// Clears the sign bit of every lane.
    fn abs(&self) -> Self::Output;

    /// Per-lane IEEE square root. Negative lanes produce NaN.
    fn sqrt(&self) -> Self::Output;

    /// Per-lane minimum with the tie-break rules of [`crate::math::min`]:
    /// NaN in either operand poisons the lane, and a `+0.0`/`-0.0` tie
    /// resolves to `-0.0`.
    fn min(&self, rhs: Self) -> Self::Output;

    /// Per-lane maximum with the tie-break rules of [`crate::math::max`]:
    /// NaN in either operand poisons the lane, and a `+0.0`/`-0.0` tie
    /// resolves to `+0.0`.
    fn max(&self, rhs: Self) -> Self::Output;

    /// Lane-wise `self & !rhs`: keeps the bits of `self` that `rhs` does not
    /// set.
    fn andnot(&self, rhs: Self) -> Self::Output;

    /// `self * rhs + addend` per lane.
    ///
    /// Fused into a single rounding where the target has an FMA instruction
    /// (NEON); computed with two roundings on SSE4.1 and the scalar backend.
    /// Results may therefore differ by one ulp across backends.
    fn mul_add(&self, rhs: Self, addend: Self) -> Self::Output;

    /// `addend - self * rhs` per lane, with the same rounding behavior as
    /// [`mul_add`](SimdMath::mul_add).
    fn neg_mul_add(&self, rhs: Self, addend: Self) -> Self::Output;

    /// `self * rhs.splat_x()` per lane.
    fn mul_by_x(&self, rhs: Self) -> Self::Output;
    fn mul_by_y(&self, rhs: Self) -> Self::Output;
    fn mul_by_z(&self, rhs: Self) -> Self::Output;
    fn mul_by_w(&self, rhs: Self) -> Self::Output;

    /// `self * rhs.splat_x() + addend` per lane, with the same rounding
    /// behavior as [`mul_add`](SimdMath::mul_add).
    fn mul_add_by_x(&self, rhs: Self, addend: Self) -> Self::Output;
    fn mul_add_by_y(&self, rhs: Self, addend: Self) -> Self::Output;
    fn mul_add_by_z(&self, rhs: Self, addend: Self) -> Self::Output;
    fn mul_add_by_w(&self, rhs: Self, addend: Self) -> Self::Output;
}

/// Geometric reductions and the quaternion primitive.
pub trait SimdGeometry: Sized {
    type Output;

    /// Four-lane dot product, broadcast to every lane of the result.
    ///
    /// Lanes are summed pairwise, `(x + y) + (z + w)`, which is the order
    /// the SSE and NEON reduction instructions produce.
    fn dot(&self, rhs: Self) -> Self::Output;

    /// 3D cross product of the X, Y, Z lanes.
    ///
    /// Lane W of the result is always `+0.0`, regardless of the W lanes of
    /// the inputs; it is forced by a bit mask, so even NaN or infinity
    /// there cannot leak through.
    fn cross(&self, rhs: Self) -> Self::Output;

    /// `sqrt(dot(self, self))`, broadcast to every lane.
    fn length(&self) -> Self::Output;

    /// `dot(self, self)`, broadcast to every lane.
    fn length_squared(&self) -> Self::Output;

    /// `self / length(self)` per lane.
    ///
    /// There is no zero-length guard: normalizing a zero vector divides by
    /// zero and yields NaN lanes, which then propagate.
    fn normalize(&self) -> Self::Output;

    /// Quaternion conjugate for `(i, j, k, scalar)` lane layout: negates
    /// X, Y, Z and keeps W.
    ///
    /// The negation is a sign-bit flip, so zero lanes come back as `-0.0`.
    fn quaternion_conjugate(&self) -> Self::Output;
}
