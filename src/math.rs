//! Scalar minimum/maximum with graphics tie-break rules.
//!
//! These functions differ from IEEE 754 `minNum`/`maxNum` (and from
//! `f32::min`/`f32::max`) in two deliberate ways:
//!
//! - **NaN poisons the result.** If either operand is NaN, the result is that
//!   NaN operand, checked in both argument orders. `f32::max(x, NaN)` would
//!   quietly return `x`; here the NaN wins.
//! - **Signed zeros are distinct.** A `+0.0`/`-0.0` tie resolves by sign bit:
//!   [`max`] returns `+0.0`, [`min`] returns `-0.0`. A plain `a > b` compare
//!   cannot see the difference because `+0.0 == -0.0`.
//!
//! Both functions are generic over [`num::Float`] so one definition serves
//! `f32` and `f64`. The per-lane vector [`min`](crate::simd::SimdMath::min) /
//! [`max`](crate::simd::SimdMath::max) operations apply exactly these rules
//! to each lane; the scalar backend calls straight into this module.

use num::Float;

/// Returns the larger operand, with NaN propagation and a `+0.0` bias on
/// signed-zero ties.
#[inline(always)]
pub fn max<T: Float>(a: T, b: T) -> T {
    if a.is_nan() {
        a
    } else if b.is_nan() {
        b
    } else if a == b {
        // +0.0 == -0.0, so ties are resolved by sign bit
        if a.is_sign_negative() {
            b
        } else {
            a
        }
    } else if a > b {
        a
    } else {
        b
    }
}

/// Returns the smaller operand, with NaN propagation and a `-0.0` bias on
/// signed-zero ties.
#[inline(always)]
pub fn min<T: Float>(a: T, b: T) -> T {
    if a.is_nan() {
        a
    } else if b.is_nan() {
        b
    } else if a == b {
        if a.is_sign_negative() {
            a
        } else {
            b
        }
    } else if a < b {
        a
    } else {
        b
    }
}
