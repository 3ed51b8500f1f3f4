//! Quad-float backends and backend selection.
//!
//! The build script probes the host CPU and raises exactly one of the cfg
//! flags `sse`, `neon` or `fallback`; the matching backend's `F32x4` is
//! re-exported here as *the* vector type. The portable [`scalar`] backend
//! always compiles regardless of the flag, because it is the semantic
//! reference the other backends are tested against.

pub mod traits;

pub mod scalar;

#[cfg(sse)]
pub mod sse;

#[cfg(neon)]
pub mod neon;

pub use traits::{SimdCompare, SimdGeometry, SimdLoad, SimdMath, SimdShuffle, SimdStore};

#[cfg(sse)]
pub use sse::f32x4::F32x4;

#[cfg(neon)]
pub use neon::f32x4::F32x4;

#[cfg(fallback)]
pub use scalar::f32x4::F32x4;

// Lane index table for the swizzle catalog. Every backend builds its
// `SimdShuffle` impl by invoking these with a backend-local callback macro,
// so there is exactly one place where a name maps to indices.
//
// Single-vector entries: output lane i reads source lane $i.
macro_rules! for_each_swizzle {
    ($with:ident) => {
        $with!(xyzw, 0, 1, 2, 3);
        $with!(xzwy, 0, 2, 3, 1);
        $with!(xzyw, 0, 2, 1, 3);
        $with!(xzxz, 0, 2, 0, 2);
        $with!(ywyw, 1, 3, 1, 3);
        $with!(xyxy, 0, 1, 0, 1);
        $with!(zwzw, 2, 3, 2, 3);
        $with!(yzxw, 1, 2, 0, 3);
        $with!(zxyw, 2, 0, 1, 3);
        $with!(yxwz, 1, 0, 3, 2);
        $with!(zwxy, 2, 3, 0, 1);
        $with!(zyxw, 2, 1, 0, 3);
        $with!(xwyz, 0, 3, 1, 2);
        $with!(wzyx, 3, 2, 1, 0);
    };
}

// Two-vector entries: output lanes 0-1 read the first operand at the first
// two indices, output lanes 2-3 read the second operand at the last two.
macro_rules! for_each_concat {
    ($with:ident) => {
        $with!(concat_xy_zw, 0, 1, 2, 3);
        $with!(concat_xz_yw, 0, 2, 1, 3);
        $with!(concat_xy_xy, 0, 1, 0, 1);
        $with!(concat_zw_zw, 2, 3, 2, 3);
        $with!(concat_xz_xz, 0, 2, 0, 2);
        $with!(concat_yw_yw, 1, 3, 1, 3);
    };
}

pub(crate) use {for_each_concat, for_each_swizzle};
