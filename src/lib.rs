//! Quad-float vector math for 3D graphics.
//!
//! This crate provides [`simd::F32x4`], a 4-lane f32 vector with the lane
//! conventions of homogeneous 3D math (`X, Y, Z, W`), plus the scalar
//! min/max helpers in [`math`] that define its tie-break rules.
//!
//! The same type is implemented three times behind one trait surface: an
//! SSE4.1 backend for x86/x86_64, a NEON backend for aarch64, and a portable
//! backend that doubles as the semantic reference. The build script probes
//! the host CPU and compiles exactly one of them, so `quadly::simd::F32x4`
//! always names the fastest implementation available.
//!
//! # Examples
//!
//! ```rust
//! use quadly::simd::{F32x4, SimdGeometry, SimdLoad, SimdStore};
//!
//! let a = F32x4::new(0.0, 1.0, 2.0, 3.0);
//! let b = F32x4::new(4.0, 5.0, 6.0, 7.0);
//!
//! // Dot products broadcast their result to every lane.
//! assert_eq!(a.dot(b).to_array(), [38.0; 4]);
//!
//! // Cross products treat the inputs as 3D vectors and zero the W lane.
//! assert_eq!(a.cross(b).to_array(), [-4.0, 8.0, -4.0, 0.0]);
//! ```
//!
//! Operations never panic and never branch on special values: NaN and
//! infinity flow through lane arithmetic exactly as IEEE 754 dictates.

pub mod math;

pub mod simd;
