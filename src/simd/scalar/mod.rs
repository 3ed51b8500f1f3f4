//! Portable scalar implementation of the quad-float.
//!
//! This module implements every vector operation with plain `f32` arithmetic
//! over a `[f32; 4]` array. It has two jobs:
//!
//! - **Fallback backend.** When the build script detects neither SSE4.1 nor
//!   NEON it raises the `fallback` cfg flag and this module's [`f32x4::F32x4`]
//!   becomes the exported vector type.
//! - **Semantic reference.** The scalar code states the intended lane
//!   semantics without any instruction-set cleverness, so the integration
//!   tests compare the SSE and NEON backends against it lane for lane.
//!
//! # Conditional Compilation
//!
//! Unlike the SIMD backends, this module always compiles. Keeping it alive on
//! every target is what lets the parity tests run on the same build that uses
//! a SIMD backend.

pub mod f32x4;
