//! SSE4.1 SIMD operations module.
//!
//! This module provides SSE4.1-optimized implementations of the quad-float
//! operations for x86/x86_64 processors. Every vector fits a single `__m128`
//! register, so each operation compiles to a handful of instructions.
//!
//! # Architecture Requirements
//!
//! - **Target**: x86 or x86_64 processors with SSE4.1 support
//! - **Detection**: enabled automatically by the build script when the host
//!   CPU reports `sse4_1`
//! - **Instruction set**: SSE through SSE4.1 (`DPPS` and `BLENDVPS` are the
//!   newest instructions used)
//!
//! # Performance Characteristics
//!
//! - Arithmetic, comparison, and bitwise operations map to one instruction
//! - Swizzles and lane broadcasts compile to a single `SHUFPS`
//! - Dot products use `DPPS`, which multiplies, reduces, and broadcasts in
//!   one instruction

pub mod f32x4;
