//! ARM NEON SIMD implementations for the 4-lane f32 vector operations.
//!
//! This module contains SIMD implementations using ARM's Advanced SIMD (NEON)
//! instruction set. Every quad-float occupies a single 128-bit NEON register,
//! and the AArch64 float instructions give the required NaN and signed-zero
//! behavior directly.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any AArch64 processor
//! - **Compilation**: Must be compiled with NEON enabled (`-C target-feature=+neon`)
//! - **Runtime Detection**: The build system automatically detects NEON availability
//!
//! # Performance Characteristics
//!
//! - Arithmetic, comparison, and bitwise operations map to one instruction
//! - `FMIN`/`FMAX` propagate NaN and order `-0.0` below `+0.0` in hardware
//! - Arbitrary swizzles use `TBL` byte-table lookups; lane broadcasts and
//!   interleaves use the dedicated `DUP` and `ZIP` forms
//! - Multiply-add goes through fused `FMLA`/`FMLS`, rounding once
//!
//! # Conditional Compilation
//!
//! This module is only compiled when the `neon` CPU feature is available. The
//! build system automatically detects this and configures the appropriate
//! compilation flags. When NEON is not available, the library falls back to
//! the portable implementation.
//!
//! # Platform Support
//!
//! - **Apple Silicon**: M1, M2, M3 processors (macOS, iOS)
//! - **AWS Graviton**: Graviton2, Graviton3 processors
//! - **Mobile**: Modern Android and iOS devices

pub mod f32x4;
