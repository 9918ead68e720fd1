//! Elliptic curve primitives for the kcrypt library
//!
//! This crate provides the group law on short Weierstrass curves in affine
//! coordinates, double-and-add scalar multiplication, and a secp256k1
//! convenience layer on top of them. All arithmetic is performed on
//! arbitrary-precision integers.
//!
//! # Security
//!
//! None of the operations here are constant-time. Timing and other side
//! channels must be addressed before this code guards production keys.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{add, double, is_on_curve, multiply, multiply_base, negate, random_scalar};

// Shared types this crate operates on
pub use kcrypt_common::{CurvePoint, DomainParameters};
