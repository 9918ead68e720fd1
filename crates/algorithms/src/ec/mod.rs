//! Elliptic Curve Primitives
//!
//! The group law and scalar multiplication for short Weierstrass curves
//! `y² = x³ + ax + b` over a prime field, in affine coordinates. Every
//! operation takes the curve's [`DomainParameters`](kcrypt_common::DomainParameters)
//! explicitly. The [`k256`] module binds these operations to secp256k1.

pub mod k256; // For secp256k1
mod mul;
mod point;
mod scalar;

pub use mul::{multiply, multiply_base};
pub use point::{add, double, is_on_curve, negate};
pub use scalar::random_scalar;
