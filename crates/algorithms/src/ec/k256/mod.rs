//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! The generic affine operations bound to the secp256k1 parameter set.
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141

use crate::ec::{multiply, multiply_base};
use crate::error::Result;
use kcrypt_common::{CurvePoint, DomainParameters};
use num_bigint::BigUint;

/// The secp256k1 domain parameters
pub fn params() -> &'static DomainParameters {
    DomainParameters::secp256k1()
}

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> &'static CurvePoint {
    params().generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &BigUint) -> Result<CurvePoint> {
    multiply_base(scalar, params())
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &BigUint, point: &CurvePoint) -> Result<CurvePoint> {
    multiply(scalar, point, params())
}
