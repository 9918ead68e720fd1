//! Scalar multiplication

use crate::ec::point::add;
use crate::error::{validate, Result};
use kcrypt_common::{CurvePoint, DomainParameters};
use num_bigint::BigUint;

/// Scalar multiplication: compute `k · point`.
///
/// Right-to-left double-and-add over the bits of `k`, least significant
/// first, costing O(log₂ k) group operations. `k = 0` yields the point at
/// infinity. The input point must be on the curve.
pub fn multiply(k: &BigUint, point: &CurvePoint, params: &DomainParameters) -> Result<CurvePoint> {
    validate::on_curve(point, params, "scalar multiplication")?;

    let mut result = CurvePoint::Infinity;
    let mut running = point.clone();
    for i in 0..k.bits() {
        if k.bit(i) {
            result = add(&result, &running, params)?;
        }
        running = add(&running, &running, params)?;
    }
    Ok(result)
}

/// Scalar multiplication with the base point: `k · G`.
pub fn multiply_base(k: &BigUint, params: &DomainParameters) -> Result<CurvePoint> {
    multiply(k, params.generator(), params)
}
