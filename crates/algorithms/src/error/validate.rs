//! Validation utilities for elliptic curve primitives

use super::{Error, Result};
use crate::ec::is_on_curve;
use kcrypt_common::{CurvePoint, DomainParameters};

/// Validate that a point satisfies the curve equation
#[inline(always)]
pub fn on_curve(
    point: &CurvePoint,
    params: &DomainParameters,
    context: &'static str,
) -> Result<()> {
    if !is_on_curve(point, params) {
        return Err(Error::PointNotOnCurve { context });
    }
    Ok(())
}
