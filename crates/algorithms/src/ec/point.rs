//! Affine point arithmetic: the curve predicate and the group law

use crate::error::{validate, Result};
use kcrypt_common::math_common::{mod_add, mod_inv, mod_mul, mod_neg, mod_sub};
use kcrypt_common::{CurvePoint, DomainParameters};
use num_bigint::BigUint;
use num_traits::Zero;

/// Check whether `point` lies on the curve described by `params`.
///
/// The point at infinity is always on the curve. Finite points must have
/// coordinates reduced modulo p that satisfy `y² ≡ x³ + ax + b (mod p)`.
pub fn is_on_curve(point: &CurvePoint, params: &DomainParameters) -> bool {
    match point {
        CurvePoint::Infinity => true,
        CurvePoint::Affine { x, y } => params.satisfies_curve_equation(x, y),
    }
}

/// Add two points using the chord-and-tangent group law.
///
/// Identity and inverse pairs are resolved before the operands are checked
/// against the curve equation; any other operand off the curve is rejected
/// with [`Error::PointNotOnCurve`](crate::Error::PointNotOnCurve).
pub fn add(p: &CurvePoint, q: &CurvePoint, params: &DomainParameters) -> Result<CurvePoint> {
    let (x1, y1) = match p.coordinates() {
        Some(coords) => coords,
        None => return Ok(q.clone()),
    };
    let (x2, y2) = match q.coordinates() {
        Some(coords) => coords,
        None => return Ok(p.clone()),
    };
    let modulus = params.p();

    // P + (-P) = O
    if x1 == x2 && mod_add(y1, y2, modulus).is_zero() {
        return Ok(CurvePoint::Infinity);
    }

    validate::on_curve(p, params, "point addition")?;
    validate::on_curve(q, params, "point addition")?;

    let lambda = if x1 == x2 && y1 == y2 {
        // Vertical tangent
        if y1.is_zero() {
            return Ok(CurvePoint::Infinity);
        }
        // λ = (3·x² + a) / (2·y)
        let x_sq = mod_mul(x1, x1, modulus);
        let numerator = mod_add(&mod_mul(&BigUint::from(3u8), &x_sq, modulus), params.a(), modulus);
        let denominator = mod_add(y1, y1, modulus);
        mod_mul(&numerator, &mod_inv(&denominator, modulus)?, modulus)
    } else {
        // λ = (y₁ − y₂) / (x₁ − x₂)
        let numerator = mod_sub(y1, y2, modulus);
        let denominator = mod_sub(x1, x2, modulus);
        mod_mul(&numerator, &mod_inv(&denominator, modulus)?, modulus)
    };

    // x₃ = λ² − x₁ − x₂
    let x3 = mod_sub(&mod_sub(&mod_mul(&lambda, &lambda, modulus), x1, modulus), x2, modulus);

    // y₃ = λ·(x₁ − x₃) − y₁
    let y3 = mod_sub(&mod_mul(&lambda, &mod_sub(x1, &x3, modulus), modulus), y1, modulus);

    Ok(CurvePoint::new_unchecked(x3, y3))
}

/// Double a point (add it to itself).
pub fn double(p: &CurvePoint, params: &DomainParameters) -> Result<CurvePoint> {
    add(p, p, params)
}

/// Negate a point: `-(x, y) = (x, -y)`.
pub fn negate(p: &CurvePoint, params: &DomainParameters) -> CurvePoint {
    match p {
        CurvePoint::Infinity => CurvePoint::Infinity,
        CurvePoint::Affine { x, y } => CurvePoint::new_unchecked(x.clone(), mod_neg(y, params.p())),
    }
}
