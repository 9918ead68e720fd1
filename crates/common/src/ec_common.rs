//! Common elliptic curve types: points and domain parameters

use crate::math_common::{mod_add, mod_mul};
use kcrypt_api::{Error, Result};
use kcrypt_params::traditional::secp256k1 as k256;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// Point on a short Weierstrass curve in affine coordinates
///
/// The identity element is its own variant, so no coordinate pair is ever
/// reserved as a marker. A constructed `Affine` value is not guaranteed to be
/// on any curve; use [`CurvePoint::new`] for checked construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurvePoint {
    /// The point at infinity (group identity)
    Infinity,
    /// A finite point `(x, y)` with coordinates reduced modulo p
    Affine { x: BigUint, y: BigUint },
}

impl CurvePoint {
    /// Create a point from coordinates, checking the curve equation.
    ///
    /// Returns [`Error::PointNotOnCurve`] if the coordinates are not reduced
    /// modulo p or do not satisfy the curve equation.
    pub fn new(x: BigUint, y: BigUint, params: &DomainParameters) -> Result<Self> {
        if !params.satisfies_curve_equation(&x, &y) {
            return Err(Error::PointNotOnCurve {
                context: "CurvePoint::new",
            });
        }
        Ok(CurvePoint::Affine { x, y })
    }

    /// Create a point from coordinates without any validation.
    ///
    /// Intended for points produced by the group law and for modelling
    /// untrusted input in tests.
    pub fn new_unchecked(x: BigUint, y: BigUint) -> Self {
        CurvePoint::Affine { x, y }
    }

    /// Create the identity point (point at infinity).
    pub fn infinity() -> Self {
        CurvePoint::Infinity
    }

    /// Check if this point is the identity element.
    pub fn is_infinity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// The x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Both coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, y } => Some((x, y)),
        }
    }
}

/// Elliptic curve domain parameters in short Weierstrass form: y^2 = x^3 + ax + b
///
/// An immutable `(p, a, b, G, n, h)` tuple. Every curve, point and signature
/// operation takes one of these by reference; nothing reads curve constants
/// from global state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParameters {
    name: &'static str,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: CurvePoint,
    order: BigUint,
    cofactor: BigUint,
}

static SECP256K1: Lazy<DomainParameters> = Lazy::new(|| {
    DomainParameters::from_hex(
        "secp256k1",
        k256::SECP256K1_P,
        k256::SECP256K1_A,
        k256::SECP256K1_B,
        (k256::SECP256K1_GX, k256::SECP256K1_GY),
        k256::SECP256K1_N,
        k256::SECP256K1_H,
    )
    .expect("Standard secp256k1 parameters must be valid")
});

impl DomainParameters {
    /// The secp256k1 parameter set (SEC 2, section 2.4.1).
    ///
    /// Parsed once on first use and shared read-only afterwards.
    pub fn secp256k1() -> &'static DomainParameters {
        &SECP256K1
    }

    /// Assemble a parameter set, checking its internal consistency.
    ///
    /// This checks that p is odd and greater than 3, that `a` and `b` are
    /// reduced, that the curve is non-singular, that G lies on the curve and
    /// that n and h are nonzero. Primality of p and n is assumed, not tested.
    pub fn new(
        name: &'static str,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        generator: (BigUint, BigUint),
        order: BigUint,
        cofactor: BigUint,
    ) -> Result<Self> {
        const CONTEXT: &str = "DomainParameters";

        if p <= BigUint::from(3u8) || !p.bit(0) {
            return Err(Error::invalid_parameter(
                CONTEXT,
                "p must be an odd prime greater than 3",
            ));
        }
        if a >= p || b >= p {
            return Err(Error::invalid_parameter(
                CONTEXT,
                "curve coefficients must be reduced modulo p",
            ));
        }
        // 4a^3 + 27b^2 != 0 (mod p)
        let a3 = mod_mul(&mod_mul(&a, &a, &p), &a, &p);
        let b2 = mod_mul(&b, &b, &p);
        let discriminant = mod_add(
            &mod_mul(&BigUint::from(4u8), &a3, &p),
            &mod_mul(&BigUint::from(27u8), &b2, &p),
            &p,
        );
        if discriminant.is_zero() {
            return Err(Error::invalid_parameter(CONTEXT, "curve is singular"));
        }
        if order <= BigUint::one() {
            return Err(Error::invalid_parameter(CONTEXT, "subgroup order must exceed 1"));
        }
        if cofactor.is_zero() {
            return Err(Error::invalid_parameter(CONTEXT, "cofactor must be nonzero"));
        }

        let mut params = DomainParameters {
            name,
            p,
            a,
            b,
            generator: CurvePoint::Infinity,
            order,
            cofactor,
        };
        let (gx, gy) = generator;
        params.generator = CurvePoint::new(gx, gy, &params)
            .map_err(|e| e.with_context("DomainParameters generator"))?;
        Ok(params)
    }

    fn from_hex(
        name: &'static str,
        p: &str,
        a: &str,
        b: &str,
        generator: (&str, &str),
        order: &str,
        cofactor: &str,
    ) -> Result<Self> {
        Self::new(
            name,
            parse_hex(p)?,
            parse_hex(a)?,
            parse_hex(b)?,
            (parse_hex(generator.0)?, parse_hex(generator.1)?),
            parse_hex(order)?,
            parse_hex(cofactor)?,
        )
    }

    /// Name of the curve
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The prime field modulus p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// The `a` coefficient
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// The `b` coefficient
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// The base point G
    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// The prime order n of the subgroup generated by G
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// The cofactor h
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    /// Check `y^2 ≡ x^3 + ax + b (mod p)` for reduced coordinates.
    pub fn satisfies_curve_equation(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= &self.p || y >= &self.p {
            return false;
        }
        let p = &self.p;
        let lhs = mod_mul(y, y, p);
        let x3 = mod_mul(&mod_mul(x, x, p), x, p);
        let rhs = mod_add(&mod_add(&x3, &mod_mul(&self.a, x, p), p), &self.b, p);
        lhs == rhs
    }

    /// Width in bytes of a big-endian scalar modulo n.
    pub fn scalar_size(&self) -> usize {
        (self.order.bits() as usize + 7) / 8
    }

    /// Check that `k` lies in `[1, n-1]`.
    pub fn is_valid_scalar(&self, k: &BigUint) -> bool {
        !k.is_zero() && k < &self.order
    }
}

fn parse_hex(value: &str) -> Result<BigUint> {
    BigUint::parse_bytes(value.as_bytes(), 16)
        .ok_or_else(|| {
            Error::invalid_parameter("DomainParameters", "malformed hexadecimal constant")
        })
}
