//! ECDSA signature verification

use super::common::{to_fixed_be, SignatureComponents};
use super::keys::PublicKey;
use kcrypt_algorithms::{add, is_on_curve, multiply, multiply_base};
use kcrypt_api::error::types::SignatureComponent;
use kcrypt_api::{Error as ApiError, Result as ApiResult};
use kcrypt_common::math_common::{mod_inv, mod_mul, mod_reduce};
use kcrypt_common::DomainParameters;
use num_bigint::BigUint;
use subtle::ConstantTimeEq;
use tracing::debug;

const CONTEXT: &str = "ECDSA verify";

/// Verify an ECDSA signature
///
/// Implements the ECDSA signature verification algorithm as specified in
/// FIPS 186-4, Section 6.4.
///
/// Algorithm:
/// 1. Verify that H is on the curve and not the identity, and that r and s
///    are integers in [1, n-1]
/// 2. w = s⁻¹ mod n
/// 3. u₁ = zw mod n and u₂ = rw mod n
/// 4. (x₁, y₁) = u₁·G + u₂·H
/// 5. If (x₁, y₁) = O, reject the signature
/// 6. Accept the signature if and only if r = x₁ mod n
///
/// Keys and signatures are untrusted input: every structural problem is
/// reported as `false`, never as an error or a panic.
pub fn verify(
    digest: &BigUint,
    public_key: &PublicKey,
    signature: &SignatureComponents,
    params: &DomainParameters,
) -> bool {
    match check(digest, public_key, signature, params) {
        Ok(valid) => valid,
        Err(err) => {
            debug!(reason = %err, "ECDSA signature rejected");
            false
        }
    }
}

fn check(
    digest: &BigUint,
    public_key: &PublicKey,
    signature: &SignatureComponents,
    params: &DomainParameters,
) -> ApiResult<bool> {
    let n = params.order();
    let h = public_key.point();

    // Step 1: validate the key and the signature components
    if !is_on_curve(h, params) {
        return Err(ApiError::PointNotOnCurve { context: CONTEXT });
    }
    if h.is_infinity() {
        return Err(ApiError::invalid_key(
            CONTEXT,
            "public key is the point at infinity",
        ));
    }
    if !params.is_valid_scalar(&signature.r) {
        return Err(ApiError::InvalidSignatureComponent {
            context: CONTEXT,
            component: SignatureComponent::R,
        });
    }
    if !params.is_valid_scalar(&signature.s) {
        return Err(ApiError::InvalidSignatureComponent {
            context: CONTEXT,
            component: SignatureComponent::S,
        });
    }

    // Step 2: w = s⁻¹ mod n
    let w = mod_inv(&signature.s, n)?;

    // Step 3: u₁ = zw mod n and u₂ = rw mod n
    let u1 = mod_mul(digest, &w, n);
    let u2 = mod_mul(&signature.r, &w, n);

    // Step 4: (x₁, y₁) = u₁·G + u₂·H
    let point = add(&multiply_base(&u1, params)?, &multiply(&u2, h, params)?, params)?;

    // Step 5: reject the identity
    let x1 = match point.x() {
        Some(x) => x,
        None => {
            debug!(reason = "verification point is identity", "ECDSA signature rejected");
            return Ok(false);
        }
    };

    // Step 6: compare r with x₁ mod n on fixed-width encodings
    let width = params.scalar_size();
    let v = mod_reduce(x1, n);
    let matches: bool = to_fixed_be(&signature.r, width)
        .ct_eq(&to_fixed_be(&v, width))
        .into();
    if !matches {
        debug!(reason = "r does not match", "ECDSA signature rejected");
    }
    Ok(matches)
}
