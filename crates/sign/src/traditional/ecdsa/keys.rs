//! ECDSA key types and key pair generation

use core::fmt;

use super::common::to_fixed_be;
use kcrypt_algorithms::{is_on_curve, multiply_base, random_scalar};
use kcrypt_api::error::KeyResult;
use kcrypt_api::{Error as ApiError, Result as ApiResult, ResultExt};
use kcrypt_common::{CurvePoint, DomainParameters};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ECDSA private key
///
/// The scalar d must satisfy 1 ≤ d ≤ n-1 where n is the order of the base
/// point G. It is stored as a fixed-width big-endian buffer of
/// `scalar_size()` bytes (32 for secp256k1), wiped when the key is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: Vec<u8>,
}

impl PrivateKey {
    /// Wrap a scalar as a private key, checking `1 ≤ d ≤ n-1`.
    pub fn from_scalar(d: &BigUint, params: &DomainParameters) -> ApiResult<Self> {
        if !params.is_valid_scalar(d) {
            return Err(ApiError::invalid_key(
                "ECDSA private key",
                "scalar must lie in [1, n-1]",
            ));
        }
        Ok(PrivateKey {
            bytes: to_fixed_be(d, params.scalar_size()),
        })
    }

    /// The secret scalar d
    pub fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// ECDSA public key: the point H = d·G
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Wrap a curve point as a public key.
    ///
    /// Fails with `PointNotOnCurve` if the point does not satisfy the curve
    /// equation and with `InvalidKey` for the point at infinity.
    pub fn from_point(point: CurvePoint, params: &DomainParameters) -> ApiResult<Self> {
        if !is_on_curve(&point, params) {
            return Err(ApiError::PointNotOnCurve {
                context: "ECDSA public key",
            });
        }
        if point.is_infinity() {
            return Err(ApiError::invalid_key(
                "ECDSA public key",
                "public key cannot be the point at infinity",
            ));
        }
        Ok(PublicKey { point })
    }

    /// Wrap a curve point without validating it.
    ///
    /// Models a key received from an untrusted source; [`verify`](super::verify)
    /// re-checks every key it is given.
    pub fn from_point_unchecked(point: CurvePoint) -> Self {
        PublicKey { point }
    }

    /// The underlying curve point
    pub fn point(&self) -> &CurvePoint {
        &self.point
    }
}

/// Draw a private key uniformly from `[1, n-1]`.
///
/// `rng` must be a cryptographically secure generator; the key is exactly
/// as unpredictable as its output.
pub fn generate_private_key<R: CryptoRng + RngCore>(
    params: &DomainParameters,
    rng: &mut R,
) -> ApiResult<PrivateKey> {
    let d = random_scalar(params, rng);
    PrivateKey::from_scalar(&d, params)
}

/// Derive the public key H = d·G.
///
/// Fails with `InvalidKey` if d is out of range for `params`.
pub fn derive_public_key(
    private_key: &PrivateKey,
    params: &DomainParameters,
) -> ApiResult<PublicKey> {
    let d = private_key.scalar();
    if !params.is_valid_scalar(&d) {
        return Err(ApiError::invalid_key(
            "ECDSA public key derivation",
            "private key is out of range for these domain parameters",
        ));
    }
    let point = multiply_base(&d, params).with_context("ECDSA public key derivation")?;
    PublicKey::from_point(point, params)
}

/// Generate a key pair
///
/// Generates a random private key d ∈ [1, n-1] and computes the
/// corresponding public key H = d·G.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    params: &DomainParameters,
    rng: &mut R,
) -> KeyResult<(PrivateKey, PublicKey)> {
    let private_key = generate_private_key(params, rng)?;
    let public_key = derive_public_key(&private_key, params)?;
    trace!(curve = params.name(), "ECDSA key pair generated");
    Ok((private_key, public_key))
}
