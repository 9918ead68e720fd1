//! Scalar sampling

use kcrypt_common::DomainParameters;
use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};

/// Draw a scalar uniformly from `[1, n-1]`.
///
/// The quality of the result is exactly the quality of `rng`: it must be a
/// cryptographically secure generator with full entropy over the range.
pub fn random_scalar<R: CryptoRng + RngCore>(params: &DomainParameters, rng: &mut R) -> BigUint {
    rng.gen_biguint_range(&BigUint::from(1u8), params.order())
}
