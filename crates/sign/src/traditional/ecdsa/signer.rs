//! ECDSA signature generation

use super::common::SignatureComponents;
use super::keys::PrivateKey;
use kcrypt_algorithms::{multiply_base, random_scalar};
use kcrypt_api::error::SignatureResult;
use kcrypt_api::Error as ApiError;
use kcrypt_common::math_common::{mod_add, mod_inv, mod_mul, mod_reduce};
use kcrypt_common::DomainParameters;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::trace;

/// Sign a message digest using ECDSA
///
/// Implements the ECDSA signature generation algorithm as specified in
/// FIPS 186-4, Section 6.3, with a fresh random nonce per attempt.
///
/// Algorithm:
/// 1. k ← uniform in [1, n-1], drawn from `rng`
/// 2. (x₁, y₁) = k·G
/// 3. r = x₁ mod n; if r = 0, go back to step 1
/// 4. s = k⁻¹(z + rd) mod n; if s = 0, go back to step 1
/// 5. Return signature (r, s)
///
/// Every pass through either loop draws a new k; no nonce is ever reused or
/// derived from earlier state.
pub fn sign<R: CryptoRng + RngCore>(
    digest: &BigUint,
    private_key: &PrivateKey,
    params: &DomainParameters,
    rng: &mut R,
) -> SignatureResult<SignatureComponents> {
    let n = params.order();
    let d = private_key.scalar();
    if !params.is_valid_scalar(&d) {
        return Err(ApiError::invalid_key(
            "ECDSA sign",
            "private key is out of range for these domain parameters",
        ));
    }

    let mut attempt: u32 = 0;

    // Loop invariant: each iteration starts from a freshly drawn nonce.
    // For a 256-bit n a second iteration has negligible probability, but
    // termination is only guaranteed with probability 1.
    loop {
        let (k, r) = loop {
            attempt += 1;

            // Step 1: fresh nonce
            let k = random_scalar(params, rng);

            // Step 2: (x₁, y₁) = k·G
            let kg = multiply_base(&k, params)?;

            // Step 3: r = x₁ mod n
            let r = kg.x().map(|x| mod_reduce(x, n)).unwrap_or_default();
            if !r.is_zero() {
                break (k, r);
            }
            trace!(attempt, reason = "r == 0", "ECDSA nonce rejected");
        };

        // Step 4: s = k⁻¹(z + rd) mod n
        let k_inv = mod_inv(&k, n)?;
        let rd = mod_mul(&r, &d, n);
        let z_plus_rd = mod_add(digest, &rd, n);
        let s = mod_mul(&k_inv, &z_plus_rd, n);

        if !s.is_zero() {
            trace!(attempts = attempt, "ECDSA signature generated");
            return Ok(SignatureComponents { r, s });
        }
        trace!(attempt, reason = "s == 0", "ECDSA nonce rejected");
    }
}
