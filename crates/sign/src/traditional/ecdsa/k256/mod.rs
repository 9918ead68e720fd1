//! ECDSA implementation for the secp256k1 curve
//!
//! This implementation follows FIPS 186-4: Digital Signature Standard (DSS),
//! Section 6, instantiated with the SEC 2 secp256k1 domain parameters.

use super::{keys, signer, verifier};
use super::{PrivateKey, PublicKey, SignatureComponents};
use kcrypt_api::{Result as ApiResult, Signature as SignatureTrait};
use kcrypt_common::DomainParameters;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// ECDSA signature scheme using the secp256k1 curve
pub struct EcdsaK256;

/// secp256k1 public key H = d·G
pub type EcdsaK256PublicKey = PublicKey;

/// secp256k1 secret key d ∈ [1, n-1]
pub type EcdsaK256SecretKey = PrivateKey;

/// secp256k1 signature (r, s)
pub type EcdsaK256Signature = SignatureComponents;

impl SignatureTrait for EcdsaK256 {
    type PublicKey = EcdsaK256PublicKey;
    type SecretKey = EcdsaK256SecretKey;
    type SignatureData = EcdsaK256Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-K256"
    }

    /// Generate an ECDSA key pair
    ///
    /// Reference: FIPS 186-4, Appendix B.4.2
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (secret_key, public_key) = keys::generate_keypair(DomainParameters::secp256k1(), rng)?;
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        digest: &BigUint,
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        signer::sign(digest, secret_key, DomainParameters::secp256k1(), rng)
    }

    fn verify(
        digest: &BigUint,
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        verifier::verify(digest, public_key, signature, DomainParameters::secp256k1())
    }
}
