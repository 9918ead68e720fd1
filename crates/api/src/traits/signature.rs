//! Digital signature traits for kcrypt
//!
//! This module defines the trait that signature schemes implement. Schemes
//! sign pre-computed message digests; hashing the message is the caller's job.

use crate::Result;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms over message digests
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Every operation that needs randomness takes the generator as an explicit
/// argument; implementations must not fall back to an ambient source.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// # Security Requirements
    ///
    /// The RNG must be cryptographically secure and have full entropy over
    /// the key space. This cannot be checked by the implementation.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message digest with the given secret key
    ///
    /// Per-signature nonces are drawn from `rng` and never cached.
    fn sign<R: CryptoRng + RngCore>(
        digest: &BigUint,
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Self::SignatureData>;

    /// Verify a signature against a message digest and public key
    ///
    /// Malformed keys or signatures are untrusted input and yield `false`
    /// rather than an error.
    fn verify(
        digest: &BigUint,
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool;
}
