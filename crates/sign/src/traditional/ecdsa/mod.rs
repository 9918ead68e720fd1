//! ECDSA over short Weierstrass curves
//!
//! The free functions in this module take the curve's domain parameters and
//! the randomness source explicitly. [`EcdsaK256`] binds them to secp256k1
//! behind the [`kcrypt_api::Signature`] trait.

pub mod common;
pub mod k256;
mod keys;
mod signer;
mod verifier;

pub use common::{digest_to_integer, SignatureComponents};
pub use keys::{derive_public_key, generate_keypair, generate_private_key, PrivateKey, PublicKey};
pub use signer::sign;
pub use verifier::verify;

// Re-export secp256k1 types
pub use k256::{EcdsaK256, EcdsaK256PublicKey, EcdsaK256SecretKey, EcdsaK256Signature};
