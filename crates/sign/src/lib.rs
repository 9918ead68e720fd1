//! Digital Signature Schemes
//!
//! This crate implements ECDSA signing and verification over secp256k1 on
//! top of the affine curve arithmetic in `kcrypt-algorithms`.

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::{
    derive_public_key, digest_to_integer, generate_keypair, generate_private_key, sign, verify,
    EcdsaK256, PrivateKey, PublicKey, SignatureComponents,
};
