//! Traditional signature schemes
//!
//! This module contains implementations of traditional (pre-quantum)
//! signature schemes.

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{EcdsaK256, EcdsaK256PublicKey, EcdsaK256SecretKey, EcdsaK256Signature};
