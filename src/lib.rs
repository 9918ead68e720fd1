//! # kcrypt
//!
//! ECDSA over secp256k1, built on arbitrary-precision integer arithmetic.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `rand`'s `std` and `std_rng` features, which
//!   provide `OsRng`
//! - `sign` (default): ECDSA key generation, signing and verification
//! - `algorithms`: curve arithmetic only
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kcrypt-params`]: secp256k1 domain constants
//! - [`kcrypt-common`]: modular arithmetic, curve points and domain parameters
//! - [`kcrypt-algorithms`]: the group law and scalar multiplication
//! - [`kcrypt-sign`]: ECDSA
//!
//! ## Security
//!
//! Arithmetic is not constant-time. Digests are signed as given; hashing the
//! message is left to the caller.

// Core re-exports (always available)
pub use kcrypt_api as api;
pub use kcrypt_common as common;
pub use kcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use kcrypt_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use kcrypt_sign as sign;

// Digests and keys are `BigUint`s and every randomized call takes a `rand` generator
pub use num_bigint;
pub use rand;

/// Common imports for kcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::Signature;

    // Re-export curve types
    pub use crate::common::{CurvePoint, DomainParameters};

    #[cfg(feature = "sign")]
    pub use crate::sign::{EcdsaK256, PrivateKey, PublicKey, SignatureComponents};
}
