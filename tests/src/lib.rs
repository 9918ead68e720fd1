//! Test vectors and shared fixtures for the kcrypt library
pub mod vectors;

use kcrypt_common::DomainParameters;
use num_bigint::BigUint;

/// The textbook curve y^2 = x^3 + 2x + 2 over F_17 with G = (5, 1) of order 19
///
/// Small enough that every key, nonce and signature can be enumerated.
pub fn toy_curve() -> DomainParameters {
    let big = |v: u32| BigUint::from(v);
    DomainParameters::new("toy-17", big(17), big(2), big(2), (big(5), big(1)), big(19), big(1))
        .expect("toy curve parameters are consistent")
}
