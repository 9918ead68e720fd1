//! Common utilities for ECDSA implementations

use kcrypt_common::DomainParameters;
use num_bigint::BigUint;

/// ECDSA signature components (r, s)
///
/// Values received from outside are untrusted and may lie outside
/// `[1, n-1]`; the verifier checks the range before using them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignatureComponents {
    pub r: BigUint,
    pub s: BigUint,
}

impl SignatureComponents {
    /// Build a signature from its two components
    pub fn new(r: BigUint, s: BigUint) -> Self {
        SignatureComponents { r, s }
    }

    /// Check that both components lie in `[1, n-1]`
    pub fn is_well_formed(&self, params: &DomainParameters) -> bool {
        params.is_valid_scalar(&self.r) && params.is_valid_scalar(&self.s)
    }
}

/// Convert a message digest to the integer z that ECDSA signs.
///
/// Keeps the leftmost `bitlen(n)` bits of the digest (FIPS 186-4, Section
/// 6.4, step 2). Hashing the message is left to the caller.
pub fn digest_to_integer(digest: &[u8], params: &DomainParameters) -> BigUint {
    let z = BigUint::from_bytes_be(digest);
    let digest_bits = digest.len() as u64 * 8;
    let order_bits = params.order().bits();
    if digest_bits > order_bits {
        z >> (digest_bits - order_bits)
    } else {
        z
    }
}

/// Encode `value` as exactly `len` big-endian bytes, left-padded with zeros.
///
/// `value` must fit in `len` bytes.
pub(crate) fn to_fixed_be(value: &BigUint, len: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut out = vec![0u8; len.saturating_sub(bytes.len())];
    out.extend_from_slice(&bytes);
    out
}
