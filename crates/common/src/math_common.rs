//! Modular arithmetic over a caller-supplied prime modulus
//!
//! Every function reduces its result into `[0, m)`. The modulus must be
//! nonzero; in practice it is always `p` or `n` taken from
//! [`DomainParameters`](crate::DomainParameters).

use kcrypt_api::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Reduce `a` into `[0, m)`
pub fn mod_reduce(a: &BigUint, m: &BigUint) -> BigUint {
    a % m
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    let b = b % m;
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Additive inverse: (-a) mod m
pub fn mod_neg(a: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    if a.is_zero() {
        a
    } else {
        m - a
    }
}

/// Perform modular exponentiation (a^e mod m)
///
/// Square-and-multiply, delegated to [`BigUint::modpow`].
pub fn mod_exp(a: &BigUint, e: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    a.modpow(e, m)
}

/// Compute a^(-1) mod m for a prime modulus m
///
/// Uses Fermat's little theorem, a^(m-2) ≡ a^(-1) (mod m), which only holds
/// because m is prime. Fails with [`Error::InvalidInverse`] when a ≡ 0 (mod m).
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let a = a % m;
    if a.is_zero() {
        return Err(Error::InvalidInverse { context: "mod_inv" });
    }
    // m >= 2 here, since a ≡ 0 for every a when m = 1
    Ok(a.modpow(&(m - 2u32), m))
}
