//! Known-answer vectors for secp256k1
//!
//! Values are hex-encoded big-endian integers. Public keys are `d·G`;
//! signatures were produced with the listed nonce and are checked by
//! verification only, since signing draws its own nonce.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

/// A private scalar and its public point
#[derive(Debug, Clone)]
pub struct KeyVector {
    pub d: BigUint,
    pub hx: BigUint,
    pub hy: BigUint,
}

/// A signature over a digest under a known key
#[derive(Debug, Clone)]
pub struct SignatureVector {
    pub d: BigUint,
    pub z: BigUint,
    pub k: BigUint,
    pub r: BigUint,
    pub s: BigUint,
}

/// Parse a hex string into an integer, panicking on malformed input.
pub fn hex_int(s: &str) -> BigUint {
    BigUint::from_bytes_be(&hex::decode(s).expect("vector must be valid hex"))
}

const KEY_DATA: &[(&str, &str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000001",
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000002",
        "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
        "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000003",
        "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
    ),
    (
        "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140",
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777",
    ),
    (
        "cef12d16c863dc528bf0194c6b48c6cbcd9dac87deecc2cbde920ac97361d9ee",
        "c26e0faa35c5c0c7ac4cdb757eee28a7e0b7d370af8fe098b6f8d06f0fa15ce2",
        "fd2ac149e13577770efcaad75d9352d208a38c648a1e8df24a584bb93f30939c",
    ),
    (
        "aa5e28d6a97a2479a65527f7290311a3624d4cc0fa1578598ee3c2613bf99522",
        "34f9460f0e4f08393d192b3c5133a6ba099aa0ad9fd54ebccfacdfa239ff49c6",
        "0b71ea9bd730fd8923f6d25a7a91e7dd7728a960686cb5a901bb419e0f2ca232",
    ),
];

const SIGNATURE_DATA: &[(&str, &str, &str, &str, &str)] = &[
    (
        "cef12d16c863dc528bf0194c6b48c6cbcd9dac87deecc2cbde920ac97361d9ee",
        "7f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069",
        "1111111111111111111111111111111111111111111111111111111111111111",
        "4f355bdcb7cc0af728ef3cceb9615d90684bb5b2ca5f859ab0f0b704075871aa",
        "897cc8badfa1e84c9413f73b7b70dc542bef0983b7382f116d93a7a3ce245a3f",
    ),
    (
        "aa5e28d6a97a2479a65527f7290311a3624d4cc0fa1578598ee3c2613bf99522",
        "4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a",
        "49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a",
        "241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795",
        "8d6a4e9f630459cf7770e67488d8ef56ef6db0db4e51fabfcf8538c92277729a",
    ),
];

/// secp256k1 key pair vectors
pub static KEY_VECTORS: Lazy<Vec<KeyVector>> = Lazy::new(|| {
    KEY_DATA
        .iter()
        .map(|(d, hx, hy)| KeyVector {
            d: hex_int(d),
            hx: hex_int(hx),
            hy: hex_int(hy),
        })
        .collect()
});

/// secp256k1 signature vectors
pub static SIGNATURE_VECTORS: Lazy<Vec<SignatureVector>> = Lazy::new(|| {
    SIGNATURE_DATA
        .iter()
        .map(|(d, z, k, r, s)| SignatureVector {
            d: hex_int(d),
            z: hex_int(z),
            k: hex_int(k),
            r: hex_int(r),
            s: hex_int(s),
        })
        .collect()
});
