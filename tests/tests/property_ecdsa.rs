//! Property-based tests for ECDSA sign/verify

use kcrypt_common::DomainParameters;
use kcrypt_sign::{derive_public_key, sign, verify, PrivateKey, SignatureComponents};
use kcrypt_tests::toy_curve;
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// A secp256k1 scalar in [1, n-1], built from 32 arbitrary bytes
fn secp256k1_scalar() -> impl Strategy<Value = BigUint> {
    any::<[u8; 32]>().prop_map(|bytes| {
        let n = DomainParameters::secp256k1().order();
        (BigUint::from_bytes_be(&bytes) % (n - 1u32)) + 1u32
    })
}

fn digest() -> impl Strategy<Value = BigUint> {
    any::<[u8; 32]>().prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn secp256k1_sign_verify_roundtrip(
        d in secp256k1_scalar(),
        z in digest(),
        seed in any::<u64>()
    ) {
        let params = DomainParameters::secp256k1();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);

        let sk = PrivateKey::from_scalar(&d, params).unwrap();
        let pk = derive_public_key(&sk, params).unwrap();
        let sig = sign(&z, &sk, params, &mut rng).unwrap();

        prop_assert!(sig.is_well_formed(params));
        prop_assert!(verify(&z, &pk, &sig, params));
    }

    #[test]
    fn secp256k1_random_signature_rejected(
        d in secp256k1_scalar(),
        z in digest(),
        r in secp256k1_scalar(),
        s in secp256k1_scalar()
    ) {
        let params = DomainParameters::secp256k1();
        let sk = PrivateKey::from_scalar(&d, params).unwrap();
        let pk = derive_public_key(&sk, params).unwrap();

        prop_assert!(!verify(&z, &pk, &SignatureComponents::new(r, s), params));
    }

    #[test]
    fn secp256k1_modified_digest_rejected(
        d in secp256k1_scalar(),
        z in digest(),
        seed in any::<u64>()
    ) {
        let params = DomainParameters::secp256k1();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);

        let sk = PrivateKey::from_scalar(&d, params).unwrap();
        let pk = derive_public_key(&sk, params).unwrap();
        let sig = sign(&z, &sk, params, &mut rng).unwrap();

        prop_assert!(!verify(&(&z + 1u32), &pk, &sig, params));
    }
}

proptest! {
    #[test]
    fn toy_curve_sign_verify_roundtrip(
        d in 1u32..19,
        z in any::<u32>(),
        seed in any::<u64>()
    ) {
        let params = toy_curve();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);

        let sk = PrivateKey::from_scalar(&BigUint::from(d), &params).unwrap();
        let pk = derive_public_key(&sk, &params).unwrap();
        let z = BigUint::from(z);
        let sig = sign(&z, &sk, &params, &mut rng).unwrap();

        prop_assert!(sig.is_well_formed(&params));
        prop_assert!(verify(&z, &pk, &sig, &params));
    }
}
