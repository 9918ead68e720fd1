//! Known-answer tests against the secp256k1 vectors

use kcrypt_algorithms::ec::k256;
use kcrypt_common::{CurvePoint, DomainParameters};
use kcrypt_sign::{derive_public_key, sign, verify, PrivateKey, PublicKey, SignatureComponents};
use kcrypt_tests::vectors::{KEY_VECTORS, SIGNATURE_VECTORS};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_key_vectors() {
    let params = DomainParameters::secp256k1();
    for v in KEY_VECTORS.iter() {
        let sk = PrivateKey::from_scalar(&v.d, params).unwrap();
        let pk = derive_public_key(&sk, params).unwrap();
        assert_eq!(
            pk.point(),
            &CurvePoint::new(v.hx.clone(), v.hy.clone(), params).unwrap(),
            "d = {:x}",
            v.d
        );
        assert_eq!(k256::scalar_mult_base_g(&v.d).unwrap(), pk.point().clone());
    }
}

#[test]
fn test_signature_vectors_verify() {
    let params = DomainParameters::secp256k1();
    for v in SIGNATURE_VECTORS.iter() {
        let sk = PrivateKey::from_scalar(&v.d, params).unwrap();
        let pk = derive_public_key(&sk, params).unwrap();

        // r is the x-coordinate of k·G reduced mod n
        let kg = k256::scalar_mult_base_g(&v.k).unwrap();
        assert_eq!(kg.x().unwrap() % params.order(), v.r);

        let sig = SignatureComponents::new(v.r.clone(), v.s.clone());
        assert!(verify(&v.z, &pk, &sig, params));

        // Swapped components must not verify
        let swapped = SignatureComponents::new(v.s.clone(), v.r.clone());
        assert!(!verify(&v.z, &pk, &swapped, params));
    }
}

#[test]
fn test_signature_vectors_fresh_signatures() {
    let params = DomainParameters::secp256k1();
    let mut rng = ChaCha20Rng::seed_from_u64(2024);
    for v in SIGNATURE_VECTORS.iter() {
        let sk = PrivateKey::from_scalar(&v.d, params).unwrap();
        let pk = derive_public_key(&sk, params).unwrap();
        let sig = sign(&v.z, &sk, params, &mut rng).unwrap();

        // A fresh nonce gives a different signature that still verifies
        assert_ne!(sig.r, v.r);
        assert!(verify(&v.z, &pk, &sig, params));
    }
}

#[test]
fn test_vector_key_off_curve() {
    let params = DomainParameters::secp256k1();
    let v = &SIGNATURE_VECTORS[0];
    let key = &KEY_VECTORS[4];
    let sig = SignatureComponents::new(v.r.clone(), v.s.clone());

    let tampered = CurvePoint::new_unchecked(key.hx.clone(), &key.hy + 1u32);
    assert!(PublicKey::from_point(tampered.clone(), params).is_err());
    assert!(!verify(&v.z, &PublicKey::from_point_unchecked(tampered), &sig, params));
}
