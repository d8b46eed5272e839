//! Unit tests for the dispatch error taxonomy.
//!
//! These verify that precondition and environment failures surface as typed
//! errors before any output is written, while expected cryptographic
//! failures surface as status codes.

use nacre_crypto::error::DispatchError;
use nacre_crypto::random::{RandomSource, Strategy};
use nacre_crypto::{aead, ecdsa, hash, kex, mac, sign, xof};

#[test]
fn test_digest_destination_mismatch_is_typed() {
    let mut short = [0u8; 16];
    for result in [
        hash::sha2_256(b"m", &mut short),
        hash::sha2_512(b"m", &mut short),
        hash::sha3_256(b"m", &mut short),
        hash::sha3_512(b"m", &mut short),
    ] {
        assert!(matches!(
            result,
            Err(DispatchError::BufferSizeMismatch { .. })
        ));
    }
    assert_eq!(short, [0u8; 16]);
}

#[test]
fn test_mac_destination_mismatch_is_typed() {
    let mut short = [0u8; 16];
    assert!(matches!(
        mac::hmac_sha2_256(b"k", b"m", &mut short),
        Err(DispatchError::BufferSizeMismatch { .. })
    ));
    assert!(matches!(
        mac::hmac_sha2_512(b"k", b"m", &mut short),
        Err(DispatchError::BufferSizeMismatch { .. })
    ));
}

#[test]
fn test_wrong_key_sizes_are_typed_not_status() {
    let mut out = [0u8; 32];
    assert!(matches!(
        kex::scalarmult_base(&[0u8; 16], &mut out),
        Err(DispatchError::BufferSizeMismatch { .. })
    ));

    let mut ciphertext = [0u8; 20];
    assert!(matches!(
        aead::secretbox_easy(b"owt", &[0u8; 24], &[0u8; 31], &mut ciphertext),
        Err(DispatchError::BufferSizeMismatch { .. })
    ));
    assert!(matches!(
        aead::secretbox_easy(b"owt", &[0u8; 23], &[0u8; 32], &mut ciphertext),
        Err(DispatchError::BufferSizeMismatch { .. })
    ));
}

#[test]
fn test_streaming_hash_is_not_implemented() {
    let mut state = [0u8; 128];
    assert!(matches!(
        hash::sha2_init_256(&mut state),
        Err(DispatchError::NotImplemented("hash.sha2-256-init"))
    ));
    assert!(matches!(
        hash::sha2_init_512(&mut state),
        Err(DispatchError::NotImplemented("hash.sha2-512-init"))
    ));
}

#[test]
fn test_p256_sign_is_not_implemented() {
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    let result = ecdsa::sign_prehash(&[1u8; 32], &[2u8; 32], &mut r, &mut s);
    assert!(matches!(
        result,
        Err(DispatchError::NotImplemented("ecdsa.sign-prehash"))
    ));
    // The destinations were never written.
    assert_eq!(r, [0u8; 32]);
    assert_eq!(s, [0u8; 32]);
}

#[test]
fn test_unsupported_keccak_parameters() {
    let mut digest = [0u8; 32];
    let result = xof::keccak(512, 512, 0x1f, b"m", &mut digest);
    match result {
        Err(DispatchError::UnsupportedParameters { op, detail }) => {
            assert_eq!(op, "xof.keccak");
            assert!(detail.contains("512"));
        }
        other => panic!("expected UnsupportedParameters, got {other:?}"),
    }
}

#[test]
fn test_unsupported_blake2b_parameters() {
    let mut digest = [0u8; 0];
    assert!(matches!(
        hash::blake2b(b"", b"m", 0, &mut digest),
        Err(DispatchError::UnsupportedParameters { .. })
    ));

    let mut digest = [0u8; 48];
    assert!(matches!(
        hash::blake2b(b"key", b"m", 48, &mut digest),
        Err(DispatchError::UnsupportedParameters { .. })
    ));
}

#[test]
fn test_zero_quota_random_is_unavailable() {
    let source = RandomSource::with_strategy(Strategy::Chunked { quota: 0 });
    let mut buf = [0u8; 8];
    assert!(matches!(
        source.fill(&mut buf, 8),
        Err(DispatchError::RandomUnavailable(_))
    ));
}

#[test]
fn test_crypto_failures_are_status_not_error() {
    // A bad signature is an expected outcome.
    let status = sign::verify(&[0u8; 32], b"m", &[0u8; 64]).unwrap();
    assert_eq!(status.code(), -1);

    // A bad tag is an expected outcome.
    let mut opened = [0u8; 4];
    let status =
        aead::secretbox_open_easy(&[0u8; 20], &[0u8; 24], &[0u8; 32], &mut opened).unwrap();
    assert_eq!(status.code(), 0);
}

#[test]
fn test_errors_do_not_poison_later_calls() {
    let mut short = [0u8; 16];
    let _ = hash::sha2_256(b"m", &mut short);

    let mut digest = [0u8; 32];
    let status = hash::sha2_256(b"m", &mut digest).unwrap();
    assert_eq!(status.code(), 0);
    assert!(digest.iter().any(|&b| b != 0));
}
