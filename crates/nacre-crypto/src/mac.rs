//! HMAC message authentication over SHA-2.

use crate::bytes::ByteBuffer;
use crate::codec::{self, Status};
use crate::dispatch;
use crate::error::Result;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

/// HMAC-SHA-256 output size in bytes.
pub const SHA256_MAC_SIZE: usize = 32;

/// HMAC-SHA-512 output size in bytes.
pub const SHA512_MAC_SIZE: usize = 64;

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Computes HMAC-SHA-256 of `message` under `key` into `mac`.
///
/// Keys of any length are accepted, per the HMAC construction.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if `mac` is not exactly
/// 32 bytes.
pub fn hmac_sha2_256(key: &[u8], message: &[u8], mac: &mut [u8]) -> Result<Status> {
    codec::require_output_len(&dispatch::MAC_HMAC_SHA2_256, mac)?;
    let mut state = HmacSha256::new_from_slice(key).expect("hmac accepts keys of any length");
    state.update(message);
    let staged = ByteBuffer::from_slice(&state.finalize().into_bytes());
    codec::commit(&dispatch::MAC_HMAC_SHA2_256, Some(&staged), mac)
}

/// Computes HMAC-SHA-512 of `message` under `key` into `mac`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if `mac` is not exactly
/// 64 bytes.
pub fn hmac_sha2_512(key: &[u8], message: &[u8], mac: &mut [u8]) -> Result<Status> {
    codec::require_output_len(&dispatch::MAC_HMAC_SHA2_512, mac)?;
    let mut state = HmacSha512::new_from_slice(key).expect("hmac accepts keys of any length");
    state.update(message);
    let staged = ByteBuffer::from_slice(&state.finalize().into_bytes());
    codec::commit(&dispatch::MAC_HMAC_SHA2_512, Some(&staged), mac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::to_hex;
    use crate::error::DispatchError;

    // RFC 4231 test case 2.
    const KEY: &[u8] = b"Jefe";
    const MESSAGE: &[u8] = b"what do ya want for nothing?";

    #[test]
    fn test_hmac_sha256_rfc4231_case2() {
        let mut mac = [0u8; SHA256_MAC_SIZE];
        let status = hmac_sha2_256(KEY, MESSAGE, &mut mac).unwrap();
        assert_eq!(status.code(), 0);
        assert_eq!(
            to_hex(&mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hmac_sha512_rfc4231_case2() {
        let mut mac = [0u8; SHA512_MAC_SIZE];
        hmac_sha2_512(KEY, MESSAGE, &mut mac).unwrap();
        assert_eq!(
            to_hex(&mac),
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_hmac_empty_key_and_message() {
        let mut mac = [0u8; SHA256_MAC_SIZE];
        hmac_sha2_256(b"", b"", &mut mac).unwrap();
        assert!(mac.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_hmac_long_key() {
        // Keys longer than the block size are hashed down first; the entry
        // must accept them unchanged.
        let key = [0x55u8; 200];
        let mut mac = [0u8; SHA256_MAC_SIZE];
        hmac_sha2_256(&key, b"msg", &mut mac).unwrap();
        assert!(mac.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_hmac_key_sensitivity() {
        let mut a = [0u8; SHA256_MAC_SIZE];
        let mut b = [0u8; SHA256_MAC_SIZE];
        hmac_sha2_256(b"key-a", b"msg", &mut a).unwrap();
        hmac_sha2_256(b"key-b", b"msg", &mut b).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hmac_wrong_destination_size() {
        let mut mac = [0u8; 33];
        let result = hmac_sha2_256(b"key", b"msg", &mut mac);
        assert!(matches!(
            result,
            Err(DispatchError::BufferSizeMismatch {
                expected: 32,
                actual: 33,
                ..
            })
        ));
        assert_eq!(mac, [0u8; 33]);
    }
}
