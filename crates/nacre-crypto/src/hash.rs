//! One-shot digest operations: SHA-2, SHA-3 and BLAKE2b.
//!
//! Fixed-width digests go into destinations of exactly the declared size.
//! BLAKE2b takes an explicit digest-length parameter (1..=64) and an
//! optional key, and the destination must match that parameter. The
//! streaming SHA-2 core entries exist on the surface but are intentionally
//! unimplemented and report [`DispatchError::NotImplemented`].

use crate::bytes::{self, ByteBuffer};
use crate::codec::{self, Status};
use crate::dispatch;
use crate::error::{DispatchError, Result};
use blake2::digest::consts::{U16, U32, U64};
use blake2::digest::{FixedOutput, KeyInit, Update, VariableOutput};
use blake2::{Blake2bMac, Blake2bVar};
use sha2::{Digest, Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};

/// SHA-256 and SHA3-256 digest size in bytes.
pub const SHA256_DIGEST_SIZE: usize = 32;

/// SHA-512 and SHA3-512 digest size in bytes.
pub const SHA512_DIGEST_SIZE: usize = 64;

/// Largest BLAKE2b digest size in bytes.
pub const BLAKE2B_MAX_DIGEST_SIZE: usize = 64;

/// Largest BLAKE2b key size in bytes.
pub const BLAKE2B_MAX_KEY_SIZE: usize = 64;

/// Computes the SHA-256 digest of `message` into `digest`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if `digest` is not exactly
/// 32 bytes.
pub fn sha2_256(message: &[u8], digest: &mut [u8]) -> Result<Status> {
    codec::require_output_len(&dispatch::HASH_SHA2_256, digest)?;
    let staged = ByteBuffer::from_slice(&Sha256::digest(message));
    codec::commit(&dispatch::HASH_SHA2_256, Some(&staged), digest)
}

/// Computes the SHA-512 digest of `message` into `digest`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if `digest` is not exactly
/// 64 bytes.
pub fn sha2_512(message: &[u8], digest: &mut [u8]) -> Result<Status> {
    codec::require_output_len(&dispatch::HASH_SHA2_512, digest)?;
    let staged = ByteBuffer::from_slice(&Sha512::digest(message));
    codec::commit(&dispatch::HASH_SHA2_512, Some(&staged), digest)
}

/// Computes the SHA3-256 digest of `message` into `digest`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if `digest` is not exactly
/// 32 bytes.
pub fn sha3_256(message: &[u8], digest: &mut [u8]) -> Result<Status> {
    codec::require_output_len(&dispatch::HASH_SHA3_256, digest)?;
    let staged = ByteBuffer::from_slice(&Sha3_256::digest(message));
    codec::commit(&dispatch::HASH_SHA3_256, Some(&staged), digest)
}

/// Computes the SHA3-512 digest of `message` into `digest`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if `digest` is not exactly
/// 64 bytes.
pub fn sha3_512(message: &[u8], digest: &mut [u8]) -> Result<Status> {
    codec::require_output_len(&dispatch::HASH_SHA3_512, digest)?;
    let staged = ByteBuffer::from_slice(&Sha3_512::digest(message));
    codec::commit(&dispatch::HASH_SHA3_512, Some(&staged), digest)
}

/// Computes a BLAKE2b digest of `message` into `digest`.
///
/// `digest_len` chooses the digest size (1..=64 bytes) and must equal the
/// destination's length. An empty `key` selects plain hashing; a non-empty
/// key (up to 64 bytes) selects keyed hashing, which the external library
/// exposes at the standard sizes 16, 32 and 64.
///
/// # Errors
///
/// Returns `DispatchError::UnsupportedParameters` for a digest length
/// outside 1..=64, a key longer than 64 bytes, or a keyed request at a
/// non-standard size, and `DispatchError::BufferSizeMismatch` if the
/// destination does not match `digest_len`.
pub fn blake2b(key: &[u8], message: &[u8], digest_len: usize, digest: &mut [u8]) -> Result<Status> {
    if digest_len == 0 || digest_len > BLAKE2B_MAX_DIGEST_SIZE {
        return Err(DispatchError::UnsupportedParameters {
            op: "hash.blake2b",
            detail: format!("digest length {digest_len} outside 1..=64"),
        });
    }
    if key.len() > BLAKE2B_MAX_KEY_SIZE {
        return Err(DispatchError::UnsupportedParameters {
            op: "hash.blake2b",
            detail: format!("key length {} exceeds 64", key.len()),
        });
    }
    bytes::expect_len("blake2b digest", digest_len, digest.len())?;

    let staged = if key.is_empty() {
        let mut hasher = Blake2bVar::new(digest_len).expect("digest length validated above");
        hasher.update(message);
        let mut out = ByteBuffer::zeroed(digest_len);
        hasher
            .finalize_variable(out.as_mut_slice())
            .expect("scratch is sized to the digest length");
        out
    } else {
        // The external library exposes keyed hashing at fixed output sizes.
        match digest_len {
            16 => {
                let mut mac = Blake2bMac::<U16>::new_from_slice(key)
                    .expect("key length validated above");
                mac.update(message);
                ByteBuffer::from_slice(&mac.finalize_fixed())
            }
            32 => {
                let mut mac = Blake2bMac::<U32>::new_from_slice(key)
                    .expect("key length validated above");
                mac.update(message);
                ByteBuffer::from_slice(&mac.finalize_fixed())
            }
            64 => {
                let mut mac = Blake2bMac::<U64>::new_from_slice(key)
                    .expect("key length validated above");
                mac.update(message);
                ByteBuffer::from_slice(&mac.finalize_fixed())
            }
            other => {
                return Err(DispatchError::UnsupportedParameters {
                    op: "hash.blake2b",
                    detail: format!("keyed digest length {other} (supported: 16, 32, 64)"),
                })
            }
        }
    };
    codec::commit(&dispatch::HASH_BLAKE2B, Some(&staged), digest)
}

/// Streaming SHA-256 state initialization. Intentionally unimplemented.
///
/// # Errors
///
/// Always returns `DispatchError::NotImplemented`.
pub fn sha2_init_256(_state: &mut [u8]) -> Result<Status> {
    Err(DispatchError::NotImplemented("hash.sha2-256-init"))
}

/// Streaming SHA-256 block update. Intentionally unimplemented.
///
/// # Errors
///
/// Always returns `DispatchError::NotImplemented`.
pub fn sha2_update_256(_state: &mut [u8], _block: &[u8]) -> Result<Status> {
    Err(DispatchError::NotImplemented("hash.sha2-256-update"))
}

/// Streaming SHA-256 finalization. Intentionally unimplemented.
///
/// # Errors
///
/// Always returns `DispatchError::NotImplemented`.
pub fn sha2_finish_256(_state: &[u8], _digest: &mut [u8]) -> Result<Status> {
    Err(DispatchError::NotImplemented("hash.sha2-256-finish"))
}

/// Streaming SHA-512 state initialization. Intentionally unimplemented.
///
/// # Errors
///
/// Always returns `DispatchError::NotImplemented`.
pub fn sha2_init_512(_state: &mut [u8]) -> Result<Status> {
    Err(DispatchError::NotImplemented("hash.sha2-512-init"))
}

/// Streaming SHA-512 block update. Intentionally unimplemented.
///
/// # Errors
///
/// Always returns `DispatchError::NotImplemented`.
pub fn sha2_update_512(_state: &mut [u8], _block: &[u8]) -> Result<Status> {
    Err(DispatchError::NotImplemented("hash.sha2-512-update"))
}

/// Streaming SHA-512 finalization. Intentionally unimplemented.
///
/// # Errors
///
/// Always returns `DispatchError::NotImplemented`.
pub fn sha2_finish_512(_state: &[u8], _digest: &mut [u8]) -> Result<Status> {
    Err(DispatchError::NotImplemented("hash.sha2-512-finish"))
}
