//! Ed25519 signatures.

use crate::bytes::{self, ByteBuffer};
use crate::codec::{self, Status};
use crate::dispatch;
use crate::error::Result;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};

/// Size of an Ed25519 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 secret key in bytes.
pub const SECRET_KEY_SIZE: usize = 32;

/// Size of an Ed25519 signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Derives the public key for `secret_key` into `public_key`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if either buffer is not
/// exactly 32 bytes.
pub fn secret_to_public(secret_key: &[u8], public_key: &mut [u8]) -> Result<Status> {
    let sk = bytes::fixed::<SECRET_KEY_SIZE>("ed25519 secret key", secret_key)?;
    codec::require_output_len(&dispatch::SIGN_SECRET_TO_PUBLIC, public_key)?;
    let verifying = SigningKey::from_bytes(&sk).verifying_key();
    let staged = ByteBuffer::from_slice(verifying.as_bytes());
    codec::commit(&dispatch::SIGN_SECRET_TO_PUBLIC, Some(&staged), public_key)
}

/// Signs `message` with `secret_key`, writing the 64-byte signature into
/// `signature`.
///
/// Ed25519 signing is deterministic: the same key and message always
/// produce the same signature.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized secret key
/// or signature destination.
pub fn sign(secret_key: &[u8], message: &[u8], signature: &mut [u8]) -> Result<Status> {
    let sk = bytes::fixed::<SECRET_KEY_SIZE>("ed25519 secret key", secret_key)?;
    codec::require_output_len(&dispatch::SIGN_SIGN, signature)?;
    let produced = SigningKey::from_bytes(&sk).sign(message);
    let staged = ByteBuffer::from_slice(&produced.to_bytes());
    codec::commit(&dispatch::SIGN_SIGN, Some(&staged), signature)
}

/// Verifies `signature` over `message` under `public_key`.
///
/// The returned status is `0` for a valid signature and `-1` otherwise,
/// including for a public key that does not decode to a curve point. An
/// invalid signature is an expected outcome, not an error.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized public key
/// or signature.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<Status> {
    let pk = bytes::fixed::<PUBLIC_KEY_SIZE>("ed25519 public key", public_key)?;
    let sig = bytes::fixed::<SIGNATURE_SIZE>("ed25519 signature", signature)?;
    let valid = match VerifyingKey::from_bytes(&pk) {
        Ok(verifying) => verifying.verify(message, &Signature::from_bytes(&sig)).is_ok(),
        Err(_) => false,
    };
    Ok(codec::resolve(&dispatch::SIGN_VERIFY, valid))
}
