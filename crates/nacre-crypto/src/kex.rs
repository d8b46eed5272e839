//! Curve25519 key material derivation.

use crate::bytes::{self, ByteBuffer};
use crate::codec::{self, Status};
use crate::dispatch;
use crate::error::Result;
use x25519_dalek::{PublicKey, StaticSecret};

/// Size of a Curve25519 public key in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of a Curve25519 secret key in bytes.
pub const SECRET_KEY_SIZE: usize = 32;

/// Multiplies the curve base point by `secret_key`, writing the resulting
/// public key into `public_key`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` if either buffer is not
/// exactly 32 bytes.
pub fn scalarmult_base(secret_key: &[u8], public_key: &mut [u8]) -> Result<Status> {
    let sk = bytes::fixed::<SECRET_KEY_SIZE>("curve25519 secret key", secret_key)?;
    codec::require_output_len(&dispatch::KEX_SCALARMULT_BASE, public_key)?;
    let public = PublicKey::from(&StaticSecret::from(sk));
    let staged = ByteBuffer::from_slice(public.as_bytes());
    codec::commit(&dispatch::KEX_SCALARMULT_BASE, Some(&staged), public_key)
}
