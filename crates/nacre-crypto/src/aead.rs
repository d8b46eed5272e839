//! NaCl secretbox and box authenticated encryption.
//!
//! Combined ciphertexts use the NaCl wire layout: a 16-byte Poly1305 tag
//! followed by the encrypted body. The layout is assembled here from the
//! detached primitives so it does not depend on any combined-mode convention
//! of the external crate.
//!
//! The box entries split key agreement from encryption the NaCl way:
//! [`box_beforenm`] turns (peer public key, own secret key) into a 32-byte
//! precomputed key (HSalsa20 of the X25519 shared secret) and the
//! `afternm` entries are secretbox under that key.

use crate::bytes::{self, ByteBuffer};
use crate::codec::{self, Status};
use crate::dispatch;
use crate::error::{DispatchError, Result};
use crypto_secretbox::aead::generic_array::typenum::U10;
use crypto_secretbox::aead::generic_array::GenericArray;
use crypto_secretbox::aead::{AeadInPlace, KeyInit};
use crypto_secretbox::XSalsa20Poly1305;
use salsa20::hsalsa;
use x25519_dalek::{PublicKey, StaticSecret};

/// Size of a secretbox or precomputed box key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a secretbox/box nonce in bytes.
pub const NONCE_SIZE: usize = 24;

/// Size of a Poly1305 authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// A detached seal outcome: encrypted body and authentication tag.
struct DetachedSeal {
    ciphertext: ByteBuffer,
    tag: ByteBuffer,
}

fn seal_detached(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], message: &[u8]) -> Option<DetachedSeal> {
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key));
    let mut body = ByteBuffer::from_slice(message);
    match cipher.encrypt_in_place_detached(GenericArray::from_slice(nonce), b"", body.as_mut_slice()) {
        Ok(tag) => Some(DetachedSeal {
            ciphertext: body,
            tag: ByteBuffer::from_slice(&tag),
        }),
        Err(_) => None,
    }
}

fn open_detached(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    body: &[u8],
    tag: &[u8; TAG_SIZE],
) -> Option<ByteBuffer> {
    let cipher = XSalsa20Poly1305::new(GenericArray::from_slice(key));
    let mut scratch = ByteBuffer::from_slice(body);
    match cipher.decrypt_in_place_detached(
        GenericArray::from_slice(nonce),
        b"",
        scratch.as_mut_slice(),
        GenericArray::from_slice(tag),
    ) {
        Ok(()) => Some(scratch),
        // Scratch still holds ciphertext (or partial state) and is wiped on
        // drop; the caller's destination is never touched.
        Err(_) => None,
    }
}

fn seal_combined(key: &[u8; KEY_SIZE], nonce: &[u8; NONCE_SIZE], message: &[u8]) -> Option<ByteBuffer> {
    let sealed = seal_detached(key, nonce, message)?;
    let mut combined = ByteBuffer::zeroed(TAG_SIZE + message.len());
    combined.as_mut_slice()[..TAG_SIZE].copy_from_slice(sealed.tag.as_slice());
    combined.as_mut_slice()[TAG_SIZE..].copy_from_slice(sealed.ciphertext.as_slice());
    Some(combined)
}

/// Seals `message` under `key` and `nonce`, writing tag-prefixed ciphertext
/// into `ciphertext`.
///
/// The destination must be exactly `message.len() + 16` bytes.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized key, nonce
/// or destination.
pub fn secretbox_easy(message: &[u8], nonce: &[u8], key: &[u8], ciphertext: &mut [u8]) -> Result<Status> {
    let key = bytes::fixed::<KEY_SIZE>("secretbox key", key)?;
    let nonce = bytes::fixed::<NONCE_SIZE>("secretbox nonce", nonce)?;
    bytes::expect_len("secretbox ciphertext", message.len() + TAG_SIZE, ciphertext.len())?;
    let staged = seal_combined(&key, &nonce, message);
    codec::commit(&dispatch::AEAD_SECRETBOX_EASY, staged.as_ref(), ciphertext)
}

/// Opens tag-prefixed `ciphertext` under `key` and `nonce` into `message`.
///
/// The destination must be exactly `ciphertext.len() - 16` bytes. On an
/// authentication failure the status reports failure and the destination is
/// left untouched.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized key, nonce
/// or destination, or a ciphertext shorter than the tag.
pub fn secretbox_open_easy(ciphertext: &[u8], nonce: &[u8], key: &[u8], message: &mut [u8]) -> Result<Status> {
    let key = bytes::fixed::<KEY_SIZE>("secretbox key", key)?;
    let nonce = bytes::fixed::<NONCE_SIZE>("secretbox nonce", nonce)?;
    let Some(body_len) = ciphertext.len().checked_sub(TAG_SIZE) else {
        return Err(DispatchError::BufferSizeMismatch {
            role: "secretbox ciphertext",
            expected: TAG_SIZE,
            actual: ciphertext.len(),
        });
    };
    bytes::expect_len("secretbox plaintext", body_len, message.len())?;
    let (tag, body) = ciphertext.split_at(TAG_SIZE);
    let tag = bytes::fixed::<TAG_SIZE>("secretbox tag", tag)?;
    let staged = open_detached(&key, &nonce, body, &tag);
    codec::commit(&dispatch::AEAD_SECRETBOX_OPEN_EASY, staged.as_ref(), message)
}

/// Precomputes the box shared key for a (peer public key, own secret key)
/// pair.
///
/// The status reports failure for a non-contributory exchange (a low-order
/// peer key yielding an all-zero shared secret); the destination is left
/// untouched in that case.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for wrong-sized keys or
/// destination.
pub fn box_beforenm(public_key: &[u8], secret_key: &[u8], shared_key: &mut [u8]) -> Result<Status> {
    let pk = bytes::fixed::<KEY_SIZE>("box public key", public_key)?;
    let sk = bytes::fixed::<KEY_SIZE>("box secret key", secret_key)?;
    codec::require_output_len(&dispatch::AEAD_BOX_BEFORENM, shared_key)?;
    let product = StaticSecret::from(sk).diffie_hellman(&PublicKey::from(pk));
    let staged = product.was_contributory().then(|| {
        let key = hsalsa::<U10>(
            GenericArray::from_slice(product.as_bytes()),
            &GenericArray::default(),
        );
        ByteBuffer::from_slice(&key)
    });
    codec::commit(&dispatch::AEAD_BOX_BEFORENM, staged.as_ref(), shared_key)
}

/// Seals `message` under a precomputed box key, writing tag-prefixed
/// ciphertext into `ciphertext`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized key, nonce
/// or destination.
pub fn box_easy_afternm(message: &[u8], nonce: &[u8], shared_key: &[u8], ciphertext: &mut [u8]) -> Result<Status> {
    let key = bytes::fixed::<KEY_SIZE>("box shared key", shared_key)?;
    let nonce = bytes::fixed::<NONCE_SIZE>("box nonce", nonce)?;
    bytes::expect_len("box ciphertext", message.len() + TAG_SIZE, ciphertext.len())?;
    let staged = seal_combined(&key, &nonce, message);
    codec::commit(&dispatch::AEAD_BOX_EASY_AFTERNM, staged.as_ref(), ciphertext)
}

/// Opens tag-prefixed `ciphertext` under a precomputed box key into
/// `message`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized key, nonce
/// or destination, or a ciphertext shorter than the tag.
pub fn box_open_easy_afternm(ciphertext: &[u8], nonce: &[u8], shared_key: &[u8], message: &mut [u8]) -> Result<Status> {
    let key = bytes::fixed::<KEY_SIZE>("box shared key", shared_key)?;
    let nonce = bytes::fixed::<NONCE_SIZE>("box nonce", nonce)?;
    let Some(body_len) = ciphertext.len().checked_sub(TAG_SIZE) else {
        return Err(DispatchError::BufferSizeMismatch {
            role: "box ciphertext",
            expected: TAG_SIZE,
            actual: ciphertext.len(),
        });
    };
    bytes::expect_len("box plaintext", body_len, message.len())?;
    let (tag, body) = ciphertext.split_at(TAG_SIZE);
    let tag = bytes::fixed::<TAG_SIZE>("box tag", tag)?;
    let staged = open_detached(&key, &nonce, body, &tag);
    codec::commit(&dispatch::AEAD_BOX_OPEN_EASY_AFTERNM, staged.as_ref(), message)
}

/// Seals `message` under a precomputed box key, writing the encrypted body
/// and the detached tag into separate destinations.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized key,
/// nonce, ciphertext destination (must equal the message length) or tag
/// destination.
pub fn box_detached_afternm(
    message: &[u8],
    nonce: &[u8],
    shared_key: &[u8],
    ciphertext: &mut [u8],
    tag: &mut [u8],
) -> Result<Status> {
    let key = bytes::fixed::<KEY_SIZE>("box shared key", shared_key)?;
    let nonce = bytes::fixed::<NONCE_SIZE>("box nonce", nonce)?;
    bytes::expect_len("box ciphertext", message.len(), ciphertext.len())?;
    bytes::expect_len("box tag", TAG_SIZE, tag.len())?;
    let staged = seal_detached(&key, &nonce, message);
    codec::commit_detached(
        &dispatch::AEAD_BOX_DETACHED_AFTERNM,
        staged.as_ref().map(|s| (&s.ciphertext, &s.tag)),
        ciphertext,
        tag,
    )
}

/// Opens an encrypted body with its detached tag under a precomputed box
/// key into `message`.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized key,
/// nonce, tag or destination (must equal the ciphertext length).
pub fn box_open_detached_afternm(
    ciphertext: &[u8],
    tag: &[u8],
    nonce: &[u8],
    shared_key: &[u8],
    message: &mut [u8],
) -> Result<Status> {
    let key = bytes::fixed::<KEY_SIZE>("box shared key", shared_key)?;
    let nonce = bytes::fixed::<NONCE_SIZE>("box nonce", nonce)?;
    let tag = bytes::fixed::<TAG_SIZE>("box tag", tag)?;
    bytes::expect_len("box plaintext", ciphertext.len(), message.len())?;
    let staged = open_detached(&key, &nonce, ciphertext, &tag);
    codec::commit(&dispatch::AEAD_BOX_OPEN_DETACHED_AFTERNM, staged.as_ref(), message)
}
