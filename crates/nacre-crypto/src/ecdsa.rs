//! P-256 (secp256r1) operations: prehash ECDSA verification, ECDH
//! initiation, scalar and point validity checks, and SEC1 point
//! (de)compression.
//!
//! Points cross the boundary as raw 64-byte `x || y` coordinates; the SEC1
//! tag bytes exist only inside these entries. Signing over a caller-supplied
//! digest is intentionally unimplemented and reports
//! [`DispatchError::NotImplemented`].

use crate::bytes::{self, ByteBuffer};
use crate::codec::{self, Status};
use crate::dispatch;
use crate::error::{DispatchError, Result};
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature, VerifyingKey};
use p256::elliptic_curve::generic_array::GenericArray;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{EncodedPoint, FieldBytes, NonZeroScalar, PublicKey, SecretKey};

/// Size of a P-256 scalar in bytes.
pub const SCALAR_SIZE: usize = 32;

/// Size of a raw `x || y` point in bytes.
pub const POINT_SIZE: usize = 64;

/// Size of a SEC1 compressed point in bytes.
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of a SEC1 tagged uncompressed point in bytes.
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

/// Size of each ECDSA signature component (`r` or `s`) in bytes.
pub const SIGNATURE_COMPONENT_SIZE: usize = 32;

fn decode_point(raw: &[u8; POINT_SIZE]) -> Option<PublicKey> {
    let encoded = EncodedPoint::from_untagged_bytes(GenericArray::from_slice(raw));
    Option::from(PublicKey::from_encoded_point(&encoded))
}

fn untagged(public: &PublicKey) -> ByteBuffer {
    let encoded = public.to_encoded_point(false);
    ByteBuffer::from_slice(&encoded.as_bytes()[1..])
}

/// Verifies an ECDSA signature `(r, s)` over a caller-supplied message
/// digest.
///
/// The status is `0` for a valid signature and `-1` otherwise, including
/// for a public point that is not on the curve or signature components
/// outside the scalar range.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized point or
/// signature component.
pub fn verify_prehash(public_point: &[u8], digest: &[u8], r: &[u8], s: &[u8]) -> Result<Status> {
    let point = bytes::fixed::<POINT_SIZE>("p256 public point", public_point)?;
    let r = bytes::fixed::<SIGNATURE_COMPONENT_SIZE>("p256 signature r", r)?;
    let s = bytes::fixed::<SIGNATURE_COMPONENT_SIZE>("p256 signature s", s)?;
    let valid = decode_point(&point)
        .and_then(|public| {
            let signature =
                Signature::from_scalars(FieldBytes::from(r), FieldBytes::from(s)).ok()?;
            VerifyingKey::from(&public).verify_prehash(digest, &signature).ok()
        })
        .is_some();
    Ok(codec::resolve(&dispatch::ECDSA_VERIFY_PREHASH, valid))
}

/// ECDSA signing over a caller-supplied digest. Intentionally
/// unimplemented.
///
/// # Errors
///
/// Always returns `DispatchError::NotImplemented`.
pub fn sign_prehash(
    _secret_scalar: &[u8],
    _digest: &[u8],
    _r: &mut [u8],
    _s: &mut [u8],
) -> Result<Status> {
    Err(DispatchError::NotImplemented("ecdsa.sign-prehash"))
}

/// Initiates ECDH: multiplies the base point by `secret_scalar`, writing
/// the raw public point into `public_point`.
///
/// The status is `0` on success and `-1` for a scalar outside the valid
/// range (zero or at least the group order); the destination is left
/// untouched in that case.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized scalar or
/// destination.
pub fn dh_initiate(secret_scalar: &[u8], public_point: &mut [u8]) -> Result<Status> {
    let scalar = bytes::fixed::<SCALAR_SIZE>("p256 secret scalar", secret_scalar)?;
    codec::require_output_len(&dispatch::ECDSA_DH_INITIATE, public_point)?;
    let staged = SecretKey::from_bytes(&FieldBytes::from(scalar))
        .ok()
        .map(|secret| untagged(&secret.public_key()));
    codec::commit(&dispatch::ECDSA_DH_INITIATE, staged.as_ref(), public_point)
}

/// Checks that `scalar` is nonzero and below the group order.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized scalar.
pub fn is_valid_scalar(scalar: &[u8]) -> Result<Status> {
    let raw = bytes::fixed::<SCALAR_SIZE>("p256 scalar", scalar)?;
    let valid =
        Option::<NonZeroScalar>::from(NonZeroScalar::from_repr(FieldBytes::from(raw))).is_some();
    Ok(codec::resolve(&dispatch::ECDSA_IS_VALID_SCALAR, valid))
}

/// Checks that a raw `x || y` point lies on the curve.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized point.
pub fn is_valid_point(point: &[u8]) -> Result<Status> {
    let raw = bytes::fixed::<POINT_SIZE>("p256 point", point)?;
    Ok(codec::resolve(
        &dispatch::ECDSA_IS_VALID_POINT,
        decode_point(&raw).is_some(),
    ))
}

/// Re-encodes a raw `x || y` point into the 33-byte SEC1 compressed form.
///
/// Pure re-encoding: the point is not checked against the curve equation.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized point or
/// destination.
pub fn compress(point: &[u8], compressed: &mut [u8]) -> Result<Status> {
    let raw = bytes::fixed::<POINT_SIZE>("p256 point", point)?;
    codec::require_output_len(&dispatch::ECDSA_COMPRESS, compressed)?;
    let encoded = EncodedPoint::from_untagged_bytes(GenericArray::from_slice(&raw));
    let staged = ByteBuffer::from_slice(encoded.compress().as_bytes());
    codec::commit(&dispatch::ECDSA_COMPRESS, Some(&staged), compressed)
}

/// Re-encodes a raw `x || y` point into the 65-byte tagged SEC1
/// uncompressed form.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized point or
/// destination.
pub fn encode_uncompressed(point: &[u8], uncompressed: &mut [u8]) -> Result<Status> {
    let raw = bytes::fixed::<POINT_SIZE>("p256 point", point)?;
    codec::require_output_len(&dispatch::ECDSA_ENCODE_UNCOMPRESSED, uncompressed)?;
    let encoded = EncodedPoint::from_untagged_bytes(GenericArray::from_slice(&raw));
    let staged = ByteBuffer::from_slice(encoded.as_bytes());
    codec::commit(&dispatch::ECDSA_ENCODE_UNCOMPRESSED, Some(&staged), uncompressed)
}

/// Decompresses a 33-byte SEC1 compressed point into raw `x || y`.
///
/// The status is `0` on success and `-1` for an encoding that is not a
/// valid curve point; the destination is left untouched in that case.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized input or
/// destination.
pub fn decompress(compressed: &[u8], point: &mut [u8]) -> Result<Status> {
    let raw = bytes::fixed::<COMPRESSED_POINT_SIZE>("p256 compressed point", compressed)?;
    codec::require_output_len(&dispatch::ECDSA_DECOMPRESS, point)?;
    let staged = EncodedPoint::from_bytes(&raw[..])
        .ok()
        .and_then(|encoded| Option::<PublicKey>::from(PublicKey::from_encoded_point(&encoded)))
        .map(|public| untagged(&public));
    codec::commit(&dispatch::ECDSA_DECOMPRESS, staged.as_ref(), point)
}

/// Decodes a 65-byte tagged SEC1 uncompressed point into raw `x || y`,
/// checking it against the curve equation.
///
/// # Errors
///
/// Returns `DispatchError::BufferSizeMismatch` for a wrong-sized input or
/// destination.
pub fn decode_uncompressed(uncompressed: &[u8], point: &mut [u8]) -> Result<Status> {
    let raw = bytes::fixed::<UNCOMPRESSED_POINT_SIZE>("p256 uncompressed point", uncompressed)?;
    codec::require_output_len(&dispatch::ECDSA_DECODE_UNCOMPRESSED, point)?;
    let staged = EncodedPoint::from_bytes(&raw[..])
        .ok()
        .and_then(|encoded| Option::<PublicKey>::from(PublicKey::from_encoded_point(&encoded)))
        .map(|public| untagged(&public));
    codec::commit(&dispatch::ECDSA_DECODE_UNCOMPRESSED, staged.as_ref(), point)
}
