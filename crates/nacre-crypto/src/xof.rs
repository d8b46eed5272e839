//! The generic keccak sponge entry.
//!
//! The embedding runtime addresses the sponge by (rate, capacity, suffix)
//! and sizes the output by the destination buffer alone; callers pre-size
//! the destination before calling. The external library exposes the
//! standard parameterizations, so the entry maps onto them and rejects
//! anything else rather than produce a wrong digest.

use crate::bytes::{self, ByteBuffer};
use crate::codec::{self, Status};
use crate::dispatch;
use crate::error::{DispatchError, Result};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{
    Digest, Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512,
    Shake128, Shake256,
};

/// Domain-separation suffix of the SHAKE extendable-output functions.
pub const SUFFIX_SHAKE: u8 = 0x1f;

/// Domain-separation suffix of the FIPS 202 SHA-3 functions.
pub const SUFFIX_SHA3: u8 = 0x06;

/// Domain-separation suffix of the pre-standard keccak functions.
pub const SUFFIX_KECCAK: u8 = 0x01;

/// Runs the keccak sponge selected by `(rate, capacity, suffix)` over
/// `message`, writing `digest.len()` bytes of output.
///
/// For the extendable-output parameterizations (SHAKE-128/256) any
/// destination length is honored, including zero. For the fixed-width
/// parameterizations (SHA-3 and pre-standard keccak) the destination must
/// be exactly the digest size.
///
/// # Errors
///
/// Returns `DispatchError::UnsupportedParameters` for a parameter
/// combination the external library does not expose, and
/// `DispatchError::BufferSizeMismatch` when a fixed-width destination has
/// the wrong length.
pub fn keccak(rate: u32, capacity: u32, suffix: u8, message: &[u8], digest: &mut [u8]) -> Result<Status> {
    let staged = match (rate, capacity, suffix) {
        (1344, 256, SUFFIX_SHAKE) => xof_read::<Shake128>(message, digest.len()),
        (1088, 512, SUFFIX_SHAKE) => xof_read::<Shake256>(message, digest.len()),
        (1152, 448, SUFFIX_SHA3) => one_shot::<Sha3_224>(message, digest)?,
        (1088, 512, SUFFIX_SHA3) => one_shot::<Sha3_256>(message, digest)?,
        (832, 768, SUFFIX_SHA3) => one_shot::<Sha3_384>(message, digest)?,
        (576, 1024, SUFFIX_SHA3) => one_shot::<Sha3_512>(message, digest)?,
        (1152, 448, SUFFIX_KECCAK) => one_shot::<Keccak224>(message, digest)?,
        (1088, 512, SUFFIX_KECCAK) => one_shot::<Keccak256>(message, digest)?,
        (832, 768, SUFFIX_KECCAK) => one_shot::<Keccak384>(message, digest)?,
        (576, 1024, SUFFIX_KECCAK) => one_shot::<Keccak512>(message, digest)?,
        _ => {
            tracing::warn!(
                rate,
                capacity,
                "rejecting keccak parameterization (suffix {suffix:#04x})"
            );
            return Err(DispatchError::UnsupportedParameters {
                op: "xof.keccak",
                detail: format!("rate={rate} capacity={capacity} suffix={suffix:#04x}"),
            });
        }
    };
    codec::commit(&dispatch::XOF_KECCAK, Some(&staged), digest)
}

fn xof_read<X>(message: &[u8], len: usize) -> ByteBuffer
where
    X: Default + Update + ExtendableOutput,
{
    let mut sponge = X::default();
    sponge.update(message);
    let mut reader = sponge.finalize_xof();
    let mut out = ByteBuffer::zeroed(len);
    reader.read(out.as_mut_slice());
    out
}

fn one_shot<D: Digest>(message: &[u8], digest: &[u8]) -> Result<ByteBuffer> {
    bytes::expect_len("keccak digest", <D as Digest>::output_size(), digest.len())?;
    Ok(ByteBuffer::from_slice(&D::digest(message)))
}
