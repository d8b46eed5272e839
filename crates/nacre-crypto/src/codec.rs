//! Normalization of primitive outcomes into status codes and caller buffers.
//!
//! Every dispatch entry funnels its result through this module: the outcome
//! is mapped onto the operation's declared status convention, and staged
//! output is copied into the caller's destination **only when the operation
//! succeeded**. A failed open or verify therefore leaves its destination
//! untouched; whatever the primitive wrote lives in scratch that is wiped on
//! drop.

use crate::bytes::{self, ByteBuffer};
use crate::dispatch::{OperationDescriptor, OutputLenPolicy, StatusConvention};
use crate::error::Result;

/// The integer a dispatch entry hands back to the embedding runtime.
///
/// Its meaning is declared per operation by the
/// [`StatusConvention`](crate::dispatch::StatusConvention) in the operation's
/// descriptor:
///
/// - `AlwaysZero`: the operation cannot fail; the status is the constant `0`.
/// - `BooleanSuccess`: `1` on success, `0` on failure.
/// - `SignedValidity`: `0` when valid, `-1` when not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status(i32);

impl Status {
    /// Returns the raw integer code.
    pub fn code(self) -> i32 {
        self.0
    }

    /// Interprets this status under the given convention.
    pub fn indicates_success(self, convention: StatusConvention) -> bool {
        match convention {
            StatusConvention::AlwaysZero => self.0 == 0,
            StatusConvention::BooleanSuccess => self.0 == 1,
            StatusConvention::SignedValidity => self.0 == 0,
        }
    }

    fn for_outcome(convention: StatusConvention, ok: bool) -> Self {
        match convention {
            StatusConvention::AlwaysZero => Status(0),
            StatusConvention::BooleanSuccess => Status(if ok { 1 } else { 0 }),
            StatusConvention::SignedValidity => Status(if ok { 0 } else { -1 }),
        }
    }
}

/// Normalizes a status-only outcome (verify-style operations).
pub(crate) fn resolve(desc: &OperationDescriptor, ok: bool) -> Status {
    Status::for_outcome(desc.status, ok)
}

/// Pre-checks a destination against the descriptor's output-length policy.
///
/// Only `Fixed` lengths can be checked here; the other policies are
/// validated by the entry itself, which knows the inputs.
pub(crate) fn require_output_len(desc: &OperationDescriptor, dest: &[u8]) -> Result<()> {
    match desc.output_len {
        OutputLenPolicy::Fixed(expected) => {
            let role = desc.outputs.first().copied().unwrap_or(desc.name);
            bytes::expect_len(role, expected, dest.len())
        }
        _ => Ok(()),
    }
}

/// Commits a single-output outcome.
///
/// `produced` is `Some` when the primitive succeeded; only then is the
/// staged buffer copied into `dest`. On `None` the destination is left
/// untouched and the failure status for the declared convention is
/// returned.
pub(crate) fn commit(
    desc: &OperationDescriptor,
    produced: Option<&ByteBuffer>,
    dest: &mut [u8],
) -> Result<Status> {
    match produced {
        Some(buffer) => {
            buffer.blit_into(dest)?;
            Ok(resolve(desc, true))
        }
        None => Ok(resolve(desc, false)),
    }
}

/// Commits a two-output outcome (detached seal: ciphertext plus tag).
///
/// Both destinations are written on success, neither on failure.
pub(crate) fn commit_detached(
    desc: &OperationDescriptor,
    produced: Option<(&ByteBuffer, &ByteBuffer)>,
    first_dest: &mut [u8],
    second_dest: &mut [u8],
) -> Result<Status> {
    match produced {
        Some((first, second)) => {
            first.blit_into(first_dest)?;
            second.blit_into(second_dest)?;
            Ok(resolve(desc, true))
        }
        None => Ok(resolve(desc, false)),
    }
}
