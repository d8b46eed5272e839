//! Error types for the marshalling and dispatch boundary.
//!
//! Only local precondition and environment failures are errors. Expected
//! cryptographic outcomes (a bad authentication tag, an invalid signature,
//! a point that is not on the curve) travel through each operation's
//! [`Status`](crate::codec::Status) code instead.

use thiserror::Error;

/// Errors that can occur while marshalling buffers or dispatching an
/// operation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A buffer's declared length does not match the length the operation
    /// reads or writes for that role. Raised before any byte is copied.
    #[error("buffer size mismatch for {role}: expected {expected}, got {actual}")]
    BufferSizeMismatch {
        /// Which declared input or output the mismatch concerns.
        role: &'static str,
        /// Length the operation requires.
        expected: usize,
        /// Length the caller supplied.
        actual: usize,
    },

    /// Odd-length or non-hex-digit input to the debug hex codec.
    #[error("malformed hex input: {0}")]
    MalformedHex(#[from] hex::FromHexError),

    /// No secure random facility is available, or the facility failed.
    #[error("randomness source unavailable: {0}")]
    RandomUnavailable(String),

    /// The operation is intentionally unimplemented. Recoverable: callers
    /// get this value back through the normal result channel.
    #[error("operation not implemented: {0}")]
    NotImplemented(&'static str),

    /// A parameter combination the external primitives library does not
    /// expose (for example a non-standard sponge parameterization).
    #[error("unsupported parameters for {op}: {detail}")]
    UnsupportedParameters {
        /// The operation that rejected its parameters.
        op: &'static str,
        /// What was wrong with them.
        detail: String,
    },
}

/// Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
