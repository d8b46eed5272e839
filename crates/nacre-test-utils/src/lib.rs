//! Shared test utilities for nacre.
//!
//! This crate provides property test generators for use across the nacre
//! workspace test suites.

#![allow(missing_docs)]

pub mod generators {
    //! Proptest strategies for the byte-oriented inputs the dispatch layer
    //! consumes.

    use proptest::prelude::*;

    /// Arbitrary byte strings up to `max` bytes, including the empty string.
    pub fn byte_vec(max: usize) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 0..max)
    }

    /// Arbitrary non-empty byte strings up to `max` bytes.
    pub fn nonempty_byte_vec(max: usize) -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 1..max)
    }

    /// Arbitrary 32-byte keys (secretbox keys, curve secrets, seeds).
    pub fn key32() -> impl Strategy<Value = [u8; 32]> {
        any::<[u8; 32]>()
    }

    /// Arbitrary 24-byte secretbox/box nonces.
    pub fn nonce24() -> impl Strategy<Value = [u8; 24]> {
        any::<[u8; 24]>()
    }
}
