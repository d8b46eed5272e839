//! Byte-marshalling and primitive-dispatch boundary for nacre.
//!
//! This crate sits between an embedding runtime that speaks immutable byte
//! strings and the RustCrypto / dalek primitive crates that do the actual
//! cryptography. It owns exactly the boundary concerns: copying decode of
//! inputs, exact-length copy-out of results, per-operation status-code
//! conventions, and withholding output when an operation fails. No hash,
//! AEAD or curve math is implemented here.
//!
//! # Modules
//!
//! - `bytes`: byte-string/buffer conversion, exact-length blits, debug hex
//! - `random`: strategy-selected secure random byte filler
//! - `dispatch`: per-operation descriptors and the aggregated table
//! - `codec`: status normalization and success-gated output commits
//! - `hash`: SHA-2, SHA-3 and BLAKE2b digests
//! - `xof`: the generic keccak sponge entry
//! - `mac`: HMAC over SHA-2
//! - `aead`: NaCl secretbox and box seal/open
//! - `kex`: Curve25519 key derivation
//! - `sign`: Ed25519 signatures
//! - `ecdsa`: P-256 verification, ECDH and point codecs
//! - `error`: the dispatch error taxonomy

#![deny(missing_docs)]
#![deny(clippy::all)]

pub mod aead;
pub mod bytes;
pub mod codec;
pub mod dispatch;
pub mod ecdsa;
pub mod error;
pub mod hash;
pub mod kex;
pub mod mac;
pub mod random;
pub mod sign;
pub mod xof;
