//! The primitive dispatch table.
//!
//! One [`OperationDescriptor`] per exposed operation: its byte-string roles,
//! how its output length is determined, and which status convention its
//! integer result follows. The codec consults descriptors when normalizing
//! outcomes; [`OPERATIONS`] aggregates the full surface for introspection.

use crate::{aead, ecdsa, hash, kex, mac, sign};

/// How an operation's integer status is to be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusConvention {
    /// The operation cannot fail; the status is the constant `0`.
    AlwaysZero,
    /// `1` on success, `0` on failure (authentication and key agreement).
    BooleanSuccess,
    /// `0` when valid, negative when not (signature and point validity).
    SignedValidity,
}

/// How the length of an operation's primary output is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputLenPolicy {
    /// A constant of the operation.
    Fixed(usize),
    /// The destination's declared length chooses the output length.
    OfDestination,
    /// An explicit length parameter chooses the output length.
    ExplicitParameter,
    /// A function of the input lengths (ciphertext and plaintext sizing).
    DerivedFromInput,
    /// The operation produces no output buffer.
    None,
}

/// Static metadata for one exposed operation.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// Stable dotted name, `family.operation`.
    pub name: &'static str,
    /// Declared inputs, in call order.
    pub inputs: &'static [&'static str],
    /// Declared output destinations, in call order.
    pub outputs: &'static [&'static str],
    /// Output-length policy for the primary output.
    pub output_len: OutputLenPolicy,
    /// Status convention for the returned code.
    pub status: StatusConvention,
}

/// SHA-256 one-shot digest.
pub const HASH_SHA2_256: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-256",
    inputs: &["message"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::Fixed(hash::SHA256_DIGEST_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// SHA-512 one-shot digest.
pub const HASH_SHA2_512: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-512",
    inputs: &["message"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::Fixed(hash::SHA512_DIGEST_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// SHA3-256 one-shot digest.
pub const HASH_SHA3_256: OperationDescriptor = OperationDescriptor {
    name: "hash.sha3-256",
    inputs: &["message"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::Fixed(hash::SHA256_DIGEST_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// SHA3-512 one-shot digest.
pub const HASH_SHA3_512: OperationDescriptor = OperationDescriptor {
    name: "hash.sha3-512",
    inputs: &["message"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::Fixed(hash::SHA512_DIGEST_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// BLAKE2b digest with an explicit length parameter and optional key.
pub const HASH_BLAKE2B: OperationDescriptor = OperationDescriptor {
    name: "hash.blake2b",
    inputs: &["key", "message", "digest length"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::ExplicitParameter,
    status: StatusConvention::AlwaysZero,
};

/// Streaming SHA-256 state initialization. Unimplemented.
pub const HASH_SHA2_256_INIT: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-256-init",
    inputs: &[],
    outputs: &["state"],
    output_len: OutputLenPolicy::OfDestination,
    status: StatusConvention::AlwaysZero,
};

/// Streaming SHA-256 block update. Unimplemented.
pub const HASH_SHA2_256_UPDATE: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-256-update",
    inputs: &["block"],
    outputs: &["state"],
    output_len: OutputLenPolicy::OfDestination,
    status: StatusConvention::AlwaysZero,
};

/// Streaming SHA-256 finalization. Unimplemented.
pub const HASH_SHA2_256_FINISH: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-256-finish",
    inputs: &["state"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::Fixed(hash::SHA256_DIGEST_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// Streaming SHA-512 state initialization. Unimplemented.
pub const HASH_SHA2_512_INIT: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-512-init",
    inputs: &[],
    outputs: &["state"],
    output_len: OutputLenPolicy::OfDestination,
    status: StatusConvention::AlwaysZero,
};

/// Streaming SHA-512 block update. Unimplemented.
pub const HASH_SHA2_512_UPDATE: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-512-update",
    inputs: &["block"],
    outputs: &["state"],
    output_len: OutputLenPolicy::OfDestination,
    status: StatusConvention::AlwaysZero,
};

/// Streaming SHA-512 finalization. Unimplemented.
pub const HASH_SHA2_512_FINISH: OperationDescriptor = OperationDescriptor {
    name: "hash.sha2-512-finish",
    inputs: &["state"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::Fixed(hash::SHA512_DIGEST_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// Generic keccak sponge; output length is the destination's length.
pub const XOF_KECCAK: OperationDescriptor = OperationDescriptor {
    name: "xof.keccak",
    inputs: &["rate", "capacity", "suffix", "message"],
    outputs: &["digest"],
    output_len: OutputLenPolicy::OfDestination,
    status: StatusConvention::AlwaysZero,
};

/// HMAC-SHA-256.
pub const MAC_HMAC_SHA2_256: OperationDescriptor = OperationDescriptor {
    name: "mac.hmac-sha2-256",
    inputs: &["key", "message"],
    outputs: &["mac"],
    output_len: OutputLenPolicy::Fixed(mac::SHA256_MAC_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// HMAC-SHA-512.
pub const MAC_HMAC_SHA2_512: OperationDescriptor = OperationDescriptor {
    name: "mac.hmac-sha2-512",
    inputs: &["key", "message"],
    outputs: &["mac"],
    output_len: OutputLenPolicy::Fixed(mac::SHA512_MAC_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// Curve25519 base-point scalar multiplication (secret to public).
pub const KEX_SCALARMULT_BASE: OperationDescriptor = OperationDescriptor {
    name: "kex.scalarmult-base",
    inputs: &["secret key"],
    outputs: &["public key"],
    output_len: OutputLenPolicy::Fixed(kex::PUBLIC_KEY_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// Secretbox combined seal.
pub const AEAD_SECRETBOX_EASY: OperationDescriptor = OperationDescriptor {
    name: "aead.secretbox-easy",
    inputs: &["message", "nonce", "key"],
    outputs: &["ciphertext"],
    output_len: OutputLenPolicy::DerivedFromInput,
    status: StatusConvention::BooleanSuccess,
};

/// Secretbox combined open.
pub const AEAD_SECRETBOX_OPEN_EASY: OperationDescriptor = OperationDescriptor {
    name: "aead.secretbox-open-easy",
    inputs: &["ciphertext", "nonce", "key"],
    outputs: &["plaintext"],
    output_len: OutputLenPolicy::DerivedFromInput,
    status: StatusConvention::BooleanSuccess,
};

/// Box key agreement: precomputes the shared key.
pub const AEAD_BOX_BEFORENM: OperationDescriptor = OperationDescriptor {
    name: "aead.box-beforenm",
    inputs: &["public key", "secret key"],
    outputs: &["shared key"],
    output_len: OutputLenPolicy::Fixed(aead::KEY_SIZE),
    status: StatusConvention::BooleanSuccess,
};

/// Box combined seal with a precomputed key.
pub const AEAD_BOX_EASY_AFTERNM: OperationDescriptor = OperationDescriptor {
    name: "aead.box-easy-afternm",
    inputs: &["message", "nonce", "shared key"],
    outputs: &["ciphertext"],
    output_len: OutputLenPolicy::DerivedFromInput,
    status: StatusConvention::BooleanSuccess,
};

/// Box combined open with a precomputed key.
pub const AEAD_BOX_OPEN_EASY_AFTERNM: OperationDescriptor = OperationDescriptor {
    name: "aead.box-open-easy-afternm",
    inputs: &["ciphertext", "nonce", "shared key"],
    outputs: &["plaintext"],
    output_len: OutputLenPolicy::DerivedFromInput,
    status: StatusConvention::BooleanSuccess,
};

/// Box detached seal: ciphertext and tag in separate destinations.
pub const AEAD_BOX_DETACHED_AFTERNM: OperationDescriptor = OperationDescriptor {
    name: "aead.box-detached-afternm",
    inputs: &["message", "nonce", "shared key"],
    outputs: &["ciphertext", "tag"],
    output_len: OutputLenPolicy::DerivedFromInput,
    status: StatusConvention::BooleanSuccess,
};

/// Box detached open.
pub const AEAD_BOX_OPEN_DETACHED_AFTERNM: OperationDescriptor = OperationDescriptor {
    name: "aead.box-open-detached-afternm",
    inputs: &["ciphertext", "tag", "nonce", "shared key"],
    outputs: &["plaintext"],
    output_len: OutputLenPolicy::DerivedFromInput,
    status: StatusConvention::BooleanSuccess,
};

/// Ed25519 public-key derivation.
pub const SIGN_SECRET_TO_PUBLIC: OperationDescriptor = OperationDescriptor {
    name: "sign.secret-to-public",
    inputs: &["secret key"],
    outputs: &["public key"],
    output_len: OutputLenPolicy::Fixed(sign::PUBLIC_KEY_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// Ed25519 signing.
pub const SIGN_SIGN: OperationDescriptor = OperationDescriptor {
    name: "sign.sign",
    inputs: &["secret key", "message"],
    outputs: &["signature"],
    output_len: OutputLenPolicy::Fixed(sign::SIGNATURE_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// Ed25519 verification.
pub const SIGN_VERIFY: OperationDescriptor = OperationDescriptor {
    name: "sign.verify",
    inputs: &["public key", "message", "signature"],
    outputs: &[],
    output_len: OutputLenPolicy::None,
    status: StatusConvention::SignedValidity,
};

/// P-256 ECDSA verification over a caller-supplied digest.
pub const ECDSA_VERIFY_PREHASH: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.verify-prehash",
    inputs: &["public point", "digest", "r", "s"],
    outputs: &[],
    output_len: OutputLenPolicy::None,
    status: StatusConvention::SignedValidity,
};

/// P-256 ECDSA signing over a caller-supplied digest. Unimplemented.
pub const ECDSA_SIGN_PREHASH: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.sign-prehash",
    inputs: &["secret scalar", "digest"],
    outputs: &["r", "s"],
    output_len: OutputLenPolicy::Fixed(ecdsa::SIGNATURE_COMPONENT_SIZE),
    status: StatusConvention::SignedValidity,
};

/// P-256 ECDH initiation (secret scalar to public point).
pub const ECDSA_DH_INITIATE: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.dh-initiate",
    inputs: &["secret scalar"],
    outputs: &["public point"],
    output_len: OutputLenPolicy::Fixed(ecdsa::POINT_SIZE),
    status: StatusConvention::SignedValidity,
};

/// P-256 scalar range check (nonzero and below the group order).
pub const ECDSA_IS_VALID_SCALAR: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.is-valid-scalar",
    inputs: &["scalar"],
    outputs: &[],
    output_len: OutputLenPolicy::None,
    status: StatusConvention::SignedValidity,
};

/// P-256 point-on-curve check.
pub const ECDSA_IS_VALID_POINT: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.is-valid-point",
    inputs: &["point"],
    outputs: &[],
    output_len: OutputLenPolicy::None,
    status: StatusConvention::SignedValidity,
};

/// P-256 point compression to the 33-byte SEC1 form.
pub const ECDSA_COMPRESS: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.compress",
    inputs: &["point"],
    outputs: &["compressed point"],
    output_len: OutputLenPolicy::Fixed(ecdsa::COMPRESSED_POINT_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// P-256 point encoding to the 65-byte tagged SEC1 form.
pub const ECDSA_ENCODE_UNCOMPRESSED: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.encode-uncompressed",
    inputs: &["point"],
    outputs: &["uncompressed point"],
    output_len: OutputLenPolicy::Fixed(ecdsa::UNCOMPRESSED_POINT_SIZE),
    status: StatusConvention::AlwaysZero,
};

/// P-256 point decompression from the 33-byte SEC1 form.
pub const ECDSA_DECOMPRESS: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.decompress",
    inputs: &["compressed point"],
    outputs: &["point"],
    output_len: OutputLenPolicy::Fixed(ecdsa::POINT_SIZE),
    status: StatusConvention::SignedValidity,
};

/// P-256 point decoding from the 65-byte tagged SEC1 form.
pub const ECDSA_DECODE_UNCOMPRESSED: OperationDescriptor = OperationDescriptor {
    name: "ecdsa.decode-uncompressed",
    inputs: &["uncompressed point"],
    outputs: &["point"],
    output_len: OutputLenPolicy::Fixed(ecdsa::POINT_SIZE),
    status: StatusConvention::SignedValidity,
};

/// Every operation this layer exposes, for introspection.
pub const OPERATIONS: &[&OperationDescriptor] = &[
    &HASH_SHA2_256,
    &HASH_SHA2_512,
    &HASH_SHA3_256,
    &HASH_SHA3_512,
    &HASH_BLAKE2B,
    &HASH_SHA2_256_INIT,
    &HASH_SHA2_256_UPDATE,
    &HASH_SHA2_256_FINISH,
    &HASH_SHA2_512_INIT,
    &HASH_SHA2_512_UPDATE,
    &HASH_SHA2_512_FINISH,
    &XOF_KECCAK,
    &MAC_HMAC_SHA2_256,
    &MAC_HMAC_SHA2_512,
    &KEX_SCALARMULT_BASE,
    &AEAD_SECRETBOX_EASY,
    &AEAD_SECRETBOX_OPEN_EASY,
    &AEAD_BOX_BEFORENM,
    &AEAD_BOX_EASY_AFTERNM,
    &AEAD_BOX_OPEN_EASY_AFTERNM,
    &AEAD_BOX_DETACHED_AFTERNM,
    &AEAD_BOX_OPEN_DETACHED_AFTERNM,
    &SIGN_SECRET_TO_PUBLIC,
    &SIGN_SIGN,
    &SIGN_VERIFY,
    &ECDSA_VERIFY_PREHASH,
    &ECDSA_SIGN_PREHASH,
    &ECDSA_DH_INITIATE,
    &ECDSA_IS_VALID_SCALAR,
    &ECDSA_IS_VALID_POINT,
    &ECDSA_COMPRESS,
    &ECDSA_ENCODE_UNCOMPRESSED,
    &ECDSA_DECOMPRESS,
    &ECDSA_DECODE_UNCOMPRESSED,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_operation_names_are_unique() {
        let names: HashSet<&str> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn test_operation_names_are_dotted() {
        for op in OPERATIONS {
            assert!(op.name.contains('.'), "{} has no family prefix", op.name);
        }
    }

    #[test]
    fn test_fixed_outputs_have_a_destination() {
        for op in OPERATIONS {
            if matches!(op.output_len, OutputLenPolicy::Fixed(_)) {
                assert!(
                    !op.outputs.is_empty(),
                    "{} declares a fixed length but no output",
                    op.name
                );
            }
        }
    }

    #[test]
    fn test_status_only_operations_declare_no_outputs() {
        for op in OPERATIONS {
            if matches!(op.output_len, OutputLenPolicy::None) {
                assert!(op.outputs.is_empty(), "{}", op.name);
            }
        }
    }
}
