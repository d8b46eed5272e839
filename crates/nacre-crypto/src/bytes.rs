//! Conversion between caller-side byte strings and this layer's fixed-length
//! scratch buffers.
//!
//! Inputs cross the boundary as borrowed slices and are decoded by copying
//! into either a [`ByteBuffer`] or a fixed-size array ([`fixed`]). Outputs are
//! staged in a [`ByteBuffer`] and copied into the caller's destination with
//! [`ByteBuffer::blit_into`], which rejects any length mismatch instead of
//! truncating or overrunning. Scratch buffers are wiped when dropped, so
//! staged plaintext or keying material never outlives the call that produced
//! it.

use crate::error::{DispatchError, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A fixed-capacity mutable byte buffer, zeroized on drop.
///
/// Buffers are created per call, never resized, and discarded when the call
/// returns. `Debug` deliberately prints only the length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ByteBuffer {
    data: Box<[u8]>,
}

impl ByteBuffer {
    /// Creates a zero-filled buffer of exactly `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len].into_boxed_slice(),
        }
    }

    /// Creates a buffer holding a copy of `src`, sized to its exact length.
    ///
    /// This is the decode direction of the boundary: the caller's immutable
    /// byte string becomes a mutable buffer the primitive crates can work on.
    /// Never fails.
    pub fn from_slice(src: &[u8]) -> Self {
        Self {
            data: src.to_vec().into_boxed_slice(),
        }
    }

    /// Creates a buffer that takes ownership of `src` without copying.
    pub fn from_vec(src: Vec<u8>) -> Self {
        Self {
            data: src.into_boxed_slice(),
        }
    }

    /// Returns the buffer's fixed length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer has zero length.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the buffer contents as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the buffer contents as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Copies every byte of this buffer into `dest`.
    ///
    /// The copy is all-or-nothing: if `dest` is not exactly the same length
    /// as the buffer, nothing is written and `BufferSizeMismatch` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::BufferSizeMismatch` if the lengths differ.
    pub fn blit_into(&self, dest: &mut [u8]) -> Result<()> {
        expect_len("blit destination", self.data.len(), dest.len())?;
        dest.copy_from_slice(&self.data);
        Ok(())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Contents may be keying material; show the length only.
        f.debug_struct("ByteBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}

/// Encodes `data` as a lowercase hex string.
///
/// # Examples
///
/// ```
/// use nacre_crypto::bytes::to_hex;
///
/// assert_eq!(to_hex(&[0x00, 0xff]), "00ff");
/// assert_eq!(to_hex(&[]), "");
/// ```
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decodes a hex string into a buffer.
///
/// The empty string decodes to a zero-length buffer.
///
/// # Errors
///
/// Returns `DispatchError::MalformedHex` for odd-length input or any
/// non-hex-digit character.
///
/// # Examples
///
/// ```
/// use nacre_crypto::bytes::{from_hex, to_hex};
///
/// let buf = from_hex("deadbeef").unwrap();
/// assert_eq!(to_hex(buf.as_slice()), "deadbeef");
/// ```
pub fn from_hex(text: &str) -> Result<ByteBuffer> {
    Ok(ByteBuffer::from_vec(hex::decode(text)?))
}

/// Length-checked copying decode of an input into a fixed-size array.
///
/// Keys, nonces, points and tags have exact declared sizes; anything else is
/// a caller contract violation reported before the primitive is invoked.
pub(crate) fn fixed<const N: usize>(role: &'static str, src: &[u8]) -> Result<[u8; N]> {
    expect_len(role, N, src.len())?;
    let mut out = [0u8; N];
    out.copy_from_slice(src);
    Ok(out)
}

/// Checks a declared length against an actual one.
pub(crate) fn expect_len(role: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(DispatchError::BufferSizeMismatch {
            role,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_copies() {
        let src = [1u8, 2, 3];
        let buf = ByteBuffer::from_slice(&src);
        assert_eq!(buf.as_slice(), &src);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_zeroed() {
        let buf = ByteBuffer::zeroed(8);
        assert_eq!(buf.as_slice(), &[0u8; 8]);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = ByteBuffer::zeroed(0);
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_blit_exact_length() {
        let buf = ByteBuffer::from_slice(&[9u8, 8, 7]);
        let mut dest = [0u8; 3];
        buf.blit_into(&mut dest).unwrap();
        assert_eq!(dest, [9, 8, 7]);
    }

    #[test]
    fn test_blit_rejects_short_destination() {
        let buf = ByteBuffer::from_slice(&[1u8; 4]);
        let mut dest = [0xaau8; 3];
        let result = buf.blit_into(&mut dest);
        assert!(matches!(
            result,
            Err(DispatchError::BufferSizeMismatch {
                expected: 4,
                actual: 3,
                ..
            })
        ));
        // Nothing was written.
        assert_eq!(dest, [0xaa; 3]);
    }

    #[test]
    fn test_blit_rejects_long_destination() {
        let buf = ByteBuffer::from_slice(&[1u8; 4]);
        let mut dest = [0xaau8; 5];
        assert!(buf.blit_into(&mut dest).is_err());
        assert_eq!(dest, [0xaa; 5]);
    }

    #[test]
    fn test_hex_round_trip() {
        let data = [0x00u8, 0x01, 0xab, 0xff];
        let text = to_hex(&data);
        assert_eq!(text, "0001abff");
        let decoded = from_hex(&text).unwrap();
        assert_eq!(decoded.as_slice(), &data);
    }

    #[test]
    fn test_hex_empty_string() {
        let buf = from_hex("").unwrap();
        assert!(buf.is_empty());
        assert_eq!(to_hex(buf.as_slice()), "");
    }

    #[test]
    fn test_hex_odd_length() {
        let result = from_hex("abc");
        assert!(matches!(result, Err(DispatchError::MalformedHex(_))));
    }

    #[test]
    fn test_hex_bad_digit() {
        let result = from_hex("zz");
        assert!(matches!(result, Err(DispatchError::MalformedHex(_))));
    }

    #[test]
    fn test_fixed_decode() {
        let key: [u8; 4] = fixed("test key", &[1, 2, 3, 4]).unwrap();
        assert_eq!(key, [1, 2, 3, 4]);
    }

    #[test]
    fn test_fixed_decode_wrong_length() {
        let result: Result<[u8; 4]> = fixed("test key", &[1, 2, 3]);
        assert!(matches!(
            result,
            Err(DispatchError::BufferSizeMismatch {
                role: "test key",
                expected: 4,
                actual: 3,
            })
        ));
    }

    #[test]
    fn test_debug_hides_contents() {
        let buf = ByteBuffer::from_slice(&[0x42u8; 16]);
        let text = format!("{buf:?}");
        assert!(text.contains("16"));
        assert!(!text.contains("42"));
    }
}
