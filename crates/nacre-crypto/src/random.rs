//! Secure random byte generation.
//!
//! A [`RandomSource`] is constructed explicitly by the embedder and passed to
//! whatever needs randomness; there is no process-wide singleton. The
//! strategy (a direct OS draw, or a quota-limited platform facility that
//! must be called repeatedly for large requests) is fixed at construction
//! and never re-detected per call.

use crate::bytes;
use crate::error::{DispatchError, Result};

/// Largest number of bytes a quota-limited platform facility yields per
/// underlying call (the `Crypto.getRandomValues` cap).
pub const PLATFORM_QUOTA: usize = 65536;

/// How a [`RandomSource`] obtains its bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Direct operating-system entropy; any length in a single draw.
    Os,
    /// A platform facility that caps a single request, so larger requests
    /// are chunked into repeated draws against the same destination region.
    Chunked {
        /// Maximum bytes per underlying call.
        quota: usize,
    },
}

/// A handle on a secure random byte source.
#[derive(Clone, Debug)]
pub struct RandomSource {
    strategy: Strategy,
}

impl RandomSource {
    /// Selects a strategy for the current environment.
    ///
    /// On wasm targets the quota-limited platform facility is used; anywhere
    /// else the operating system source is drawn from directly. The decision
    /// is made once, here.
    pub fn detect() -> Self {
        let strategy = if cfg!(target_arch = "wasm32") {
            Strategy::Chunked {
                quota: PLATFORM_QUOTA,
            }
        } else {
            Strategy::Os
        };
        tracing::debug!(?strategy, "selected randomness strategy");
        Self { strategy }
    }

    /// Creates a source with an explicit strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// Returns the strategy this source was constructed with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Fills the first `n` bytes of `dest` with secure random bytes.
    ///
    /// The requested length is honored exactly: no more and no fewer than
    /// `n` bytes are written, regardless of strategy.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::BufferSizeMismatch` if `dest` is shorter than
    /// `n`, and `DispatchError::RandomUnavailable` if the underlying
    /// facility fails or cannot make progress.
    pub fn fill(&self, dest: &mut [u8], n: usize) -> Result<()> {
        let Some(region) = dest.get_mut(..n) else {
            return Err(DispatchError::BufferSizeMismatch {
                role: "random destination",
                expected: n,
                actual: dest.len(),
            });
        };
        match self.strategy {
            Strategy::Os => draw(region),
            Strategy::Chunked { quota } => {
                if quota == 0 {
                    return Err(DispatchError::RandomUnavailable(
                        "platform facility reports a zero quota".to_string(),
                    ));
                }
                for chunk in region.chunks_mut(quota) {
                    draw(chunk)?;
                }
                Ok(())
            }
        }
    }

    /// Generates a fixed-size array of random bytes.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::RandomUnavailable` if the underlying facility
    /// fails.
    pub fn generate<const N: usize>(&self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        self.fill(&mut out, N)?;
        Ok(out)
    }

    /// Fills all of `dest` with secure random bytes.
    ///
    /// Convenience wrapper over [`fill`](Self::fill) with `n = dest.len()`.
    pub fn fill_all(&self, dest: &mut [u8]) -> Result<()> {
        self.fill(dest, dest.len())
    }
}

fn draw(dest: &mut [u8]) -> Result<()> {
    getrandom::getrandom(dest).map_err(|e| DispatchError::RandomUnavailable(e.to_string()))
}

/// Dispatch entry: fills the caller's destination with `n` random bytes.
///
/// Thin adapter over [`RandomSource::fill`] that additionally insists the
/// destination is exactly `n` bytes, matching the boundary contract that a
/// destination's declared length is the length written.
pub fn random_bytes(source: &RandomSource, dest: &mut [u8], n: usize) -> Result<()> {
    bytes::expect_len("random destination", n, dest.len())?;
    source.fill(dest, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_exact_length() {
        let source = RandomSource::detect();
        let mut buf = [0u8; 32];
        source.fill(&mut buf, 32).unwrap();
        // Not all zeros, with overwhelming probability.
        assert_ne!(buf, [0u8; 32]);
    }

    #[test]
    fn test_fill_prefix_only() {
        let source = RandomSource::detect();
        let mut buf = [0u8; 16];
        source.fill(&mut buf, 8).unwrap();
        // The tail beyond n is untouched.
        assert_eq!(&buf[8..], &[0u8; 8]);
    }

    #[test]
    fn test_fill_repeated_calls_differ() {
        let source = RandomSource::detect();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        source.fill(&mut a, 32).unwrap();
        source.fill(&mut b, 32).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fill_zero_bytes() {
        let source = RandomSource::detect();
        let mut buf = [0xaau8; 4];
        source.fill(&mut buf, 0).unwrap();
        assert_eq!(buf, [0xaa; 4]);
    }

    #[test]
    fn test_fill_n_longer_than_destination() {
        let source = RandomSource::detect();
        let mut buf = [0u8; 4];
        let result = source.fill(&mut buf, 8);
        assert!(matches!(
            result,
            Err(DispatchError::BufferSizeMismatch {
                expected: 8,
                actual: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_chunked_strategy_small_quota() {
        // A tiny quota forces the chunk loop to run many times.
        let source = RandomSource::with_strategy(Strategy::Chunked { quota: 7 });
        let mut buf = [0u8; 100];
        source.fill(&mut buf, 100).unwrap();
        assert_ne!(buf, [0u8; 100]);
    }

    #[test]
    fn test_chunked_strategy_quota_boundary() {
        let source = RandomSource::with_strategy(Strategy::Chunked {
            quota: PLATFORM_QUOTA,
        });
        let mut buf = vec![0u8; PLATFORM_QUOTA];
        source.fill(&mut buf, PLATFORM_QUOTA).unwrap();
        assert!(buf.iter().any(|&b| b != 0));

        let mut larger = vec![0u8; PLATFORM_QUOTA + 1];
        source.fill(&mut larger, PLATFORM_QUOTA + 1).unwrap();
        assert!(larger.iter().any(|&b| b != 0));
        assert_ne!(larger.last(), None);
    }

    #[test]
    fn test_chunked_zero_quota_fails() {
        let source = RandomSource::with_strategy(Strategy::Chunked { quota: 0 });
        let mut buf = [0u8; 4];
        let result = source.fill(&mut buf, 4);
        assert!(matches!(result, Err(DispatchError::RandomUnavailable(_))));
    }

    #[test]
    fn test_generate() {
        let source = RandomSource::detect();
        let a: [u8; 32] = source.generate().unwrap();
        let b: [u8; 32] = source.generate().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_bytes_entry_requires_exact_destination() {
        let source = RandomSource::detect();
        let mut buf = [0u8; 8];
        assert!(random_bytes(&source, &mut buf, 8).is_ok());
        assert!(random_bytes(&source, &mut buf, 4).is_err());
    }

    #[test]
    fn test_strategy_is_fixed_at_construction() {
        let source = RandomSource::with_strategy(Strategy::Chunked { quota: 7 });
        assert_eq!(source.strategy(), Strategy::Chunked { quota: 7 });
    }
}
