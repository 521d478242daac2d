//! Entropy source abstraction.
//!
//! The secure generator family never keeps random state of its own: every
//! draw reads fresh bits from an [`EntropySource`]. This module defines that
//! seam and the production implementation backed by the operating system.
//!
//! Sources take `&self`, so a generator built on a thread-safe source can be
//! shared across threads without locking.
//!
//! Current implementations:
//! - [`OsEntropy`]: the platform CSPRNG (`getrandom`, `BCryptGenRandom`,
//!   `SecRandomCopyBytes`, ...) through [`rand::rngs::OsRng`]

use log::error;
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{RandomError, RandomResult};

/// Provider of unpredictable bytes.
///
/// Implementations fill the whole buffer or fail. A failure must be reported
/// as [`RandomError::EntropySource`]; callers never retry and never fall back
/// to another source.
pub trait EntropySource {
    fn fill(&self, buf: &mut [u8]) -> RandomResult<()>;
}

/// Entropy read from the operating system on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> RandomResult<()> {
        let len = buf.len();

        OsRng.try_fill_bytes(buf).map_err(|e| {
            error!("operating system entropy read of {len} bytes failed: {e}");
            RandomError::from(e)
        })
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &S {
    fn fill(&self, buf: &mut [u8]) -> RandomResult<()> {
        (**self).fill(buf)
    }
}
