//! One-shot construction input for generators.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::alphabet::Alphabet;
use crate::error::RandomResult;

/// Construction options recognised by [`crate::facade::new`] and
/// [`crate::rng::PseudoGenerator::from_config`].
///
/// A `Config` is consumed by construction; the resulting generator keeps
/// none of it apart from the resolved alphabet and seed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Alphabet override. `None` or an empty string selects
    /// [`crate::alphabet::chars::DEFAULT`].
    pub chars: Option<String>,

    /// Explicit seed. Zero or negative derives the seed from the clock.
    pub seed: i64,

    /// Build a secure generator instead of a pseudo one.
    pub crypto: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chars(mut self, chars: impl Into<String>) -> Self {
        self.chars = Some(chars.into());
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn crypto(mut self, crypto: bool) -> Self {
        self.crypto = crypto;
        self
    }

    pub(crate) fn alphabet(&self) -> RandomResult<Alphabet> {
        match self.chars.as_deref() {
            None | Some("") => Ok(Alphabet::default()),
            Some(chars) => Alphabet::new(chars),
        }
    }

    /// Whether construction will replace the seed with a clock-derived one.
    pub(crate) fn is_time_seeded(&self) -> bool {
        self.seed <= 0
    }

    /// Returns the configured seed, or a clock-derived one when the
    /// configured value is not positive.
    pub(crate) fn resolved_seed(&self) -> i64 {
        if self.is_time_seeded() {
            time_seed()
        } else {
            self.seed
        }
    }
}

/// Nanoseconds since the Unix epoch, always positive.
pub(crate) fn time_seed() -> i64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);

    nanos_to_seed(nanos)
}

/// Saturates instead of wrapping, so a huge clock value never turns negative.
fn nanos_to_seed(nanos: u128) -> i64 {
    i64::try_from(nanos).unwrap_or(i64::MAX).max(1)
}
