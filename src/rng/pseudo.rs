//! Seedable pseudo-random generator.
//!
//! [`PseudoGenerator`] wraps a ChaCha8 stream seeded from a single `i64`.
//! It is built for throughput and reproducibility, not for secrets: two
//! generators with the same seed and alphabet, driven through the same
//! sequence of calls, return bit-identical results at every step.
//!
//! Bounded draws (`rand_int`, alphabet-indexed draws, `choice`) reduce a raw
//! integer with `%`. That reduction is biased whenever the bound does not
//! divide the raw range evenly. The bias is accepted here in exchange for a
//! single stream read per value; use [`crate::rng::SecureGenerator`]'s
//! precise family when uniformity matters.
//!
//! Draws mutate the stream, so they take `&mut self`. Use one generator per
//! thread when several threads need deterministic streams.

use std::fmt;

use log::{debug, trace};
use rand::distributions::{Distribution, Standard};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::alphabet::Alphabet;
use crate::config::{Config, time_seed};
use crate::error::RandomResult;
use crate::rng::bounded::span;
use crate::rng::secure::SecureGenerator;
use crate::rng::select::{Indexable, checked_len, pick};

#[derive(Clone)]
pub struct PseudoGenerator {
    core: ChaCha8Rng,
    seed: i64,
    alphabet: Alphabet,
}

impl PseudoGenerator {
    /// Creates a generator over `alphabet` whose stream starts at `seed`.
    pub fn new(alphabet: Alphabet, seed: i64) -> Self {
        Self::seeded(alphabet, seed, false)
    }

    fn seeded(alphabet: Alphabet, seed: i64, time_derived: bool) -> Self {
        debug!(
            "Seeding pseudo generator with {} over {} symbols (time-derived: {})",
            seed,
            alphabet.len(),
            time_derived
        );

        Self {
            core: ChaCha8Rng::seed_from_u64(seed as u64),
            seed,
            alphabet,
        }
    }

    /// Creates a generator from a [`Config`], ignoring its `crypto` flag.
    ///
    /// An absent or empty alphabet selects the default one; a seed `<= 0` is
    /// replaced by one derived from the current time.
    pub fn from_config(config: &Config) -> RandomResult<Self> {
        let alphabet = config.alphabet()?;

        Ok(Self::seeded(
            alphabet,
            config.resolved_seed(),
            config.is_time_seeded(),
        ))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn chars(&self) -> String {
        self.alphabet.to_string()
    }

    /// The seed the current stream was started from.
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Discards the current stream and starts a new one from `seed`.
    pub fn set_seed(&mut self, seed: i64) {
        trace!("Re-seeding pseudo generator: {} -> {}", self.seed, seed);

        self.core = ChaCha8Rng::seed_from_u64(seed as u64);
        self.seed = seed;
    }

    /// Rebinds the alphabet in place. The stream is left untouched.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        trace!("Rebinding pseudo generator alphabet to {} symbols", alphabet.len());

        self.alphabet = alphabet;
    }

    /// Independent copy over `alphabet`, continuing from this generator's
    /// current stream position.
    pub fn with_alphabet(&self, alphabet: Alphabet) -> Self {
        debug!(
            "Deriving pseudo generator over {} symbols from seed {}",
            alphabet.len(),
            self.seed
        );

        Self {
            core: self.core.clone(),
            seed: self.seed,
            alphabet,
        }
    }

    pub fn with_chars(&self, chars: &str) -> RandomResult<Self> {
        Ok(self.with_alphabet(Alphabet::new(chars)?))
    }

    /// New generator over the same alphabet with a fresh stream from `seed`.
    pub fn with_seed(&self, seed: i64) -> Self {
        Self::new(self.alphabet.clone(), seed)
    }

    /// Secure generator sharing this generator's alphabet.
    pub fn crypto(&self) -> SecureGenerator {
        SecureGenerator::new(self.alphabet.clone())
    }

    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        self.core.fill_bytes(buf);
    }

    pub fn bytes(&mut self, size: usize) -> Vec<u8> {
        let mut buf = vec![0u8; size];
        self.core.fill_bytes(&mut buf);

        buf
    }

    pub fn rune(&mut self) -> char {
        let n = self.int63() as u64;
        self.alphabet.wrapping_symbol(n)
    }

    pub fn runes(&mut self, size: usize) -> Vec<char> {
        (0..size).map(|_| self.rune()).collect()
    }

    pub fn rand_string(&mut self, size: usize) -> String {
        (0..size).map(|_| self.rune()).collect()
    }

    /// Value in `[min, max)`, computed as `min + raw mod (max - min)`.
    ///
    /// # Errors
    ///
    /// [`crate::RandomError::InvalidRange`] when `max <= min`. The stream is
    /// not advanced in that case.
    pub fn rand_int(&mut self, min: i64, max: i64) -> RandomResult<i64> {
        let width = span(min, max)?;

        Ok(min.wrapping_add((self.core.next_u64() % width) as i64))
    }

    /// Non-negative integer of the platform's pointer width.
    pub fn int(&mut self) -> isize {
        (self.core.next_u64() >> (u64::BITS + 1 - isize::BITS)) as isize
    }

    /// Non-negative 15-bit integer.
    pub fn int15(&mut self) -> i16 {
        (self.core.next_u32() >> 17) as i16
    }

    /// Non-negative 31-bit integer.
    pub fn int31(&mut self) -> i32 {
        (self.core.next_u32() >> 1) as i32
    }

    /// Non-negative 63-bit integer.
    pub fn int63(&mut self) -> i64 {
        (self.core.next_u64() >> 1) as i64
    }

    pub fn uint16(&mut self) -> u16 {
        (self.core.next_u32() >> 16) as u16
    }

    pub fn uint32(&mut self) -> u32 {
        self.core.next_u32()
    }

    pub fn uint64(&mut self) -> u64 {
        self.core.next_u64()
    }

    /// Uniform in `[0, 1)`.
    pub fn float32(&mut self) -> f32 {
        Standard.sample(&mut self.core)
    }

    /// Uniform in `[0, 1)`.
    pub fn float64(&mut self) -> f64 {
        Standard.sample(&mut self.core)
    }

    /// One element of `items`, chosen by a single modulo index draw.
    ///
    /// # Errors
    ///
    /// [`crate::RandomError::IndexRange`] if `items` is empty. The stream is
    /// not advanced in that case.
    pub fn choice<'a, C: Indexable + ?Sized>(&mut self, items: &'a C) -> RandomResult<&'a C::Item> {
        let len = checked_len(items)?;
        let index = (self.int63() as u64 % len as u64) as usize;

        pick(items, index)
    }

    pub fn choice_of_strings<'a, S: AsRef<str>>(&mut self, items: &'a [S]) -> RandomResult<&'a str> {
        self.choice(items).map(AsRef::as_ref)
    }
}

impl Default for PseudoGenerator {
    /// Default alphabet, seeded from the current time.
    fn default() -> Self {
        Self::seeded(Alphabet::default(), time_seed(), true)
    }
}

impl fmt::Debug for PseudoGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PseudoGenerator")
            .field("seed", &self.seed)
            .field("alphabet", &self.alphabet)
            .finish_non_exhaustive()
    }
}
