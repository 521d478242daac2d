//! Cryptographically secure generator.
//!
//! [`SecureGenerator`] holds nothing but an alphabet and an entropy source;
//! every draw reads fresh bits from the source, so there is no stream state
//! to protect and draws take `&self`.
//!
//! Every bounded operation comes in two families:
//!
//! - **precise** (`int63`, `runes`, `choice`, ...): the draw is constrained to
//!   the exact target range by rejection, so the result is uniform over
//!   `[0, bound)`. This is the only place in the crate where uniformity is
//!   guaranteed.
//! - **fast** (`fast_int63`, `fast_runes`, `fast_choice`, ...): a single raw
//!   read of the target width, with the sign bit cleared for signed outputs and
//!   `%` for alphabet and collection indices. Cheaper, but carries the
//!   distributional skew of that reduction.
//!
//! Entropy failures are returned immediately as
//! [`crate::RandomError::EntropySource`]: no retry, no partial output, no
//! fallback to a pseudo-random stream.

use num_bigint::BigUint;

use crate::alphabet::Alphabet;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::{RandomError, RandomResult};
use crate::rng::bounded::{raw, span, uniform_below, uniform_below_big, unit_f32, unit_f64};
use crate::rng::select::{Indexable, checked_len, pick};

const ISIZE_BYTES: usize = (isize::BITS / 8) as usize;

#[derive(Clone, Debug)]
pub struct SecureGenerator<S: EntropySource = OsEntropy> {
    alphabet: Alphabet,
    source: S,
}

impl SecureGenerator {
    /// Secure generator over `alphabet`, reading from the operating system.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_source(alphabet, OsEntropy)
    }
}

impl Default for SecureGenerator {
    fn default() -> Self {
        Self::new(Alphabet::default())
    }
}

impl<S: EntropySource> SecureGenerator<S> {
    /// Secure generator over `alphabet`, reading from `source`.
    pub fn with_source(alphabet: Alphabet, source: S) -> Self {
        Self { alphabet, source }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn chars(&self) -> String {
        self.alphabet.to_string()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Rebinds the alphabet in place. Requires exclusive access, so a
    /// generator shared by reference can never change under its readers.
    pub fn set_alphabet(&mut self, alphabet: Alphabet) {
        self.alphabet = alphabet;
    }

    pub fn with_alphabet(&self, alphabet: Alphabet) -> Self
    where
        S: Clone,
    {
        Self::with_source(alphabet, self.source.clone())
    }

    pub fn with_chars(&self, chars: &str) -> RandomResult<Self>
    where
        S: Clone,
    {
        Ok(self.with_alphabet(Alphabet::new(chars)?))
    }

    pub fn fill_bytes(&self, buf: &mut [u8]) -> RandomResult<()> {
        self.source.fill(buf)
    }

    pub fn bytes(&self, size: usize) -> RandomResult<Vec<u8>> {
        let mut buf = vec![0u8; size];
        self.source.fill(&mut buf)?;

        Ok(buf)
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] if `bound` is zero.
    pub fn big_uint(&self, bound: &BigUint) -> RandomResult<BigUint> {
        uniform_below_big(&self.source, bound)
    }

    /// Uniform value in `[min, max)`.
    pub fn rand_big_uint(&self, min: &BigUint, max: &BigUint) -> RandomResult<BigUint> {
        if max <= min {
            return Err(RandomError::invalid_range(min, max));
        }

        let n = uniform_below_big(&self.source, &(max - min))?;

        Ok(min + n)
    }

    pub fn rune(&self) -> RandomResult<char> {
        let n = uniform_below(&self.source, self.alphabet.len() as u64)?;

        Ok(self.alphabet.wrapping_symbol(n))
    }

    pub fn fast_rune(&self) -> RandomResult<char> {
        let n = self.fast_int63()? as u64;

        Ok(self.alphabet.wrapping_symbol(n))
    }

    /// `size` symbols, one precise index draw each.
    pub fn runes(&self, size: usize) -> RandomResult<Vec<char>> {
        (0..size).map(|_| self.rune()).collect()
    }

    pub fn fast_runes(&self, size: usize) -> RandomResult<Vec<char>> {
        (0..size).map(|_| self.fast_rune()).collect()
    }

    pub fn rand_string(&self, size: usize) -> RandomResult<String> {
        (0..size).map(|_| self.rune()).collect()
    }

    pub fn fast_rand_string(&self, size: usize) -> RandomResult<String> {
        (0..size).map(|_| self.fast_rune()).collect()
    }

    /// Uniform in `[0, isize::MAX)`.
    pub fn int(&self) -> RandomResult<isize> {
        Ok(uniform_below(&self.source, isize::MAX as u64)? as isize)
    }

    pub fn fast_int(&self) -> RandomResult<isize> {
        let buf = raw::<ISIZE_BYTES, _>(&self.source)?;

        Ok(isize::from_be_bytes(buf) & isize::MAX)
    }

    /// Uniform in `[0, i16::MAX)`.
    pub fn int15(&self) -> RandomResult<i16> {
        Ok(uniform_below(&self.source, i16::MAX as u64)? as i16)
    }

    pub fn fast_int15(&self) -> RandomResult<i16> {
        Ok(i16::from_be_bytes(raw(&self.source)?) & i16::MAX)
    }

    /// Uniform in `[0, i32::MAX)`.
    pub fn int31(&self) -> RandomResult<i32> {
        Ok(uniform_below(&self.source, i32::MAX as u64)? as i32)
    }

    pub fn fast_int31(&self) -> RandomResult<i32> {
        Ok(i32::from_be_bytes(raw(&self.source)?) & i32::MAX)
    }

    /// Uniform in `[0, i64::MAX)`.
    pub fn int63(&self) -> RandomResult<i64> {
        Ok(uniform_below(&self.source, i64::MAX as u64)? as i64)
    }

    pub fn fast_int63(&self) -> RandomResult<i64> {
        Ok(i64::from_be_bytes(raw(&self.source)?) & i64::MAX)
    }

    /// Uniform in `[0, u16::MAX)`.
    pub fn uint16(&self) -> RandomResult<u16> {
        Ok(uniform_below(&self.source, u16::MAX as u64)? as u16)
    }

    pub fn fast_uint16(&self) -> RandomResult<u16> {
        Ok(u16::from_le_bytes(raw(&self.source)?))
    }

    /// Uniform in `[0, u32::MAX)`.
    pub fn uint32(&self) -> RandomResult<u32> {
        Ok(uniform_below(&self.source, u32::MAX as u64)? as u32)
    }

    pub fn fast_uint32(&self) -> RandomResult<u32> {
        Ok(u32::from_le_bytes(raw(&self.source)?))
    }

    /// Uniform in `[0, u64::MAX)`.
    pub fn uint64(&self) -> RandomResult<u64> {
        uniform_below(&self.source, u64::MAX)
    }

    pub fn fast_uint64(&self) -> RandomResult<u64> {
        Ok(u64::from_le_bytes(raw(&self.source)?))
    }

    /// In `[0, 1)`, scaled from [`SecureGenerator::int31`].
    pub fn float32(&self) -> RandomResult<f32> {
        Ok(unit_f32(self.int31()?))
    }

    /// In `[0, 1)`, scaled from [`SecureGenerator::fast_int31`].
    pub fn fast_float32(&self) -> RandomResult<f32> {
        Ok(unit_f32(self.fast_int31()?))
    }

    /// In `[0, 1)`, scaled from [`SecureGenerator::int63`].
    pub fn float64(&self) -> RandomResult<f64> {
        Ok(unit_f64(self.int63()?))
    }

    /// In `[0, 1)`, scaled from [`SecureGenerator::fast_int63`].
    pub fn fast_float64(&self) -> RandomResult<f64> {
        Ok(unit_f64(self.fast_int63()?))
    }

    /// Uniform in `[min, max)`.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] when `max <= min`, before any entropy
    /// is read.
    pub fn rand_int(&self, min: i64, max: i64) -> RandomResult<i64> {
        let width = span(min, max)?;
        let n = uniform_below(&self.source, width)?;

        Ok(min.wrapping_add(n as i64))
    }

    /// In `[min, max)` as `min + raw mod (max - min)`; biased for widths that
    /// do not divide 2^64.
    pub fn fast_rand_int(&self, min: i64, max: i64) -> RandomResult<i64> {
        let width = span(min, max)?;
        let n = self.fast_uint64()? % width;

        Ok(min.wrapping_add(n as i64))
    }

    /// One element of `items`, chosen uniformly.
    ///
    /// # Errors
    ///
    /// [`RandomError::IndexRange`] if `items` is empty, before any entropy is
    /// read.
    pub fn choice<'a, C: Indexable + ?Sized>(&self, items: &'a C) -> RandomResult<&'a C::Item> {
        let len = checked_len(items)?;
        let index = uniform_below(&self.source, len as u64)? as usize;

        pick(items, index)
    }

    pub fn fast_choice<'a, C: Indexable + ?Sized>(&self, items: &'a C) -> RandomResult<&'a C::Item> {
        let len = checked_len(items)?;
        let index = (self.fast_int63()? as u64 % len as u64) as usize;

        pick(items, index)
    }

    pub fn choice_of_strings<'a, T: AsRef<str>>(&self, items: &'a [T]) -> RandomResult<&'a str> {
        self.choice(items).map(AsRef::as_ref)
    }

    pub fn fast_choice_of_strings<'a, T: AsRef<str>>(&self, items: &'a [T]) -> RandomResult<&'a str> {
        self.fast_choice(items).map(AsRef::as_ref)
    }
}
