//! Random values for code that should not manage a random source itself
//!
//! This crate generates integers, floats, byte buffers and alphabet-indexed
//! strings from one of two sources: a fast, seedable pseudo-random stream,
//! or the operating system's cryptographically secure entropy.
//!
//! # Module overview
//!
//! - `alphabet`
//!   Ordered, non-empty, immutable symbol sequences used as the domain of
//!   character draws, plus the predefined alphabets in `alphabet::chars`
//!   (digits, Latin letters, hex, URL-safe, Greek, Roman and Chinese
//!   numerals, and their unions).
//!
//! - `rng`
//!   The two generator kinds.
//!
//!   `PseudoGenerator` is a ChaCha8 stream seeded from an `i64`. Given the
//!   same seed, alphabet and call sequence it reproduces its output exactly.
//!   Bounded draws reduce with `%` and are therefore slightly biased.
//!
//!   `SecureGenerator` reads fresh entropy for every draw. Each bounded
//!   operation has a **precise** variant (rejection sampling, uniform) and a
//!   **fast** variant (single raw read, sign bit cleared or `%`, biased).
//!   The precise family is the only place uniformity is guaranteed.
//!
//! - `entropy`
//!   The `EntropySource` seam behind the secure generator and its operating
//!   system implementation.
//!
//! - `facade`
//!   Construction from a `Config`, and `Randomizer`, an explicitly owned,
//!   lazily built default generator with convenience draws.
//!
//! - `config`, `error`
//!   Construction input and the crate's error taxonomy.
//!
//! # Errors
//!
//! Secure operations return `RandomResult` because the entropy source can
//! fail. Pseudo operations return bare values, except those that can be
//! misused (empty ranges, empty collections, empty alphabets), which fail
//! with an explicit error rather than produce a degenerate value.
//!
//! # Concurrency
//!
//! `PseudoGenerator` draws take `&mut self`: use one generator per thread.
//! `SecureGenerator` draws take `&self` and hold no stream state, so a
//! generator over a thread-safe source can be shared freely.

pub mod alphabet;
pub mod config;
pub mod entropy;
pub mod error;
pub mod facade;
pub mod rng;

pub use alphabet::Alphabet;
pub use config::Config;
pub use entropy::{EntropySource, OsEntropy};
pub use error::{RandomError, RandomResult};
pub use facade::{Generator, Randomizer};
pub use rng::{Indexable, PseudoGenerator, SecureGenerator};
