//! Alphabets for character-based random output.
//!
//! An [`Alphabet`] is an ordered, non-empty, immutable sequence of symbols
//! (Unicode scalar values). Generators sample from it by index: every
//! alphabet-indexed draw maps a random number in `[0, len)` to the symbol at
//! that position.
//!
//! The [`chars`] submodule holds the predefined alphabets as string
//! constants; any of them (or any other non-empty string) can be turned into
//! an [`Alphabet`] with [`Alphabet::new`].
//!
//! Alphabets are cheap to clone: clones share the same immutable storage, so
//! handing one to several generators never lets one of them observe another's
//! changes.

pub mod chars;
mod core;

pub use self::core::Alphabet;
