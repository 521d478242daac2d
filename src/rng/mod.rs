//! Random generators
//!
//! This module provides the two generator kinds of the crate:
//!
//! - [`PseudoGenerator`]: a seedable ChaCha8 stream. Deterministic for a
//!   given seed and call sequence; bounded draws use modulo reduction.
//! - [`SecureGenerator`]: a stateless view over an entropy source, with a
//!   precise (uniform, rejection-based) and a fast (single raw read) variant
//!   of every bounded draw.
//!
//! Both share the [`crate::alphabet::Alphabet`] abstraction but never share
//! mutable state.
//!
//! Design goals:
//! - Reproducible pseudo-random streams
//! - Uniformity guaranteed only where it is promised (the precise family)
//! - Every entropy failure visible to the caller
pub(crate) mod bounded;
mod pseudo;
mod secure;
mod select;

pub use pseudo::PseudoGenerator;
pub use secure::SecureGenerator;
pub use select::Indexable;
