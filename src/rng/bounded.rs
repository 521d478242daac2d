//! Bounded draws over an entropy source.
//!
//! Two reductions live here:
//!
//! - **precise**: read just enough bits to cover `bound - 1`, mask off the
//!   excess, and reject any value `>= bound`. Every accepted value is equally
//!   likely. The expected number of reads is below two.
//! - **fast**: read a fixed-width buffer once and reinterpret it. Callers
//!   reduce it with `%` where they need a bound, accepting modulo bias.

use num_bigint::BigUint;

use crate::entropy::EntropySource;
use crate::error::{RandomError, RandomResult};

/// Uniform value in `[0, bound)`.
///
/// # Errors
///
/// [`RandomError::InvalidRange`] if `bound == 0`, or whatever the source
/// reports.
pub(crate) fn uniform_below<S: EntropySource + ?Sized>(source: &S, bound: u64) -> RandomResult<u64> {
    if bound == 0 {
        return Err(RandomError::invalid_range(0, 0));
    }

    let max = bound - 1;
    if max == 0 {
        return Ok(0);
    }

    let bits = u64::BITS - max.leading_zeros();
    let len = bits.div_ceil(8) as usize;
    let mask = u64::MAX >> (u64::BITS - bits);

    // Leading bytes stay zero; only the low `len` bytes are refilled.
    let mut buf = [0u8; 8];
    loop {
        source.fill(&mut buf[8 - len..])?;

        let n = u64::from_be_bytes(buf) & mask;
        if n < bound {
            return Ok(n);
        }
    }
}

/// Uniform value in `[0, bound)` of arbitrary width.
pub(crate) fn uniform_below_big<S: EntropySource + ?Sized>(
    source: &S,
    bound: &BigUint,
) -> RandomResult<BigUint> {
    if bound.bits() == 0 {
        return Err(RandomError::invalid_range(0, 0));
    }

    let max = bound.clone() - 1u32;
    let bits = max.bits();
    if bits == 0 {
        return Ok(max);
    }

    let len = bits.div_ceil(8) as usize;
    let excess = (len as u64 * 8 - bits) as u32;

    let mut buf = vec![0u8; len];
    loop {
        source.fill(&mut buf)?;
        buf[0] &= 0xff >> excess;

        let n = BigUint::from_bytes_be(&buf);
        if &n < bound {
            return Ok(n);
        }
    }
}

/// Reads exactly `N` raw bytes.
pub(crate) fn raw<const N: usize, S: EntropySource + ?Sized>(source: &S) -> RandomResult<[u8; N]> {
    let mut buf = [0u8; N];
    source.fill(&mut buf)?;

    Ok(buf)
}

/// Width of `[min, max)` as an unsigned span.
///
/// # Errors
///
/// [`RandomError::InvalidRange`] when `max <= min`.
pub(crate) fn span(min: i64, max: i64) -> RandomResult<u64> {
    if max <= min {
        return Err(RandomError::invalid_range(min, max));
    }

    // Two's complement difference; always fits since max > min.
    Ok(max.wrapping_sub(min) as u64)
}

/// Top 24 bits of a non-negative 31-bit draw, scaled into `[0, 1)`.
pub(crate) fn unit_f32(n: i32) -> f32 {
    ((n as u32) >> 7) as f32 / (1u32 << 24) as f32
}

/// Top 53 bits of a non-negative 63-bit draw, scaled into `[0, 1)`.
pub(crate) fn unit_f64(n: i64) -> f64 {
    ((n as u64) >> 10) as f64 / (1u64 << 53) as f64
}
