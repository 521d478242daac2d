use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::alphabet::chars;
use crate::error::{RandomError, RandomResult};

/// Ordered, non-empty sequence of symbols used as the domain of
/// alphabet-indexed draws.
///
/// The non-empty invariant is established by [`Alphabet::new`] and cannot be
/// broken afterwards, so a generator holding an `Alphabet` can always index
/// into it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Arc<[char]>,
}

impl Alphabet {
    /// Builds an alphabet from the code points of `chars`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::IndexRange`] with a length of zero if `chars`
    /// is empty.
    pub fn new(chars: &str) -> RandomResult<Self> {
        let symbols: Arc<[char]> = chars.chars().collect();

        if symbols.is_empty() {
            return Err(RandomError::empty());
        }

        Ok(Self { symbols })
    }

    /// Number of symbols (code points, not bytes).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with [`Alphabet::len`].
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::IndexRange`] if `index >= self.len()`.
    pub fn symbol_at(&self, index: usize) -> RandomResult<char> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(RandomError::IndexRange {
                index,
                len: self.len(),
            })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Symbol at `index mod len`. Callers reduce their draw into range first;
    /// the reduction here keeps the lookup total.
    pub(crate) fn wrapping_symbol(&self, index: u64) -> char {
        self.symbols[(index % self.symbols.len() as u64) as usize]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: chars::DEFAULT.chars().collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = RandomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = RandomError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?}, len = {})", self.to_string(), self.len())
    }
}
