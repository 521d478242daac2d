//! Construction entry points.
//!
//! [`new`] turns a [`Config`] into either kind of generator. [`Randomizer`]
//! is the default instance: it is built lazily on first use with the default
//! alphabet and a time-derived seed, and is owned explicitly by whoever
//! constructs it. There is no hidden process-wide state; code that wants a
//! shared default threads a `Randomizer` through its calls.
//!
//! A freshly built default instance is not deterministic. Tests must either
//! call [`Randomizer::set_seed`] before drawing or start from
//! [`Randomizer::from_generator`].

use log::debug;

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::error::RandomResult;
use crate::rng::{Indexable, PseudoGenerator, SecureGenerator};

/// Generator selected by [`Config::crypto`].
#[derive(Clone, Debug)]
pub enum Generator {
    Pseudo(PseudoGenerator),
    Secure(SecureGenerator),
}

/// Builds the generator described by `config`.
///
/// # Errors
///
/// Fails only if `config` names an alphabet that cannot be built.
pub fn new(config: Config) -> RandomResult<Generator> {
    Generator::new(config)
}

impl Generator {
    pub fn new(config: Config) -> RandomResult<Self> {
        if config.crypto {
            debug!("Building secure generator from config");
            return Ok(Generator::Secure(SecureGenerator::new(config.alphabet()?)));
        }

        Ok(Generator::Pseudo(PseudoGenerator::from_config(&config)?))
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, Generator::Secure(_))
    }

    pub fn alphabet(&self) -> &Alphabet {
        match self {
            Generator::Pseudo(g) => g.alphabet(),
            Generator::Secure(g) => g.alphabet(),
        }
    }

    pub fn as_pseudo_mut(&mut self) -> Option<&mut PseudoGenerator> {
        match self {
            Generator::Pseudo(g) => Some(g),
            Generator::Secure(_) => None,
        }
    }

    pub fn as_secure(&self) -> Option<&SecureGenerator> {
        match self {
            Generator::Pseudo(_) => None,
            Generator::Secure(g) => Some(g),
        }
    }

    pub fn bytes(&mut self, size: usize) -> RandomResult<Vec<u8>> {
        match self {
            Generator::Pseudo(g) => Ok(g.bytes(size)),
            Generator::Secure(g) => g.bytes(size),
        }
    }

    /// Secure generators use their precise family.
    pub fn rand_string(&mut self, size: usize) -> RandomResult<String> {
        match self {
            Generator::Pseudo(g) => Ok(g.rand_string(size)),
            Generator::Secure(g) => g.rand_string(size),
        }
    }

    pub fn rand_int(&mut self, min: i64, max: i64) -> RandomResult<i64> {
        match self {
            Generator::Pseudo(g) => g.rand_int(min, max),
            Generator::Secure(g) => g.rand_int(min, max),
        }
    }
}

impl From<PseudoGenerator> for Generator {
    fn from(g: PseudoGenerator) -> Self {
        Generator::Pseudo(g)
    }
}

impl From<SecureGenerator> for Generator {
    fn from(g: SecureGenerator) -> Self {
        Generator::Secure(g)
    }
}

/// Lazily built default pseudo generator with convenience draws.
#[derive(Debug, Default)]
pub struct Randomizer {
    default: Option<PseudoGenerator>,
}

impl Randomizer {
    /// Creates the holder; the generator itself is built on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `generator` as the default instance.
    pub fn from_generator(generator: PseudoGenerator) -> Self {
        Self {
            default: Some(generator),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.default.is_some()
    }

    /// The default generator, built now if this is the first use.
    pub fn generator(&mut self) -> &mut PseudoGenerator {
        self.default.get_or_insert_with(|| {
            debug!("Building default pseudo generator");
            PseudoGenerator::default()
        })
    }

    /// Re-seeds the default generator.
    pub fn set_seed(&mut self, seed: i64) {
        self.generator().set_seed(seed);
    }

    pub fn with_chars(&mut self, chars: &str) -> RandomResult<PseudoGenerator> {
        self.generator().with_chars(chars)
    }

    pub fn with_seed(&mut self, seed: i64) -> PseudoGenerator {
        self.generator().with_seed(seed)
    }

    pub fn crypto(&mut self) -> SecureGenerator {
        self.generator().crypto()
    }

    pub fn bytes(&mut self, size: usize) -> Vec<u8> {
        self.generator().bytes(size)
    }

    pub fn rune(&mut self) -> char {
        self.generator().rune()
    }

    pub fn runes(&mut self, size: usize) -> Vec<char> {
        self.generator().runes(size)
    }

    pub fn rand_string(&mut self, size: usize) -> String {
        self.generator().rand_string(size)
    }

    pub fn rand_int(&mut self, min: i64, max: i64) -> RandomResult<i64> {
        self.generator().rand_int(min, max)
    }

    pub fn int(&mut self) -> isize {
        self.generator().int()
    }

    pub fn int31(&mut self) -> i32 {
        self.generator().int31()
    }

    pub fn int63(&mut self) -> i64 {
        self.generator().int63()
    }

    pub fn uint32(&mut self) -> u32 {
        self.generator().uint32()
    }

    pub fn uint64(&mut self) -> u64 {
        self.generator().uint64()
    }

    pub fn float32(&mut self) -> f32 {
        self.generator().float32()
    }

    pub fn float64(&mut self) -> f64 {
        self.generator().float64()
    }

    pub fn choice<'a, C: Indexable + ?Sized>(&mut self, items: &'a C) -> RandomResult<&'a C::Item> {
        self.generator().choice(items)
    }

    pub fn choice_of_strings<'a, S: AsRef<str>>(&mut self, items: &'a [S]) -> RandomResult<&'a str> {
        self.generator().choice_of_strings(items)
    }
}
