use randomizer::alphabet::{Alphabet, chars};
use randomizer::{Config, PseudoGenerator, RandomError};

#[derive(Debug, PartialEq)]
struct Transcript {
    bytes: Vec<u8>,
    rune: char,
    runes: Vec<char>,
    string: String,
    rand_int: i64,
    int: isize,
    int15: i16,
    int31: i32,
    int63: i64,
    uint16: u16,
    uint32: u32,
    uint64: u64,
    float32: u32,
    float64: u64,
    choice: &'static str,
}

const FRUITS: [&str; 7] = [
    "apple",
    "banana",
    "mango",
    "dragon fruit",
    "lemon",
    "orange",
    "peach",
];

fn run(rng: &mut PseudoGenerator) -> Transcript {
    Transcript {
        bytes: rng.bytes(16),
        rune: rng.rune(),
        runes: rng.runes(8),
        string: rng.rand_string(12),
        rand_int: rng.rand_int(-5, 5).unwrap(),
        int: rng.int(),
        int15: rng.int15(),
        int31: rng.int31(),
        int63: rng.int63(),
        uint16: rng.uint16(),
        uint32: rng.uint32(),
        uint64: rng.uint64(),
        float32: rng.float32().to_bits(),
        float64: rng.float64().to_bits(),
        choice: rng.choice_of_strings(&FRUITS).unwrap(),
    }
}

fn greek(seed: i64) -> PseudoGenerator {
    PseudoGenerator::new(Alphabet::new(chars::GREEK_LETTERS).unwrap(), seed)
}

#[test]
fn test_pseudo_same_seed_same_sequence() {
    let mut a = greek(7);
    let mut b = greek(7);

    for _ in 0..10 {
        assert_eq!(run(&mut a), run(&mut b));
    }
}

#[test]
fn test_pseudo_different_seeds_diverge() {
    let mut a = greek(7);
    let mut b = greek(8);

    assert_ne!(a.bytes(32), b.bytes(32));
}

#[test]
fn test_pseudo_fixture_abc_seed_42() {
    let config = Config::new().chars("abc").seed(42);

    let mut a = PseudoGenerator::from_config(&config).unwrap();
    let mut b = PseudoGenerator::from_config(&config).unwrap();

    assert_eq!(a.rand_string(5), "bcccb");
    assert_eq!(b.rand_string(5), "bcccb");
    assert_eq!(a.rand_string(5), "bbacc");
    assert_eq!(b.rand_string(5), "bbacc");
}

#[test]
fn test_pseudo_set_seed_discards_previous_draws() {
    let mut fresh = greek(99);
    let expected = run(&mut fresh);

    let mut used = greek(1);
    for _ in 0..5 {
        run(&mut used);
    }
    used.set_seed(99);

    assert_eq!(used.seed(), 99);
    assert_eq!(run(&mut used), expected);
}

#[test]
fn test_pseudo_with_seed_starts_independent_stream() {
    let mut source = greek(3);
    source.bytes(64);

    let mut derived = source.with_seed(11);
    let mut fresh = greek(11);

    assert_eq!(derived.alphabet(), source.alphabet());
    assert_eq!(run(&mut derived), run(&mut fresh));
}

#[test]
fn test_pseudo_with_alphabet_copies_stream_position() {
    let mut source = PseudoGenerator::new(Alphabet::default(), 5);
    let mut derived = source.with_chars(chars::ARABIC_NUMERALS).unwrap();

    assert_eq!(source.chars(), chars::DEFAULT);
    assert_eq!(derived.chars(), chars::ARABIC_NUMERALS);

    // Same position, then independent: advancing one leaves the other alone.
    assert_eq!(source.uint64(), derived.uint64());
    source.bytes(128);
    let mut replay = PseudoGenerator::new(Alphabet::default(), 5);
    replay.uint64();
    assert_eq!(derived.uint64(), replay.uint64());
}

#[test]
fn test_pseudo_with_chars_rejects_empty() {
    let source = greek(1);
    assert!(matches!(
        source.with_chars(""),
        Err(RandomError::IndexRange { .. })
    ));
}

#[test]
fn test_pseudo_rand_string_length_and_domain() {
    let alphabet = Alphabet::new(chars::ALL).unwrap();
    let mut rng = PseudoGenerator::new(alphabet.clone(), 17);

    for size in [0usize, 1, 5, 32, 100] {
        let s = rng.rand_string(size);
        assert_eq!(s.chars().count(), size);
        assert!(s.chars().all(|c| alphabet.contains(c)));
    }
}

#[test]
fn test_pseudo_runes_stay_in_alphabet() {
    let alphabet = Alphabet::new(chars::CHINESE_NUMERALS).unwrap();
    let mut rng = PseudoGenerator::new(alphabet.clone(), 23);

    assert!(rng.runes(1_000).into_iter().all(|c| alphabet.contains(c)));
}

#[test]
fn test_pseudo_set_alphabet_rebinds_in_place() {
    let mut rng = greek(2);
    rng.set_alphabet(Alphabet::new("x").unwrap());

    assert_eq!(rng.rand_string(4), "xxxx");
}

#[test]
fn test_pseudo_rand_int_stays_in_range() {
    let mut rng = greek(31);

    for _ in 0..10_000 {
        let n = rng.rand_int(-3, 4).unwrap();
        assert!((-3..4).contains(&n));
    }

    let n = rng.rand_int(i64::MIN, i64::MAX).unwrap();
    assert!(n < i64::MAX);
}

#[test]
fn test_pseudo_rand_int_inverted_or_empty_range_fails() {
    let mut rng = greek(31);
    let mut untouched = greek(31);

    assert!(matches!(
        rng.rand_int(5, 5),
        Err(RandomError::InvalidRange { .. })
    ));
    assert!(matches!(
        rng.rand_int(10, -10),
        Err(RandomError::InvalidRange { .. })
    ));

    // failed calls do not advance the stream
    assert_eq!(rng.uint64(), untouched.uint64());
}

#[test]
fn test_pseudo_signed_draws_are_non_negative() {
    let mut rng = greek(47);

    for _ in 0..10_000 {
        assert!(rng.int() >= 0);
        assert!(rng.int15() >= 0);
        assert!(rng.int31() >= 0);
        assert!(rng.int63() >= 0);
    }
}

#[test]
fn test_pseudo_floats_in_unit_interval() {
    let mut rng = greek(53);

    for _ in 0..100_000 {
        let f = rng.float32();
        assert!((0.0..1.0).contains(&f));

        let f = rng.float64();
        assert!((0.0..1.0).contains(&f));
    }
}

#[test]
fn test_pseudo_bytes_have_requested_length() {
    let mut rng = greek(61);

    assert!(rng.bytes(0).is_empty());
    assert_eq!(rng.bytes(33).len(), 33);

    let mut buf = [0u8; 64];
    rng.fill_bytes(&mut buf);
    assert!(buf.iter().any(|&b| b != 0));
}

#[test]
fn test_pseudo_choice_returns_member() {
    let mut rng = greek(67);
    let items = vec![10, 20, 30];

    for _ in 0..1_000 {
        assert!(items.contains(rng.choice(&items).unwrap()));
        assert!(FRUITS.contains(&rng.choice_of_strings(&FRUITS).unwrap()));
    }
}

#[test]
fn test_pseudo_choice_on_empty_fails() {
    let mut rng = greek(67);
    let empty: Vec<u8> = Vec::new();
    let no_strings: [String; 0] = [];

    assert!(matches!(
        rng.choice(&empty),
        Err(RandomError::IndexRange { index: 0, len: 0 })
    ));
    assert!(rng.choice_of_strings(&no_strings).is_err());
}

#[test]
fn test_pseudo_crypto_view_shares_alphabet() {
    let rng = greek(71);
    let secure = rng.crypto();

    assert_eq!(secure.alphabet(), rng.alphabet());
}
