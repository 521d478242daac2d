use randomizer::RandomError;
use randomizer::alphabet::{Alphabet, chars};

#[test]
fn test_alphabet_predefined_alphabet_sizes() {
    let sizes = [
        (chars::ARABIC_NUMERALS, 10),
        (chars::HEX_DIGITS, 16),
        (chars::ROMAN_LETTERS_LOWER, 26),
        (chars::ROMAN_LETTERS_UPPER, 26),
        (chars::ROMAN_LETTERS, 52),
        (chars::ROMAN_NUMERALS, 12),
        (chars::ROMAN_ALL, 64),
        (chars::GREEK_LETTERS, 24),
        (chars::CHINESE_NUMERALS_LOWER, 11),
        (chars::CHINESE_NUMERALS_UPPER, 11),
        (chars::CHINESE_NUMERALS, 22),
        (chars::DEFAULT, 62),
        (chars::SAFE_URL, 66),
        (chars::ALL, 172),
    ];

    for (chars, len) in sizes {
        assert_eq!(Alphabet::new(chars).unwrap().len(), len, "{chars}");
    }
}

#[test]
fn test_alphabet_unions_are_concatenations_of_their_parts() {
    assert_eq!(
        chars::DEFAULT,
        format!("{}{}", chars::ARABIC_NUMERALS, chars::ROMAN_LETTERS)
    );
    assert_eq!(
        chars::ROMAN_ALL,
        format!("{}{}", chars::ROMAN_LETTERS, chars::ROMAN_NUMERALS)
    );
    assert_eq!(
        chars::CHINESE_NUMERALS,
        format!(
            "{}{}",
            chars::CHINESE_NUMERALS_LOWER,
            chars::CHINESE_NUMERALS_UPPER
        )
    );
    assert_eq!(
        chars::ALL,
        format!(
            "{}{}{}{}",
            chars::CHINESE_NUMERALS,
            chars::GREEK_LETTERS,
            chars::ROMAN_ALL,
            chars::DEFAULT
        )
    );
    assert!(chars::SAFE_URL.ends_with("-._~"));
    assert!(chars::HEX_DIGITS.starts_with(chars::ARABIC_NUMERALS));
}

#[test]
fn test_alphabet_default_alphabet_is_alphanumeric() {
    let alphabet = Alphabet::default();

    assert_eq!(alphabet.to_string(), chars::DEFAULT);
    assert!(alphabet.symbols().iter().all(char::is_ascii_alphanumeric));
}

#[test]
fn test_alphabet_symbol_at_counts_code_points() {
    let alphabet = Alphabet::new(chars::GREEK_LETTERS).unwrap();

    assert_eq!(alphabet.symbol_at(0).unwrap(), 'α');
    assert_eq!(alphabet.symbol_at(23).unwrap(), 'ω');
}

#[test]
fn test_alphabet_symbol_at_out_of_range_fails() {
    let alphabet = Alphabet::new("abc").unwrap();

    match alphabet.symbol_at(3) {
        Err(RandomError::IndexRange { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_alphabet_empty_alphabet_is_rejected() {
    assert!(matches!(
        Alphabet::new(""),
        Err(RandomError::IndexRange { index: 0, len: 0 })
    ));
    assert!("".parse::<Alphabet>().is_err());
}

#[test]
fn test_alphabet_clones_compare_equal() {
    let a = Alphabet::new(chars::HEX_DIGITS).unwrap();
    let b = a.clone();

    assert_eq!(a, b);
    assert!(b.contains('f'));
    assert!(!b.contains('g'));
}
