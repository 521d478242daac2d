//! Predefined alphabets.
//!
//! Every constant is a plain string literal. Unions are assembled at compile
//! time from the same literals as their parts, so a union can never drift
//! from its components.

macro_rules! chinese_numerals_upper {
    () => {
        "零壹貳參肆伍陸柒捌玖拾"
    };
}

macro_rules! chinese_numerals_lower {
    () => {
        "〇一二三四五六七八九十"
    };
}

macro_rules! greek_letters {
    () => {
        "αβγδεζηθικλμνξοπρστυφχψω"
    };
}

macro_rules! roman_letters_lower {
    () => {
        "abcdefghijklmnopqrstuvwxyz"
    };
}

macro_rules! roman_letters_upper {
    () => {
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
    };
}

macro_rules! roman_numerals {
    () => {
        "ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩⅪⅫ"
    };
}

macro_rules! arabic_numerals {
    () => {
        "0123456789"
    };
}

pub const CHINESE_NUMERALS_UPPER: &str = chinese_numerals_upper!();
pub const CHINESE_NUMERALS_LOWER: &str = chinese_numerals_lower!();
pub const CHINESE_NUMERALS: &str = concat!(chinese_numerals_lower!(), chinese_numerals_upper!());

pub const GREEK_LETTERS: &str = greek_letters!();

pub const ROMAN_LETTERS_LOWER: &str = roman_letters_lower!();
pub const ROMAN_LETTERS_UPPER: &str = roman_letters_upper!();
pub const ROMAN_LETTERS: &str = concat!(roman_letters_lower!(), roman_letters_upper!());
pub const ROMAN_NUMERALS: &str = roman_numerals!();
pub const ROMAN_ALL: &str = concat!(
    roman_letters_lower!(),
    roman_letters_upper!(),
    roman_numerals!()
);

/// Decimal digits.
pub const ARABIC_NUMERALS: &str = arabic_numerals!();

/// Lowercase hexadecimal digits.
pub const HEX_DIGITS: &str = concat!(arabic_numerals!(), "abcdef");

/// Digits and Latin letters in both cases. Used when no alphabet is given.
pub const DEFAULT: &str = concat!(
    arabic_numerals!(),
    roman_letters_lower!(),
    roman_letters_upper!()
);

/// Unreserved URI characters (RFC 3986 section 2.3).
pub const SAFE_URL: &str = concat!(
    arabic_numerals!(),
    roman_letters_lower!(),
    roman_letters_upper!(),
    "-._~"
);

/// Every predefined alphabet in sequence. Latin letters appear twice, once
/// from [`ROMAN_ALL`] and once from [`DEFAULT`].
pub const ALL: &str = concat!(
    chinese_numerals_lower!(),
    chinese_numerals_upper!(),
    greek_letters!(),
    roman_letters_lower!(),
    roman_letters_upper!(),
    roman_numerals!(),
    arabic_numerals!(),
    roman_letters_lower!(),
    roman_letters_upper!()
);
