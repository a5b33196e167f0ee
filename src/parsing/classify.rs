//! Classification of decimal tokens by mantissa length
//!
//! The mantissa length of a decimal literal is the digit count of its
//! significand after sign, decimal point, exponent suffix, and leading zeros
//! are stripped. It is a property of the text, not of the number: `1.23`,
//! `1.230`, and `1.2300` denote the same value but have mantissa lengths 3,
//! 4, and 5.
//!
//! No validation happens here. A malformed token degrades to whatever length
//! the stripping rules leave behind, so every input lands in some group.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for parts of a number that never contribute mantissa digits:
/// signs, the decimal point, and an exponent marker with everything after it.
static NUMBER_CRUFT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+\-.]|[eE].+").unwrap());

/// Regex for zeros that come before any other character.
static LEADING_ZEROS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0+").unwrap());

/// Group text representations of decimal numbers by mantissa length.
///
/// Every input token lands in exactly one group, and each group keeps its
/// members in input order. Keys are sorted, being a `BTreeMap`, which keeps
/// serialized output and assertions deterministic.
pub fn group_by_mantissa_length<I>(decimals: I) -> BTreeMap<usize, Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for decimal in decimals {
        let decimal = decimal.into();
        groups
            .entry(mantissa_length(&decimal))
            .or_default()
            .push(decimal);
    }
    groups
}

/// Given a decimal number as text, count mantissa digits.
///
/// A token consisting entirely of zeros (like `0.000`) has no significand
/// left after stripping and yields 0. Trailing zeros after the first nonzero
/// digit are significant: `1.000` strips to `1000`, mantissa length 4.
pub fn mantissa_length(decimal: &str) -> usize {
    let all_figures = NUMBER_CRUFT.replace_all(decimal, "");
    let mantissa_figures = LEADING_ZEROS.replace(&all_figures, "");
    mantissa_figures.len()
}
