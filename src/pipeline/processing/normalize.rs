//! Street address normalization: ordinal suffixes for street numbers
//! ("5 Avenue" becomes "5th Avenue").

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of ASCII digits, whitespace, then the rest of the address
static NUMBERED_STREET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s+(.+)").expect("valid street number pattern"));

/// English ordinal suffix for `n`
pub fn ordinal_suffix(n: u64) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Insert the ordinal suffix after the first numeral followed by more text.
///
/// The suffix is placed after the first textual occurrence of the matched numeral,
/// which is not necessarily the matched position when the same digits appear earlier.
/// Input without such a numeral is returned unchanged.
pub fn normalize(address: &str) -> String {
    let Some(captures) = NUMBERED_STREET.captures(address) else {
        return address.to_string();
    };
    let Some(numeral) = captures.get(1).map(|m| m.as_str()) else {
        return address.to_string();
    };

    let suffix = ordinal_suffix(last_two_digits(numeral));
    address.replacen(numeral, &format!("{numeral}{suffix}"), 1)
}

/// Ordinal rules only look at the last two digits, so long numerals never overflow
fn last_two_digits(numeral: &str) -> u64 {
    let tail = &numeral[numeral.len().saturating_sub(2)..];
    tail.parse().unwrap_or(0)
}
