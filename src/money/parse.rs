// ============================================================================
// Currency String Scanner
// Procedural equivalent of the grammar ^\$?(-?)\$?([\d,]*)\.?(\d{0,N})$
// ============================================================================

use super::errors::{MoneyError, MoneyResult};

/// Scans a currency string into (negative, dollars, fraction digits).
///
/// The grammar, matched against the whole input with no trimming:
/// - optional `$`, optional `-`, optional second `$` (the sign may sit
///   before or after the dollar sign);
/// - a possibly empty run of ASCII digits and thousands commas (commas
///   are stripped, an empty run is zero);
/// - an optional `.` followed by zero to `max_frac_digits` ASCII digits.
///
/// Degenerate inputs the grammar accepts (`""`, `"$"`, `"-"`, `"."`,
/// comma-only runs) scan to zero; callers wanting stricter behavior
/// reject them before scanning.
///
/// # Errors
/// - `Parse` if the input does not match the grammar in full.
/// - `Overflow` if the dollar digits exceed integer capacity.
pub(crate) fn scan_currency(s: &str, max_frac_digits: usize) -> MoneyResult<(bool, u64, &str)> {
    let mut rest = s;
    if let Some(r) = rest.strip_prefix('$') {
        rest = r;
    }
    let negative = if let Some(r) = rest.strip_prefix('-') {
        rest = r;
        true
    } else {
        false
    };
    if let Some(r) = rest.strip_prefix('$') {
        rest = r;
    }

    // Integer part: longest run of digits and commas
    let int_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == ','))
        .unwrap_or(rest.len());
    let (int_part, mut rest) = rest.split_at(int_len);

    if let Some(r) = rest.strip_prefix('.') {
        rest = r;
    }

    // Whatever remains must be the fraction, digits only
    let frac = rest;
    if frac.len() > max_frac_digits || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyError::Parse(s.to_string()));
    }

    let dollars = parse_dollar_digits(int_part)?;
    Ok((negative, dollars, frac))
}

/// Strips commas and converts the integer part, treating empty as zero.
fn parse_dollar_digits(digits: &str) -> MoneyResult<u64> {
    let cleaned: String = digits.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned.parse::<u64>().map_err(|_| {
        MoneyError::Overflow(format!("dollar amount {cleaned} exceeds integer capacity"))
    })
}

/// Converts up to two fraction digits to a 0–99 value: a single digit is
/// tenths and scales by ten ("4" is 40), two digits are taken verbatim.
///
/// Callers guarantee at most two ASCII digits.
pub(crate) fn two_digit_value(digits: &str) -> u8 {
    let bytes = digits.as_bytes();
    match bytes.len() {
        0 => 0,
        1 => (bytes[0] - b'0') * 10,
        _ => (bytes[0] - b'0') * 10 + (bytes[1] - b'0'),
    }
}
