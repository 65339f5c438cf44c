//! CPF validation: normalization, shape matching, and check digit comparison.
//!
//! Spaces are removed before the shape is matched, so `"1 23.456.789-09"`
//! is treated exactly like `"123.456.789-09"`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::checksum::check_digits;
use crate::error::ValidationError;
use crate::types::{BaseDigits, CheckDigits, Cpf, BASE_LEN, CPF_LEN};

static FORMATTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").unwrap());

static RAW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{11}$").unwrap());

/// Which of the accepted input shapes matched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    /// `DDD.DDD.DDD-DD`
    Formatted,
    /// Eleven consecutive digits.
    Raw,
}

/// Remove every space character from the input.
///
/// Only U+0020 is removed; tabs and other whitespace are left in place and
/// will fail shape matching.
pub fn normalize(input: &str) -> String {
    input.replace(' ', "")
}

/// Match a normalized string against the accepted shapes.
pub fn match_shape(s: &str) -> Option<Shape> {
    if FORMATTED.is_match(s) {
        Some(Shape::Formatted)
    } else if RAW.is_match(s) {
        Some(Shape::Raw)
    } else {
        None
    }
}

/// Parse and verify a CPF, reporting why it was rejected.
pub fn parse(input: &str) -> Result<Cpf, ValidationError> {
    let normalized = normalize(input);

    let Some(shape) = match_shape(&normalized) else {
        debug!(input = %mask(&normalized), "invalid format");
        return Err(ValidationError::InvalidFormat);
    };

    // Shape matching guarantees exactly eleven ASCII digits remain.
    let mut digits = [0u8; CPF_LEN];
    for (slot, b) in digits
        .iter_mut()
        .zip(normalized.bytes().filter(u8::is_ascii_digit))
    {
        *slot = b - b'0';
    }

    let mut base = [0u8; BASE_LEN];
    base.copy_from_slice(&digits[..BASE_LEN]);
    let base = BaseDigits::from_reduced(base);

    let expected = check_digits(&base);
    let found = CheckDigits {
        first: digits[9],
        second: digits[10],
    };

    if expected != found {
        debug!(
            input = %mask(&normalized),
            %expected,
            %found,
            "check digit mismatch"
        );
        return Err(ValidationError::CheckDigitMismatch { expected, found });
    }

    trace!(?shape, "valid cpf");
    Ok(Cpf::from_parts(base, found))
}

/// Return true iff the input is a correctly checksummed CPF.
pub fn validate(input: &str) -> bool {
    parse(input).is_ok()
}

/// Keep only the last two characters so logs never carry a full identifier.
fn mask(s: &str) -> String {
    let count = s.chars().count();
    s.chars()
        .enumerate()
        .map(|(i, c)| if i + 2 < count { '*' } else { c })
        .collect()
}
