//! Strong type definitions for CPF identifiers.
//!
//! Digits are stored as numeric values (0-9), never as characters. A [`Cpf`]
//! can only be obtained through the checksum engine or the validator, so
//! holding one means its check digits are correct.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::checksum::check_digits;
use crate::error::{CoreError, ValidationError};
use crate::validation::parse;

/// Number of base digits.
pub const BASE_LEN: usize = 9;

/// Total number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// The first nine digits of a CPF, from which both check digits derive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BaseDigits([u8; BASE_LEN]);

impl BaseDigits {
    /// Create from numeric digits, rejecting anything above 9.
    pub fn new(digits: [u8; BASE_LEN]) -> Result<Self, CoreError> {
        if let Some(&d) = digits.iter().find(|&&d| d > 9) {
            return Err(CoreError::DigitOutOfRange(d));
        }
        Ok(Self(digits))
    }

    /// Wrap digits already known to be in 0..=9.
    pub(crate) const fn from_reduced(digits: [u8; BASE_LEN]) -> Self {
        Self(digits)
    }

    /// Parse a string of exactly nine ASCII digits.
    pub fn from_ascii(s: &str) -> Result<Self, CoreError> {
        let count = s.chars().count();
        if count != BASE_LEN {
            return Err(CoreError::InvalidLength {
                expected: BASE_LEN,
                got: count,
            });
        }

        let mut digits = [0u8; BASE_LEN];
        for (slot, c) in digits.iter_mut().zip(s.chars()) {
            *slot = ascii_digit(c)?;
        }
        Ok(Self(digits))
    }

    /// Get the raw digits.
    pub const fn as_digits(&self) -> &[u8; BASE_LEN] {
        &self.0
    }
}

impl TryFrom<[u8; BASE_LEN]> for BaseDigits {
    type Error = CoreError;

    fn try_from(digits: [u8; BASE_LEN]) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

/// The two trailing check digits of a CPF.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CheckDigits {
    pub first: u8,
    pub second: u8,
}

impl fmt::Display for CheckDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// Output shape for rendering a CPF.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CpfFormat {
    /// `DDD.DDD.DDD-DD`
    #[default]
    Formatted,
    /// Eleven digits, no separators.
    Raw,
}

/// A CPF whose check digits are known to be correct.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Build a CPF from its base, computing the check digits.
    pub fn from_base(base: BaseDigits) -> Self {
        let check = check_digits(&base);
        Self::from_parts(base, check)
    }

    /// Assemble without recomputing; callers must have verified `check`.
    pub(crate) fn from_parts(base: BaseDigits, check: CheckDigits) -> Self {
        let mut digits = [0u8; CPF_LEN];
        digits[..BASE_LEN].copy_from_slice(base.as_digits());
        digits[9] = check.first;
        digits[10] = check.second;
        Self(digits)
    }

    /// All eleven digits.
    pub const fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// The first nine digits.
    pub fn base(&self) -> BaseDigits {
        let mut base = [0u8; BASE_LEN];
        base.copy_from_slice(&self.0[..BASE_LEN]);
        BaseDigits(base)
    }

    /// The last two digits.
    pub const fn check_digits(&self) -> CheckDigits {
        CheckDigits {
            first: self.0[9],
            second: self.0[10],
        }
    }

    /// Render as `DDD.DDD.DDD-DD`.
    pub fn to_formatted(&self) -> String {
        let mut out = String::with_capacity(CPF_LEN + 3);
        for (i, &d) in self.0.iter().enumerate() {
            match i {
                3 | 6 => out.push('.'),
                9 => out.push('-'),
                _ => {}
            }
            out.push(char::from(b'0' + d));
        }
        out
    }

    /// Render as eleven digits with no separators.
    pub fn to_raw(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    /// Render in the requested shape.
    pub fn format(&self, format: CpfFormat) -> String {
        match format {
            CpfFormat::Formatted => self.to_formatted(),
            CpfFormat::Raw => self.to_raw(),
        }
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cpf({})", self.to_formatted())
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted())
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse(&s)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.to_formatted()
    }
}

impl From<BaseDigits> for Cpf {
    fn from(base: BaseDigits) -> Self {
        Self::from_base(base)
    }
}

fn ascii_digit(c: char) -> Result<u8, CoreError> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        other => Err(CoreError::NonDigit(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_base() -> BaseDigits {
        BaseDigits::new([1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap()
    }

    #[test]
    fn test_base_rejects_out_of_range() {
        let result = BaseDigits::new([1, 2, 3, 4, 5, 6, 7, 8, 10]);
        assert_eq!(result, Err(CoreError::DigitOutOfRange(10)));
    }

    #[test]
    fn test_base_from_ascii() {
        assert_eq!(BaseDigits::from_ascii("123456789").unwrap(), sample_base());
        assert_eq!(
            BaseDigits::from_ascii("12345678"),
            Err(CoreError::InvalidLength {
                expected: 9,
                got: 8
            })
        );
        assert_eq!(
            BaseDigits::from_ascii("12345678x"),
            Err(CoreError::NonDigit('x'))
        );
    }

    #[test]
    fn test_base_from_ascii_rejects_unicode_digits() {
        // Arabic-Indic digit seven
        let result = BaseDigits::from_ascii("12345678\u{0667}");
        assert_eq!(result, Err(CoreError::NonDigit('\u{0667}')));
    }

    #[test]
    fn test_cpf_from_base() {
        let cpf = Cpf::from_base(sample_base());
        assert_eq!(cpf.digits(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 9]);
        assert_eq!(cpf.base(), sample_base());
        assert_eq!(
            cpf.check_digits(),
            CheckDigits {
                first: 0,
                second: 9
            }
        );
    }

    #[test]
    fn test_cpf_rendering() {
        let cpf = Cpf::from_base(sample_base());
        assert_eq!(cpf.to_formatted(), "123.456.789-09");
        assert_eq!(cpf.to_raw(), "12345678909");
        assert_eq!(cpf.format(CpfFormat::Raw), "12345678909");
        assert_eq!(format!("{}", cpf), "123.456.789-09");
        assert_eq!(format!("{:?}", cpf), "Cpf(123.456.789-09)");
    }

    #[test]
    fn test_cpf_from_str() {
        let cpf: Cpf = "123.456.789-09".parse().unwrap();
        assert_eq!(cpf, Cpf::from_base(sample_base()));

        let err = "123.456.789-10".parse::<Cpf>().unwrap_err();
        assert!(matches!(err, ValidationError::CheckDigitMismatch { .. }));
    }

    #[test]
    fn test_cpf_serde() {
        let cpf = Cpf::from_base(sample_base());
        let json = serde_json::to_string(&cpf).unwrap();
        assert_eq!(json, "\"123.456.789-09\"");

        let back: Cpf = serde_json::from_str("\"12345678909\"").unwrap();
        assert_eq!(back, cpf);

        assert!(serde_json::from_str::<Cpf>("\"123.456.789-10\"").is_err());
    }

    #[test]
    fn test_format_serde_names() {
        assert_eq!(serde_json::to_string(&CpfFormat::Raw).unwrap(), "\"raw\"");
        let f: CpfFormat = serde_json::from_str("\"formatted\"").unwrap();
        assert_eq!(f, CpfFormat::Formatted);
    }
}
