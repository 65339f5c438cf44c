//! Modulo-11 check digit computation.
//!
//! Each check digit is a weighted sum of the preceding digits, with weights
//! counting down to 2. The first uses the nine base digits with weights
//! 10..=2, the second appends the first check digit and uses 11..=2.

use crate::types::{BaseDigits, CheckDigits, BASE_LEN};

/// Compute one check digit over `digits`, starting at `start_weight`.
///
/// The weight decreases by one per digit, so `digits.len()` is expected to
/// be `start_weight - 1`. A result of 10 or 11 (remainder 1 or 0) maps to 0.
pub fn check_digit(digits: &[u8], start_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip((2..=start_weight).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();

    match 11 - sum % 11 {
        d if d > 9 => 0,
        d => d as u8,
    }
}

/// Compute both check digits for a base.
pub fn check_digits(base: &BaseDigits) -> CheckDigits {
    let mut digits = [0u8; BASE_LEN + 1];
    digits[..BASE_LEN].copy_from_slice(base.as_digits());

    let first = check_digit(&digits[..BASE_LEN], 10);
    digits[BASE_LEN] = first;
    let second = check_digit(&digits, 11);

    CheckDigits { first, second }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base(s: &str) -> BaseDigits {
        BaseDigits::from_ascii(s).unwrap()
    }

    fn weighted_sum(digits: &[u8], start_weight: u32) -> u32 {
        digits
            .iter()
            .enumerate()
            .map(|(i, &d)| u32::from(d) * (start_weight - i as u32))
            .sum()
    }

    #[test]
    fn test_known_base() {
        let check = check_digits(&base("123456789"));
        assert_eq!(check, CheckDigits { first: 0, second: 9 });
    }

    #[test]
    fn test_first_digit_remainder_zero() {
        // 9*10 + 8*9 + ... + 1*2 = 330, 330 mod 11 = 0
        let digits = base("987654321");
        assert_eq!(weighted_sum(digits.as_digits(), 10) % 11, 0);
        assert_eq!(check_digit(digits.as_digits(), 10), 0);
    }

    #[test]
    fn test_first_digit_remainder_one() {
        // sum 210, 210 mod 11 = 1
        let digits = base("123456789");
        assert_eq!(weighted_sum(digits.as_digits(), 10) % 11, 1);
        assert_eq!(check_digit(digits.as_digits(), 10), 0);
    }

    #[test]
    fn test_second_digit_remainder_zero() {
        let check = check_digits(&base("145382206"));
        assert_eq!(check, CheckDigits { first: 2, second: 0 });
        assert_eq!(weighted_sum(&[1, 4, 5, 3, 8, 2, 2, 0, 6, 2], 11) % 11, 0);
    }

    #[test]
    fn test_second_digit_remainder_one() {
        let check = check_digits(&base("987654321"));
        assert_eq!(check, CheckDigits { first: 0, second: 0 });
        assert_eq!(weighted_sum(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0], 11) % 11, 1);
    }

    #[test]
    fn test_all_zeros() {
        let check = check_digits(&base("000000000"));
        assert_eq!(check, CheckDigits { first: 0, second: 0 });
    }

    #[test]
    fn test_non_wrapping_digits() {
        assert_eq!(
            check_digits(&base("111111111")),
            CheckDigits { first: 1, second: 1 }
        );
        assert_eq!(
            check_digits(&base("529982247")),
            CheckDigits { first: 2, second: 5 }
        );
    }

    proptest! {
        #[test]
        fn test_check_digits_deterministic(raw in prop::array::uniform9(0u8..=9)) {
            let b = BaseDigits::new(raw).unwrap();
            prop_assert_eq!(check_digits(&b), check_digits(&b));
        }

        #[test]
        fn test_check_digit_matches_definition(raw in prop::array::uniform9(0u8..=9)) {
            let b = BaseDigits::new(raw).unwrap();
            let expected = match 11 - weighted_sum(&raw, 10) % 11 {
                d if d > 9 => 0,
                d => d as u8,
            };
            let check = check_digits(&b);
            prop_assert_eq!(check.first, expected);
            prop_assert!(check.first <= 9);
            prop_assert!(check.second <= 9);
        }
    }
}
