//! Golden test vectors for validation.
//!
//! Each vector pairs an input string with the outcome every implementation
//! must report for it.

use cpf_core::{parse, ValidationError};

/// Expected outcome for a golden vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Valid, rendering to this formatted string.
    Valid(&'static str),
    /// Rejected at shape matching.
    InvalidFormat,
    /// Well-shaped but with wrong check digits.
    CheckDigitMismatch,
}

impl Expected {
    /// Whether an observed outcome satisfies this expectation.
    pub fn matches(&self, outcome: &Outcome) -> bool {
        match (self, outcome) {
            (Expected::Valid(want), Outcome::Valid(got)) => *want == got.as_str(),
            (Expected::InvalidFormat, Outcome::InvalidFormat) => true,
            (Expected::CheckDigitMismatch, Outcome::CheckDigitMismatch) => true,
            _ => false,
        }
    }
}

/// Outcome the validator actually reports for an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid(String),
    InvalidFormat,
    CheckDigitMismatch,
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input passed to the validator.
    pub input: &'static str,
    /// What the validator must report.
    pub expected: Expected,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "formatted, first digit from remainder 1",
            input: "123.456.789-09",
            expected: Expected::Valid("123.456.789-09"),
        },
        GoldenVector {
            name: "raw digits",
            input: "12345678909",
            expected: Expected::Valid("123.456.789-09"),
        },
        GoldenVector {
            name: "wrong check digits",
            input: "123.456.789-10",
            expected: Expected::CheckDigitMismatch,
        },
        GoldenVector {
            name: "letters in digit positions",
            input: "abc.def.ghi-jk",
            expected: Expected::InvalidFormat,
        },
        GoldenVector {
            name: "missing check digits",
            input: "123.456.789",
            expected: Expected::InvalidFormat,
        },
        GoldenVector {
            name: "leading spaces",
            input: "  123.456.789-09",
            expected: Expected::Valid("123.456.789-09"),
        },
        GoldenVector {
            name: "space inside first group",
            input: "1 23.456.789-09",
            expected: Expected::Valid("123.456.789-09"),
        },
        GoldenVector {
            name: "raw with spaces, second digit from remainder 0",
            input: "  145 3822 0620",
            expected: Expected::Valid("145.382.206-20"),
        },
        GoldenVector {
            name: "first digit from remainder 0, second from remainder 1",
            input: "987.654.321-00",
            expected: Expected::Valid("987.654.321-00"),
        },
        GoldenVector {
            name: "all zeros",
            input: "000.000.000-00",
            expected: Expected::Valid("000.000.000-00"),
        },
        GoldenVector {
            name: "repeated ones",
            input: "11111111111",
            expected: Expected::Valid("111.111.111-11"),
        },
        GoldenVector {
            name: "second check digit off by two",
            input: "614.826.255-02",
            expected: Expected::CheckDigitMismatch,
        },
        GoldenVector {
            name: "empty input",
            input: "",
            expected: Expected::InvalidFormat,
        },
        GoldenVector {
            name: "only spaces",
            input: "     ",
            expected: Expected::InvalidFormat,
        },
        GoldenVector {
            name: "tab is not stripped",
            input: "123.456.789-09\t",
            expected: Expected::InvalidFormat,
        },
        GoldenVector {
            name: "twelve digits",
            input: "123456789090",
            expected: Expected::InvalidFormat,
        },
    ]
}

/// Run one input through the validator.
pub fn observe(input: &str) -> Outcome {
    match parse(input) {
        Ok(cpf) => Outcome::Valid(cpf.to_formatted()),
        Err(ValidationError::InvalidFormat) => Outcome::InvalidFormat,
        Err(ValidationError::CheckDigitMismatch { .. }) => Outcome::CheckDigitMismatch,
    }
}

/// Run every vector through the validator.
///
/// Returns `(name, matches, observed)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, Outcome)> {
    all_vectors()
        .iter()
        .map(|v| {
            let observed = observe(v.input);
            (v.name.to_string(), v.expected.matches(&observed), observed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matches, observed) in verify_all_vectors() {
            assert!(matches, "vector '{}' observed {:?}", name, observed);
        }
    }

    #[test]
    fn test_vector_names_unique() {
        let vectors = all_vectors();
        for (i, a) in vectors.iter().enumerate() {
            for b in &vectors[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
