//! Test fixtures and helpers.
//!
//! Deterministic digit sources for driving the generator in tests.

use cpf_core::{BaseDigits, Cpf, DigitSource, Generator};

/// A digit source that replays a fixed list, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceDigits {
    digits: Vec<u8>,
    pos: usize,
}

impl SequenceDigits {
    /// Replay `digits` in order. An empty list yields zeros.
    pub fn new(digits: impl Into<Vec<u8>>) -> Self {
        Self {
            digits: digits.into(),
            pos: 0,
        }
    }

    /// Replay the digits of one or more base strings, back to back.
    ///
    /// Panics if any string is not nine ASCII digits.
    pub fn from_bases(bases: &[&str]) -> Self {
        let digits = bases
            .iter()
            .flat_map(|b| match BaseDigits::from_ascii(b) {
                Ok(base) => *base.as_digits(),
                Err(e) => panic!("bad base {b:?}: {e}"),
            })
            .collect::<Vec<_>>();
        Self::new(digits)
    }

    /// How many digits have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl DigitSource for SequenceDigits {
    fn next_digit(&mut self) -> u8 {
        if self.digits.is_empty() {
            return 0;
        }
        let d = self.digits[self.pos % self.digits.len()];
        self.pos += 1;
        d
    }
}

/// A generator that yields the given bases in order, then repeats.
pub fn scripted_generator(bases: &[&str]) -> Generator<SequenceDigits> {
    Generator::new(SequenceDigits::from_bases(bases))
}

/// Build a CPF from a base string.
///
/// Panics if the string is not nine ASCII digits.
pub fn cpf_from_base(base: &str) -> Cpf {
    match BaseDigits::from_ascii(base) {
        Ok(b) => Cpf::from_base(b),
        Err(e) => panic!("bad base {base:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_cycles() {
        let mut source = SequenceDigits::new(vec![1, 2, 3]);
        let drawn: Vec<u8> = (0..7).map(|_| source.next_digit()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(source.drawn(), 7);
    }

    #[test]
    fn test_empty_sequence_yields_zeros() {
        let mut gen = Generator::new(SequenceDigits::new(Vec::new()));
        assert_eq!(gen.next_cpf().to_formatted(), "000.000.000-00");
    }

    #[test]
    fn test_scripted_generator_order() {
        let gen = scripted_generator(&["123456789", "987654321"]);
        let out: Vec<String> = gen.take(3).map(|c| c.to_formatted()).collect();
        assert_eq!(out, vec!["123.456.789-09", "987.654.321-00", "123.456.789-09"]);
    }

    #[test]
    fn test_cpf_from_base() {
        assert_eq!(cpf_from_base("145382206").to_raw(), "14538220620");
    }
}
