//! Synthetic CPF generation.
//!
//! Generated identifiers are checksum-valid but fictitious. They must not be
//! presented as real registrations.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::types::{BaseDigits, Cpf, BASE_LEN};

/// A source of decimal digits.
///
/// Implementations should yield values in 0..=9. Anything larger is reduced
/// modulo 10 by the generator.
pub trait DigitSource {
    fn next_digit(&mut self) -> u8;

    /// Draw nine digits for a base.
    fn next_base(&mut self) -> BaseDigits {
        let mut digits = [0u8; BASE_LEN];
        for d in digits.iter_mut() {
            *d = self.next_digit() % 10;
        }
        BaseDigits::from_reduced(digits)
    }
}

/// Uniform digits drawn from a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RandomDigits<R> {
    rng: R,
}

/// Digits from the thread-local RNG.
pub type ThreadDigits = RandomDigits<ThreadRng>;

impl<R: Rng> RandomDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl ThreadDigits {
    /// Digits from the thread-local RNG.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for ThreadDigits {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> DigitSource for RandomDigits<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..=9)
    }
}

/// Produces checksum-valid CPFs from a digit source.
///
/// Also an endless [`Iterator`], so `generator.take(n)` yields a batch.
#[derive(Debug, Clone)]
pub struct Generator<S> {
    source: S,
}

impl Generator<ThreadDigits> {
    /// A generator backed by the thread-local RNG.
    pub fn random() -> Self {
        Self::new(RandomDigits::thread())
    }
}

impl<S: DigitSource> Generator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generate the next CPF.
    pub fn next_cpf(&mut self) -> Cpf {
        Cpf::from_base(self.source.next_base())
    }

    /// Consume the generator and return its source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: DigitSource> Iterator for Generator<S> {
    type Item = Cpf;

    fn next(&mut self) -> Option<Cpf> {
        Some(self.next_cpf())
    }
}

/// Generate one formatted synthetic CPF using the thread-local RNG.
pub fn generate() -> String {
    Generator::random().next_cpf().to_formatted()
}
