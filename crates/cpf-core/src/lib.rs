//! # CPF Core
//!
//! Pure primitives for Brazilian CPF identifiers: digit types, the modulo-11
//! check digit engine, synthetic generation, and validation.
//!
//! This crate contains no I/O. The only side effect is drawing randomness
//! in the generator, and that sits behind the [`DigitSource`] trait.
//!
//! ## Key Types
//!
//! - [`Cpf`] - An identifier whose check digits are known to be correct
//! - [`BaseDigits`] - The nine digits both check digits derive from
//! - [`CheckDigits`] - The trailing pair computed by [`check_digits`]
//! - [`Generator`] - Produces synthetic identifiers from a [`DigitSource`]
//!
//! Generated identifiers are fictitious and must not be presented as real.

pub mod checksum;
pub mod error;
pub mod generator;
pub mod types;
pub mod validation;

pub use checksum::{check_digit, check_digits};
pub use error::{CoreError, ValidationError};
pub use generator::{generate, DigitSource, Generator, RandomDigits, ThreadDigits};
pub use types::{BaseDigits, CheckDigits, Cpf, CpfFormat, BASE_LEN, CPF_LEN};
pub use validation::{match_shape, normalize, parse, validate, Shape};
