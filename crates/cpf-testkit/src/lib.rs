//! # CPF Testkit
//!
//! Testing utilities for the CPF toolkit.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with the outcome every implementation must report
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic digit sources for driving the generator
//!
//! ## Golden Vectors
//!
//! ```rust
//! use cpf_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, observed) in verify_all_vectors() {
//!     assert!(matches, "{name}: {observed:?}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cpf_testkit::generators::spaced_cpf;
//!
//! proptest! {
//!     #[test]
//!     fn spaces_are_ignored((cpf, text) in spaced_cpf()) {
//!         prop_assert_eq!(cpf_core::parse(&text), Ok(cpf));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use cpf_testkit::fixtures::scripted_generator;
//!
//! let mut gen = scripted_generator(&["123456789"]);
//! assert_eq!(gen.next_cpf().to_formatted(), "123.456.789-09");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{cpf_from_base, scripted_generator, SequenceDigits};
pub use generators::{cpf, spaced_cpf};
pub use vectors::{all_vectors, verify_all_vectors, Expected, GoldenVector, Outcome};
