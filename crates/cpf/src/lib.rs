//! # CPF Toolkit
//!
//! Generation and validation of Brazilian CPF (individual taxpayer registry)
//! identifiers.
//!
//! ## Overview
//!
//! A CPF is eleven decimal digits: nine base digits followed by two check
//! digits computed with a weighted sum modulo 11. This crate provides:
//!
//! - **Validation**: normalize an input, match it against the accepted shapes
//!   (`DDD.DDD.DDD-DD` or eleven bare digits), and verify the check digits
//! - **Generation**: draw a random base and append its check digits
//!
//! Generated identifiers are synthetic. They are checksum-valid but do not
//! belong to anyone and must never be presented as real.
//!
//! ## Usage
//!
//! ```rust
//! use cpf::{generate, validate};
//!
//! assert!(validate("123.456.789-09"));
//! assert!(validate("12345678909"));
//! assert!(!validate("123.456.789-10"));
//!
//! let synthetic = generate();
//! assert!(validate(&synthetic));
//! ```
//!
//! For configured output or rejection reasons, use [`CpfToolkit`]:
//!
//! ```rust
//! use cpf::{CpfFormat, CpfToolkit, ToolkitConfig};
//!
//! let mut toolkit = CpfToolkit::random(ToolkitConfig {
//!     format: CpfFormat::Raw,
//!     ..Default::default()
//! });
//! let batch = toolkit.generate_batch(3).unwrap();
//! assert!(batch.iter().all(|c| c.len() == 11));
//! ```
//!
//! ## Re-exports
//!
//! - `cpf::core` - Core primitives (Cpf, BaseDigits, checksum engine, etc.)

pub mod config;
pub mod error;
pub mod logging;
pub mod toolkit;

// Re-export component crate
pub use cpf_core as core;

// Re-export main types for convenience
pub use config::ToolkitConfig;
pub use error::{CpfError, Result};
pub use toolkit::CpfToolkit;

// Re-export commonly used core types
pub use cpf_core::{
    generate, parse, validate, BaseDigits, CheckDigits, Cpf, CpfFormat, DigitSource, Generator,
    RandomDigits, ValidationError,
};
