//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cpf_core::{BaseDigits, Cpf, CpfFormat};

/// Generate nine base digits.
pub fn base_digits() -> impl Strategy<Value = BaseDigits> {
    prop::array::uniform9(0u8..=9).prop_map(|raw| {
        BaseDigits::new(raw).unwrap_or_else(|e| panic!("strategy produced {e}"))
    })
}

/// Generate a checksum-valid CPF.
pub fn cpf() -> impl Strategy<Value = Cpf> {
    base_digits().prop_map(Cpf::from_base)
}

/// Generate an output format.
pub fn cpf_format() -> impl Strategy<Value = CpfFormat> {
    prop_oneof![Just(CpfFormat::Formatted), Just(CpfFormat::Raw)]
}

/// Generate a valid CPF rendered in either accepted shape.
pub fn cpf_text() -> impl Strategy<Value = (Cpf, String)> {
    (cpf(), cpf_format()).prop_map(|(c, f)| (c, c.format(f)))
}

/// Insert up to `max_run` spaces before each character and at the end.
pub fn with_spaces(text: String, max_run: usize) -> impl Strategy<Value = String> {
    let slots = text.chars().count() + 1;
    prop::collection::vec(0..=max_run, slots).prop_map(move |runs| {
        let mut out = String::with_capacity(text.len() + runs.iter().sum::<usize>());
        for (c, &n) in text.chars().zip(runs.iter()) {
            out.extend(std::iter::repeat(' ').take(n));
            out.push(c);
        }
        out.extend(std::iter::repeat(' ').take(runs[slots - 1]));
        out
    })
}

/// Generate a valid CPF with arbitrary spaces injected.
pub fn spaced_cpf() -> impl Strategy<Value = (Cpf, String)> {
    cpf_text().prop_flat_map(|(c, text)| with_spaces(text, 3).prop_map(move |s| (c, s)))
}

/// Generate a string drawn from CPF-like characters, mostly malformed.
pub fn cpf_like_noise() -> impl Strategy<Value = String> {
    "[0-9 .\\-a-z]{0,18}".prop_map(String::from)
}
