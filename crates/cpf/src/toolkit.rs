//! The toolkit: generation and validation behind one configured handle.

use cpf_core::{parse, Cpf, DigitSource, Generator, RandomDigits, ThreadDigits};
use tracing::debug;

use crate::config::ToolkitConfig;
use crate::error::{CpfError, Result};

/// Generates and validates CPFs according to a [`ToolkitConfig`].
///
/// Generated identifiers are synthetic and must not be presented as real.
#[derive(Debug)]
pub struct CpfToolkit<S: DigitSource> {
    generator: Generator<S>,
    config: ToolkitConfig,
}

impl CpfToolkit<ThreadDigits> {
    /// A toolkit backed by the thread-local RNG.
    pub fn random(config: ToolkitConfig) -> Self {
        Self::new(RandomDigits::thread(), config)
    }
}

impl<S: DigitSource> CpfToolkit<S> {
    /// Create a toolkit drawing digits from `source`.
    pub fn new(source: S, config: ToolkitConfig) -> Self {
        Self {
            generator: Generator::new(source),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────────────────────

    /// Generate one CPF value.
    pub fn generate_cpf(&mut self) -> Cpf {
        self.generator.next_cpf()
    }

    /// Generate one CPF rendered in the configured format.
    pub fn generate(&mut self) -> String {
        self.generate_cpf().format(self.config.format)
    }

    /// Generate `count` CPFs rendered in the configured format.
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<String>> {
        if count > self.config.max_batch {
            return Err(CpfError::BatchTooLarge {
                requested: count,
                limit: self.config.max_batch,
            });
        }

        let format = self.config.format;
        let batch = self
            .generator
            .by_ref()
            .take(count)
            .map(|cpf| cpf.format(format))
            .collect();

        debug!(count, ?format, "generated batch");
        Ok(batch)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Validation
    // ─────────────────────────────────────────────────────────────────────────

    /// Parse and verify an input, reporting why it was rejected.
    pub fn check(&self, input: &str) -> Result<Cpf> {
        Ok(parse(input)?)
    }

    /// Return true iff the input is a correctly checksummed CPF.
    pub fn validate(&self, input: &str) -> bool {
        cpf_core::validate(input)
    }
}
