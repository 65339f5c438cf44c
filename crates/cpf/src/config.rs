//! Toolkit configuration.

use cpf_core::CpfFormat;
use serde::{Deserialize, Serialize};

/// Default upper bound for a single generated batch.
pub const DEFAULT_MAX_BATCH: usize = 10_000;

/// Configuration for the toolkit.
///
/// Every field has a default, so a host application can embed this in its
/// own config file and set only what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Shape of generated identifiers.
    pub format: CpfFormat,
    /// Largest batch `generate_batch` will produce.
    pub max_batch: usize,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            format: CpfFormat::Formatted,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ToolkitConfig::default();
        assert_eq!(config.format, CpfFormat::Formatted);
        assert_eq!(config.max_batch, DEFAULT_MAX_BATCH);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: ToolkitConfig = serde_json::from_str(r#"{"format":"raw"}"#).unwrap();
        assert_eq!(config.format, CpfFormat::Raw);
        assert_eq!(config.max_batch, DEFAULT_MAX_BATCH);

        let empty: ToolkitConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ToolkitConfig::default());
    }
}
