//! Configuration for the extractor

use serde::{Deserialize, Serialize};

/// Configuration for feature extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Minimum tokens a noun chunk must span to count as a feature
    pub min_chunk_tokens: usize,

    /// Maximum tokens a noun chunk may span
    pub max_chunk_tokens: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_chunk_tokens == 0 {
            return Err("min_chunk_tokens must be greater than 0".to_string());
        }
        if self.max_chunk_tokens < self.min_chunk_tokens {
            return Err("max_chunk_tokens cannot be below min_chunk_tokens".to_string());
        }
        Ok(())
    }

    /// Strict preset: short chunks only, for dense claim language
    pub fn strict() -> Self {
        Self {
            min_chunk_tokens: 2,
            max_chunk_tokens: 5,
        }
    }

    /// Lenient preset: admit long compound noun phrases
    pub fn lenient() -> Self {
        Self {
            min_chunk_tokens: 2,
            max_chunk_tokens: 12,
        }
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    /// Default configuration: single-word chunks excluded, generous maximum
    fn default() -> Self {
        Self {
            min_chunk_tokens: 2,
            max_chunk_tokens: 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ExtractorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ExtractorConfig::strict().validate().is_ok());
        assert!(ExtractorConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_invalid_min() {
        let mut config = ExtractorConfig::default();
        config.min_chunk_tokens = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_below_min() {
        let mut config = ExtractorConfig::default();
        config.max_chunk_tokens = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config.min_chunk_tokens, parsed.min_chunk_tokens);
        assert_eq!(config.max_chunk_tokens, parsed.max_chunk_tokens);
    }
}
