//! Codec configuration
//!
//! Depth and decode precision can be loaded from JSON (or TOML with the
//! `toml` feature); missing fields take their defaults.
use crate::compute::codec::{DEFAULT_DEPTH, DEFAULT_PRECISION};
use crate::compute::validation::{validate_precision, validate_string_depth};
use crate::error::{GeohashError, Result};
use serde::de::Error;

/// Precision above which decoded digits are mostly floating-point noise.
const NOISY_PRECISION: u32 = 12;

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Interleaved bits per hash; a multiple of 5 between 5 and 60
    #[serde(default = "CodecConfig::default_depth")]
    pub depth: u32,

    /// Decimal digits kept when decoding to a coordinate
    #[serde(default = "CodecConfig::default_precision")]
    pub precision: u32,
}

impl CodecConfig {
    const fn default_depth() -> u32 {
        DEFAULT_DEPTH
    }

    const fn default_precision() -> u32 {
        DEFAULT_PRECISION
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        if precision > NOISY_PRECISION {
            log::warn!(
                "Decode precision of {} digits exceeds what a geohash cell can resolve; \
                trailing digits are floating-point noise",
                precision
            );
        }
        self.precision = precision;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_string_depth(self.depth)?;
        validate_precision(self.precision)?;
        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: CodecConfig = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(GeohashError::from)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: CodecConfig = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            depth: Self::default_depth(),
            precision: Self::default_precision(),
        }
    }
}
