//! Codec builder
//!
//! Collects depth and precision settings and validates them once, when the
//! codec is built.

use crate::compute::codec::Codec;
use crate::config::CodecConfig;
use crate::error::Result;

/// Builder for a [`Codec`] with custom depth and decode precision.
#[derive(Debug, Default)]
pub struct CodecBuilder {
    config: CodecConfig,
}

impl CodecBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: CodecConfig::default(),
        }
    }

    /// Number of interleaved bits per hash.
    pub fn depth(mut self, depth: u32) -> Self {
        self.config = self.config.with_depth(depth);
        self
    }

    /// Hash length in characters; shorthand for `depth(5 * len)`.
    pub fn hash_len(self, len: u32) -> Self {
        self.depth(len.saturating_mul(5))
    }

    /// Decimal digits kept by `decode`.
    pub fn precision(mut self, precision: u32) -> Self {
        self.config = self.config.with_precision(precision);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the codec.
    pub fn build(self) -> Result<Codec> {
        Codec::with_config(&self.config)
    }
}
