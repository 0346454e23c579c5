//! Configuration for the compiler.
//!
//! `CompileConfig` centralizes the input-size rail and the training knobs so
//! no limit is hardcoded at a call site.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitBehavior {
    ReturnPartialResult,
    ReturnError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Maximum length, in chars, accepted for either input string. Alignment
    /// is `O(m*n)` and synthesis emits `O(m+n)` rotations per edit, so this
    /// rail bounds both table size and program length.
    pub max_align_len: u32,
    pub on_limit_exceeded: LimitBehavior,
    /// Attempt cap for the Monte-Carlo permutation search in
    /// [`train`](crate::train). Never consulted by `compile`.
    pub max_train_attempts: u32,
    /// Seed for the permutation search; `None` draws from OS entropy.
    pub train_seed: Option<u64>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            max_align_len: 10_000,
            on_limit_exceeded: LimitBehavior::ReturnPartialResult,
            max_train_attempts: 10_000,
            train_seed: None,
        }
    }
}

impl CompileConfig {
    pub fn builder() -> CompileConfigBuilder {
        CompileConfigBuilder {
            inner: CompileConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_zero_u32(self.max_align_len, "max_align_len")?;
        ensure_non_zero_u32(self.max_train_attempts, "max_train_attempts")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

fn ensure_non_zero_u32(value: u32, field: &'static str) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositiveLimit {
            field,
            value: value as u64,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct CompileConfigBuilder {
    inner: CompileConfig,
}

impl CompileConfigBuilder {
    pub fn new() -> Self {
        CompileConfig::builder()
    }

    pub fn max_align_len(mut self, value: u32) -> Self {
        self.inner.max_align_len = value;
        self
    }

    pub fn on_limit_exceeded(mut self, value: LimitBehavior) -> Self {
        self.inner.on_limit_exceeded = value;
        self
    }

    pub fn max_train_attempts(mut self, value: u32) -> Self {
        self.inner.max_train_attempts = value;
        self
    }

    pub fn train_seed(mut self, value: Option<u64>) -> Self {
        self.inner.train_seed = value;
        self
    }

    pub fn build(self) -> Result<CompileConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
