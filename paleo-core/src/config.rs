//! Recognizer configuration

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Initial capacity of a new stroke, in points
    pub const INITIAL_CAPACITY: usize = 100;

    /// Largest capacity hint the native `int` size parameter can carry
    pub const MAX_INITIAL_CAPACITY: usize = i32::MAX as usize;
}

/// How calls into the native library are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallPolicy {
    /// Serialize unless the library declares itself reentrant
    #[default]
    Auto,
    /// Always hold the process-wide native lock
    Serialized,
    /// Skip the lock, but only for libraries that declare themselves
    /// reentrant; a non-reentrant library is still serialized
    Concurrent,
}

/// Recognizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecognizerConfig {
    /// Capacity hint for strokes created by the binding
    pub initial_capacity: usize,
    /// Scheduling of native calls
    pub call_policy: CallPolicy,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            initial_capacity: defaults::INITIAL_CAPACITY,
            call_policy: CallPolicy::default(),
        }
    }
}

impl RecognizerConfig {
    /// Create a configuration builder
    pub fn builder() -> RecognizerConfigBuilder {
        RecognizerConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.initial_capacity > defaults::MAX_INITIAL_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity must be at most {}, got {}",
                defaults::MAX_INITIAL_CAPACITY,
                self.initial_capacity
            )));
        }
        Ok(())
    }

    /// Whether native calls must be serialized for a library with the given
    /// reentrancy
    pub(crate) fn serializes(&self, library_reentrant: bool) -> bool {
        match self.call_policy {
            CallPolicy::Auto | CallPolicy::Concurrent => !library_reentrant,
            CallPolicy::Serialized => true,
        }
    }
}

/// Fluent builder for [`RecognizerConfig`]
#[derive(Debug, Default)]
pub struct RecognizerConfigBuilder {
    initial_capacity: Option<usize>,
    call_policy: Option<CallPolicy>,
}

impl RecognizerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity hint for new strokes
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Set the call policy
    pub fn call_policy(mut self, policy: CallPolicy) -> Self {
        self.call_policy = Some(policy);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> ConfigResult<RecognizerConfig> {
        let config = RecognizerConfig {
            initial_capacity: self
                .initial_capacity
                .unwrap_or(defaults::INITIAL_CAPACITY),
            call_policy: self.call_policy.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }
}
