//! Configuration loader for the stack trace parser.
//!
//! `defaults/stacktrace.default.toml` is embedded so docs and runtime behavior stay
//! in sync. Callers layer their own files on top via [`Loader`] and turn the result
//! into [`ParseOptions`].

use crate::stacktrace::{ParseOptions, SectionPolicy};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/stacktrace.default.toml");

/// Top-level parser configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StacktraceConfig {
    pub sections: SectionsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionsConfig {
    pub policy: SectionPolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LimitsConfig {
    #[serde(default)]
    pub max_input_bytes: Option<usize>,
}

impl From<&StacktraceConfig> for ParseOptions {
    fn from(config: &StacktraceConfig) -> Self {
        ParseOptions {
            section_policy: config.sections.policy,
            max_input_bytes: config.limits.max_input_bytes,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<StacktraceConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StacktraceConfig, ConfigError> {
    Loader::new().build()
}
