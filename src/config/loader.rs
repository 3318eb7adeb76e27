// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> ReaderSettings (validated)
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};

use super::ReaderSettings;
use crate::error::{ConfigError, Result};

/// Where a settings layer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsOrigin {
    File(PathBuf),
    OptionalFile(PathBuf),
    Inline,
}

impl fmt::Display for SettingsOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "[file] {}", path.display()),
            Self::OptionalFile(path) => write!(f, "[optional] {}", path.display()),
            Self::Inline => write!(f, "[string] <string>"),
        }
    }
}

/// Builder for loading reader settings from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<config::Map<String, String>>,
    origins: Vec<SettingsOrigin>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_vars: None,
            origins: Vec::new(),
        }
    }

    fn layer(mut self, source: File<config::FileSourceFile, FileFormat>) -> Self {
        self.builder = self.builder.add_source(source);
        self
    }

    /// Adds a TOML settings file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.layer(File::from(path).format(FileFormat::Toml).required(true));
        loader.origins.push(SettingsOrigin::File(path.to_path_buf()));
        loader
    }

    /// Adds a TOML settings file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(self, path: P) -> Self {
        let path = path.as_ref();
        let mut loader = self.layer(File::from(path).format(FileFormat::Toml).required(false));
        if path.exists() {
            loader
                .origins
                .push(SettingsOrigin::OptionalFile(path.to_path_buf()));
        }
        loader
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.origins.push(SettingsOrigin::Inline);
        self
    }

    /// Reads `<PREFIX>_SECTION__KEY` variables; `boolean.falsy` is a
    /// comma-separated list.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Reads the prefixed variables from `vars` instead of the process
    /// environment. Has no effect without [`ConfigLoader::with_env_prefix`].
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Sets a settings override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .with_context(|| format!("invalid settings override '{key}'"))?;
        Ok(self)
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required settings files are missing.
    /// - Settings files have invalid TOML syntax.
    /// - The merged settings cannot be deserialized into `ReaderSettings`.
    /// - A value fails [`ReaderSettings::validate`].
    pub fn build(self) -> Result<ReaderSettings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("boolean.falsy")
                    .source(self.env_vars),
            ),
            None => self.builder,
        };
        let cfg = builder.build().map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        let settings: ReaderSettings = cfg.try_deserialize().map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        settings.validate()?;
        tracing::debug!(layers = self.origins.len(), "loaded reader settings");
        Ok(settings)
    }

    /// Layers added so far, lowest priority first.
    #[must_use]
    pub fn origins(&self) -> &[SettingsOrigin] {
        &self.origins
    }

    #[must_use]
    pub fn format_origins(&self) -> Vec<String> {
        self.origins
            .iter()
            .enumerate()
            .map(|(i, origin)| format!("{}. {origin}", i + 1))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
