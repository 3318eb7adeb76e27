// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reader configuration.
//!
//! # Two Forms
//!
//! ```text
//! ReaderSettings (serde, TOML)  --From-->  ReaderConfig (runtime)
//!   [boolean] falsy = [..]                   boolean_transform
//!   [number]  allow_non_finite               allow_non_finite
//! ```
//!
//! `ReaderConfig` is what an `EnvReader` is constructed with. There is no
//! process-wide default that can be mutated; each reader owns its config.
//!
//! # Settings File
//!
//! ```toml
//! [boolean]
//! falsy = ["0", "no", "false"]
//!
//! [number]
//! allow_non_finite = false
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! <PREFIX>_BOOLEAN__FALSY=0,no,off        → boolean.falsy = ["0", "no", "off"]
//! <PREFIX>_NUMBER__ALLOW_NON_FINITE=true  → number.allow_non_finite = true
//! ```

pub mod loader;
mod words;


use std::path::Path;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::schema::BooleanTransform;
use crate::schema::boolean::DEFAULT_FALSY;

pub use loader::{ConfigLoader, SettingsOrigin};

/// Runtime configuration for an `EnvReader`.
#[derive(Debug, Clone, Builder)]
pub struct ReaderConfig {
    #[builder(setters(name = with_boolean_transform), default)]
    boolean_transform: BooleanTransform,
    #[builder(setters(name = with_allow_non_finite), default = false)]
    allow_non_finite: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ReaderConfig {
    /// Transform applied to raw values before boolean type-checking.
    #[must_use]
    pub const fn boolean_transform(&self) -> &BooleanTransform {
        &self.boolean_transform
    }

    /// Whether `NaN` and infinities pass number validation.
    #[must_use]
    pub const fn allow_non_finite(&self) -> bool {
        self.allow_non_finite
    }
}

impl From<&ReaderSettings> for ReaderConfig {
    fn from(settings: &ReaderSettings) -> Self {
        Self::builder()
            .with_boolean_transform(BooleanTransform::with_falsy(
                settings.boolean.falsy.iter().cloned(),
            ))
            .with_allow_non_finite(settings.number.allow_non_finite)
            .build()
    }
}

impl From<ReaderSettings> for ReaderConfig {
    fn from(settings: ReaderSettings) -> Self {
        Self::from(&settings)
    }
}

/// Serializable reader settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderSettings {
    /// Boolean interpretation.
    pub boolean: BooleanSettings,
    /// Number validation policy.
    pub number: NumberSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanSettings {
    /// Exact strings read as `false`. Blank input is always `false`.
    ///
    /// A lone scalar is accepted as a one-word list, so `FALSY=false` from
    /// the environment loads as `["false"]`.
    #[serde(deserialize_with = "words::deserialize")]
    pub falsy: Vec<String>,
}

impl Default for BooleanSettings {
    fn default() -> Self {
        Self {
            falsy: DEFAULT_FALSY.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberSettings {
    /// Accept `NaN`, `inf` and `-inf`.
    pub allow_non_finite: bool,
}

impl ReaderSettings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envsure::config::ReaderSettings;
    ///
    /// let settings = ReaderSettings::builder()
    ///     .add_toml_file_optional("envsure.toml")
    ///     .with_env_prefix("ENVSURE")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load settings from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `ReaderSettings` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `ReaderSettings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank falsy word.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if let Some(index) = self.boolean.falsy.iter().position(|w| w.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                section: "boolean".to_string(),
                key: "falsy".to_string(),
                message: format!("entry {index} is blank; blank values are always false"),
            });
        }
        Ok(())
    }
}
