// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed access to environment variables.
//!
//! # Lookup Flow
//!
//! ```text
//! get(name, schema, default)
//!        |
//!   source.raw(name) ----Err----> EnvError::Source
//!        |
//!   +----+-------------------+
//!   | present                | absent
//!   v                        v
//! schema.validate(raw)    default? --yes--> schema.check_value(default)
//!                            |
//!                            no --> schema.validate(None)
//!        |
//!   Err(issues) --> EnvError::Invalid(ValidationError)
//! ```

pub mod fail_fast;


use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::config::ReaderConfig;
use crate::error::{EnvResult, ValidationError};
use crate::schema::{self, Bool, Number, Schema};
use crate::source::{EnvSource, SystemEnv};

/// Reads and validates variables from an [`EnvSource`].
///
/// # Example
///
/// ```
/// use envsure::reader::EnvReader;
/// use envsure::source::Env;
///
/// let env: Env = [("PORT", "8080"), ("DEBUG", "no")].into_iter().collect();
/// let reader = EnvReader::with_source(env);
///
/// assert_eq!(reader.number("PORT", None).unwrap(), 8080.0);
/// assert!(!reader.boolean("DEBUG", Some(true)).unwrap());
/// assert_eq!(reader.try_string("HOST").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvReader<S = SystemEnv> {
    source: S,
    config: ReaderConfig,
}

impl EnvReader<SystemEnv> {
    /// Reader over the process environment with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EnvSource> EnvReader<S> {
    pub fn with_source(source: S) -> Self {
        Self::with_config(source, ReaderConfig::default())
    }

    pub const fn with_config(source: S, config: ReaderConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Reads `name` and validates it against `schema`.
    ///
    /// When the variable is absent and `default` is given, the default is
    /// returned after passing the schema's checks.
    ///
    /// # Errors
    ///
    /// - `EnvError::Invalid` when the value (or default) fails validation,
    ///   including a required value that is absent.
    /// - `EnvError::Source` when the source cannot be read.
    pub fn get<V: Schema>(
        &self,
        name: &str,
        schema: V,
        default: Option<V::Output>,
    ) -> EnvResult<V::Output> {
        let raw = self.source.raw(name)?;
        trace!(name, present = raw.is_some(), "reading environment variable");

        let outcome = match (raw.as_deref(), default) {
            (None, Some(default)) => {
                debug!(name, "environment variable absent, using default");
                schema.check_value(default)
            }
            (raw, _) => schema.validate(raw),
        };

        outcome.map_err(|issues| {
            warn!(name, issues = issues.len(), "environment variable failed validation");
            ValidationError::new(name, issues).into()
        })
    }

    /// # Errors
    ///
    /// See [`EnvReader::get`].
    pub fn string(&self, name: &str, default: Option<&str>) -> EnvResult<String> {
        self.get(name, schema::string(), default.map(str::to_owned))
    }

    /// Absence yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a present value cannot be read.
    pub fn try_string(&self, name: &str) -> EnvResult<Option<String>> {
        self.get(name, schema::optional(schema::string()), None)
    }

    /// Raw values go through the configured boolean transform.
    ///
    /// # Errors
    ///
    /// Absent without a default, or rejected by a custom transform.
    pub fn boolean(&self, name: &str, default: Option<bool>) -> EnvResult<bool> {
        self.get(name, self.boolean_schema(), default)
    }

    /// # Errors
    ///
    /// Returns an error if a custom transform rejects the value.
    pub fn try_boolean(&self, name: &str) -> EnvResult<Option<bool>> {
        self.get(name, schema::optional(self.boolean_schema()), None)
    }

    /// Surrounding whitespace is ignored; non-finite values are rejected
    /// unless the config allows them.
    ///
    /// # Errors
    ///
    /// Absent without a default, unparsable, or non-finite.
    pub fn number(&self, name: &str, default: Option<f64>) -> EnvResult<f64> {
        self.get(name, self.number_schema(), default)
    }

    /// # Errors
    ///
    /// Unparsable or non-finite values.
    pub fn try_number(&self, name: &str) -> EnvResult<Option<f64>> {
        self.get(name, schema::optional(self.number_schema()), None)
    }

    /// Any [`FromStr`] type, e.g. `u16` or `IpAddr`.
    ///
    /// # Errors
    ///
    /// Absent without a default, or rejected by `T::from_str`.
    pub fn parsed<T: FromStr>(&self, name: &str, default: Option<T>) -> EnvResult<T> {
        self.get(name, schema::parsed::<T>(short_type_name::<T>()), default)
    }

    /// # Errors
    ///
    /// Returns an error if a present value is rejected by `T::from_str`.
    pub fn try_parsed<T: FromStr>(&self, name: &str) -> EnvResult<Option<T>> {
        self.get(
            name,
            schema::optional(schema::parsed::<T>(short_type_name::<T>())),
            None,
        )
    }

    fn boolean_schema(&self) -> Bool {
        schema::boolean(self.config.boolean_transform().clone())
    }

    const fn number_schema(&self) -> Number {
        Number::new(self.config.allow_non_finite())
    }
}

/// `Option<core::net::ip_addr::IpAddr>` -> `Option<IpAddr>`
fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut start = 0;
    for (i, c) in full.char_indices() {
        if matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';') {
            out.push_str(strip_path(&full[start..i]));
            out.push(c);
            start = i + c.len_utf8();
        }
    }
    out.push_str(strip_path(&full[start..]));
    out
}

fn strip_path(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
