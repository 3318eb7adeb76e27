// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            EnvError (16 bytes)
//!                 |
//!        +--------+--------+
//!        v                 v
//!     Invalid            Source
//!  Box<ValidationError>  Box<SourceError>
//!   name + Issues         NotUnicode
//!
//! ConfigError    reader settings (InvalidValue, ParseError)
//! Result<T>      anyhow, for loader glue
//! ```

use std::io::{self, Write};

use thiserror::Error;

use crate::schema::Issues;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Failure of a single accessor call.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The value (or default) failed validation.
    #[error(transparent)]
    Invalid(#[from] Box<ValidationError>),

    /// The source could not be read.
    #[error("source error: {0}")]
    Source(#[from] Box<SourceError>),
}

impl EnvError {
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Source(_) => None,
        }
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvError {
                fn from(err: $error) -> Self {
                    EnvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ValidationError => Invalid,
    SourceError => Source,
}

// --- Validation Errors ---

/// A named variable together with everything wrong with it.
///
/// `Display` renders the full multi-line diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    name: String,
    issues: Issues,
}

impl ValidationError {
    pub fn new(name: impl Into<String>, issues: Issues) -> Self {
        Self {
            name: name.into(),
            issues,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn issues(&self) -> &Issues {
        &self.issues
    }

    /// Writes the diagnostic: a header naming the variable, then one
    /// bullet per issue.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_diagnostic<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "⨉ Error parsing environment variable {}", self.name)?;
        for issue in &self.issues {
            write!(f, "\n  • {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// --- Source Errors ---

/// Reading a variable failed for a reason other than absence.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The value exists but is not valid Unicode.
    #[error("environment variable '{name}' is not valid unicode")]
    NotUnicode { name: String },
}

// --- Config Errors ---

/// Reader settings errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse reader settings.
    #[error("failed to parse reader settings: {message}")]
    ParseError { message: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
