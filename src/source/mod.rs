// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Where raw values come from.
//!
//! # Architecture
//!
//! ```text
//! EnvSource::raw(name) -> Ok(Some) | Ok(None) | Err(SourceError)
//!
//! SystemEnv   process env, read at call time
//! Env         in-memory snapshot (current_env(), from_map, collect)
//! BTreeMap / HashMap<String, String>, &S
//! ```

pub mod container;
mod types;

#[cfg(test)]
mod tests;

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::SourceError;

pub use container::Env;

/// Read-only mapping from variable name to raw value.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site.
pub trait EnvSource {
    /// Looks up `name`. Absence is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the value exists but cannot be read.
    fn raw(&self, name: &str) -> Result<Option<String>, SourceError>;
}

/// Zero-sized type; delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    #[inline]
    fn raw(&self, name: &str) -> Result<Option<String>, SourceError> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(SourceError::NotUnicode {
                name: name.to_owned(),
            }),
        }
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn raw(&self, name: &str) -> Result<Option<String>, SourceError> {
        (**self).raw(name)
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn raw(&self, name: &str) -> Result<Option<String>, SourceError> {
        Ok(self.get(name).cloned())
    }
}

impl<H: BuildHasher> EnvSource for HashMap<String, String, H> {
    fn raw(&self, name: &str) -> Result<Option<String>, SourceError> {
        Ok(self.get(name).cloned())
    }
}

/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
