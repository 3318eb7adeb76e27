// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Truthiness transform for boolean variables.
//!
//! ```text
//! None               -> None   (optionality decides later)
//! "0" | "no"         -> Some(false)
//! trim(raw) == ""    -> Some(false)
//! anything else      -> Some(true)
//! ```

use std::fmt;
use std::sync::Arc;

/// Falsy words of the standard rule.
pub const DEFAULT_FALSY: [&str; 2] = ["0", "no"];

type TransformFn = dyn Fn(Option<&str>) -> Option<bool> + Send + Sync;

/// Pluggable mapping from a raw value to a boolean.
///
/// Cloning is cheap; the function is shared behind an `Arc`.
#[derive(Clone)]
pub struct BooleanTransform {
    inner: Arc<TransformFn>,
    label: Arc<str>,
}

impl BooleanTransform {
    /// Wraps an arbitrary transform.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Option<&str>) -> Option<bool> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(transform),
            label: Arc::from("custom"),
        }
    }

    /// The standard rule: `"0"`, `"no"` and blank strings are false.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_falsy(DEFAULT_FALSY)
    }

    /// The standard rule with a different set of falsy words.
    ///
    /// Words are matched exactly (case-sensitive, untrimmed); blank input
    /// is always false regardless of the list.
    pub fn with_falsy<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let label = format!("falsy={words:?}");
        Self {
            inner: Arc::new(move |raw: Option<&str>| {
                raw.map(|value| !(words.iter().any(|w| w == value) || value.trim().is_empty()))
            }),
            label: Arc::from(label),
        }
    }

    /// Applies the transform.
    #[must_use]
    pub fn apply(&self, raw: Option<&str>) -> Option<bool> {
        (self.inner)(raw)
    }
}

impl Default for BooleanTransform {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for BooleanTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BooleanTransform").field(&self.label).finish()
    }
}

/// The standard truthiness rule as a plain function.
#[must_use]
pub fn standard_truthiness(raw: Option<&str>) -> Option<bool> {
    raw.map(|value| !(DEFAULT_FALSY.contains(&value) || value.trim().is_empty()))
}
