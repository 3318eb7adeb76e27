// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validation issues produced by schemas.
//!
//! ```text
//! Issue
//!   Required      absent, no default
//!   InvalidType   wrong shape  (expected label + received raw text)
//!   Constraint    refinement / format check failed
//!
//! Issues: ordered Vec<Issue>, one diagnostic line each
//! ```

use std::borrow::Cow;

use thiserror::Error;

/// A single problem found while validating a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    /// The value is absent and nothing supplied a default.
    #[error("Required")]
    Required,

    /// The raw value does not have the expected shape.
    #[error("Expected {expected}, received {received:?}")]
    InvalidType {
        expected: Cow<'static, str>,
        received: String,
    },

    /// The value parsed, but failed a refinement.
    #[error("{message}")]
    Constraint { message: String },
}

impl Issue {
    #[must_use]
    pub fn invalid_type(expected: impl Into<Cow<'static, str>>, received: impl Into<String>) -> Self {
        Self::InvalidType {
            expected: expected.into(),
            received: received.into(),
        }
    }

    #[must_use]
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint {
            message: message.into(),
        }
    }
}

/// Ordered list of issues for one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Issues(Vec<Issue>);

impl Issues {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, issue: Issue) {
        self.0.push(issue);
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.0.iter()
    }

    /// Messages in report order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// `Ok(value)` when no issue was recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one issue was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<Issue> for Issues {
    fn from(issue: Issue) -> Self {
        Self(vec![issue])
    }
}

impl FromIterator<Issue> for Issues {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
