// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Type descriptors for environment values.
//!
//! # Architecture
//!
//! ```text
//! raw: Option<&str>
//!        |
//!        v
//!   Schema::parse ----> Err(Issues)   shape errors stop here
//!        |
//!        v
//!   Schema::check ----> Issues        refinements accumulate
//!        |
//!        v
//!     Output
//! ```
//!
//! Defaults skip `parse` (they are already typed) but still go through
//! `check`, so a default that violates a refinement is rejected.
//!
//! Schemas compose through plain functions:
//!
//! ```
//! use envsure::schema::{self, Schema};
//!
//! let level = schema::one_of(schema::string(), vec!["debug".into(), "info".into()]);
//! let level = schema::with_default(level, "info".to_string());
//!
//! assert_eq!(level.validate(None), Ok("info".to_string()));
//! assert!(level.validate(Some("loud")).is_err());
//! ```

pub mod boolean;
pub mod combinators;
pub mod issue;
pub mod primitives;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::str::FromStr;

use regex::Regex;

pub use boolean::{BooleanTransform, standard_truthiness};
pub use combinators::{Defaulted, Map, Matches, OneOf, Optional, Refine, TryMap};
pub use issue::{Issue, Issues};
pub use primitives::{Bool, Number, Parsed, Str};

/// A validator that turns a raw, possibly absent value into `Output`.
pub trait Schema {
    type Output;

    /// Converts the raw value. Absence is passed as `None`.
    ///
    /// # Errors
    ///
    /// Returns the issues that prevent producing any value.
    fn parse(&self, raw: Option<&str>) -> Result<Self::Output, Issues>;

    /// Records refinement failures for an already typed value.
    fn check(&self, _value: &Self::Output, _issues: &mut Issues) {}

    /// Parses then checks.
    ///
    /// # Errors
    ///
    /// Returns every issue found.
    fn validate(&self, raw: Option<&str>) -> Result<Self::Output, Issues> {
        let value = self.parse(raw)?;
        self.check_value(value)
    }

    /// Runs the checks over a typed value such as a caller default.
    ///
    /// # Errors
    ///
    /// Returns every refinement the value fails.
    fn check_value(&self, value: Self::Output) -> Result<Self::Output, Issues> {
        let mut issues = Issues::new();
        self.check(&value, &mut issues);
        issues.into_result(value)
    }
}

impl<S: Schema + ?Sized> Schema for &S {
    type Output = S::Output;

    fn parse(&self, raw: Option<&str>) -> Result<Self::Output, Issues> {
        (**self).parse(raw)
    }

    fn check(&self, value: &Self::Output, issues: &mut Issues) {
        (**self).check(value, issues);
    }
}

#[must_use]
pub const fn string() -> Str {
    Str
}

/// Finite numbers only; see [`number_allowing_non_finite`].
#[must_use]
pub const fn number() -> Number {
    Number::new(false)
}

#[must_use]
pub const fn number_allowing_non_finite() -> Number {
    Number::new(true)
}

#[must_use]
pub const fn boolean(transform: BooleanTransform) -> Bool {
    Bool::new(transform)
}

/// Any [`FromStr`] type; `label` names the expected type in issues.
pub fn parsed<T: FromStr>(label: impl Into<Cow<'static, str>>) -> Parsed<T> {
    Parsed::new(label)
}

pub const fn optional<S: Schema>(inner: S) -> Optional<S> {
    Optional::new(inner)
}

pub const fn with_default<S: Schema>(inner: S, default: S::Output) -> Defaulted<S> {
    Defaulted::new(inner, default)
}

pub fn refine<S, F>(inner: S, predicate: F, message: impl Into<String>) -> Refine<S, F>
where
    S: Schema,
    F: Fn(&S::Output) -> bool,
{
    Refine::new(inner, predicate, message)
}

pub const fn matches<S: Schema<Output = String>>(inner: S, pattern: Regex) -> Matches<S> {
    Matches::new(inner, pattern)
}

pub const fn one_of<S: Schema>(inner: S, choices: Vec<S::Output>) -> OneOf<S> {
    OneOf::new(inner, choices)
}

pub const fn map<S, F, U>(inner: S, transform: F) -> Map<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> U,
{
    Map::new(inner, transform)
}

pub const fn try_map<S, F, U, E>(inner: S, transform: F) -> TryMap<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> Result<U, E>,
{
    TryMap::new(inner, transform)
}
