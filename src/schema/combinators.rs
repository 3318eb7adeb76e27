// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schemas built from other schemas.
//!
//! ```text
//! Optional<S>     None       -> Ok(None)
//! Defaulted<S>    None       -> default, run through S::check
//! Refine<S, F>    S + predicate      (issues accumulate)
//! Matches<S>      S + regex          (String output)
//! OneOf<S>        S + allowed set
//! Map<S, F>       S, validated, then f(value)
//! TryMap<S, F>    S, validated, then f(value)?  (Err -> Constraint)
//! ```

use std::fmt::Debug;

use regex::Regex;

use super::issue::{Issue, Issues};
use super::Schema;

#[derive(Debug, Clone)]
pub struct Optional<S> {
    inner: S,
}

impl<S> Optional<S> {
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Schema> Schema for Optional<S> {
    type Output = Option<S::Output>;

    fn parse(&self, raw: Option<&str>) -> Result<Self::Output, Issues> {
        match raw {
            Some(_) => self.inner.parse(raw).map(Some),
            None => Ok(None),
        }
    }

    fn check(&self, value: &Self::Output, issues: &mut Issues) {
        if let Some(value) = value {
            self.inner.check(value, issues);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Defaulted<S: Schema> {
    inner: S,
    default: S::Output,
}

impl<S: Schema> Defaulted<S> {
    pub const fn new(inner: S, default: S::Output) -> Self {
        Self { inner, default }
    }
}

impl<S> Schema for Defaulted<S>
where
    S: Schema,
    S::Output: Clone,
{
    type Output = S::Output;

    fn parse(&self, raw: Option<&str>) -> Result<Self::Output, Issues> {
        match raw {
            Some(_) => self.inner.parse(raw),
            None => Ok(self.default.clone()),
        }
    }

    fn check(&self, value: &Self::Output, issues: &mut Issues) {
        self.inner.check(value, issues);
    }
}

#[derive(Clone)]
pub struct Refine<S, F> {
    inner: S,
    predicate: F,
    message: String,
}

impl<S, F> Refine<S, F> {
    pub fn new(inner: S, predicate: F, message: impl Into<String>) -> Self {
        Self {
            inner,
            predicate,
            message: message.into(),
        }
    }
}

impl<S: Debug, F> Debug for Refine<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refine")
            .field("inner", &self.inner)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<S, F> Schema for Refine<S, F>
where
    S: Schema,
    F: Fn(&S::Output) -> bool,
{
    type Output = S::Output;

    fn parse(&self, raw: Option<&str>) -> Result<Self::Output, Issues> {
        self.inner.parse(raw)
    }

    fn check(&self, value: &Self::Output, issues: &mut Issues) {
        self.inner.check(value, issues);
        if !(self.predicate)(value) {
            issues.push(Issue::constraint(self.message.clone()));
        }
    }
}

/// Format constraint on string output.
#[derive(Debug, Clone)]
pub struct Matches<S> {
    inner: S,
    pattern: Regex,
}

impl<S> Matches<S> {
    pub const fn new(inner: S, pattern: Regex) -> Self {
        Self { inner, pattern }
    }
}

impl<S> Schema for Matches<S>
where
    S: Schema<Output = String>,
{
    type Output = String;

    fn parse(&self, raw: Option<&str>) -> Result<String, Issues> {
        self.inner.parse(raw)
    }

    fn check(&self, value: &String, issues: &mut Issues) {
        self.inner.check(value, issues);
        if !self.pattern.is_match(value) {
            issues.push(Issue::constraint(format!(
                "Invalid format: {value:?} does not match /{}/",
                self.pattern.as_str()
            )));
        }
    }
}

#[derive(Debug, Clone)]
pub struct OneOf<S: Schema> {
    inner: S,
    choices: Vec<S::Output>,
}

impl<S: Schema> OneOf<S> {
    pub const fn new(inner: S, choices: Vec<S::Output>) -> Self {
        Self { inner, choices }
    }
}

impl<S> Schema for OneOf<S>
where
    S: Schema,
    S::Output: PartialEq + Debug,
{
    type Output = S::Output;

    fn parse(&self, raw: Option<&str>) -> Result<Self::Output, Issues> {
        self.inner.parse(raw)
    }

    fn check(&self, value: &Self::Output, issues: &mut Issues) {
        self.inner.check(value, issues);
        if !self.choices.contains(value) {
            issues.push(Issue::constraint(format!(
                "Expected one of {:?}, received {value:?}",
                self.choices
            )));
        }
    }
}

#[derive(Clone)]
pub struct Map<S, F> {
    inner: S,
    transform: F,
}

impl<S, F> Map<S, F> {
    pub const fn new(inner: S, transform: F) -> Self {
        Self { inner, transform }
    }
}

impl<S: Debug, F> Debug for Map<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S, F, U> Schema for Map<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> U,
{
    type Output = U;

    fn parse(&self, raw: Option<&str>) -> Result<U, Issues> {
        let value = self.inner.validate(raw)?;
        Ok((self.transform)(value))
    }
}

#[derive(Clone)]
pub struct TryMap<S, F> {
    inner: S,
    transform: F,
}

impl<S, F> TryMap<S, F> {
    pub const fn new(inner: S, transform: F) -> Self {
        Self { inner, transform }
    }
}

impl<S: Debug, F> Debug for TryMap<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryMap")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S, F, U, E> Schema for TryMap<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> Result<U, E>,
    E: std::fmt::Display,
{
    type Output = U;

    fn parse(&self, raw: Option<&str>) -> Result<U, Issues> {
        let value = self.inner.validate(raw)?;
        (self.transform)(value).map_err(|e| Issue::constraint(e.to_string()).into())
    }
}
