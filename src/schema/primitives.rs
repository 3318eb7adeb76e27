// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Leaf schemas: string, number, boolean and any `FromStr` type.

use std::borrow::Cow;
use std::marker::PhantomData;
use std::str::FromStr;

use super::boolean::BooleanTransform;
use super::issue::{Issue, Issues};
use super::Schema;

/// Any present value, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Str;

impl Schema for Str {
    type Output = String;

    fn parse(&self, raw: Option<&str>) -> Result<String, Issues> {
        raw.map(str::to_owned).ok_or_else(|| Issue::Required.into())
    }
}

/// Floating-point number; surrounding whitespace is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Number {
    allow_non_finite: bool,
}

impl Number {
    #[must_use]
    pub const fn new(allow_non_finite: bool) -> Self {
        Self { allow_non_finite }
    }

    #[must_use]
    pub const fn allows_non_finite(&self) -> bool {
        self.allow_non_finite
    }
}

impl Schema for Number {
    type Output = f64;

    fn parse(&self, raw: Option<&str>) -> Result<f64, Issues> {
        let raw = raw.ok_or(Issue::Required)?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| Issue::invalid_type("number", raw).into())
    }

    fn check(&self, value: &f64, issues: &mut Issues) {
        if !self.allow_non_finite && !value.is_finite() {
            issues.push(Issue::constraint(format!(
                "Expected finite number, received {value}"
            )));
        }
    }
}

/// Boolean through a [`BooleanTransform`].
#[derive(Debug, Clone, Default)]
pub struct Bool {
    transform: BooleanTransform,
}

impl Bool {
    #[must_use]
    pub const fn new(transform: BooleanTransform) -> Self {
        Self { transform }
    }
}

impl Schema for Bool {
    type Output = bool;

    fn parse(&self, raw: Option<&str>) -> Result<bool, Issues> {
        match (raw, self.transform.apply(raw)) {
            (_, Some(value)) => Ok(value),
            (None, None) => Err(Issue::Required.into()),
            (Some(raw), None) => Err(Issue::invalid_type("boolean", raw).into()),
        }
    }
}

/// Any type implementing [`FromStr`], reported under `label` on failure.
pub struct Parsed<T> {
    label: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Parsed<T> {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> Clone for Parsed<T> {
    fn clone(&self) -> Self {
        Self::new(self.label.clone())
    }
}

impl<T> std::fmt::Debug for Parsed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Parsed").field(&self.label).finish()
    }
}

impl<T: FromStr> Schema for Parsed<T> {
    type Output = T;

    fn parse(&self, raw: Option<&str>) -> Result<T, Issues> {
        let raw = raw.ok_or(Issue::Required)?;
        raw.parse::<T>()
            .map_err(|_| Issue::invalid_type(self.label.clone(), raw).into())
    }
}
