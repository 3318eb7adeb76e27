// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Opt-in process termination on invalid configuration.
//!
//! ```text
//! EnvResult<T>.exit_on_invalid()
//!   Ok(v)              -> Ok(v)
//!   Err(Invalid(e))    -> stderr diagnostic, exit(255)
//!   Err(Source(e))     -> Err(e)   caller decides
//! ```
//!
//! Libraries should return the `EnvResult`; only a binary's startup code
//! should call [`ExitOnInvalid::exit_on_invalid`].

use std::io::Write;

use crate::error::{EnvError, EnvResult, SourceError, ValidationError};

/// Exit status used when a variable fails validation.
pub const INVALID_EXIT_CODE: i32 = 255;

pub trait ExitOnInvalid<T> {
    /// Terminates the process on a validation error.
    ///
    /// # Errors
    ///
    /// Returns the source error if the variable could not be read at all.
    fn exit_on_invalid(self) -> Result<T, Box<SourceError>>;
}

impl<T> ExitOnInvalid<T> for EnvResult<T> {
    fn exit_on_invalid(self) -> Result<T, Box<SourceError>> {
        match self {
            Ok(value) => Ok(value),
            Err(EnvError::Invalid(err)) => exit_invalid(&err),
            Err(EnvError::Source(err)) => Err(err),
        }
    }
}

/// Writes the diagnostic to `out`, ignoring write failures.
pub fn report<W: Write>(err: &ValidationError, out: &mut W) {
    let _ = err.write_diagnostic(out);
    let _ = out.flush();
}

/// Prints the diagnostic to stderr and exits with [`INVALID_EXIT_CODE`].
pub fn exit_invalid(err: &ValidationError) -> ! {
    tracing::error!(
        name = err.name(),
        issues = err.issues().len(),
        "invalid environment variable, exiting"
    );
    report(err, &mut std::io::stderr().lock());
    std::process::exit(INVALID_EXIT_CODE)
}
