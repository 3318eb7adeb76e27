// envsure: Typed Environment Variables
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                    caller (binary startup)
//!                           |
//!                           v
//!              ,---------------------------,
//!              |          reader           |
//!              |  EnvReader get/string/..  |
//!              |  fail_fast (exit 255)     |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              source      schema    config
//!            SystemEnv   Str Number  ReaderConfig
//!               Env      Bool Parsed ReaderSettings
//!                        combinators ConfigLoader
//!
//!   +-----------------------------------------+
//!   |  foundation   error (thiserror/anyhow)  |
//!   +-----------------------------------------+
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use envsure::reader::EnvReader;
//! use envsure::reader::fail_fast::ExitOnInvalid;
//!
//! let env = EnvReader::new();
//! let port = env.number("PORT", Some(8080.0)).exit_on_invalid()?;
//! let debug = env.boolean("DEBUG", Some(false)).exit_on_invalid()?;
//! # let _ = (port, debug);
//! # Ok::<(), Box<envsure::error::SourceError>>(())
//! ```

pub mod config;
pub mod error;
pub mod reader;
pub mod schema;
pub mod source;

pub use error::{EnvError, EnvResult, ValidationError};
pub use reader::EnvReader;
pub use reader::fail_fast::ExitOnInvalid;
pub use source::{Env, EnvSource, SystemEnv};
