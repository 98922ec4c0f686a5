// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by testglue.
//!
//! Recording outcomes and printing totals never fail; errors only arise while setting up a
//! [`TestState`](crate::TestState).

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurred while loading a configuration file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file at `{path}`")]
    Read {
        /// The path that was read.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: std::io::Error,
    },

    /// The configuration file is not valid TOML, or doesn't match the expected schema.
    #[error("failed to parse config file at `{path}`")]
    Parse {
        /// The path that was parsed.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: toml::de::Error,
    },
}

impl ConfigError {
    /// Returns the path of the configuration file that caused this error.
    pub fn path(&self) -> &Utf8PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// The process-wide state was initialized more than once.
///
/// Returned by [`init_global`](crate::init_global) if the state has already been set up, either
/// by an earlier call or implicitly by recording an outcome through [`dg`](crate::dg).
#[derive(Clone, Debug, Error)]
#[error("the global test state was already initialized")]
pub struct GlobalAlreadyInitialized;
