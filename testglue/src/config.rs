// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for a [`TestState`](crate::TestState).
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! [report]
//! show-zero-counts = false
//! show-diagnostics = false
//!
//! [output]
//! echo-verdicts = false
//! sink = "stdout"
//! ```
//!
//! Every key is optional. Unknown keys are reported as warnings and otherwise ignored.

use crate::{OutputSink, TotalsFormat, errors::ConfigError};
use camino::Utf8Path;
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Specifies where to load configuration from.
#[derive(Clone, Copy, Debug)]
pub enum ConfigLocation<'a> {
    /// Use built-in defaults.
    Default,

    /// Load configuration from an explicit path.
    ///
    /// Returns an error if the file does not exist.
    Explicit(&'a Utf8Path),
}

impl<'a> ConfigLocation<'a> {
    /// Creates a config location from a CLI or environment variable value.
    ///
    /// Returns `Default` if `None` or empty, otherwise `Explicit` with the path.
    pub fn from_cli_or_env(s: Option<&'a str>) -> Self {
        match s {
            None | Some("") => Self::Default,
            Some(s) => Self::Explicit(Utf8Path::new(s)),
        }
    }
}

/// Resolved configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct GlueConfig {
    /// Settings for the totals report.
    #[serde(default)]
    pub report: ReportConfig,

    /// Settings for where and what to print.
    #[serde(default)]
    pub output: OutputConfig,
}

/// The `[report]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ReportConfig {
    /// Print `0` for kinds that were never recorded, instead of omitting them.
    #[serde(default)]
    pub show_zero_counts: bool,

    /// Print counts for notes, warnings and errors.
    #[serde(default)]
    pub show_diagnostics: bool,
}

/// The `[output]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Print a `PASS: label`-style line for every verdict as it is recorded.
    ///
    /// Notes, warnings and errors are always printed.
    #[serde(default)]
    pub echo_verdicts: bool,

    /// The stream to print to.
    #[serde(default)]
    pub sink: SinkKind,
}

/// A standard stream to print to.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum SinkKind {
    /// Standard output.
    #[default]
    Stdout,

    /// Standard error.
    Stderr,
}

impl GlueConfig {
    /// Loads configuration from the specified location.
    pub fn from_location(location: ConfigLocation<'_>) -> Result<Self, ConfigError> {
        Self::from_location_with_warnings(location, &mut DefaultConfigWarnings)
    }

    /// Parses configuration from a string. `path` is only used for error reporting.
    pub fn from_toml_str(contents: &str, path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::from_toml_str_with_warnings(contents, path, &mut DefaultConfigWarnings)
    }

    /// Returns the totals report format described by this configuration.
    pub fn totals_format(&self) -> TotalsFormat {
        TotalsFormat {
            show_zero_counts: self.report.show_zero_counts,
            show_diagnostics: self.report.show_diagnostics,
        }
    }

    /// Returns the output sink described by this configuration.
    pub fn sink(&self) -> OutputSink {
        match self.output.sink {
            SinkKind::Stdout => OutputSink::Stdout,
            SinkKind::Stderr => OutputSink::Stderr,
        }
    }

    fn from_location_with_warnings(
        location: ConfigLocation<'_>,
        warnings: &mut impl ConfigWarnings,
    ) -> Result<Self, ConfigError> {
        match location {
            ConfigLocation::Default => {
                debug!("config: using built-in defaults");
                Ok(Self::default())
            }
            ConfigLocation::Explicit(path) => {
                debug!("config: loading from {path}");
                let contents =
                    std::fs::read_to_string(path).map_err(|error| ConfigError::Read {
                        path: path.to_owned(),
                        error,
                    })?;
                Self::from_toml_str_with_warnings(&contents, path, warnings)
            }
        }
    }

    fn from_toml_str_with_warnings(
        contents: &str,
        path: &Utf8Path,
        warnings: &mut impl ConfigWarnings,
    ) -> Result<Self, ConfigError> {
        let (config, unknown) =
            Self::deserialize_toml(contents).map_err(|error| ConfigError::Parse {
                path: path.to_owned(),
                error,
            })?;

        if !unknown.is_empty() {
            warnings.unknown_config_keys(path, &unknown);
        }

        debug!("config: loaded {config:?}");
        Ok(config)
    }

    /// Deserializes TOML content and returns the config along with any unknown keys.
    fn deserialize_toml(contents: &str) -> Result<(Self, BTreeSet<String>), toml::de::Error> {
        let deserializer = toml::Deserializer::parse(contents)?;
        let mut unknown = BTreeSet::new();
        let config: GlueConfig = serde_ignored::deserialize(deserializer, |path| {
            unknown.insert(path.to_string());
        })?;
        Ok((config, unknown))
    }
}

/// Receives warnings produced while loading configuration.
trait ConfigWarnings {
    /// Handle unknown configuration keys found in a config file.
    fn unknown_config_keys(&mut self, config_file: &Utf8Path, unknown: &BTreeSet<String>);
}

/// Logs warnings through `tracing`.
struct DefaultConfigWarnings;

impl ConfigWarnings for DefaultConfigWarnings {
    fn unknown_config_keys(&mut self, config_file: &Utf8Path, unknown: &BTreeSet<String>) {
        let keys = unknown.iter().map(String::as_str).collect::<Vec<_>>();
        let plural = if keys.len() == 1 { "key" } else { "keys" };
        warn!(
            "in config file {config_file}, ignoring unknown configuration {plural}: {}",
            keys.join(", "),
        );
    }
}
