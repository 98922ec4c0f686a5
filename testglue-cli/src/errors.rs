// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::{NO_HEADING_TARGET, StderrStyles};
use owo_colors::OwoColorize;
use std::error::Error;
use testglue::errors::{ConfigError, GlobalAlreadyInitialized};
use testglue_metadata::GlueExitCode;
use thiserror::Error;
use tracing::error;

// The #[error()] strings are short placeholders. Errors are meant to be printed with
// display_to_stderr, which colorizes them and walks the source chain.

/// An error the exerciser knows how to report.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("config error")]
    ConfigError {
        #[from]
        err: ConfigError,
    },
    #[error("global state already initialized")]
    GlobalInitError {
        #[from]
        err: GlobalAlreadyInitialized,
    },
    #[error("failed to write totals")]
    WriteTotalsError {
        #[source]
        err: std::io::Error,
    },
    #[error("test run failed")]
    TestRunFailed {
        failed: usize,
        unexpected_passes: usize,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::ConfigError { .. } | Self::GlobalInitError { .. } => GlueExitCode::SETUP_ERROR,
            Self::WriteTotalsError { .. } => GlueExitCode::WRITE_OUTPUT_ERROR,
            Self::TestRunFailed { .. } => GlueExitCode::TEST_RUN_FAILED,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let mut next_error = match self {
            Self::ConfigError { err } => {
                error!(
                    "failed to load config from `{}`",
                    err.path().style(styles.bold)
                );
                err.source()
            }
            Self::GlobalInitError { err } => {
                error!("{err}");
                None
            }
            Self::WriteTotalsError { err } => {
                error!("failed to write totals report");
                Some(err as &dyn Error)
            }
            Self::TestRunFailed {
                failed,
                unexpected_passes,
            } => {
                error!(
                    "test run failed: {} unexpected {}, {} unexpected {}",
                    failed.style(styles.bad),
                    plural(*failed, "failure", "failures"),
                    unexpected_passes.style(styles.bad),
                    plural(*unexpected_passes, "success", "successes"),
                );
                None
            }
        };

        while let Some(err) = next_error {
            error!(target: NO_HEADING_TARGET, "\nCaused by:\n  {}", err);
            next_error = err.source();
        }
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use test_case::test_case;

    fn read_error() -> ExpectedError {
        ExpectedError::from(ConfigError::Read {
            path: Utf8PathBuf::from("missing.toml"),
            error: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }

    #[test_case(read_error(), GlueExitCode::SETUP_ERROR; "config")]
    #[test_case(
        ExpectedError::from(GlobalAlreadyInitialized),
        GlueExitCode::SETUP_ERROR
        ; "global init"
    )]
    #[test_case(
        ExpectedError::WriteTotalsError { err: std::io::ErrorKind::BrokenPipe.into() },
        GlueExitCode::WRITE_OUTPUT_ERROR
        ; "write totals"
    )]
    #[test_case(
        ExpectedError::TestRunFailed { failed: 1, unexpected_passes: 0 },
        GlueExitCode::TEST_RUN_FAILED
        ; "test run failed"
    )]
    fn exit_codes(error: ExpectedError, expected: i32) {
        assert_eq!(error.process_exit_code(), expected);
    }

    #[test]
    fn config_error_has_source() {
        let error = read_error();
        let ExpectedError::ConfigError { err } = &error else {
            panic!("expected a config error, found {error:?}");
        };
        assert!(err.source().is_some());
    }
}
