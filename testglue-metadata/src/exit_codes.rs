// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Documented exit codes for the `testglue-exercise` driver.
///
/// Unknown/unexpected failures will always result in exit code 1 via the panic or `eyre`
/// handler, which coincides with [`TEST_RUN_FAILED`](Self::TEST_RUN_FAILED). That code is only
/// produced deliberately when `--fail-on-bad` is passed.
pub enum GlueExitCode {}

impl GlueExitCode {
    /// All keywords were recorded and the totals were printed.
    pub const OK: i32 = 0;

    /// `--fail-on-bad` was passed and at least one FAIL or XPASS was recorded.
    pub const TEST_RUN_FAILED: i32 = 1;

    /// The command line was malformed: no keywords, or an unrecognized keyword.
    ///
    /// This is the same status clap uses for its own usage errors.
    pub const USAGE_ERROR: i32 = 2;

    /// The configuration file could not be read or parsed.
    pub const SETUP_ERROR: i32 = 96;

    /// Writing the totals report to stdout failed.
    pub const WRITE_OUTPUT_ERROR: i32 = 110;
}
