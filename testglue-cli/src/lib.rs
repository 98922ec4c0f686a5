// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exerciser driver for [testglue](https://crates.io/crates/testglue).
//!
//! The `testglue-exercise` binary records a list of outcome keywords through one or both of
//! testglue's recording surfaces, then prints the totals report. It exists to check that both
//! surfaces accumulate into the same state.

#![warn(missing_docs)]

mod dispatch;
mod errors;
mod output;

#[doc(hidden)]
pub use dispatch::*;
#[doc(hidden)]
pub use errors::*;
pub use output::{Color, LOG_ENV, OutputContext, StderrStyles};
