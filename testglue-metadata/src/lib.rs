// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Stable vocabulary shared between [testglue](https://crates.io/crates/testglue) and the tools
//! that consume its output.
//!
//! This crate defines the closed set of outcome kinds, the exact text of the totals report
//! (along with a parser for it), and the exit codes used by the exerciser drivers.

mod errors;
mod exit_codes;
mod outcome;
mod totals;

pub use errors::*;
pub use exit_codes::*;
pub use outcome::*;
pub use totals::*;
