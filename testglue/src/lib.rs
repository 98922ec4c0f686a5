// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Outcome accounting for DejaGnu-style unit tests.
//!
//! A [`TestState`] owns one counter per [`OutcomeKind`] along with a log of the notes, warnings
//! and errors recorded so far. At the end of a run, [`Recorder::totals`] writes a summary of the
//! counters in the format described by [`testglue_metadata::TOTALS_HEADER`] and friends.
//!
//! Outcomes can be recorded through two surfaces that share state:
//!
//! * the free functions in [`dg`], which always operate on the process-wide [`global`] state;
//! * a [`TestRun`] handle, which can be attached to the global state or to an explicit one.
//!
//! Both surfaces implement [`Recorder`]. Mixing them in any order produces the same counts as
//! using either one alone.

pub mod config;
mod counts;
pub mod dg;
pub mod errors;
mod output;
mod recorder;
mod reporter;
mod run;
mod state;
pub mod write_str;

pub use counts::{CounterSet, LogEntry, MessageLog};
pub use output::{OutputSink, SharedBuffer};
pub use recorder::Recorder;
pub use reporter::TotalsFormat;
pub use run::TestRun;
pub use state::{TestState, Totals, global, init_global};
pub use testglue_metadata::{OutcomeCategory, OutcomeKind};
