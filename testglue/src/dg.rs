// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free functions that record into the process-wide [`global`] state.
//!
//! ```no_run
//! use testglue::dg;
//!
//! dg::pass("parses empty input");
//! dg::xfail("handles unicode");
//! dg::note("skipping slow cases");
//! dg::totals();
//! ```
//!
//! These share counters with every [`TestRun`](crate::TestRun) created with
//! [`TestRun::new`](crate::TestRun::new).

use crate::{Recorder, Totals, state::global};
use std::io;
use testglue_metadata::OutcomeKind;

/// A [`Recorder`] that forwards to the process-wide state.
///
/// Useful for code that is generic over the recording surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct Global;

impl Recorder for Global {
    fn record(&self, kind: OutcomeKind, label: &str, message: Option<&str>) {
        global().record(kind, label, message)
    }

    fn snapshot(&self) -> Totals {
        global().snapshot()
    }

    fn try_totals(&self) -> io::Result<Totals> {
        global().try_totals()
    }
}

/// Records an outcome of the given kind, with an optional message.
pub fn record(kind: OutcomeKind, label: &str, message: Option<&str>) {
    Global.record(kind, label, message);
}

/// Records a passing test.
pub fn pass(label: &str) {
    Global.pass(label);
}

/// Records a test that passed unexpectedly.
pub fn xpass(label: &str) {
    Global.xpass(label);
}

/// Records a failing test.
pub fn fail(label: &str) {
    Global.fail(label);
}

/// Records a test that failed as expected.
pub fn xfail(label: &str) {
    Global.xfail(label);
}

/// Records a test that was not run.
pub fn untested(label: &str) {
    Global.untested(label);
}

/// Records a test whose result needs review.
pub fn unresolved(label: &str) {
    Global.unresolved(label);
}

/// Records a test that could not run on this system.
pub fn unsupported(label: &str) {
    Global.unsupported(label);
}

/// Records and prints a note.
pub fn note(label: &str) {
    Global.note(label);
}

/// Records and prints a warning.
pub fn warning(label: &str) {
    Global.warning(label);
}

/// Records and prints an error.
pub fn error(label: &str) {
    Global.error(label);
}

/// Prints the totals report for the process-wide state and returns the totals.
pub fn totals() -> Totals {
    Global.totals()
}

/// Like [`totals`], but returns an error if the report could not be printed.
pub fn try_totals() -> io::Result<Totals> {
    Global.try_totals()
}
