// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::state::Totals;
use std::io;
use testglue_metadata::OutcomeKind;
use tracing::warn;

/// Something outcomes can be recorded into.
///
/// This is implemented by [`TestState`](crate::TestState) itself, by [`TestRun`](crate::TestRun)
/// handles, and by [`dg::Global`](crate::dg::Global), which stands in for the free functions in
/// [`dg`](crate::dg). Every implementation forwards to exactly one underlying `TestState`, so
/// counts are the same no matter which implementation was used to record them.
pub trait Recorder {
    /// Records an outcome of the given kind.
    ///
    /// For notes, warnings and errors, the entry is also logged and printed right away.
    fn record(&self, kind: OutcomeKind, label: &str, message: Option<&str>);

    /// Returns the current totals without printing them.
    fn snapshot(&self) -> Totals;

    /// Prints the totals report and returns the totals, or an error if printing failed.
    fn try_totals(&self) -> io::Result<Totals>;

    /// Prints the totals report and returns the totals.
    ///
    /// If the report could not be printed, a warning is logged and the totals are returned
    /// anyway.
    fn totals(&self) -> Totals {
        match self.try_totals() {
            Ok(totals) => totals,
            Err(error) => {
                warn!("failed to write totals report: {error}");
                self.snapshot()
            }
        }
    }

    /// Records a passing test.
    fn pass(&self, label: &str) {
        self.record(OutcomeKind::Pass, label, None);
    }

    /// Records a test that passed unexpectedly.
    fn xpass(&self, label: &str) {
        self.record(OutcomeKind::ExpectedPass, label, None);
    }

    /// Records a failing test.
    fn fail(&self, label: &str) {
        self.record(OutcomeKind::Fail, label, None);
    }

    /// Records a test that failed as expected.
    fn xfail(&self, label: &str) {
        self.record(OutcomeKind::ExpectedFail, label, None);
    }

    /// Records a test that was not run.
    fn untested(&self, label: &str) {
        self.record(OutcomeKind::Untested, label, None);
    }

    /// Records a test whose result needs review.
    fn unresolved(&self, label: &str) {
        self.record(OutcomeKind::Unresolved, label, None);
    }

    /// Records a test that could not run on this system.
    fn unsupported(&self, label: &str) {
        self.record(OutcomeKind::Unsupported, label, None);
    }

    /// Records and prints a note.
    fn note(&self, label: &str) {
        self.record(OutcomeKind::Note, label, None);
    }

    /// Records and prints a warning.
    fn warning(&self, label: &str) {
        self.record(OutcomeKind::Warning, label, None);
    }

    /// Records and prints an error.
    fn error(&self, label: &str) {
        self.record(OutcomeKind::Error, label, None);
    }
}

impl<T: Recorder + ?Sized> Recorder for &T {
    fn record(&self, kind: OutcomeKind, label: &str, message: Option<&str>) {
        (**self).record(kind, label, message)
    }

    fn snapshot(&self) -> Totals {
        (**self).snapshot()
    }

    fn try_totals(&self) -> io::Result<Totals> {
        (**self).try_totals()
    }
}
