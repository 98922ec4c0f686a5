// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Recorder, TestState, Totals, state::global};
use std::{io, sync::Arc};
use testglue_metadata::OutcomeKind;
use tracing::debug;

/// A handle for recording outcomes into a [`TestState`].
///
/// By default a `TestRun` is attached to the process-wide [`global`] state, so outcomes recorded
/// through it are counted together with outcomes recorded through [`dg`](crate::dg).
///
/// If [`totals_on_drop`](Self::totals_on_drop) is enabled, dropping the handle prints the totals
/// unless [`finish`](Self::finish) already did.
#[derive(Debug)]
pub struct TestRun {
    state: Arc<TestState>,
    totals_on_drop: bool,
}

impl TestRun {
    /// Creates a handle attached to the process-wide state.
    pub fn new() -> Self {
        Self::attach(Arc::clone(global()))
    }

    /// Creates a handle attached to `state`.
    pub fn attach(state: Arc<TestState>) -> Self {
        Self {
            state,
            totals_on_drop: false,
        }
    }

    /// Sets whether dropping this handle prints the totals.
    pub fn totals_on_drop(mut self, enabled: bool) -> Self {
        self.totals_on_drop = enabled;
        self
    }

    /// Returns the state this handle records into.
    pub fn state(&self) -> &Arc<TestState> {
        &self.state
    }

    /// Prints the totals and consumes the handle.
    ///
    /// The totals are not printed a second time when the handle is dropped.
    pub fn finish(mut self) -> Totals {
        self.totals_on_drop = false;
        self.state.totals()
    }
}

impl Default for TestRun {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder for TestRun {
    fn record(&self, kind: OutcomeKind, label: &str, message: Option<&str>) {
        self.state.record(kind, label, message)
    }

    fn snapshot(&self) -> Totals {
        self.state.snapshot()
    }

    fn try_totals(&self) -> io::Result<Totals> {
        self.state.try_totals()
    }
}

impl Drop for TestRun {
    fn drop(&mut self) {
        if self.totals_on_drop {
            debug!("printing totals for dropped test run");
            self.state.totals();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OutputSink, SharedBuffer, config::GlueConfig};
    use pretty_assertions::assert_eq;
    use test_strategy::proptest;

    fn shared_state() -> (Arc<TestState>, SharedBuffer) {
        let (sink, buffer) = OutputSink::buffer();
        let state = TestState::with_sink(&GlueConfig::default(), sink);
        (Arc::new(state), buffer)
    }

    const EXPECTED_REPORT: &str = "\t\t=== Totals ===\n\
                                   \n\
                                   # of expected passes\t\t1\n\
                                   # of unexpected failures\t\t1\n\
                                   # of total tests\t\t2\n";

    #[test]
    fn handles_share_state() {
        let (state, _buffer) = shared_state();
        let first = TestRun::attach(Arc::clone(&state));
        let second = TestRun::attach(Arc::clone(&state));

        first.pass("a");
        second.fail("b");
        state.note("c");

        let recorders: [&dyn Recorder; 3] = [&*state, &first, &second];
        for recorder in recorders {
            let totals = recorder.snapshot();
            assert_eq!(totals.count(OutcomeKind::Pass), 1);
            assert_eq!(totals.count(OutcomeKind::Fail), 1);
            assert_eq!(totals.count(OutcomeKind::Note), 1);
        }
    }

    #[test]
    fn drop_prints_totals() {
        let (state, buffer) = shared_state();
        {
            let run = TestRun::attach(Arc::clone(&state)).totals_on_drop(true);
            run.pass("a");
            run.fail("b");
        }
        assert_eq!(buffer.contents(), EXPECTED_REPORT);
    }

    #[test]
    fn drop_is_silent_by_default() {
        let (state, buffer) = shared_state();
        TestRun::attach(Arc::clone(&state)).pass("a");
        assert_eq!(buffer.contents(), "");
        assert_eq!(state.counts().get(OutcomeKind::Pass), 1);
    }

    #[test]
    fn finish_prints_once() {
        let (state, buffer) = shared_state();
        let run = TestRun::attach(Arc::clone(&state)).totals_on_drop(true);
        run.pass("a");
        run.fail("b");

        let totals = run.finish();
        assert_eq!(totals.total_tests(), 2);
        assert_eq!(buffer.contents(), EXPECTED_REPORT);
    }

    /// Recording a sequence through a mix of handles gives the same counts as recording it
    /// through a single one.
    #[proptest]
    fn interleaving_does_not_change_counts(events: Vec<(OutcomeKind, u8)>) {
        let (single, _single_buffer) = shared_state();
        let (mixed, _mixed_buffer) = shared_state();
        let handles = [
            TestRun::attach(Arc::clone(&mixed)),
            TestRun::attach(Arc::clone(&mixed)),
        ];

        for &(kind, route) in &events {
            single.record(kind, "event", None);
            match route % 3 {
                0 => mixed.record(kind, "event", None),
                n => handles[usize::from(n) - 1].record(kind, "event", None),
            }
        }

        let expected = single.snapshot();
        let actual = mixed.snapshot();
        assert_eq!(expected, actual);
        assert_eq!(actual.counts().iter().map(|(_, n)| n).sum::<usize>(), events.len());
        assert_eq!(
            actual.total_tests(),
            events.iter().filter(|(kind, _)| kind.is_verdict()).count()
        );
        assert_eq!(mixed.messages(), single.messages());
    }
}
