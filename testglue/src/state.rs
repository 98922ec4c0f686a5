// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    OutputSink, Recorder,
    config::GlueConfig,
    counts::{CounterSet, LogEntry, MessageLog},
    errors::GlobalAlreadyInitialized,
    reporter::{self, TotalsFormat},
    write_str::WriteStr,
};
use parking_lot::Mutex;
use std::{
    fmt, io,
    sync::{Arc, OnceLock},
};
use testglue_metadata::OutcomeKind;
use tracing::{debug, warn};

static GLOBAL: OnceLock<Arc<TestState>> = OnceLock::new();

/// Returns the process-wide test state.
///
/// The state is created with default configuration on first use, unless [`init_global`] was
/// called before that.
pub fn global() -> &'static Arc<TestState> {
    GLOBAL.get_or_init(|| {
        debug!("initializing global test state with defaults");
        Arc::new(TestState::default())
    })
}

/// Installs `state` as the process-wide test state.
///
/// This must happen before anything is recorded through [`dg`](crate::dg) or a
/// [`TestRun`](crate::TestRun) attached to the global state.
pub fn init_global(state: TestState) -> Result<&'static Arc<TestState>, GlobalAlreadyInitialized> {
    GLOBAL
        .set(Arc::new(state))
        .map_err(|_| GlobalAlreadyInitialized)?;
    debug!("initialized global test state");
    Ok(global())
}

/// Counters, message log and output for one test run.
///
/// All recording goes through a single lock, so concurrent callers never lose an increment,
/// log entries and printed lines appear in the order the calls were made, and totals always
/// reflect a consistent set of counts.
#[derive(Debug)]
pub struct TestState {
    inner: Mutex<StateInner>,
    format: TotalsFormat,
    echo_verdicts: bool,
}

#[derive(Debug)]
struct StateInner {
    counts: CounterSet,
    log: MessageLog,
    sink: OutputSink,
}

impl TestState {
    /// Creates a new state that writes to the sink named by `config`.
    pub fn new(config: &GlueConfig) -> Self {
        Self::with_sink(config, config.sink())
    }

    /// Creates a new state that writes to `sink`, ignoring the sink named by `config`.
    pub fn with_sink(config: &GlueConfig, sink: OutputSink) -> Self {
        Self {
            inner: Mutex::new(StateInner {
                counts: CounterSet::new(),
                log: MessageLog::default(),
                sink,
            }),
            format: config.totals_format(),
            echo_verdicts: config.output.echo_verdicts,
        }
    }

    /// Returns the format used for the totals report.
    pub fn format(&self) -> TotalsFormat {
        self.format
    }

    /// Returns a copy of the current counters.
    pub fn counts(&self) -> CounterSet {
        self.inner.lock().counts
    }

    /// Returns a copy of the notes, warnings and errors recorded so far, in order.
    pub fn messages(&self) -> Vec<LogEntry> {
        self.inner.lock().log.entries().to_vec()
    }

    /// Writes the totals report to `writer` instead of this state's sink.
    pub fn write_totals(&self, writer: &mut dyn WriteStr) -> io::Result<Totals> {
        let totals = self.snapshot();
        totals.write_to(writer)?;
        writer.write_str_flush()?;
        Ok(totals)
    }
}

impl Default for TestState {
    fn default() -> Self {
        Self::new(&GlueConfig::default())
    }
}

impl Recorder for TestState {
    fn record(&self, kind: OutcomeKind, label: &str, message: Option<&str>) {
        debug!(kind = kind.keyword(), label, ?message, "recording outcome");

        let mut inner = self.inner.lock();
        inner.counts.increment(kind);
        if kind.carries_message() {
            inner.log.push(LogEntry::new(kind, label, message));
        }

        if kind.carries_message() || self.echo_verdicts {
            let line = reporter::event_line(kind, label, message);
            let sink = &mut inner.sink;
            if let Err(error) = sink.write_str(&line).and_then(|()| sink.write_str_flush()) {
                warn!("failed to write {} line: {error}", kind.tag());
            }
        }
    }

    fn snapshot(&self) -> Totals {
        Totals {
            counts: self.counts(),
            format: self.format,
        }
    }

    fn try_totals(&self) -> io::Result<Totals> {
        // Hold the lock while writing so the report can't interleave with event lines.
        let mut inner = self.inner.lock();
        let totals = Totals {
            counts: inner.counts,
            format: self.format,
        };
        debug!(total_tests = totals.total_tests(), "writing totals");
        totals.write_to(&mut inner.sink)?;
        inner.sink.write_str_flush()?;
        Ok(totals)
    }
}

/// A snapshot of the counters, taken when the totals were requested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Totals {
    counts: CounterSet,
    format: TotalsFormat,
}

impl Totals {
    /// Returns the counters.
    pub fn counts(&self) -> &CounterSet {
        &self.counts
    }

    /// Returns the count for `kind`.
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.counts.get(kind)
    }

    /// Returns the number of tests. Notes, warnings and errors are not included.
    pub fn total_tests(&self) -> usize {
        self.counts.total_tests()
    }

    /// Returns true if any test failed or unexpectedly passed.
    pub fn any_bad(&self) -> bool {
        self.counts.any_bad()
    }

    /// Returns a value that renders these counts using `format` rather than the format of the
    /// state they were taken from.
    pub fn display(&self, format: &TotalsFormat) -> impl fmt::Display + use<> {
        Totals {
            counts: self.counts,
            format: *format,
        }
    }

    /// Writes the totals report to `writer`.
    pub fn write_to(&self, writer: &mut dyn WriteStr) -> io::Result<()> {
        reporter::write_totals(writer, &self.counts, &self.format)
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out).map_err(|_| fmt::Error)?;
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, ReportConfig};
    use pretty_assertions::assert_eq;

    fn buffered(config: &GlueConfig) -> (TestState, crate::SharedBuffer) {
        let (sink, buffer) = OutputSink::buffer();
        (TestState::with_sink(config, sink), buffer)
    }

    #[test]
    fn pass_fail_family_is_silent() {
        let (state, buffer) = buffered(&GlueConfig::default());
        state.pass("a");
        state.xpass("b");
        state.fail("c");
        state.xfail("d");
        state.untested("e");
        state.unresolved("f");
        state.unsupported("g");

        assert_eq!(buffer.contents(), "");
        assert_eq!(state.counts().total_tests(), 7);
        assert!(state.messages().is_empty());
    }

    #[test]
    fn diagnostics_are_logged_and_printed() {
        let (state, buffer) = buffered(&GlueConfig::default());
        state.note("test");
        state.record(OutcomeKind::Warning, "frob", Some("deprecated flag"));
        state.error("");

        assert_eq!(
            buffer.contents(),
            "NOTE: test\nWARNING: frob: deprecated flag\nERROR: \n"
        );

        let messages = state.messages();
        let kinds: Vec<_> = messages.iter().map(LogEntry::kind).collect();
        assert_eq!(
            kinds,
            [OutcomeKind::Note, OutcomeKind::Warning, OutcomeKind::Error]
        );
        assert_eq!(messages[1].message(), Some("deprecated flag"));
        assert_eq!(state.counts().diagnostics(), 3);
        assert_eq!(state.counts().total_tests(), 0);
    }

    #[test]
    fn echo_verdicts() {
        let config = GlueConfig {
            output: OutputConfig {
                echo_verdicts: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let (state, buffer) = buffered(&config);
        state.pass("first");
        state.note("between");
        state.xfail("second");

        assert_eq!(
            buffer.contents(),
            "PASS: first\nNOTE: between\nXFAIL: second\n"
        );
    }

    #[test]
    fn example_run() {
        let (state, buffer) = buffered(&GlueConfig::default());
        state.pass("test");
        state.fail("test");
        state.xpass("test");
        state.xfail("test");
        state.note("test");

        let totals = state.totals();
        assert_eq!(totals.count(OutcomeKind::Pass), 1);
        assert_eq!(totals.count(OutcomeKind::Fail), 1);
        assert_eq!(totals.count(OutcomeKind::ExpectedPass), 1);
        assert_eq!(totals.count(OutcomeKind::ExpectedFail), 1);
        assert_eq!(totals.count(OutcomeKind::Note), 1);
        assert_eq!(totals.total_tests(), 4);
        assert!(totals.any_bad());

        assert_eq!(
            buffer.contents(),
            "NOTE: test\n\
             \t\t=== Totals ===\n\
             \n\
             # of expected passes\t\t1\n\
             # of unexpected successes\t\t1\n\
             # of unexpected failures\t\t1\n\
             # of expected failures\t\t1\n\
             # of total tests\t\t4\n"
        );
    }

    #[test]
    fn notes_only() {
        let (state, _buffer) = buffered(&GlueConfig::default());
        state.note("one");
        state.note("two");
        state.note("three");

        let totals = state.snapshot();
        assert_eq!(totals.total_tests(), 0);
        for kind in OutcomeKind::ALL.into_iter().filter(|k| k.is_verdict()) {
            assert_eq!(totals.count(kind), 0, "{kind}");
        }
        let labels: Vec<_> = state
            .messages()
            .iter()
            .map(|entry| entry.label().to_owned())
            .collect();
        assert_eq!(labels, ["one", "two", "three"]);
    }

    #[test]
    fn totals_is_idempotent() {
        let (state, buffer) = buffered(&GlueConfig::default());
        state.pass("a");
        state.unsupported("b");
        state.warning("c");
        assert_eq!(buffer.take(), "WARNING: c\n");

        let first = state.totals();
        let first_text = buffer.take();
        let second = state.totals();
        let second_text = buffer.take();

        assert_eq!(first, second);
        assert_eq!(first_text, second_text);
        assert_eq!(state.counts(), *first.counts());
    }

    #[test]
    fn write_totals_uses_configured_format() {
        let config = GlueConfig {
            report: ReportConfig {
                show_zero_counts: false,
                show_diagnostics: true,
            },
            ..Default::default()
        };
        let (state, buffer) = buffered(&config);
        state.error("boom");

        let mut out = String::new();
        let totals = state.write_totals(&mut out).unwrap();
        assert_eq!(
            out,
            "\t\t=== Totals ===\n\n# of errors\t\t1\n# of total tests\t\t0\n"
        );
        assert_eq!(totals.to_string(), out);
        assert_eq!(
            totals.display(&TotalsFormat::default()).to_string(),
            "\t\t=== Totals ===\n\n# of total tests\t\t0\n"
        );
        // Only the error line went to the sink.
        assert_eq!(buffer.contents(), "ERROR: boom\n");
    }

    #[test]
    fn repeated_labels_are_separate_events() {
        let (state, _buffer) = buffered(&GlueConfig::default());
        for _ in 0..3 {
            state.pass("same");
        }
        assert_eq!(state.counts().get(OutcomeKind::Pass), 3);
    }

    #[test]
    fn concurrent_recording_loses_nothing() {
        let state = Arc::new(buffered(&GlueConfig::default()).0);
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        if i % 2 == 0 {
                            state.pass("thread");
                        } else {
                            state.note("thread");
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let counts = state.counts();
        assert_eq!(counts.get(OutcomeKind::Pass), 400);
        assert_eq!(counts.get(OutcomeKind::Note), 400);
        assert_eq!(state.messages().len(), 400);
    }
}
