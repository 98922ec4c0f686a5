// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use testglue_metadata::{OutcomeCategory, OutcomeKind};

/// One counter per [`OutcomeKind`].
///
/// Counters only ever go up, and only by recording an outcome on a
/// [`TestState`](crate::TestState).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CounterSet {
    counts: [usize; OutcomeKind::COUNT],
}

impl CounterSet {
    /// Creates a set with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the count for `kind`.
    #[inline]
    pub fn get(&self, kind: OutcomeKind) -> usize {
        self.counts[kind.index()]
    }

    pub(crate) fn increment(&mut self, kind: OutcomeKind) {
        self.counts[kind.index()] += 1;
    }

    /// Iterates over every kind and its count, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (OutcomeKind, usize)> + '_ {
        OutcomeKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
    }

    /// Returns the number of tests: the sum of every verdict count.
    ///
    /// Notes, warnings and errors are not tests and don't contribute.
    pub fn total_tests(&self) -> usize {
        self.iter()
            .filter(|(kind, _)| kind.is_verdict())
            .map(|(_, count)| count)
            .sum()
    }

    /// Returns the number of notes, warnings and errors.
    pub fn diagnostics(&self) -> usize {
        self.sum_category(OutcomeCategory::Diagnostic)
    }

    /// Returns true if any test failed or unexpectedly passed.
    pub fn any_bad(&self) -> bool {
        self.sum_category(OutcomeCategory::Bad) > 0
    }

    /// Returns true if nothing at all has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    fn sum_category(&self, category: OutcomeCategory) -> usize {
        self.iter()
            .filter(|(kind, _)| kind.category() == category)
            .map(|(_, count)| count)
            .sum()
    }
}

/// A note, warning or error that was recorded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogEntry {
    kind: OutcomeKind,
    label: String,
    message: Option<String>,
}

impl LogEntry {
    pub(crate) fn new(kind: OutcomeKind, label: &str, message: Option<&str>) -> Self {
        Self {
            kind,
            label: label.to_owned(),
            message: message.map(str::to_owned),
        }
    }

    /// The kind of entry: [`Note`](OutcomeKind::Note), [`Warning`](OutcomeKind::Warning) or
    /// [`Error`](OutcomeKind::Error).
    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// The label passed in when the entry was recorded.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The message passed in when the entry was recorded, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.tag(), self.label)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// An append-only, ordered log of [`LogEntry`] values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
}

impl MessageLog {
    pub(crate) fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in the order they were recorded.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Iterates over the entries in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a MessageLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
