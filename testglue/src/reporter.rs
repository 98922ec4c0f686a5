// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting for event lines and the totals report.

use crate::{counts::CounterSet, write_str::WriteStr};
use std::io;
use swrite::{SWrite, swrite};
use testglue_metadata::{OutcomeKind, TOTAL_TESTS_LABEL, TOTALS_HEADER, TOTALS_SEPARATOR};

/// Controls which lines appear in the totals report.
///
/// The header and the total tests line are always present.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TotalsFormat {
    /// List kinds whose count is zero, instead of omitting them.
    pub show_zero_counts: bool,

    /// List notes, warnings and errors after the test verdicts.
    pub show_diagnostics: bool,
}

impl TotalsFormat {
    /// Returns the kinds that should be listed for `counts`, in report order.
    pub fn listed_kinds(&self, counts: &CounterSet) -> impl Iterator<Item = OutcomeKind> + '_ {
        let counts = *counts;
        OutcomeKind::ALL.into_iter().filter(move |&kind| {
            (kind.is_verdict() || self.show_diagnostics)
                && (self.show_zero_counts || counts.get(kind) > 0)
        })
    }
}

pub(crate) fn write_totals(
    writer: &mut dyn WriteStr,
    counts: &CounterSet,
    format: &TotalsFormat,
) -> io::Result<()> {
    writeln!(writer, "\t\t{TOTALS_HEADER}")?;
    writeln!(writer)?;
    for kind in format.listed_kinds(counts) {
        write_totals_line(writer, kind.totals_label(), counts.get(kind))?;
    }
    write_totals_line(writer, TOTAL_TESTS_LABEL, counts.total_tests())
}

fn write_totals_line(writer: &mut dyn WriteStr, label: &str, count: usize) -> io::Result<()> {
    writeln!(writer, "{label}{TOTALS_SEPARATOR}{count}")
}

/// Formats a single event line such as `NOTE: label: message`, including the trailing newline.
///
/// The line is built up front so that it can be handed to the sink in one write.
pub(crate) fn event_line(kind: OutcomeKind, label: &str, message: Option<&str>) -> String {
    let mut line = String::with_capacity(kind.tag().len() + label.len() + 3);
    swrite!(line, "{}: {label}", kind.tag());
    if let Some(message) = message {
        swrite!(line, ": {message}");
    }
    line.push('\n');
    line
}
