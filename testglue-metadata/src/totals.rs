// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The text format of the totals report.
//!
//! A report looks like this (tabs shown as `\t`):
//!
//! ```text
//! \t\t=== Totals ===
//!
//! # of expected passes\t\t2
//! # of unexpected failures\t\t1
//! # of total tests\t\t3
//! ```
//!
//! Kinds are always listed in [`OutcomeKind::ALL`] order. Which kinds are listed depends on how
//! the report was configured, so a kind that is absent reads as zero.

use crate::{OutcomeKind, TotalsParseError};

/// The text of the header line, without surrounding whitespace.
pub const TOTALS_HEADER: &str = "=== Totals ===";

/// The label of the last line of the report, which carries the total number of tests.
pub const TOTAL_TESTS_LABEL: &str = "# of total tests";

/// The separator between a label and its count.
pub const TOTALS_SEPARATOR: &str = "\t\t";

/// A totals report read back from text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedTotals {
    counts: [Option<usize>; OutcomeKind::COUNT],
    total_tests: usize,
}

impl ParsedTotals {
    /// Parses a totals report.
    ///
    /// Lines before the header are skipped, so the entire output of a run (including event lines
    /// such as `NOTE: ...`) can be passed in. Parsing stops at the total tests line.
    pub fn parse(input: &str) -> Result<Self, TotalsParseError> {
        let mut lines = input
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .skip_while(|(_, line)| line.trim() != TOTALS_HEADER);

        if lines.next().is_none() {
            return Err(TotalsParseError::MissingHeader);
        }

        let mut counts = [None; OutcomeKind::COUNT];
        for (line_number, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let Some((label, count)) = line.split_once('\t') else {
                return Err(TotalsParseError::UnknownLabel {
                    line_number,
                    label: line.to_owned(),
                });
            };
            let count: usize = count
                .trim()
                .parse()
                .map_err(|error| TotalsParseError::InvalidCount { line_number, error })?;

            if label == TOTAL_TESTS_LABEL {
                let computed = OutcomeKind::ALL
                    .into_iter()
                    .filter(|kind| kind.is_verdict())
                    .filter_map(|kind| counts[kind.index()])
                    .try_fold(0usize, |acc, n| acc.checked_add(n))
                    .ok_or(TotalsParseError::CountOverflow { line_number })?;
                if computed != count {
                    return Err(TotalsParseError::TotalMismatch {
                        stated: count,
                        computed,
                    });
                }
                return Ok(Self {
                    counts,
                    total_tests: count,
                });
            }

            let kind = OutcomeKind::from_totals_label(label).ok_or_else(|| {
                TotalsParseError::UnknownLabel {
                    line_number,
                    label: label.to_owned(),
                }
            })?;
            let slot = &mut counts[kind.index()];
            if slot.is_some() {
                return Err(TotalsParseError::DuplicateKind { line_number, kind });
            }
            *slot = Some(count);
        }

        Err(TotalsParseError::MissingTotal)
    }

    /// Returns the count for `kind`, or 0 if the report did not list it.
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.counts[kind.index()].unwrap_or(0)
    }

    /// Returns true if the report had a line for `kind`.
    pub fn is_listed(&self, kind: OutcomeKind) -> bool {
        self.counts[kind.index()].is_some()
    }

    /// Returns the total number of tests stated by the report.
    pub fn total_tests(&self) -> usize {
        self.total_tests
    }
}
