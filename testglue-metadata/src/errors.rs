// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::OutcomeKind;
use std::{error, fmt, num::ParseIntError};

/// A string was not one of the recognized outcome keywords.
///
/// Returned by the [`FromStr`](std::str::FromStr) implementation for [`OutcomeKind`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownOutcomeKind {
    input: String,
}

impl UnknownOutcomeKind {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the input that could not be parsed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for UnknownOutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known = OutcomeKind::ALL.map(|kind| kind.keyword()).join(", ");
        write!(
            f,
            "unknown test `{}' (expected one of: {known})",
            self.input
        )
    }
}

impl error::Error for UnknownOutcomeKind {}

/// An error that occurs while parsing a totals report with
/// [`ParsedTotals::parse`](crate::ParsedTotals::parse).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TotalsParseError {
    /// The `=== Totals ===` header line was not found.
    MissingHeader,

    /// A line had a label that isn't part of the report format.
    UnknownLabel {
        /// The 1-based line number.
        line_number: usize,

        /// The label that was not recognized.
        label: String,
    },

    /// A count could not be parsed as a non-negative integer.
    InvalidCount {
        /// The 1-based line number.
        line_number: usize,

        /// The underlying parse error.
        error: ParseIntError,
    },

    /// The same kind was listed twice.
    DuplicateKind {
        /// The 1-based line number of the second occurrence.
        line_number: usize,

        /// The kind that was repeated.
        kind: OutcomeKind,
    },

    /// The verdict counts add up to more than `usize::MAX`.
    CountOverflow {
        /// The 1-based line number of the total tests line.
        line_number: usize,
    },

    /// The report ended without a `# of total tests` line.
    MissingTotal,

    /// The total did not match the sum of the verdict lines.
    TotalMismatch {
        /// The total stated in the report.
        stated: usize,

        /// The sum of the verdict lines that were listed.
        computed: usize,
    },
}

impl fmt::Display for TotalsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "totals header not found"),
            Self::UnknownLabel { line_number, label } => {
                write!(f, "line {line_number}: unknown totals label `{label}`")
            }
            Self::InvalidCount { line_number, .. } => {
                write!(f, "line {line_number}: invalid count")
            }
            Self::DuplicateKind { line_number, kind } => {
                write!(f, "line {line_number}: {kind} listed more than once")
            }
            Self::CountOverflow { line_number } => {
                write!(f, "line {line_number}: verdict counts overflow")
            }
            Self::MissingTotal => write!(f, "total tests line not found"),
            Self::TotalMismatch { stated, computed } => write!(
                f,
                "total tests is {stated}, but the listed verdicts add up to {computed}"
            ),
        }
    }
}

impl error::Error for TotalsParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidCount { error, .. } => Some(error),
            Self::MissingHeader
            | Self::UnknownLabel { .. }
            | Self::DuplicateKind { .. }
            | Self::CountOverflow { .. }
            | Self::MissingTotal
            | Self::TotalMismatch { .. } => None,
        }
    }
}
