// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::UnknownOutcomeKind;
use std::{fmt, str::FromStr};

/// The kind of outcome recorded for a test case.
///
/// The declaration order of the variants is significant: it is the order in which kinds are
/// listed in the totals report, and tools that scrape the report may depend on it.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "proptest1", derive(test_strategy::Arbitrary))]
pub enum OutcomeKind {
    /// The test passed.
    Pass,

    /// The test passed, but it was expected to fail (`XPASS`).
    ExpectedPass,

    /// The test failed.
    Fail,

    /// The test failed, and it was expected to (`XFAIL`).
    ExpectedFail,

    /// The test was not run.
    Untested,

    /// The test produced a result that needs human review.
    Unresolved,

    /// The test relies on a feature that isn't available.
    Unsupported,

    /// An informational message.
    Note,

    /// A warning message.
    Warning,

    /// An error message. This is a diagnostic, not a test verdict.
    Error,
}

impl OutcomeKind {
    /// The number of outcome kinds.
    pub const COUNT: usize = 10;

    /// All outcome kinds, in report order.
    pub const ALL: [OutcomeKind; Self::COUNT] = [
        Self::Pass,
        Self::ExpectedPass,
        Self::Fail,
        Self::ExpectedFail,
        Self::Untested,
        Self::Unresolved,
        Self::Unsupported,
        Self::Note,
        Self::Warning,
        Self::Error,
    ];

    /// Returns the position of this kind in [`ALL`](Self::ALL).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the lowercase keyword accepted on the exerciser command line.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::ExpectedPass => "xpass",
            Self::Fail => "fail",
            Self::ExpectedFail => "xfail",
            Self::Untested => "untested",
            Self::Unresolved => "unresolved",
            Self::Unsupported => "unsupported",
            Self::Note => "note",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns the uppercase tag that prefixes event lines, e.g. `NOTE: label`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::ExpectedPass => "XPASS",
            Self::Fail => "FAIL",
            Self::ExpectedFail => "XFAIL",
            Self::Untested => "UNTESTED",
            Self::Unresolved => "UNRESOLVED",
            Self::Unsupported => "UNSUPPORTED",
            Self::Note => "NOTE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Returns the label used for this kind's line in the totals report.
    pub fn totals_label(self) -> &'static str {
        match self {
            Self::Pass => "# of expected passes",
            Self::ExpectedPass => "# of unexpected successes",
            Self::Fail => "# of unexpected failures",
            Self::ExpectedFail => "# of expected failures",
            Self::Untested => "# of untested testcases",
            Self::Unresolved => "# of unresolved testcases",
            Self::Unsupported => "# of unsupported tests",
            Self::Note => "# of notes",
            Self::Warning => "# of warnings",
            Self::Error => "# of errors",
        }
    }

    /// Looks up a kind by its totals report label.
    pub fn from_totals_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.totals_label() == label)
    }

    /// Returns the category this kind belongs to.
    pub fn category(self) -> OutcomeCategory {
        match self {
            Self::Pass | Self::ExpectedFail => OutcomeCategory::Good,
            Self::Fail | Self::ExpectedPass => OutcomeCategory::Bad,
            Self::Untested | Self::Unresolved | Self::Unsupported => OutcomeCategory::Inconclusive,
            Self::Note | Self::Warning | Self::Error => OutcomeCategory::Diagnostic,
        }
    }

    /// Returns true if this kind is a test verdict, i.e. it counts towards the total number of
    /// tests.
    #[inline]
    pub fn is_verdict(self) -> bool {
        self.category() != OutcomeCategory::Diagnostic
    }

    /// Returns true if recording this kind also logs and emits its message.
    #[inline]
    pub fn carries_message(self) -> bool {
        !self.is_verdict()
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for OutcomeKind {
    type Err = UnknownOutcomeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Matching is case-sensitive: "PASS" is not a keyword.
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or_else(|| UnknownOutcomeKind::new(s))
    }
}

/// A coarse grouping of [`OutcomeKind`]s.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum OutcomeCategory {
    /// `PASS` and `XFAIL`: the test behaved as expected.
    Good,

    /// `FAIL` and `XPASS`: the test did not behave as expected.
    Bad,

    /// `UNTESTED`, `UNRESOLVED` and `UNSUPPORTED`: no conclusion could be drawn.
    Inconclusive,

    /// `NOTE`, `WARNING` and `ERROR`: messages rather than verdicts.
    Diagnostic,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn all_matches_index() {
        for (i, kind) in OutcomeKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), i, "index for {kind:?}");
        }
    }

    #[test_case("pass", OutcomeKind::Pass)]
    #[test_case("xpass", OutcomeKind::ExpectedPass)]
    #[test_case("fail", OutcomeKind::Fail)]
    #[test_case("xfail", OutcomeKind::ExpectedFail)]
    #[test_case("untested", OutcomeKind::Untested)]
    #[test_case("unresolved", OutcomeKind::Unresolved)]
    #[test_case("unsupported", OutcomeKind::Unsupported)]
    #[test_case("note", OutcomeKind::Note)]
    #[test_case("warning", OutcomeKind::Warning)]
    #[test_case("error", OutcomeKind::Error)]
    fn keyword_parses(input: &str, expected: OutcomeKind) {
        assert_eq!(input.parse::<OutcomeKind>().unwrap(), expected);
        assert_eq!(expected.keyword(), input);
    }

    #[test_case("PASS"; "uppercase")]
    #[test_case("Pass"; "mixed case")]
    #[test_case(""; "empty")]
    #[test_case("passed"; "near miss")]
    #[test_case(" pass"; "leading space")]
    fn keyword_rejects(input: &str) {
        let err = input
            .parse::<OutcomeKind>()
            .expect_err("input should be rejected");
        assert_eq!(err.input(), input);
    }

    #[test]
    fn totals_labels_round_trip() {
        for kind in OutcomeKind::ALL {
            assert_eq!(OutcomeKind::from_totals_label(kind.totals_label()), Some(kind));
        }
        assert_eq!(OutcomeKind::from_totals_label("# of total tests"), None);
    }

    #[test]
    fn verdicts_and_diagnostics() {
        let verdicts: Vec<_> = OutcomeKind::ALL
            .into_iter()
            .filter(|kind| kind.is_verdict())
            .collect();
        assert_eq!(verdicts.len(), 7);
        assert!(!OutcomeKind::Note.is_verdict());
        assert!(OutcomeKind::Warning.carries_message());
        assert!(OutcomeKind::Error.carries_message());
        assert!(!OutcomeKind::Unsupported.carries_message());
    }
}
