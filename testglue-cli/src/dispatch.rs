// Copyright (c) The testglue Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    ExpectedError,
    output::{OutputContext, OutputOpts, clap_styles},
};
use clap::{Args, Parser, ValueEnum};
use testglue::{
    Recorder, TestRun, TestState, Totals,
    config::{ConfigLocation, GlueConfig},
    dg, init_global,
};
use testglue_metadata::{GlueExitCode, OutcomeKind};
use tracing::debug;

/// Records a sequence of test outcomes and prints the totals.
///
/// Each KEYWORD (pass, xpass, fail, xfail, untested, unresolved, unsupported, note, warning or
/// error) is recorded once, in order, with the placeholder label. Keywords are checked before
/// anything is recorded, so an unknown keyword leaves every counter untouched.
#[derive(Debug, Parser)]
#[command(version, name = "testglue-exercise", styles = clap_styles::style())]
pub struct ExerciseApp {
    /// Outcome keywords to record
    #[arg(value_name = "KEYWORD", required = true, num_args = 1..)]
    keywords: Vec<OutcomeKind>,

    /// Which surface to record through
    #[arg(long, value_enum, default_value_t)]
    surface: Surface,

    /// Label to record each outcome under
    #[arg(long, default_value = "test")]
    label: String,

    /// Exit with status 1 if any test failed or unexpectedly passed
    #[arg(long)]
    fail_on_bad: bool,

    #[command(flatten)]
    config_opts: ConfigOpts,

    #[command(flatten)]
    output: OutputOpts,
}

impl ExerciseApp {
    /// Initializes logging and color support, returning the resolved output context.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app, returning the process exit code on success.
    pub fn exec(self) -> Result<i32, ExpectedError> {
        let config = self.config_opts.make_config()?;
        let state = init_global(TestState::new(&config))?;

        // The handle shares the global state with the free functions.
        let run = TestRun::attach(state.clone());
        let exercise = Exercise {
            keywords: &self.keywords,
            label: &self.label,
            surface: self.surface,
        };
        let totals = exercise.run(&dg::Global, &run)?;

        check_totals(&totals, self.fail_on_bad)?;
        Ok(GlueExitCode::OK)
    }
}

#[derive(Debug, Args)]
struct ConfigOpts {
    /// Config file [default: built-in defaults]
    #[arg(long, value_name = "PATH", env = "TESTGLUE_CONFIG")]
    config: Option<String>,
}

impl ConfigOpts {
    fn make_config(&self) -> Result<GlueConfig, ExpectedError> {
        let location = ConfigLocation::from_cli_or_env(self.config.as_deref());
        Ok(GlueConfig::from_location(location)?)
    }
}

/// The recording surface a keyword goes through.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
enum Surface {
    /// The free functions in `testglue::dg`
    #[default]
    Procedural,

    /// A `TestRun` handle
    Object,

    /// Alternate, starting with the object surface
    Mixed,
}

/// A single pass over the keywords given on the command line.
#[derive(Debug)]
struct Exercise<'a> {
    keywords: &'a [OutcomeKind],
    label: &'a str,
    surface: Surface,
}

impl Exercise<'_> {
    /// Records every keyword, then prints the totals once.
    ///
    /// `procedural` and `object` must share one state for the totals to cover every keyword.
    fn run(
        &self,
        procedural: &dyn Recorder,
        object: &dyn Recorder,
    ) -> Result<Totals, ExpectedError> {
        for (index, &kind) in self.keywords.iter().enumerate() {
            let recorder = match self.surface {
                Surface::Procedural => procedural,
                Surface::Object => object,
                Surface::Mixed if index % 2 == 0 => object,
                Surface::Mixed => procedural,
            };
            recorder.record(kind, self.label, None);
        }

        let reporter = match self.surface {
            Surface::Procedural => procedural,
            Surface::Object | Surface::Mixed => object,
        };
        let totals = reporter
            .try_totals()
            .map_err(|err| ExpectedError::WriteTotalsError { err })?;
        debug!(
            keywords = self.keywords.len(),
            total_tests = totals.total_tests(),
            "exercise complete"
        );
        Ok(totals)
    }
}

fn check_totals(totals: &Totals, fail_on_bad: bool) -> Result<(), ExpectedError> {
    if fail_on_bad && totals.any_bad() {
        return Err(ExpectedError::TestRunFailed {
            failed: totals.count(OutcomeKind::Fail),
            unexpected_passes: totals.count(OutcomeKind::ExpectedPass),
        });
    }
    Ok(())
}
