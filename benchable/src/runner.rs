//! Run Dispatcher
//!
//! The `Runner` binds a suite blueprint to a validated mode and a set of
//! options for exactly one run. `run()` walks a forward-only sequence of
//! phases:
//!
//! ```text
//! Created ──run()──▶ SetupRun ──▶ Reporting ──▶ Done
//! ```
//!
//! - `SetupRun`: the suite's setup routine executes once (no-op if none).
//! - `Reporting`: the mode-specific backend invocation is resolved and one
//!   report is registered per discovered case, in discovery order, under
//!   the derived label.
//! - `Done`: the backend's report is rendered, printed, and returned
//!   untouched.
//!
//! `run()` consumes the runner, so there is no retry and no backward
//! transition. Panics from setup or case bodies unwind through `run()`
//! unmodified - the dispatcher never catches, never substitutes a partial
//! report, and never continues past a failing case.

use benchable_backends::{Backend, MemoryAllocation, RehearsedTiming, SimpleTiming, ThroughputRate};
use benchable_core::{case_label, InvalidModeError, Mode, RunOptions, Suite};
use benchable_report::{render, RunReport};
use tracing::debug;

/// Mode-specific backend invocation, resolved once per run.
///
/// The asymmetry between the variants is deliberate and mirrors what each
/// engine can be configured with: the timing pair takes only a column
/// width, throughput applies a configuration step consuming the whole
/// options struct, and memory receives the options wholesale.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Plain timing: label column width only.
    SimpleTiming {
        /// Resolved label column width.
        width: usize,
    },
    /// Rehearsed timing: label column width only.
    RehearsedTiming {
        /// Resolved label column width.
        width: usize,
    },
    /// Throughput: construct, then configure with the full options.
    ThroughputRate {
        /// The complete run options, consumed by the configure step.
        options: RunOptions,
    },
    /// Memory: the full options passed wholesale at construction.
    MemoryAllocation {
        /// The complete run options.
        options: RunOptions,
    },
}

impl Invocation {
    /// Resolve the backend-call shape for a mode from the run options.
    pub fn resolve(mode: Mode, options: &RunOptions) -> Self {
        match mode {
            Mode::SimpleTiming => Invocation::SimpleTiming {
                width: options.resolved_width(),
            },
            Mode::RehearsedTiming => Invocation::RehearsedTiming {
                width: options.resolved_width(),
            },
            Mode::ThroughputRate => Invocation::ThroughputRate {
                options: options.clone(),
            },
            Mode::MemoryAllocation => Invocation::MemoryAllocation {
                options: options.clone(),
            },
        }
    }

    fn into_backend(self) -> Box<dyn Backend> {
        match self {
            Invocation::SimpleTiming { width } => Box::new(SimpleTiming::new(width)),
            Invocation::RehearsedTiming { width } => Box::new(RehearsedTiming::new(width)),
            Invocation::ThroughputRate { options } => {
                let mut backend = ThroughputRate::new();
                backend.configure(&options);
                Box::new(backend)
            }
            Invocation::MemoryAllocation { options } => Box::new(MemoryAllocation::new(options)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    SetupRun,
    Reporting,
    Done,
}

/// One run of a suite: a blueprint bound to a mode and options.
///
/// Holds the suite mutably for the duration of the run, which statically
/// rules out concurrent runs of the same blueprint.
#[derive(Debug)]
pub struct Runner<'s> {
    suite: &'s mut Suite,
    mode: Mode,
    options: RunOptions,
    phase: Phase,
}

impl<'s> Runner<'s> {
    /// Bind a suite to a mode and options.
    ///
    /// A `Mode` value is valid by construction, so this cannot fail; use
    /// [`with_mode_name`](Runner::with_mode_name) when the mode arrives as
    /// text and must be validated.
    pub fn new(suite: &'s mut Suite, mode: Mode, options: RunOptions) -> Self {
        Self {
            suite,
            mode,
            options,
            phase: Phase::Created,
        }
    }

    /// Bind a suite to a textual mode, validating it eagerly.
    ///
    /// Fails with [`InvalidModeError`] before any run state exists when
    /// `mode` is not one of the four recognized names.
    pub fn with_mode_name(
        suite: &'s mut Suite,
        mode: &str,
        options: RunOptions,
    ) -> Result<Self, InvalidModeError> {
        let mode = mode.parse()?;
        Ok(Self::new(suite, mode, options))
    }

    /// The mode this run is bound to.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The options this run was constructed with.
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Execute the run: setup once, then one backend report per discovered
    /// case, in discovery order.
    ///
    /// Prints the rendered report and returns the backend's `RunReport`
    /// untouched. Panics from the setup routine or a case body unwind to
    /// the caller; cases queued behind a failing one never run.
    pub fn run(mut self) -> RunReport {
        debug!(
            suite = self.suite.name(),
            mode = %self.mode,
            phase = ?self.phase,
            "starting run"
        );

        self.suite.run_setup();
        self.phase = Phase::SetupRun;
        debug!(phase = ?self.phase, "setup complete");

        let invocation = Invocation::resolve(self.mode, &self.options);
        let mut backend = invocation.into_backend();
        self.phase = Phase::Reporting;

        for (identifier, body) in self.suite.cases_mut() {
            let label = case_label(identifier);
            debug!(identifier, label = label.as_str(), "registering report");
            backend.report(&label, body);
        }

        let mut report = backend.finish();
        report.meta.suite = self.suite.name().to_string();
        self.phase = Phase::Done;
        debug!(phase = ?self.phase, cases = report.entries.len(), "run finished");

        print!("{}", render(&report));
        report
    }
}
