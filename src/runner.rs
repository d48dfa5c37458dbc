//! Runs the checks in order and collects their outcomes.

use anyhow::Result;
use tracing::{info, warn};

use crate::checks::{CheckContext, CheckError, CheckKind};
use crate::cli_style;
use crate::config::RunnerConfig;

#[derive(Debug)]
pub struct CheckResult {
    pub kind: CheckKind,
    pub outcome: Result<(), CheckError>,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    pub fn result(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.kind == kind)
    }
}

/// Receives progress while a run is in flight.
pub trait Reporter {
    fn run_started(&mut self, base_url: &str, total: usize);
    fn check_finished(&mut self, result: &CheckResult);
    fn run_finished(&mut self, summary: &RunSummary);
}

/// Prints the human readable report to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn run_started(&mut self, base_url: &str, total: usize) {
        cli_style::print_banner(base_url, total);
    }

    fn check_finished(&mut self, result: &CheckResult) {
        let label = result.kind.label();
        match &result.outcome {
            Ok(()) => cli_style::print_pass(label),
            Err(err) => {
                cli_style::print_fail(label);
                match err.response() {
                    Some(response) => {
                        cli_style::print_detail("Status", &response.status.to_string());
                        cli_style::print_detail("Response", &response.display_body());
                    }
                    None => cli_style::print_detail("Error", &err.to_string()),
                }
            }
        }
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        cli_style::print_summary(summary.passed(), summary.total());
    }
}

pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Runs every check in [`CheckKind::ALL`] order.
    ///
    /// Fails only if the HTTP client cannot be built. Check failures are
    /// recorded in the summary and never stop the run.
    pub async fn run(&self, reporter: &mut dyn Reporter) -> Result<RunSummary> {
        let mut ctx = CheckContext::from_config(&self.config)?;
        Ok(self.run_with_context(&mut ctx, reporter).await)
    }

    /// Runs the pipeline over a caller supplied context.
    pub async fn run_with_context(
        &self,
        ctx: &mut CheckContext,
        reporter: &mut dyn Reporter,
    ) -> RunSummary {
        let base_url = ctx.client.base_url().to_string();
        info!("Running {} checks against {}", CheckKind::ALL.len(), base_url);
        reporter.run_started(&base_url, CheckKind::ALL.len());

        let mut summary = RunSummary::default();
        for kind in CheckKind::ALL {
            let outcome = kind.run(ctx).await;
            if let Err(err) = &outcome {
                warn!("{} failed: {}", kind.label(), err);
            }
            let result = CheckResult { kind, outcome };
            reporter.check_finished(&result);
            summary.results.push(result);
        }

        info!("{}/{} checks passed", summary.passed(), summary.total());
        reporter.run_finished(&summary);
        summary
    }
}

/// Runs the whole checklist and reports whether every check passed.
pub async fn run_all_tests(config: RunnerConfig, reporter: &mut dyn Reporter) -> Result<bool> {
    let summary = Runner::new(config).run(reporter).await?;
    Ok(summary.all_passed())
}
