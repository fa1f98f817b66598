use super::Reporter;
use crate::{
    report::{FailureReport, Summary, TestCaseSummary},
    test::{TestCase, TestDesc},
};

/// A reporter that forwards the progress to the `log` facade.
#[derive(Debug, Clone)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    /// Create a log reporter.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn test_run_starting(&self, tests: &[TestCase]) {
        let suffix = match tests.len() {
            1 => "",
            _ => "s",
        };
        log::info!("running {} test{}", tests.len(), suffix);
    }

    fn test_run_ended(&self, summary: &Summary) {
        if summary.is_passed() {
            log::info!("test status: ok");
        } else {
            log::error!("test status: FAILED");
        }
    }

    fn test_case_starting(&self, desc: &TestDesc) {
        log::info!("start: {}", desc.name());
    }

    fn invocation_failed(&self, report: &FailureReport) {
        log::error!(
            "{}: invocation {} failed\n{}",
            report.desc.name(),
            report.invocation,
            report
        );
    }

    fn test_case_ended(&self, summary: &TestCaseSummary) {
        if summary.is_passed() {
            log::info!(
                "{}: ok ({} invocations)",
                summary.desc.name(),
                summary.invocations
            );
        } else {
            log::error!(
                "{}: FAILED ({} of {} invocations)",
                summary.desc.name(),
                summary.failures.len(),
                summary.invocations
            );
        }
    }
}
