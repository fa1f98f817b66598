//! Observers of a test run.

mod console;
mod log;

pub use self::{console::ConsoleReporter, log::LogReporter};

use crate::{
    report::{FailureReport, Summary, TestCaseSummary},
    test::{TestCase, TestDesc},
};

/// The receiver of the events emitted while running test cases.
pub trait Reporter {
    /// Called once before the first test case starts.
    fn test_run_starting(&self, tests: &[TestCase]);

    /// Called once after every test case has been run.
    fn test_run_ended(&self, summary: &Summary);

    /// Called before the first invocation of a test case.
    fn test_case_starting(&self, desc: &TestDesc);

    /// Called for every invocation that ended with a fault.
    fn invocation_failed(&self, report: &FailureReport);

    /// Called after the last invocation of a test case.
    fn test_case_ended(&self, summary: &TestCaseSummary);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&self, tests: &[TestCase]) {
            (**self).test_run_starting(tests)
        }

        fn test_run_ended(&self, summary: &Summary) {
            (**self).test_run_ended(summary)
        }

        fn test_case_starting(&self, desc: &TestDesc) {
            (**self).test_case_starting(desc)
        }

        fn invocation_failed(&self, report: &FailureReport) {
            (**self).invocation_failed(report)
        }

        fn test_case_ended(&self, summary: &TestCaseSummary) {
            (**self).test_case_ended(summary)
        }
    };
}

impl<R: ?Sized> Reporter for &R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::rc::Rc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for std::sync::Arc<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}
