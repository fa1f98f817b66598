use super::Reporter;
use crate::{
    report::{FailureReport, Summary, TestCaseSummary},
    test::{TestCase, TestDesc},
};
use std::{
    fmt,
    io::{self, Write as _},
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn bold(mut self) -> Self {
        self.spec.get_or_insert_with(ColorSpec::new).set_bold(true);
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

/// A reporter that prints the progress to the terminal.
///
/// Test results go to the standard output and the diagnostics of failing
/// invocations go to the standard error.
pub struct ConsoleReporter {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl ConsoleReporter {
    /// Create a console reporter.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            stdout: StandardStream::stdout(ColorChoice::Auto),
            stderr: StandardStream::stderr(ColorChoice::Auto),
        }
    }

    fn print_failure(&self, report: &FailureReport) -> io::Result<()> {
        let mut w = self.stderr.lock();
        write!(w, "---- {} (invocation {}) ", report.desc.name(), report.invocation)?;
        colored("FAILED").fg(Color::Red).bold().fmt_colored(&mut w)?;
        writeln!(w, " ----")?;
        write!(w, "{}", report)?;
        writeln!(w)?;
        w.flush()
    }

    fn print_test_case_summary(&self, summary: &TestCaseSummary) -> io::Result<()> {
        let mut w = self.stdout.lock();
        let status = if summary.is_passed() {
            colored("ok").fg(Color::Green)
        } else {
            colored("FAILED").fg(Color::Red)
        };
        write!(w, "test {} ... ", summary.desc.name())?;
        status.fmt_colored(&mut w)?;
        writeln!(w)?;
        w.flush()
    }

    fn print_summary(&self, summary: &Summary) -> io::Result<()> {
        let mut w = self.stdout.lock();

        if !summary.failed.is_empty() {
            writeln!(w)?;
            writeln!(w, "failures:")?;
            for result in &summary.failed {
                writeln!(
                    w,
                    "    {} ({} of {} invocations failed)",
                    result.desc.name(),
                    result.failures.len(),
                    result.invocations,
                )?;
            }
        }

        let status = if summary.is_passed() {
            colored("ok").fg(Color::Green)
        } else {
            colored("FAILED").fg(Color::Red)
        };
        writeln!(w)?;
        write!(w, "test result: ")?;
        status.fmt_colored(&mut w)?;
        write!(w, ".")?;
        writeln!(
            w,
            " {passed} passed; {failed} failed",
            passed = summary.passed.len(),
            failed = summary.failed.len(),
        )?;

        w.flush()
    }
}

impl Reporter for ConsoleReporter {
    fn test_run_starting(&self, tests: &[TestCase]) {
        let mut w = self.stdout.lock();
        let suffix = match tests.len() {
            1 => "",
            _ => "s",
        };
        let _ = writeln!(w, "running {} test{}", tests.len(), suffix);
    }

    fn test_run_ended(&self, summary: &Summary) {
        let _ = self.print_summary(summary);
    }

    fn test_case_starting(&self, _: &TestDesc) {}

    fn invocation_failed(&self, report: &FailureReport) {
        let _ = self.print_failure(report);
    }

    fn test_case_ended(&self, summary: &TestCaseSummary) {
        let _ = self.print_test_case_summary(summary);
    }
}
