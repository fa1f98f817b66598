use crate::{
    context::Context,
    failure::Failure,
    global,
    report::{FailureReport, SectionSummary, Summary, TestCaseSummary},
    reporter::Reporter,
    section::{ExecutionState, SectionTree},
    test::TestCase,
};
use maybe_unwind::maybe_unwind;
use std::{cell::RefCell, panic::AssertUnwindSafe, rc::Rc};

/// Run the test cases in order, each one until its section tree is exhausted.
pub fn run_tests(tests: &[TestCase], reporter: &dyn Reporter) -> Summary {
    reporter.test_run_starting(tests);

    let mut summary = Summary::default();
    for test in tests {
        summary.append(test.run(reporter));
    }

    reporter.test_run_ended(&summary);

    summary
}

impl TestCase {
    /// Invoke the test function repeatedly, one path per invocation.
    ///
    /// A fresh execution state is used on every invocation while the section
    /// tree is shared among them. A fault ends the current invocation only;
    /// its leaf has already been marked as done by the unwinding guards, so
    /// the remaining paths are still explored.
    pub(crate) fn run(&self, reporter: &dyn Reporter) -> TestCaseSummary {
        global::install_panic_hook();
        reporter.test_case_starting(&self.desc);

        let tree = Rc::new(RefCell::new(SectionTree::new()));
        let mut summary = TestCaseSummary::new(&self.desc);

        loop {
            let state = Rc::new(RefCell::new(ExecutionState::new()));
            summary.invocations += 1;
            log::debug!(
                "{}: start invocation {}",
                self.desc.name(),
                summary.invocations
            );

            let result = {
                let mut ctx = Context::new(&self.desc, tree.clone(), state.clone());
                let testfn = self.testfn;
                maybe_unwind(AssertUnwindSafe(|| testfn(&mut ctx)))
            };

            let failure = match result {
                Ok(Ok(())) => None,
                Ok(Err(err)) => Some(Failure::from_error(err)),
                Err(unwind) => {
                    let location = unwind.location().map(ToString::to_string);
                    Some(Failure::from_payload(unwind.payload(), location, || {
                        unwind.to_string()
                    }))
                }
            };

            let tree = tree.borrow();
            let state = state.borrow();

            let faulted = failure.is_some();
            if let Some(failure) = failure {
                log::debug!(
                    "{}: invocation {} failed: {}",
                    self.desc.name(),
                    summary.invocations,
                    failure.kind_name()
                );
                let report =
                    FailureReport::new(&self.desc, summary.invocations, failure, &tree, &state);
                reporter.invocation_failed(&report);
                summary.failures.push(report);
            }

            // Sites following a fault have not been reached on this invocation,
            // so the tree can only be trusted as exhausted after a clean one.
            if !state.path_completed || (!faulted && tree.is_exhausted()) {
                break;
            }
        }

        summary.sections = tree
            .borrow()
            .nodes()
            .map(|node| SectionSummary {
                location: node.location,
                description: node.description,
                done: node.done,
            })
            .collect();

        reporter.test_case_ended(&summary);

        summary
    }
}
