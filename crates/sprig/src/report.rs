use crate::{
    failure::Failure,
    section::{ExecutionState, SectionTree},
    test::{Location, TestDesc},
};
use std::fmt;

/// A section on the active chain at the moment an invocation failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSection {
    #[allow(missing_docs)]
    pub location: Location,
    #[allow(missing_docs)]
    pub description: &'static str,
}

/// The diagnostics of a single failing invocation.
#[derive(Debug)]
pub struct FailureReport {
    pub(crate) desc: TestDesc,
    pub(crate) invocation: usize,
    pub(crate) failure: Failure,
    pub(crate) chain: Vec<ActiveSection>,
}

impl FailureReport {
    pub(crate) fn new(
        desc: &TestDesc,
        invocation: usize,
        failure: Failure,
        tree: &SectionTree,
        state: &ExecutionState,
    ) -> Self {
        let chain = state
            .active_chain()
            .iter()
            .map(|&key| {
                let node = tree.node(key);
                ActiveSection {
                    location: node.location,
                    description: node.description,
                }
            })
            .collect();
        Self {
            desc: *desc,
            invocation,
            failure,
            chain,
        }
    }

    /// Return the fault that ended the invocation.
    #[inline]
    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    /// Return the sections that were entered when the fault was raised, outermost first.
    #[inline]
    pub fn chain(&self) -> &[ActiveSection] {
        &self.chain[..]
    }

    /// Return the 1-based index of the failing invocation.
    #[inline]
    pub fn invocation(&self) -> usize {
        self.invocation
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "caught fault of kind '{}'", self.failure.kind_name())?;
        if let Failure::UnexpectedFault { kind, .. } = self.failure {
            writeln!(f, "  payload: {}", kind)?;
        }
        writeln!(f, "{}", self.failure)?;

        writeln!(f, "test case state:")?;
        let marker = |is_cursor: bool| if is_cursor { "-> " } else { "" };
        writeln!(
            f,
            "{:>3}{}: {}",
            marker(self.chain.is_empty()),
            self.desc.location,
            self.desc.description,
        )?;
        for (depth, section) in self.chain.iter().enumerate() {
            let is_cursor = depth + 1 == self.chain.len();
            writeln!(
                f,
                "{:>width$}{}: {}",
                marker(is_cursor),
                section.location,
                section.description,
                width = 3 + 3 * (depth + 1),
            )?;
        }
        Ok(())
    }
}

/// The state of a section after its test case has been run to exhaustion.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    #[allow(missing_docs)]
    pub location: Location,
    #[allow(missing_docs)]
    pub description: &'static str,
    #[allow(missing_docs)]
    pub done: bool,
}

/// The result of running a test case until every path has been visited.
#[derive(Debug)]
pub struct TestCaseSummary {
    pub(crate) desc: TestDesc,
    pub(crate) invocations: usize,
    pub(crate) failures: Vec<FailureReport>,
    pub(crate) sections: Vec<SectionSummary>,
}

impl TestCaseSummary {
    pub(crate) fn new(desc: &TestDesc) -> Self {
        Self {
            desc: *desc,
            invocations: 0,
            failures: vec![],
            sections: vec![],
        }
    }

    /// Return the metadata of the test case.
    #[inline]
    pub fn desc(&self) -> &TestDesc {
        &self.desc
    }

    /// Return whether no invocation of the test case has failed.
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Return how many times the test function was invoked.
    #[inline]
    pub fn invocations(&self) -> usize {
        self.invocations
    }

    /// Return the diagnostics of the failing invocations in execution order.
    #[inline]
    pub fn failures(&self) -> &[FailureReport] {
        &self.failures[..]
    }

    /// Return the discovered sections in discovery order.
    #[inline]
    pub fn sections(&self) -> &[SectionSummary] {
        &self.sections[..]
    }
}

/// The results of a test run.
#[derive(Debug, Default)]
pub struct Summary {
    pub(crate) passed: Vec<TestCaseSummary>,
    pub(crate) failed: Vec<TestCaseSummary>,
}

impl Summary {
    /// Return whether every test case has passed.
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Return the summaries of the passed test cases.
    #[inline]
    pub fn passed(&self) -> &[TestCaseSummary] {
        &self.passed[..]
    }

    /// Return the summaries of the failed test cases.
    #[inline]
    pub fn failed(&self) -> &[TestCaseSummary] {
        &self.failed[..]
    }

    pub(crate) fn append(&mut self, summary: TestCaseSummary) {
        if summary.is_passed() {
            self.passed.push(summary);
        } else {
            self.failed.push(summary);
        }
    }
}
