use crate::{
    report::Summary,
    reporter::Reporter,
    runner,
    test::{Location, TestCase, TestDesc, TestFn, TestName},
};
use std::collections::HashSet;

/// The errors that occur while building or installing a registry.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// The same test function has already been registered.
    #[error("the test case `{name}` is registered more than once")]
    Conflict {
        #[allow(missing_docs)]
        name: String,
    },

    /// A registry has already been installed in the process.
    #[error("a test registry has already been installed")]
    AlreadyInstalled,
}

/// A reference to a registered test case.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TestCaseHandle(usize);

/// The ordered collection of the test cases to run.
#[derive(Debug, Default)]
pub struct Registry {
    tests: Vec<TestCase>,
    paths: HashSet<&'static str>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a test function under its description.
    ///
    /// Hand-registered test cases are identified by their position, so two of
    /// them may share a description.
    pub fn register(
        &mut self,
        location: Location,
        description: &'static str,
        entrypoint: TestFn,
    ) -> TestCaseHandle {
        self.push(TestCase {
            desc: TestDesc {
                name: TestName::Description(description),
                description,
                location,
            },
            testfn: entrypoint,
        })
    }

    /// Register a test case generated by `#[sprig::test]`.
    ///
    /// A test function is rejected if its module path has already been added.
    pub fn add_test_case(&mut self, test: &TestCase) -> Result<TestCaseHandle, RegistryError> {
        if let TestName::Path(path) = test.desc.name {
            if !self.paths.insert(path) {
                return Err(RegistryError::Conflict {
                    name: test.desc.name().to_owned(),
                });
            }
        }
        Ok(self.push(*test))
    }

    fn push(&mut self, test: TestCase) -> TestCaseHandle {
        log::debug!("register test case {}", test.desc.name());
        let handle = TestCaseHandle(self.tests.len());
        self.tests.push(test);
        handle
    }

    /// Return the test case referred by `handle`.
    pub fn get(&self, handle: TestCaseHandle) -> Option<&TestCase> {
        self.tests.get(handle.0)
    }

    /// Return the registered test cases in registration order.
    #[inline]
    pub fn test_cases(&self) -> &[TestCase] {
        &self.tests[..]
    }

    /// Run every registered test case in registration order.
    pub fn run(&self, reporter: &dyn Reporter) -> Summary {
        runner::run_tests(&self.tests, reporter)
    }
}
