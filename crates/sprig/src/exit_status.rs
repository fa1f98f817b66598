/// Exit status code used as a result of the test process.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExitStatus(pub(crate) i32);

impl ExitStatus {
    /// Every test case passed.
    pub const OK: Self = Self(0);

    /// At least one invocation of a test case failed.
    pub const FAILED: Self = Self(1);

    /// Map the result of a test run to the exit status of the process.
    #[inline]
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::OK
        } else {
            Self::FAILED
        }
    }

    /// Return whether the status is successful or not.
    #[inline]
    pub fn success(self) -> bool {
        self.code() == 0
    }

    /// Return the raw exit code.
    #[inline]
    pub fn code(self) -> i32 {
        self.0
    }

    /// Terminate the test process with the exit code.
    ///
    /// This method **should not** be called before the cleanup
    /// of the test process has completed.
    #[inline]
    pub fn exit(self) -> ! {
        std::process::exit(self.code());
    }
}
