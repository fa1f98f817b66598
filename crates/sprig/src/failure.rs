//! The faults that end an invocation of a test case.

use crate::test::Location;
use std::{any::Any, panic};

/// A fault that escaped an invocation of a test function.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Failure {
    /// A boolean check evaluated to `false`.
    #[error("{location}: check failed\n  {expr}")]
    CheckFailed {
        #[allow(missing_docs)]
        location: Location,
        #[allow(missing_docs)]
        expr: &'static str,
    },

    /// An operation expected to raise a fault completed without raising it.
    #[error("{location}: no fault of kind `{kind}` was raised in\n  {expr}")]
    ExpectedFaultMissing {
        #[allow(missing_docs)]
        location: Location,
        #[allow(missing_docs)]
        kind: &'static str,
        #[allow(missing_docs)]
        expr: &'static str,
    },

    /// Any other fault.
    #[error("{}", unexpected_message(.location, .message))]
    UnexpectedFault {
        #[allow(missing_docs)]
        kind: &'static str,
        /// The `file:line:column` where the fault was raised, if known.
        location: Option<String>,
        #[allow(missing_docs)]
        message: String,
    },
}

impl Failure {
    /// Return the short name of the fault kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Failure::CheckFailed { .. } => "CheckFailed",
            Failure::ExpectedFaultMissing { .. } => "ExpectedFaultMissing",
            Failure::UnexpectedFault { .. } => "UnexpectedFault",
        }
    }

    /// Classify the payload of a fault propagated out of a test function.
    ///
    /// Payloads that are not a `Failure` are reported as `UnexpectedFault`.
    pub(crate) fn from_payload(
        payload: &(dyn Any + Send),
        location: Option<String>,
        message: impl FnOnce() -> String,
    ) -> Self {
        if let Some(failure) = payload.downcast_ref::<Failure>() {
            return failure.clone();
        }

        let kind = if payload.is::<&'static str>() {
            "&str"
        } else if payload.is::<String>() {
            "String"
        } else {
            "unknown"
        };
        Failure::UnexpectedFault {
            kind,
            location,
            message: message(),
        }
    }

    /// Classify an error value returned from a fallible test function.
    pub(crate) fn from_error(err: anyhow::Error) -> Self {
        Failure::UnexpectedFault {
            kind: "error",
            location: None,
            message: format!("{:#}", err),
        }
    }

    /// Unwind out of the running test function with this fault.
    pub fn raise(self) -> ! {
        panic::panic_any(self)
    }
}

fn unexpected_message(location: &Option<String>, message: &str) -> String {
    match location {
        Some(location) => format!("{}: {}", location, message),
        None => message.to_owned(),
    }
}

/// Run `f` and check that it raises a fault whose payload is a `T`.
///
/// Faults of any other kind keep propagating unchanged.
#[doc(hidden)] // private API
pub fn expect_fault<T, F, R>(location: Location, kind: &'static str, expr: &'static str, f: F)
where
    T: Any,
    F: FnOnce() -> R,
{
    match panic::catch_unwind(panic::AssertUnwindSafe(f)) {
        Ok(_) => Failure::ExpectedFaultMissing {
            location,
            kind,
            expr,
        }
        .raise(),
        Err(payload) if payload.is::<T>() => (),
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Run `f` and check that it raises a fault of any kind.
#[doc(hidden)] // private API
pub fn expect_any_fault<F, R>(location: Location, expr: &'static str, f: F)
where
    F: FnOnce() -> R,
{
    if panic::catch_unwind(panic::AssertUnwindSafe(f)).is_ok() {
        Failure::ExpectedFaultMissing {
            location,
            kind: "any",
            expr,
        }
        .raise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATION: Location = Location {
        file: "failure.rs",
        line: 3,
        column: 9,
    };

    fn caught<F: FnOnce()>(f: F) -> Box<dyn Any + Send> {
        panic::catch_unwind(panic::AssertUnwindSafe(f)).unwrap_err()
    }

    #[test]
    fn classify_check_failed() {
        let payload = caught(|| {
            Failure::CheckFailed {
                location: LOCATION,
                expr: "1 == 2",
            }
            .raise()
        });
        let failure = Failure::from_payload(&*payload, None, || unreachable!());
        assert_eq!(failure.kind_name(), "CheckFailed");
        assert_eq!(failure.to_string(), "failure.rs:3:9: check failed\n  1 == 2");
    }

    #[test]
    fn classify_foreign_payloads() {
        let payload = caught(|| panic!("error"));
        let failure =
            Failure::from_payload(&*payload, Some("failure.rs:7:9".into()), || "error".into());
        assert_eq!(failure.to_string(), "failure.rs:7:9: error");
        match failure {
            Failure::UnexpectedFault { kind, message, .. } => {
                assert_eq!(kind, "&str");
                assert_eq!(message, "error");
            }
            f => panic!("unexpected classification: {:?}", f),
        }

        let payload = caught(|| panic::panic_any(1i32));
        let failure = Failure::from_payload(&*payload, None, || "Box<Any>".into());
        match failure {
            Failure::UnexpectedFault { kind, .. } => assert_eq!(kind, "unknown"),
            f => panic!("unexpected classification: {:?}", f),
        }
    }

    #[test]
    fn expected_fault_raised() {
        expect_fault::<i32, _, _>(LOCATION, "i32", "panic_any(1)", || panic::panic_any(1i32));
    }

    #[test]
    fn expected_fault_missing() {
        let payload = caught(|| expect_fault::<i32, _, _>(LOCATION, "i32", "", || ()));
        let failure = payload.downcast_ref::<Failure>().unwrap();
        assert_eq!(failure.kind_name(), "ExpectedFaultMissing");
    }

    #[test]
    fn any_fault() {
        expect_any_fault(LOCATION, "panic!()", || panic!("oops"));

        let payload = caught(|| expect_any_fault(LOCATION, "1 + 1", || 1 + 1));
        match payload.downcast_ref::<Failure>() {
            Some(Failure::ExpectedFaultMissing { kind, expr, .. }) => {
                assert_eq!(*kind, "any");
                assert_eq!(*expr, "1 + 1");
            }
            f => panic!("unexpected payload: {:?}", f),
        }
    }

    #[test]
    fn other_fault_keeps_propagating() {
        let payload = caught(|| {
            expect_fault::<i32, _, _>(LOCATION, "i32", "", || panic::panic_any("other"))
        });
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"other"));
    }
}
