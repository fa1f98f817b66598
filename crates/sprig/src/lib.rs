/*!
A minimal in-process test engine built around nested sections.

A test case is a plain function whose body may declare nested *sections*
with `section!()`. The sections are not known in advance: they are
discovered as the body reaches them. The engine invokes the function
repeatedly, each time entering exactly one not-yet-completed path through
the section tree, until every path has been visited. The code shared by
several paths, such as a setup before the sections, runs again on every
invocation.

```
# fn main() {}
use sprig::Context;

#[sprig::test("a vector")]
fn vector(ctx: &mut Context<'_>) {
    let mut vec = vec![1, 2, 3];

    section!(ctx, "push", {
        vec.push(4);
        sprig::check!(vec.len() == 4);
    });

    section!(ctx, "clear", {
        vec.clear();
        sprig::check!(vec.is_empty());
    });
}
```

A fault raised inside an invocation, such as a failing `check!()` or a
panic, ends that invocation only. It is reported together with the chain
of the sections that were active at that moment, and the remaining paths
are still explored.
!*/

#![doc(html_root_url = "https://docs.rs/sprig/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;

mod context;
mod exit_status;
mod failure;
mod global;
mod registry;
mod report;
pub mod reporter;
mod runner;
mod section;
mod termination;

pub use crate::{
    context::Context,
    exit_status::ExitStatus,
    failure::Failure,
    global::{install, run_all},
    registry::{Registry, RegistryError, TestCaseHandle},
    report::{ActiveSection, FailureReport, SectionSummary, Summary, TestCaseSummary},
    reporter::Reporter,
    runner::run_tests,
    termination::Termination,
    test::{Location, TestCase, TestDesc, TestFn},
};

/// Generate a single test case.
///
/// The optional argument is the human readable description of the test case.
/// Inside the function body, `section!(ctx, "description", { ... })` declares
/// a section.
pub use sprig_macros::test;

hidden_item! {
    /// Re-exported items for #[test]
    pub mod _test_reexports {
        pub use crate::{
            __location as location, //
            __section as section,
            __test_fn as test_fn,
            __test_name as test_name,
            context::Context,
            failure::{expect_any_fault, expect_fault, Failure},
            termination::Termination,
            test::{Location, TestCase, TestDesc, TestFn, TestName},
        };
        pub use std::{
            column, concat, file, format, line, module_path, option::Option, stringify,
        };
    }

    /// Re-exported items for test_main!()
    pub mod _test_main_reexports {
        pub use crate::global::test_main;
    }
}
