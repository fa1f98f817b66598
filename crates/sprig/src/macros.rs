macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Check that a boolean expression holds.
///
/// When the expression evaluates to `false`, a `CheckFailed` fault is raised
/// and the current invocation of the test case ends there.
///
/// ```
/// # fn main() {
/// sprig::check!(1 + 1 == 2);
/// # }
/// ```
#[macro_export]
macro_rules! check {
    ($e:expr $(,)?) => {{
        use $crate::_test_reexports as __sprig;
        if !$e {
            __sprig::Failure::CheckFailed {
                location: __sprig::location!(),
                expr: __sprig::stringify!($e),
            }
            .raise();
        }
    }};
}

/// Check that an expression raises a fault.
///
/// `check_fault!(expr)` accepts a fault of any kind, while
/// `check_fault!(Kind, expr)` only accepts a panic whose payload is a `Kind`.
/// Faults of another kind keep propagating. If the expression completes
/// normally, an `ExpectedFaultMissing` fault is raised instead.
///
/// ```
/// # fn main() {
/// sprig::check_fault!(std::panic::panic_any(42_i32));
/// sprig::check_fault!(i32, std::panic::panic_any(42_i32));
/// # }
/// ```
#[macro_export]
macro_rules! check_fault {
    ($e:expr $(,)?) => {{
        use $crate::_test_reexports as __sprig;
        __sprig::expect_any_fault(
            __sprig::location!(),
            __sprig::stringify!($e),
            || $e,
        )
    }};
    ($kind:ty, $e:expr $(,)?) => {{
        use $crate::_test_reexports as __sprig;
        __sprig::expect_fault::<$kind, _, _>(
            __sprig::location!(),
            __sprig::stringify!($kind),
            __sprig::stringify!($e),
            || $e,
        )
    }};
}

/// Mark the current invocation as failed and then terminate its execution.
#[macro_export]
macro_rules! fail {
    () => {
        $crate::fail!("explicitly failed")
    };
    ($($arg:tt)+) => {{
        use $crate::_test_reexports as __sprig;
        __sprig::Failure::UnexpectedFault {
            kind: "explicit",
            location: __sprig::Option::Some(__sprig::format!("{}", __sprig::location!())),
            message: __sprig::format!($($arg)+),
        }
        .raise()
    }};
}

/// Define the `main` function that runs the listed test cases in order.
///
/// The process exits with the code `0` if every test case has passed
/// and `1` otherwise.
#[macro_export]
macro_rules! test_main {
    ( $( $test_case:path ),* $(,)? ) => {
        fn main() {
            $crate::_test_main_reexports::test_main(&[ $( $test_case ),* ]);
        }
    };
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_name {
    ($name:ident) => {{
        use $crate::_test_reexports as __sprig;
        __sprig::TestName::Path(__sprig::concat!(
            __sprig::module_path!(),
            "::",
            __sprig::stringify!($name)
        ))
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_fn {
    ($path:path) => {{
        use $crate::_test_reexports as __sprig;
        |ctx| __sprig::Termination::into_result($path(ctx))
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_test_reexports as __sprig;
        __sprig::Location {
            file: __sprig::file!(),
            line: __sprig::line!(),
            column: __sprig::column!(),
        }
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __section {
    ( $ctx:ident, $desc:expr, $(#[$attr:meta])* $block:block ) => {
        $(#[$attr])*
        {
            use $crate::_test_reexports as __sprig;
            let section = $ctx.enter_section(__sprig::location!(), $desc);
            if section.entered() {
                $block
                #[allow(unreachable_code)]
                section.finish();
            }
        }
    };
}
