//! A test binary whose only test case is expected to fail.
//!
//! Every top-level section faults in a different way, so the run prints a
//! diagnostic for each section and exits with the code `1`. The section "c"
//! is reported twice, once with "d" and once without it.

use sprig::{check, check_fault, Context};

sprig::test_main!(first_testcase);

#[derive(Debug)]
struct CustomFault;

#[sprig::test("first testcase")]
fn first_testcase(ctx: &mut Context<'_>) {
    section!(ctx, "a", {
        panic!("error");
    });

    section!(ctx, "b", {
        std::panic::panic_any(CustomFault);
    });

    section!(ctx, "c", {
        section!(ctx, "d", {
            check!(1 == 1);
        });
        check!(1 == 2);
    });

    section!(ctx, "e", {
        check_fault!(CustomFault, std::panic::panic_any(CustomFault));
        check_fault!(CustomFault, ());
    });
}
