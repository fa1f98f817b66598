#[allow(non_upper_case_globals)]
pub const first_testcase: & ::sprig::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::sprig::_test_reexports as __sprig;

    pub fn first_testcase(ctx: &mut Context<'_>) {
        __sprig::section!(ctx, "a", {
            panic!("error");
        });
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(first_testcase),
            description: "first testcase",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(first_testcase),
    }
};
