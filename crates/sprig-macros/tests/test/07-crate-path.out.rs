#[allow(non_upper_case_globals)]
const crate_path: &crate::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use crate::_test_reexports as __sprig;

    #[allow(clippy::len_zero)]
    fn crate_path(ctx: &mut Context<'_>) {
        __sprig::section!(ctx, "section", {
            assert!(vec![0u8].len() != 0);
        });
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(crate_path),
            description: "crate_path",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(crate_path),
    }
};
