#[allow(non_upper_case_globals)]
const ignore_inner_items: & ::sprig::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::sprig::_test_reexports as __sprig;

    fn ignore_inner_items(_: &mut Context<'_>) {
        fn inner() {
            section!(ctx, "section1", {
                assert!(1 + 1 == 2);
            });
        }
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(ignore_inner_items),
            description: "ignore_inner_items",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(ignore_inner_items),
    }
};
