#[allow(non_upper_case_globals)]
const nested_sections: & ::sprig::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::sprig::_test_reexports as __sprig;

    fn nested_sections(ctx: &mut Context<'_>) {
        __sprig::section!(ctx, "outer", {
            __sprig::section!(ctx, "inner1", {
                assert!(true);
            });

            __sprig::section!(ctx, "inner2", {
                __sprig::section!(ctx, "innermost", {
                    assert!(true);
                });
            });
        });
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(nested_sections),
            description: "nested_sections",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(nested_sections),
    }
};
