#[allow(non_upper_case_globals)]
const no_sections: & ::sprig::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::sprig::_test_reexports as __sprig;

    fn no_sections(ctx: &mut Context<'_>) {
        assert!(1 + 1 == 2);
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(no_sections),
            description: "no_sections",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(no_sections),
    }
};
