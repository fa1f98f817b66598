#[allow(non_upper_case_globals)]
const sections_in_control_flow: & ::sprig::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::sprig::_test_reexports as __sprig;

    fn sections_in_control_flow(ctx: &mut Context<'_>) {
        for i in 0..2 {
            if i == 0 {
                __sprig::section!(ctx, "first", {
                    assert_eq!(i, 0);
                });
            }
        }

        match ctx.current_section() {
            None => __sprig::section!(ctx, "in match arm", {}),
            Some(..) => unreachable!(),
        }
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(sections_in_control_flow),
            description: "sections_in_control_flow",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(sections_in_control_flow),
    }
};
