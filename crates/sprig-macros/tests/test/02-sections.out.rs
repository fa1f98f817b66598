#[allow(non_upper_case_globals)]
const sections: & ::sprig::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::sprig::_test_reexports as __sprig;

    fn sections(ctx: &mut Context<'_>) {
        let mut vec = vec![0usize; 5];

        __sprig::section!(ctx, "resizing bigger changes size and capacity", {
            vec.resize(10, 0);
            assert_eq!(vec.len(), 10);
        });

        __sprig::section!(ctx, "reserving bigger changes capacity but not size", {
            vec.reserve(10);
            assert_eq!(vec.len(), 5);
        });
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(sections),
            description: "sections",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(sections),
    }
};
