#[allow(non_upper_case_globals)]
const return_result: & ::sprig::_test_reexports::TestCase = {
    #[allow(unused_imports)]
    use ::sprig::_test_reexports as __sprig;

    fn return_result(ctx: &mut Context<'_>) -> anyhow::Result<()>
    where
        anyhow::Result<()>: __sprig::Termination
    {
        __sprig::section!(ctx, "read", {
            let _ = std::fs::read_to_string("Cargo.toml")?;
        });
        Ok(())
    }

    &__sprig::TestCase {
        desc: __sprig::TestDesc {
            name: __sprig::test_name!(return_result),
            description: "return_result",
            location: __sprig::location!(),
        },
        testfn: __sprig::test_fn!(return_result),
    }
};
