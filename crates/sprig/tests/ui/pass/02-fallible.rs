use sprig::Context;
use std::num::ParseIntError;

sprig::test_main!(fallible);

#[sprig::test]
fn fallible(ctx: &mut Context<'_>) -> Result<(), ParseIntError> {
    section!(ctx, "parse", {
        let n: i32 = "42".parse()?;
        sprig::check!(n == 42);
    });
    Ok(())
}
