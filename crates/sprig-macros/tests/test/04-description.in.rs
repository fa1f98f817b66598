pub fn first_testcase(ctx: &mut Context<'_>) {
    section!(ctx, "a", {
        panic!("error");
    });
}
