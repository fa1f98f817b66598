#[sprig(crate = crate)]
#[allow(clippy::len_zero)]
fn crate_path(ctx: &mut Context<'_>) {
    section!(ctx, "section", {
        assert!(vec![0u8].len() != 0);
    });
}
