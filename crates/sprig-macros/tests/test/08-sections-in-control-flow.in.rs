fn sections_in_control_flow(ctx: &mut Context<'_>) {
    for i in 0..2 {
        if i == 0 {
            section!(ctx, "first", {
                assert_eq!(i, 0);
            });
        }
    }

    match ctx.current_section() {
        None => section!(ctx, "in match arm", {}),
        Some(..) => unreachable!(),
    }
}
