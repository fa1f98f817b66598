fn nested_sections(ctx: &mut Context<'_>) {
    section!(ctx, "outer", {
        section!(ctx, "inner1", {
            assert!(true);
        });

        section!(ctx, "inner2", {
            section!(ctx, "innermost", {
                assert!(true);
            });
        });
    });
}
