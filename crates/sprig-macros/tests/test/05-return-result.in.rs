fn return_result(ctx: &mut Context<'_>) -> anyhow::Result<()> {
    section!(ctx, "read", {
        let _ = std::fs::read_to_string("Cargo.toml")?;
    });
    Ok(())
}
