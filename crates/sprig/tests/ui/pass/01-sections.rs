use sprig::{check, Context};

sprig::test_main!(one_section, nested_sections);

#[sprig::test]
fn one_section(ctx: &mut Context<'_>) {
    section!(ctx, "a", {
        check!(ctx.current_section() == Some("a"));
    });
}

#[sprig::test("nested sections")]
fn nested_sections(ctx: &mut Context<'_>) {
    let mut counter = 0;

    section!(ctx, "a", {
        counter += 1;

        section!(ctx, "b", {
            counter += 1;
            check!(counter == 2);
        });

        section!(ctx, "c", {
            counter += 10;
            check!(counter == 11);
        });
    });

    check!(counter <= 11);
}
