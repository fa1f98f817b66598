fn sections(ctx: &mut Context<'_>) {
    let mut vec = vec![0usize; 5];

    section!(ctx, "resizing bigger changes size and capacity", {
        vec.resize(10, 0);
        assert_eq!(vec.len(), 10);
    });

    section!(ctx, "reserving bigger changes capacity but not size", {
        vec.reserve(10);
        assert_eq!(vec.len(), 5);
    });
}
