sprig::test_main!();
