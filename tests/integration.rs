mod integration {
    mod api_tests;
}
