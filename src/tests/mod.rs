mod analyzer_tests;
mod generator_tests;
mod model_tests;

/// Initialize logging once for the whole test binary
pub(crate) fn setup() {
    // Logger may already be initialized by another test, which is fine
    let _ = env_logger::builder().is_test(true).try_init();
}
