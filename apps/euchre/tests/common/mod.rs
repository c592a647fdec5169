#![allow(dead_code)]


// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    euchre_test_support::logging::init();
}
