//! Logging for tests.
//!
//! Install env_logger once, so that `RUST_LOG=debug cargo test` shows what the keymap is doing.

pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
