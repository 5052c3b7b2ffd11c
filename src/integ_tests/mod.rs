//! Integration tests kept inline so they run in-process via
//! `cargo test --lib`.
//!
//! These exercise the whole pipeline through the public API (snapshot,
//! normalization, facet catalog, filtering, sorting, URL state), plus the
//! HTTP source against a mock server.

mod test_pipeline;

/// Opt-in log output for debugging test failures (`RUST_LOG=debug`).
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
