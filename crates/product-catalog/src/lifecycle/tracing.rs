//! # Observability & Tracing
//!
//! Log lines are compact and hide the module path; the `store` field tells the product and
//! comment stores apart.
//!
//! | level | what |
//! |-------|------|
//! | `info` | store startup/shutdown, page mount, saved and deleted products |
//! | `warn` | failed requests, with the message that is recorded on the store |
//! | `debug` | every dispatched action and request payloads |
//! | `trace` | snapshot reads |
//!
//! The filter comes from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=product_catalog=debug,store_framework=info cargo run
//! ```

/// Installs the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
