//! # System Lifecycle
//!
//! Wiring, startup and shutdown of the catalog stores.
//!
//! [`CatalogSystem`] creates both store actors, spawns them, and hands out the domain
//! clients. There is no global store: everything that needs a client gets a clone.
//!
//! ```rust,ignore
//! let config = CatalogConfig::from_env()?;
//! let system = CatalogSystem::new(&config)?;
//!
//! system.product_client.fetch_all().await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! 1. **Drop all clients** - Closes the sending side of each store channel
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`, the final size is logged
//! 3. **Await completion** - [`CatalogSystem::shutdown`] waits for both tasks
//!
//! Clones of the clients held elsewhere (e.g. by a [`ListPage`](crate::page::ListPage)) keep
//! their store alive, so drop them before shutting down.
//!
//! ## Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter once per process:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle and outcomes
//! RUST_LOG=debug cargo run     # Every action and request payload
//! ```

pub mod catalog_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use catalog_system::*;
