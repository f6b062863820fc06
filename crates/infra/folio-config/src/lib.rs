//! Site configuration for folio.
//!
//! This crate provides:
//! - [`SiteConfig`]: the typed configuration, one field per content section
//! - [`merge`]: the policy that reconciles a partial configuration with the defaults
//! - [`loader`]: tiered resolution (remote resource, persisted blob, defaults)
//! - [`SiteStore`]: the owned active configuration with save and reset
//! - [`validation`]: advisory warnings
//! - [`schema`]: JSON Schema for `site-config.json`
//!
//! # Resolution order (first hit wins)
//! 1. Remote `site-config.json`, when it has `personal` and `branding` sections
//! 2. Locally persisted `siteConfig` blob
//! 3. The default configuration
//!
//! # Example
//! ```no_run
//! # async fn run() {
//! use folio_config::{MemoryStore, SiteStore};
//! use std::sync::Arc;
//!
//! let store = SiteStore::load(None, Arc::new(MemoryStore::default())).await;
//! println!("{} ({})", store.config().personal.name, store.source());
//! # }
//! ```

pub mod defaults;
pub mod error;
pub mod loader;
pub mod merge;
pub mod persist;
pub mod schema;
pub mod store;
pub mod types;
pub mod validation;

pub use error::StoreError;
pub use loader::{ConfigSource, ResolvedConfig, resolve_configuration};
pub use persist::{FileStore, MemoryStore, PersistedStore};
pub use schema::schema_json_pretty;
pub use store::SiteStore;
pub use types::SiteConfig;
