//! growi-config: Configuration Resolution
//!
//! Resolves server configuration from rows persisted in a config store and
//! from environment variables described by a static schema. The database tree
//! is overlaid on per-namespace default templates; the environment tree is
//! returned alongside it for the caller to reconcile.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod settings;
pub mod store;
pub mod types;
