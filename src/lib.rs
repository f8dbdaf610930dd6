pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod ingest;
pub mod records;

pub use error::{JtError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
