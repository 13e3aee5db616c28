//! # quorum-common
//!
//! Shared utilities: theme (styling) configuration consumed by the tree
//! presenter, and tracing setup.

pub mod config;
pub mod telemetry;

pub use config::{StatusTheme, Theme, ThemeError};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};
