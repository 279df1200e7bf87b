//! # Usuarios Config
//!
//! Layered configuration for the usuarios service: TOML files overridden
//! by environment variables with the `USUARIOS` prefix.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
