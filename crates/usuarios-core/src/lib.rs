//! # Usuarios Core
//!
//! Core types, error definitions, and the user entity for the usuarios
//! service. This crate provides the foundational abstractions shared by
//! the repository, service, and REST layers.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
