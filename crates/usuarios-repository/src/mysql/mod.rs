//! MySQL-backed repository implementations.

mod user_repository;

pub use user_repository::*;
