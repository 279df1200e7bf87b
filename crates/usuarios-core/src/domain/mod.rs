//! Domain layer: entities.

pub mod entities;

pub use entities::*;
