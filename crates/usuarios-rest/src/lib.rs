//! # Usuarios REST
//!
//! REST API layer using Axum for the usuarios service. Maps the five
//! CRUD operations onto `/usuarios`, plus unauthenticated health
//! endpoints.

pub mod controllers;
pub mod extractors;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
