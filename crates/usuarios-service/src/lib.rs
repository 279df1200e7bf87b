//! # Usuarios Service
//!
//! Application service layer for the usuarios service. A thin façade:
//! each operation is one repository call plus an existence check, with
//! DTO mapping at the boundary.

pub mod dto;
pub mod user_service;
pub mod user_service_impl;

pub use dto::*;
pub use user_service::*;
pub use user_service_impl::*;
