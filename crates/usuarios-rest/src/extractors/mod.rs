//! Request extractors.

mod pagination;

pub use pagination::*;
