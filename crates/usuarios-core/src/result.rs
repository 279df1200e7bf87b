//! Result alias used across all layers.

use crate::error::UsuariosError;

/// Result type for all usuarios operations.
pub type UsuariosResult<T> = Result<T, UsuariosError>;
