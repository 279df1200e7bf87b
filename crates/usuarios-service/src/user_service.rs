//! User service trait definition.

use crate::dto::{UserRequest, UserResponse};
use async_trait::async_trait;
use usuarios_core::{Page, PageRequest, UserId, UsuariosResult};

/// User service trait: the five CRUD operations over the storage
/// backend. Contains no business logic beyond "does the entity exist".
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user; the storage backend assigns the id.
    async fn create_user(&self, request: UserRequest) -> UsuariosResult<UserResponse>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> UsuariosResult<UserResponse>;

    /// Lists users with pagination.
    async fn list_users(&self, page: PageRequest) -> UsuariosResult<Page<UserResponse>>;

    /// Overwrites a user's data fields (full replace, id preserved).
    async fn update_user(&self, id: UserId, request: UserRequest) -> UsuariosResult<UserResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> UsuariosResult<()>;
}
