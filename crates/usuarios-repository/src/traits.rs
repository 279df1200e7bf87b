//! Repository trait definitions.

use async_trait::async_trait;
use usuarios_core::{Page, PageRequest, User, UserData, UserId, UsuariosResult};

/// Storage backend for the user entity.
///
/// The service layer owns no persistence logic; it consumes this
/// capability set (insert, find-by-key, find-page, update, delete) and
/// converts absent lookups into the not-found outcome.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user; the backend assigns the id.
    async fn insert(&self, data: &UserData) -> UsuariosResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> UsuariosResult<Option<User>>;

    /// Finds a page of users.
    async fn find_page(&self, page: PageRequest) -> UsuariosResult<Page<User>>;

    /// Updates an existing user in place.
    async fn update(&self, user: &User) -> UsuariosResult<User>;

    /// Deletes a user by ID. Returns true iff a row was removed.
    async fn delete(&self, id: UserId) -> UsuariosResult<bool>;

    /// Counts all users.
    async fn count(&self) -> UsuariosResult<u64>;
}
