//! User service implementation.

use crate::dto::{UserRequest, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use usuarios_core::{Page, PageRequest, UserId, UsuariosError, UsuariosResult};
use usuarios_repository::UserRepository;

/// User service implementation over an explicitly injected repository.
pub struct UserServiceImpl {
    repository: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, request: UserRequest) -> UsuariosResult<UserResponse> {
        debug!("Creating user");

        let saved = self.repository.insert(&request.into()).await?;

        info!("User created: {}", saved.id);
        Ok(UserResponse::from(saved))
    }

    async fn get_user(&self, id: UserId) -> UsuariosResult<UserResponse> {
        debug!("Getting user: {}", id);

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UsuariosError::not_found("User", id))?;

        Ok(UserResponse::from(user))
    }

    async fn list_users(&self, page: PageRequest) -> UsuariosResult<Page<UserResponse>> {
        debug!("Listing users, page: {}, size: {}", page.page, page.size);

        let users = self.repository.find_page(page).await?;
        Ok(users.map(UserResponse::from))
    }

    async fn update_user(&self, id: UserId, request: UserRequest) -> UsuariosResult<UserResponse> {
        debug!("Updating user: {}", id);

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| UsuariosError::not_found("User", id))?;

        // Full replace of the data fields; the path id always wins.
        user.overwrite(request.into());

        let updated = self.repository.update(&user).await?;

        info!("User updated: {}", id);
        Ok(UserResponse::from(updated))
    }

    async fn delete_user(&self, id: UserId) -> UsuariosResult<()> {
        debug!("Deleting user: {}", id);

        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UsuariosError::not_found("User", id));
        }

        info!("User deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}
