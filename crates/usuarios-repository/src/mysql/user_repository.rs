//! MySQL user repository implementation.

use crate::{pool::DatabasePool, traits::UserRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use usuarios_core::{
    Page, PageRequest, SortDirection, SortField, User, UserData, UserId, UsuariosError,
    UsuariosResult,
};

/// MySQL user repository implementation.
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    birth_date: Option<NaiveDate>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_i64(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            birth_date: row.birth_date,
        }
    }
}

/// Builds the ORDER BY clause for a page request.
///
/// Column and direction come from allowlisted enums, never from raw
/// query input. Default ordering is insertion order (`id ASC`).
fn order_by(page: &PageRequest) -> (&'static str, &'static str) {
    page.sort.map_or(
        (SortField::Id.column(), SortDirection::Asc.keyword()),
        |sort| (sort.field.column(), sort.direction.keyword()),
    )
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn insert(&self, data: &UserData) -> UsuariosResult<User> {
        debug!("Inserting new user");

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query(
            r#"
            INSERT INTO users (first_name, last_name, email, birth_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.birth_date)
        .execute(self.pool.inner())
        .await?;

        let id = UserId::from_i64(result.last_insert_id() as i64);

        self.find_by_id(id)
            .await?
            .ok_or_else(|| UsuariosError::Internal("Failed to fetch inserted user".to_string()))
    }

    async fn find_by_id(&self, id: UserId) -> UsuariosResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email, birth_date
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_page(&self, page: PageRequest) -> UsuariosResult<Page<User>> {
        debug!("Finding users, page: {}, size: {}", page.page, page.size);

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await?;

        let (column, direction) = order_by(&page);
        let query = format!(
            "SELECT id, first_name, last_name, email, birth_date \
             FROM users ORDER BY {} {} LIMIT ? OFFSET ?",
            column, direction
        );

        let rows = sqlx::query_as::<_, UserRow>(&query)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(self.pool.inner())
            .await?;

        let users: Vec<User> = rows.into_iter().map(User::from).collect();

        Ok(Page::new(users, page.page, page.size, total as u64))
    }

    async fn update(&self, user: &User) -> UsuariosResult<User> {
        debug!("Updating user: {}", user.id);

        // MySQL doesn't support RETURNING, so update then select
        sqlx::query(
            r#"
            UPDATE users
            SET first_name = ?, last_name = ?, email = ?, birth_date = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(user.birth_date)
        .bind(user.id.into_inner())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(user.id)
            .await?
            .ok_or_else(|| UsuariosError::Internal("Failed to fetch updated user".to_string()))
    }

    async fn delete(&self, id: UserId) -> UsuariosResult<bool> {
        debug!("Deleting user: {}", id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> UsuariosResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count as u64)
    }
}

impl std::fmt::Debug for MySqlUserRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserRepository").finish_non_exhaustive()
    }
}
