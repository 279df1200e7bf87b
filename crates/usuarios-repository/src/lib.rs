//! # Usuarios Repository
//!
//! Data access layer for the usuarios service:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (storage interface)
//! MySqlUserRepository            (SQLx / MySQL)
//!   ↓
//! MySQL
//! ```
//!
//! The [`UserRepository`] trait is the only surface the service layer
//! sees; pagination arithmetic (COUNT + LIMIT/OFFSET) lives behind it.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use usuarios_core::{
        Page, PageRequest, SortDirection, SortField, SortOrder, User, UserData, UserId,
        UsuariosResult,
    };

    /// In-memory repository exercising the storage contract.
    struct InMemoryUserRepository {
        state: Mutex<(BTreeMap<UserId, User>, i64)>,
    }

    impl InMemoryUserRepository {
        fn new() -> Self {
            Self {
                state: Mutex::new((BTreeMap::new(), 0)),
            }
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn insert(&self, data: &UserData) -> UsuariosResult<User> {
            let mut state = self.state.lock().unwrap();
            state.1 += 1;
            let user = User::from_parts(UserId::from_i64(state.1), data.clone());
            state.0.insert(user.id, user.clone());
            Ok(user)
        }

        async fn find_by_id(&self, id: UserId) -> UsuariosResult<Option<User>> {
            Ok(self.state.lock().unwrap().0.get(&id).cloned())
        }

        async fn find_page(&self, page: PageRequest) -> UsuariosResult<Page<User>> {
            let state = self.state.lock().unwrap();
            let mut users: Vec<User> = state.0.values().cloned().collect();
            if let Some(sort) = page.sort {
                users.sort_by(|a, b| {
                    let ord = match sort.field {
                        SortField::Id => a.id.cmp(&b.id),
                        SortField::FirstName => a.first_name.cmp(&b.first_name),
                        SortField::LastName => a.last_name.cmp(&b.last_name),
                        SortField::Email => a.email.cmp(&b.email),
                        SortField::BirthDate => a.birth_date.cmp(&b.birth_date),
                    };
                    match sort.direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                });
            }
            let total = users.len() as u64;
            let start = page.offset().min(users.len());
            let end = (start + page.limit()).min(users.len());
            Ok(Page::new(
                users[start..end].to_vec(),
                page.page,
                page.size,
                total,
            ))
        }

        async fn update(&self, user: &User) -> UsuariosResult<User> {
            self.state
                .lock()
                .unwrap()
                .0
                .insert(user.id, user.clone());
            Ok(user.clone())
        }

        async fn delete(&self, id: UserId) -> UsuariosResult<bool> {
            Ok(self.state.lock().unwrap().0.remove(&id).is_some())
        }

        async fn count(&self) -> UsuariosResult<u64> {
            Ok(self.state.lock().unwrap().0.len() as u64)
        }
    }

    fn user_data(first: &str, last: &str, email: &str, birth: (i32, u32, u32)) -> UserData {
        UserData {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            email: Some(email.to_string()),
            birth_date: NaiveDate::from_ymd_opt(birth.0, birth.1, birth.2),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_keeps_fields() {
        let repo = InMemoryUserRepository::new();
        let data = user_data("Osvaldo", "Escamilla", "oescamilla@gmail.com", (1997, 11, 1));

        let user = repo.insert(&data).await.unwrap();

        assert_eq!(user.id, UserId::from_i64(1));
        assert_eq!(user.data(), data);
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_increasing_ids() {
        let repo = InMemoryUserRepository::new();
        let a = repo.insert(&UserData::default()).await.unwrap();
        let b = repo.insert(&UserData::default()).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_find_by_id_returns_stored_entity() {
        let repo = InMemoryUserRepository::new();
        let data = user_data("Osvaldo", "Escamilla", "oescamilla@gmail.com", (1997, 11, 1));
        let inserted = repo.insert(&data).await.unwrap();

        let found = repo.find_by_id(inserted.id).await.unwrap();
        assert_eq!(found, Some(inserted));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = InMemoryUserRepository::new();
        let result = repo.find_by_id(UserId::from_i64(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_page_empty() {
        let repo = InMemoryUserRepository::new();
        let page = repo.find_page(PageRequest::new(0, 10)).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_elements(), 0);
    }

    #[tokio::test]
    async fn test_find_page_respects_size_and_total() {
        let repo = InMemoryUserRepository::new();
        for i in 0..5 {
            let data = user_data("User", "N", &format!("u{}@example.com", i), (1990, 1, 1));
            repo.insert(&data).await.unwrap();
        }

        let page = repo.find_page(PageRequest::new(0, 2)).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_elements(), 5);
        assert_eq!(page.total_pages(), 3);

        let last = repo.find_page(PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(last.len(), 1);
        assert!(last.info.last);
    }

    #[tokio::test]
    async fn test_find_page_beyond_end_is_empty() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&UserData::default()).await.unwrap();

        let page = repo.find_page(PageRequest::new(10, 20)).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_elements(), 1);
    }

    #[tokio::test]
    async fn test_find_page_default_is_insertion_order() {
        let repo = InMemoryUserRepository::new();
        let a = repo
            .insert(&user_data("Zoe", "A", "z@example.com", (1990, 1, 1)))
            .await
            .unwrap();
        let b = repo
            .insert(&user_data("Ana", "B", "a@example.com", (1991, 1, 1)))
            .await
            .unwrap();

        let page = repo.find_page(PageRequest::new(0, 10)).await.unwrap();
        assert_eq!(page.content[0].id, a.id);
        assert_eq!(page.content[1].id, b.id);
    }

    #[tokio::test]
    async fn test_find_page_with_sort() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user_data("Zoe", "A", "z@example.com", (1990, 1, 1)))
            .await
            .unwrap();
        repo.insert(&user_data("Ana", "B", "a@example.com", (1991, 1, 1)))
            .await
            .unwrap();

        let sort = SortOrder::parse("firstName,asc");
        let page = repo
            .find_page(PageRequest::new(0, 10).with_sort(sort))
            .await
            .unwrap();
        assert_eq!(page.content[0].first_name.as_deref(), Some("Ana"));
        assert_eq!(page.content[1].first_name.as_deref(), Some("Zoe"));
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo
            .insert(&user_data("Osvaldo", "Escamilla", "oescamilla@gmail.com", (1997, 11, 1)))
            .await
            .unwrap();

        user.overwrite(user_data("Jael", "Barrera", "jbarrera@gmail.com", (1995, 11, 1)));
        repo.update(&user).await.unwrap();

        let found = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.first_name.as_deref(), Some("Jael"));
        assert_eq!(found.email.as_deref(), Some("jbarrera@gmail.com"));
    }

    #[tokio::test]
    async fn test_delete_removes_entity() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(&UserData::default()).await.unwrap();

        assert!(repo.delete(user.id).await.unwrap());
        assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_nonexistent_returns_false() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.delete(UserId::from_i64(999)).await.unwrap());
    }

    #[tokio::test]
    async fn test_count() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&UserData::default()).await.unwrap();
        repo.insert(&UserData::default()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
