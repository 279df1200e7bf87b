//! User-related DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use usuarios_core::{User, UserData, UserId};

/// Inbound user payload for create and update.
///
/// There is deliberately no `id` field: on create the database assigns
/// the id, and on update the path id always wins. An `id` present in
/// the request body is silently dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl From<UserRequest> for UserData {
    fn from(request: UserRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            birth_date: request.birth_date,
        }
    }
}

/// Outbound user representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            birth_date: user.birth_date,
        }
    }
}
