//! User entity.

use crate::UserId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User entity: one persisted row of the `users` table.
///
/// All four data fields are nullable. The update operation is a full
/// replace of the data fields, so an omitted field legitimately stores
/// NULL rather than keeping the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Database-assigned identifier, immutable after insert.
    pub id: UserId,

    /// User's first name.
    pub first_name: Option<String>,

    /// User's last name.
    pub last_name: Option<String>,

    /// User's email address. Stored as-is; the service performs no
    /// validation beyond what the database enforces.
    pub email: Option<String>,

    /// User's birth date.
    pub birth_date: Option<NaiveDate>,
}

/// The data fields of a user, without an identifier.
///
/// Doubles as the insert payload (the database assigns the id) and as
/// the full-replace patch applied on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl User {
    /// Assembles an entity from a database-assigned id and its data.
    #[must_use]
    pub fn from_parts(id: UserId, data: UserData) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            birth_date: data.birth_date,
        }
    }

    /// Overwrites all four data fields from `data`, keeping the id.
    ///
    /// This is a full replace, not a merge: `None` values in `data`
    /// clear the corresponding stored values.
    pub fn overwrite(&mut self, data: UserData) {
        self.first_name = data.first_name;
        self.last_name = data.last_name;
        self.email = data.email;
        self.birth_date = data.birth_date;
    }

    /// Returns a copy of the data fields without the id.
    #[must_use]
    pub fn data(&self) -> UserData {
        UserData {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            birth_date: self.birth_date,
        }
    }
}
