use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Request bodies. Fields are optional so the validation layer can report
// missing vs. blank per field instead of a serde-level rejection.

/// Login body, also reused by the reset-password handler.
#[derive(Serialize, Deserialize)]
pub struct RCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RRegister {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RResetUsername {
    pub id: Option<Uuid>,
    pub username: Option<String>,
}

/// Body carrying only a username (delete-user, forgot-password).
#[derive(Serialize, Deserialize)]
pub struct RUsername {
    pub username: Option<String>,
}

/// What the db layer needs to insert a new user.
#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    /// Already hashed by the caller.
    pub password: String,
    pub is_active: bool,
}

// Success payloads.

#[derive(Serialize, Deserialize)]
pub struct LoginData {
    pub username: String,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct UsernameData {
    pub username: String,
}
