use serde::{Deserialize, Serialize};

/// A registered user account
///
/// The email acts as the unique key by convention; uniqueness is enforced
/// only by a pre-insert existence check at signup. The password is stored
/// verbatim in the local store, with no hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// The single process-wide session record
///
/// Presence of this record is the sole authorization signal for protected
/// views. It is created at login, removed at logout, and never expires on
/// its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Account,
}
