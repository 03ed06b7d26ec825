use serde::{Deserialize, Serialize};

/// A registered user as stored by the backend.
///
/// `username` follows the `name-id` convention and is unique across the user
/// set (enforced by a backend unique constraint). `password` holds a
/// PHC-format argon2id hash by default; in plaintext-legacy mode it holds the
/// secret verbatim.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
