use serde::{Deserialize, Serialize};

/// Minimal authenticated-user record held by the session.
///
/// Immutable once set; replaced wholesale on login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identity {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Login form payload handed to the identity collaborator for verification.
///
/// Never persisted by this crate; the collaborator's cookie transport owns
/// session persistence.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
