use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

/// Claim set carried by a portal token: just the patient's email plus
/// expiry metadata.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub email: String,
    pub iat: Option<u64>,
    pub exp: Option<u64>,
}

/// The decoded identity attached to a request after the token gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
}

/// A user document as persisted in the `users` collection. Extra profile
/// fields stay in the store; only the identity and role matter here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl StoredUser {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}
