use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

use shared_database::store::StoreClient;
use shared_models::auth::StoredUser;

pub struct UserService<'a> {
    store: &'a StoreClient,
}

impl<'a> UserService<'a> {
    pub fn new(store: &'a StoreClient) -> Self {
        Self { store }
    }

    /// Upsert a user keyed on email. The client's profile fields are stored
    /// as-is; the path email wins over any email in the body.
    pub async fn upsert(&self, email: &str, profile: Value) -> Result<Value> {
        debug!("Upserting user {}", email);

        let mut document = match profile {
            Value::Object(map) => Value::Object(map),
            _ => json!({}),
        };
        document["email"] = json!(email);

        self.store.upsert_one("users", "email", document).await
    }

    pub async fn list(&self) -> Result<Vec<Value>> {
        self.store.find("users", &[]).await
    }

    pub async fn is_admin(&self, email: &str) -> Result<bool> {
        let user: Option<StoredUser> = self.store.find_one("users", &[("email", email)]).await?;
        Ok(user.map(|u| u.is_admin()).unwrap_or(false))
    }

    /// Set `role = "admin"` on the matching user; returns the updated rows.
    pub async fn promote_to_admin(&self, email: &str) -> Result<Vec<Value>> {
        debug!("Promoting {} to admin", email);
        self.store
            .update("users", &[("email", email)], json!({ "role": "admin" }))
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<Vec<Value>> {
        debug!("Deleting user {}", id);
        self.store.delete_by_id("users", id).await
    }
}
