//! User CRUD operations

use serde_json::{Value, json};

use crate::ClientResult;
use crate::http::AmpeliClient;
use crate::types::{AuthApiResponse, RemoteUser, UserExists};

impl AmpeliClient {
    /// List all users
    pub async fn get_all_users(&self) -> ClientResult<Vec<RemoteUser>> {
        self.get("/users").await
    }

    /// Fetch a user by id
    pub async fn get_user_by_id(&self, user_id: i64) -> ClientResult<RemoteUser> {
        self.get(&format!("/users/{}", user_id)).await
    }

    /// Fetch a user by email
    pub async fn get_user_by_email(&self, email: &str) -> ClientResult<RemoteUser> {
        self.get(&format!("/users/email/{}", email)).await
    }

    /// Create a user
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> ClientResult<RemoteUser> {
        let mut body = json!({
            "name": name,
            "email": email,
            "password": password,
        });
        if let Some(phone) = phone {
            body["phone"] = json!(phone);
        }
        self.post("/users", &body).await
    }

    /// Update an existing user
    pub async fn update_user(
        &self,
        user_id: i64,
        name: &str,
        email: &str,
        phone: Option<&str>,
        password: Option<&str>,
    ) -> ClientResult<RemoteUser> {
        let mut body = json!({
            "name": name,
            "email": email,
        });
        if let Some(phone) = phone {
            body["phone"] = json!(phone);
        }
        if let Some(password) = password {
            body["password"] = json!(password);
        }
        self.put(&format!("/users/{}", user_id), &body).await
    }

    /// Remove a user
    pub async fn delete_user(&self, user_id: i64) -> ClientResult<Value> {
        self.delete(&format!("/users/{}", user_id)).await
    }

    /// Authenticate against the user endpoint (alternative to `/auth/login`)
    pub async fn authenticate_user(
        &self,
        email: &str,
        password: &str,
    ) -> ClientResult<AuthApiResponse> {
        let body = json!({
            "email": email,
            "password": password,
        });
        self.post("/users/authenticate", &body).await
    }

    /// Check whether an email already has an account
    ///
    /// Assumes it does not when the API cannot be reached.
    pub async fn user_exists(&self, email: &str) -> bool {
        match self
            .get::<UserExists>(&format!("/users/exists/{}", email))
            .await
        {
            Ok(resp) => resp.exists,
            Err(e) => {
                tracing::debug!(error = %e, "User existence check failed, assuming missing");
                false
            }
        }
    }
}
