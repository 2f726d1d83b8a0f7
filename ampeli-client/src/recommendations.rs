//! Recommendation endpoints

use serde_json::{Value, json};

use crate::ClientResult;
use crate::http::AmpeliClient;

impl AmpeliClient {
    /// Generate recommendations for a specific member
    pub async fn get_member_recommendations(&self, member_id: i64) -> ClientResult<Value> {
        self.post_empty(&format!("/recommendations/member/{}", member_id))
            .await
    }

    /// Generate custom recommendations
    pub async fn get_custom_recommendations(&self, request: &Value) -> ClientResult<Value> {
        self.post("/recommendations/custom", request).await
    }

    /// Check the recommendation service's health
    ///
    /// Returns a degraded-status envelope when the service is unreachable.
    pub async fn check_recommendations_health(&self) -> Value {
        match self.get::<Value>("/recommendations/health").await {
            Ok(status) => status,
            Err(e) => json!({
                "status": "error",
                "message": e.to_string(),
            }),
        }
    }
}
