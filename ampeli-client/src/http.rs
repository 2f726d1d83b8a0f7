//! HTTP transport for the remote API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

/// Client for the remote inChurch/Ampeli REST API
///
/// Domain operations live in the sibling modules (`auth`, `users`,
/// `members`, `recommendations`); this type owns the transport.
#[derive(Debug, Clone)]
pub struct AmpeliClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl AmpeliClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.put(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.delete(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx statuses map to [`ClientError`] variants by status code.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::BAD_REQUEST => ClientError::BadRequest(text),
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::FORBIDDEN => ClientError::Forbidden(text),
                StatusCode::NOT_FOUND => ClientError::NotFound(text),
                StatusCode::CONFLICT => ClientError::Conflict(text),
                StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited,
                StatusCode::SERVICE_UNAVAILABLE => ClientError::ServiceUnavailable,
                s if s.is_server_error() => ClientError::Server {
                    status: s.as_u16(),
                    body: text,
                },
                s => ClientError::Unexpected {
                    status: s.as_u16(),
                    body: text,
                },
            });
        }

        let text = response.text().await?;
        Self::decode_body(&text)
    }

    /// Decode a 2xx body; an empty body decodes as `{}`
    fn decode_body<T: DeserializeOwned>(text: &str) -> ClientResult<T> {
        let body = if text.trim().is_empty() { "{}" } else { text };
        serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_decode_empty_body_as_empty_object() {
        let value: Value = AmpeliClient::decode_body("").unwrap();
        assert_eq!(value, serde_json::json!({}));

        let value: Value = AmpeliClient::decode_body("   ").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_decode_typed_body() {
        #[derive(serde::Deserialize, Debug)]
        struct Probe {
            available: bool,
        }

        let probe: Probe = AmpeliClient::decode_body(r#"{"available":true}"#).unwrap();
        assert!(probe.available);

        let err = AmpeliClient::decode_body::<Probe>("not json").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn test_url_join() {
        let client = AmpeliClient::new(&ClientConfig::new("https://api.example.com/api/"));
        assert_eq!(
            client.url("/members"),
            "https://api.example.com/api/members"
        );
        assert_eq!(client.url("members"), "https://api.example.com/api/members");
    }
}
