//! HTTP client for the chat backend REST API.
//!
//! The backend contract (`/models`, `/profiles`, `/history/load`, `/chat`)
//! is assumed, never negotiated: each call deserializes the response body
//! and surfaces anything else as a [`BackendError`].

use serde_json::json;

use super::types::{ChatEnvelope, ChatMessage, Profile};

/// Errors surfaced by the backend client.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the backend.
    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    /// Error string reported in an otherwise well-formed JSON body.
    #[error("backend error: {0}")]
    Backend(String),

    /// Chat envelope carried neither a response nor an error.
    #[error("backend returned an empty chat envelope")]
    EmptyReply,
}

/// Thin typed client over the chat backend.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl BackendClient {
    /// Create a client for the given backend origin.
    #[must_use]
    pub fn new(base_url: &str, timeout: std::time::Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `/models` - list installed model names.
    pub async fn list_models(&self) -> Result<Vec<String>, BackendError> {
        let resp = self.http.get(self.url("/models")).send().await?;
        if !resp.status().is_success() {
            return Err(BackendError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// GET `/profiles` - list all model profiles with display metadata.
    pub async fn list_profiles(&self) -> Result<Vec<Profile>, BackendError> {
        let resp = self.http.get(self.url("/profiles")).send().await?;
        if !resp.status().is_success() {
            return Err(BackendError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// GET `/profiles/{name}` - fetch a single model profile.
    ///
    /// The backend maps `-` back to `/` in the path segment, so model names
    /// are sanitized with the inverse mapping here.
    pub async fn profile(&self, model: &str) -> Result<Profile, BackendError> {
        let path = format!("/profiles/{}", sanitize_model_name(model));
        let resp = self.http.get(self.url(&path)).send().await?;
        if !resp.status().is_success() {
            return Err(BackendError::Status(resp.status()));
        }

        // A missing model comes back as `{"error": "Model not found"}` with
        // a 200 status, so probe for the error key before deserializing.
        let value: serde_json::Value = resp.json().await?;
        if let Some(err) = value.get("error").and_then(|e| e.as_str()) {
            return Err(BackendError::Backend(err.to_string()));
        }

        serde_json::from_value(value)
            .map_err(|e| BackendError::Backend(format!("malformed profile: {e}")))
    }

    /// GET `/history/load?model_name=` - load prior conversation history.
    pub async fn load_history(&self, model: &str) -> Result<Vec<ChatMessage>, BackendError> {
        let resp = self
            .http
            .get(self.url("/history/load"))
            .query(&[("model_name", model)])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(BackendError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    /// POST `/chat` - send a prompt and return the assistant reply.
    pub async fn send_chat(&self, model: &str, prompt: &str) -> Result<String, BackendError> {
        let resp = self
            .http
            .post(self.url("/chat"))
            .json(&json!({ "model_name": model, "prompt": prompt }))
            .send()
            .await?;

        let status = resp.status();
        let envelope: ChatEnvelope = resp.json().await?;

        if let Some(err) = envelope.error {
            return Err(BackendError::Backend(err));
        }
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }
        envelope.response.ok_or(BackendError::EmptyReply)
    }
}

/// Replace `/` with `-` so model names survive as a single path segment.
fn sanitize_model_name(model: &str) -> String {
    model.replace('/', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_slashes_in_model_names() {
        assert_eq!(sanitize_model_name("library/llama3:8b"), "library-llama3:8b");
        assert_eq!(sanitize_model_name("mistral"), "mistral");
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = BackendClient::new(
            "http://127.0.0.1:5000/",
            std::time::Duration::from_secs(5),
        );
        assert_eq!(client.url("/models"), "http://127.0.0.1:5000/models");
    }
}
