//! HTTP implementation of the auth collaborator.

use uuid::Uuid;

use crate::api::AuthApi;
use crate::dto::{LoginOutcome, LoginRequest, SignupOutcome, SignupRequest};
use crate::error::ClientError;

/// Reqwest-backed client for the portal backend.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let correlation = Uuid::now_v7();
        tracing::debug!(%correlation, path, "dispatching request");

        let response = self
            .http
            .post(self.endpoint(path))
            .header("x-request-id", correlation.to_string())
            .json(body)
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        match response.json::<T>().await {
            Ok(parsed) => {
                tracing::debug!(%correlation, status = %status, "round-trip finished");
                Ok(parsed)
            }
            // Outcome bodies are expected even on error statuses; only an
            // uninterpretable body is a hard failure.
            Err(err) if status.is_success() => Err(ClientError::Malformed(err.to_string())),
            Err(_) => Err(ClientError::Rejected(format!("http {status}"))),
        }
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ClientError> {
        self.post_json("auth/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupOutcome, ClientError> {
        self.post_json("auth/signup", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_duplicate_slashes() {
        let api = HttpAuthApi::new("https://portal.example.gov/");
        assert_eq!(
            api.endpoint("/auth/login"),
            "https://portal.example.gov/auth/login"
        );
    }
}
