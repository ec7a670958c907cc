//! HTTP client for the Grocery auth API
//!
//! Thin reqwest wrapper around the two registration endpoints. Transport
//! policy (retries, auth, TLS) stays inside reqwest; this module only
//! shapes requests and classifies transport-level failures.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use thiserror::Error;

use super::traits::AuthApi;

/// Default API base path
const DEFAULT_BASE_URL: &str = "https://letscodeeasy.com/groceryapi/public/api";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Errors surfaced by the registration call
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("registration rejected with status {status}")]
    Rejected { status: u16 },
    #[error("registration response had no body")]
    EmptyResponse,
}

/// JSON body for POST /register
#[derive(Debug, Serialize)]
struct RegistrationRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// JSON body for POST /validate/email
#[derive(Debug, Serialize)]
struct EmailValidationRequest<'a> {
    email: &'a str,
}

/// Client for the Grocery auth endpoints
pub struct AuthHttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthHttpClient {
    /// Create a client against the configured base URL. The
    /// GROCERY_API_BASE_URL environment variable wins over config.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = std::env::var("GROCERY_API_BASE_URL")
            .ok()
            .or(base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response, AuthError> {
        let payload = serde_json::to_vec(body)?;
        let response = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl AuthApi for AuthHttpClient {
    async fn check_email_available(&self, email: &str) -> bool {
        let request = EmailValidationRequest { email };
        match self.post_json("validate/email", &request).await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(err) => {
                tracing::warn!("email validation request failed: {err}");
                false
            }
        }
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(u16, Vec<u8>), AuthError> {
        let request = RegistrationRequest {
            name: username,
            email,
            password,
        };

        let response = self.post_json("register", &request).await?;
        let status = response.status().as_u16();
        if !(200..400).contains(&status) {
            return Err(AuthError::Rejected { status });
        }

        let body = response.bytes().await.map_err(AuthError::Transport)?;
        if body.is_empty() {
            return Err(AuthError::EmptyResponse);
        }

        Ok((status, body.to_vec()))
    }
}
