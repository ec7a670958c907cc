//! Trait abstraction for the auth API to enable mocking in tests

use async_trait::async_trait;

use super::client::AuthError;

/// Asynchronous capabilities of the registration service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Ask the service whether an email can still be registered.
    ///
    /// Transport failures collapse to `false` (fail-closed); this call
    /// never surfaces an error to the pipeline.
    async fn check_email_available(&self, email: &str) -> bool;

    /// Register a new account, returning the raw status code and body
    /// for the caller to classify.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(u16, Vec<u8>), AuthError>;
}
