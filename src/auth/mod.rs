//! Auth API module
//!
//! Client, trait abstraction, and response classification for the
//! Grocery registration service.

mod client;
mod response;
mod traits;

pub use client::{AuthError, AuthHttpClient};
pub use response::{
    parse_registration_response, RegistrationOutcome, TokenResponse, ValidationErrors,
};
pub use traits::AuthApi;

#[cfg(test)]
pub use traits::MockAuthApi;
