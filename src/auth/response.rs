//! Wire models and response classification for the registration endpoint

use serde::Deserialize;

/// Access token payload returned on successful registration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Per-field messages the server returns under "validation_errors"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ValidationErrors {
    pub name: Option<Vec<String>>,
    pub email: Option<Vec<String>>,
    pub password: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct ValidationErrorBody {
    validation_errors: ValidationErrors,
}

/// Typed outcome of a registration round-trip
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Success(TokenResponse),
    EmailExists,
    ValidationFailed(ValidationErrors),
    InvalidResponse,
    NetworkError(String),
}

/// Classify a raw registration response. Total: every (status, body)
/// pair maps to exactly one outcome.
///
/// 200 must carry a token payload; 409 is the email-taken signal; other
/// client errors must carry a validation_errors payload. Anything that
/// fits none of these shapes is an invalid response.
pub fn parse_registration_response(status: u16, body: &[u8]) -> RegistrationOutcome {
    match status {
        200 => match serde_json::from_slice::<TokenResponse>(body) {
            Ok(token) => RegistrationOutcome::Success(token),
            Err(_) => RegistrationOutcome::InvalidResponse,
        },
        409 => RegistrationOutcome::EmailExists,
        400..=499 => match serde_json::from_slice::<ValidationErrorBody>(body) {
            Ok(body) => RegistrationOutcome::ValidationFailed(body.validation_errors),
            Err(_) => RegistrationOutcome::InvalidResponse,
        },
        _ => RegistrationOutcome::InvalidResponse,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_200_with_token_is_success() {
        let body = br#"{"access_token":"x","token_type":"bearer","expires_in":3600}"#;
        let outcome = parse_registration_response(200, body);
        assert_eq!(
            outcome,
            RegistrationOutcome::Success(TokenResponse {
                access_token: "x".to_string(),
                token_type: "bearer".to_string(),
                expires_in: 3600,
            })
        );
    }

    #[test]
    fn test_200_without_token_shape_is_invalid_response() {
        let outcome = parse_registration_response(200, br#"{"hello":"world"}"#);
        assert_eq!(outcome, RegistrationOutcome::InvalidResponse);
    }

    #[test]
    fn test_200_with_garbage_body_is_invalid_response() {
        let outcome = parse_registration_response(200, b"not json");
        assert_eq!(outcome, RegistrationOutcome::InvalidResponse);
    }

    #[test]
    fn test_422_with_validation_errors_is_validation_failed() {
        let body = br#"{"validation_errors":{"email":["taken"]}}"#;
        let outcome = parse_registration_response(422, body);
        assert_eq!(
            outcome,
            RegistrationOutcome::ValidationFailed(ValidationErrors {
                name: None,
                email: Some(vec!["taken".to_string()]),
                password: None,
            })
        );
    }

    #[test]
    fn test_422_with_all_fields_populated() {
        let body = br#"{"validation_errors":{"name":["too short"],"email":["taken"],"password":["weak"]}}"#;
        match parse_registration_response(422, body) {
            RegistrationOutcome::ValidationFailed(errors) => {
                assert_eq!(errors.name, Some(vec!["too short".to_string()]));
                assert_eq!(errors.email, Some(vec!["taken".to_string()]));
                assert_eq!(errors.password, Some(vec!["weak".to_string()]));
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_422_without_validation_errors_is_invalid_response() {
        let outcome = parse_registration_response(422, br#"{"message":"nope"}"#);
        assert_eq!(outcome, RegistrationOutcome::InvalidResponse);
    }

    #[test]
    fn test_409_is_email_exists() {
        let outcome = parse_registration_response(409, b"");
        assert_eq!(outcome, RegistrationOutcome::EmailExists);
    }

    #[test]
    fn test_500_is_invalid_response() {
        let outcome = parse_registration_response(500, b"oops");
        assert_eq!(outcome, RegistrationOutcome::InvalidResponse);
    }

    #[test]
    fn test_redirect_is_invalid_response() {
        let outcome = parse_registration_response(302, b"");
        assert_eq!(outcome, RegistrationOutcome::InvalidResponse);
    }
}
