use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::error::AppError;

const USERNAME_MAX_CHARS: usize = 150;
const EMAIL_MAX_CHARS: usize = 254;
const PASSWORD_MIN_CHARS: usize = 8;

/// Public view of an account. The password hash stays in the store and
/// is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration request body.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::ValidationError(
                "username must not be empty".to_string(),
            ));
        }
        if self.username.chars().count() > USERNAME_MAX_CHARS {
            return Err(AppError::ValidationError(format!(
                "username must be at most {} characters",
                USERNAME_MAX_CHARS
            )));
        }
        if let Some(email) = &self.email {
            if email.chars().count() > EMAIL_MAX_CHARS {
                return Err(AppError::ValidationError(format!(
                    "email must be at most {} characters",
                    EMAIL_MAX_CHARS
                )));
            }
        }
        if self.password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(AppError::ValidationError(format!(
                "password must be at least {} characters",
                PASSWORD_MIN_CHARS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> RegisterUserRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn valid_request_passes() {
        let req = request(json!({
            "username": "amara",
            "email": "amara@example.edu",
            "password": "correct horse"
        }));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn email_is_optional() {
        let req = request(json!({ "username": "amara", "password": "correct horse" }));
        assert!(req.email.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn blank_username_is_rejected() {
        let req = request(json!({ "username": "   ", "password": "correct horse" }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        let req = request(json!({ "username": "amara", "password": "short" }));
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_password_fails_deserialization() {
        let result: Result<RegisterUserRequest, _> =
            serde_json::from_value(json!({ "username": "amara" }));
        assert!(result.is_err());
    }

    #[test]
    fn user_response_has_no_password_fields() {
        let user = User {
            id: Uuid::new_v4(),
            username: "amara".to_string(),
            email: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("password_hash").is_none());
    }
}
