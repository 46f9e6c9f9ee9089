use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Which complexity rules a candidate password satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequirements {
    pub min_length: bool,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_number: bool,
}

impl PasswordRequirements {
    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LENGTH,
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.min_length && self.has_upper && self.has_lower && self.has_number
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordDto {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    pub token: String,
    pub new_password: String,
}

/// Response of the reset-token verification endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenVerificationDto {
    #[serde(default)]
    pub is_valid: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
