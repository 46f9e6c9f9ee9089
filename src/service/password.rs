//! Self-service password recovery. None of these endpoints require a session.

use crate::{
    client::{ApiClient, ApiRequest},
    error::Error,
    model::{
        api::MessageDto,
        password::{ForgotPasswordDto, ResetPasswordDto, TokenVerificationDto},
    },
};

const USER_MANAGEMENT_PATH: &str = "/api/usermanagement";
const RESOURCE: &str = "Password";

pub struct PasswordService<'a> {
    client: &'a ApiClient,
}

impl<'a> PasswordService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Ask the backend to email a reset link to `email`.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageDto, Error> {
        let body = ForgotPasswordDto {
            email: email.to_string(),
        };
        let request = ApiRequest::post(format!("{}/forgot-password", USER_MANAGEMENT_PATH))
            .json(&body)?
            .anonymous()
            .resource(RESOURCE)
            .action("send reset email");

        let response: Option<MessageDto> = self.client.send(request, None).await?;

        Ok(response.unwrap_or_default())
    }

    /// Set a new password using the token from a reset link.
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Backend acknowledgement, message may be absent
    /// - `Err(Error::ApiError)` - Expired token, rejected password or transport failure
    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<MessageDto, Error> {
        let body = ResetPasswordDto {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let request = ApiRequest::post(format!("{}/reset-password", USER_MANAGEMENT_PATH))
            .json(&body)?
            .anonymous()
            .resource(RESOURCE)
            .action("reset password");

        let response: Option<MessageDto> = self.client.send(request, None).await?;

        tracing::info!("Password reset accepted");

        Ok(response.unwrap_or_default())
    }

    /// The backend expects the bare token as a JSON string body.
    pub async fn verify_reset_token(&self, token: &str) -> Result<TokenVerificationDto, Error> {
        let request = ApiRequest::post(format!("{}/verify-reset-token", USER_MANAGEMENT_PATH))
            .json(token)?
            .anonymous()
            .resource("Reset token")
            .action("verify token");

        Ok(self.client.send(request, None).await?)
    }
}
