use crate::{
    client::ApiClient,
    error::{validation::ValidationError, Error},
    service::PasswordService,
};

pub const RESET_LINK_SENT_MESSAGE: &str =
    "If the email exists, a password reset link has been sent.";

/// Requesting a reset link by email.
pub struct ForgotPasswordFlow<'a> {
    client: &'a ApiClient,
}

impl<'a> ForgotPasswordFlow<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn submit(&self, email: &str) -> Result<String, Error> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail.into());
        }

        let response = PasswordService::new(self.client)
            .forgot_password(email)
            .await?;

        Ok(response.message_or(RESET_LINK_SENT_MESSAGE))
    }
}
