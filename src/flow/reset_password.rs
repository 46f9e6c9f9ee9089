//! Completing a password reset from an emailed link.

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::{
    client::ApiClient,
    error::{validation::ValidationError, Error},
    flow::navigation::{Navigator, Route},
    model::password::PasswordRequirements,
    service::PasswordService,
};

pub const RESET_SUCCESS_MESSAGE: &str = "Password has been reset successfully.";
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// Result of an accepted reset.
#[derive(Debug)]
pub struct ResetPasswordOutcome {
    pub message: String,
    /// Pending navigation to the login screen; completes once the delay has elapsed.
    pub redirect: JoinHandle<()>,
}

pub struct ResetPasswordFlow {
    token: String,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
}

impl ResetPasswordFlow {
    /// Start the flow from the `token` query parameter of the reset link.
    ///
    /// # Returns
    /// - `Ok(ResetPasswordFlow)` - Token present
    /// - `Err(ValidationError::MissingResetToken)` - Link carried no usable token
    pub fn new(
        token: Option<&str>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ValidationError> {
        let token = token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ValidationError::MissingResetToken)?;

        Ok(Self {
            token: token.to_string(),
            navigator,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        })
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Local checks run before anything is sent; a mismatch is reported ahead of weakness.
    pub fn validate(new_password: &str, confirm_password: &str) -> Result<(), ValidationError> {
        if new_password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if !PasswordRequirements::check(new_password).is_valid() {
            return Err(ValidationError::WeakPassword);
        }

        Ok(())
    }

    /// Submit the new password and schedule the redirect to the login screen.
    ///
    /// # Returns
    /// - `Ok(ResetPasswordOutcome)` - Reset accepted, redirect pending
    /// - `Err(Error::ValidationError)` - Rejected locally, no request was issued
    /// - `Err(Error::ApiError)` - Backend rejected the reset or could not be reached
    pub async fn submit(
        &self,
        client: &ApiClient,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<ResetPasswordOutcome, Error> {
        Self::validate(new_password, confirm_password)?;

        let response = PasswordService::new(client)
            .reset_password(&self.token, new_password)
            .await?;

        let navigator = Arc::clone(&self.navigator);
        let delay = self.redirect_delay;
        let redirect = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(Route::Login);
        });

        Ok(ResetPasswordOutcome {
            message: response.message_or(RESET_SUCCESS_MESSAGE),
            redirect,
        })
    }
}
