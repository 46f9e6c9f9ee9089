use thiserror::Error;

/// Input rejected before a request is built.
///
/// Every variant short-circuits the calling flow or service, so a validation error
/// guarantees that nothing was sent to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Password does not meet the requirements.")]
    WeakPassword,
    #[error("Invalid or missing reset token.")]
    MissingResetToken,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Name and Email are required")]
    MissingNameOrEmail,
    #[error("Reason is required for deactivation")]
    MissingReason,
    #[error("Product name is required")]
    MissingProductName,
}
