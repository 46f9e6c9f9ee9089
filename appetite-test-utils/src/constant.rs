//! Placeholder credentials shared across tests. None of these are real secrets.

/// Bearer token placed in test sessions and expected by authenticated mock endpoints.
pub static TEST_TOKEN: &str = "test-bearer-token";

/// Password satisfying every complexity rule (length, upper, lower, digit).
pub static TEST_PASSWORD: &str = "Passw0rd";

/// Password reset token handed to the reset flow.
pub static TEST_RESET_TOKEN: &str = "reset-token-123";
