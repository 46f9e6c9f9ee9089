//! Account management: lock state, activation and forced password resets.

use crate::{
    client::{ApiClient, ApiRequest},
    error::{validation::ValidationError, Error},
    model::{
        account::{
            AccountActionDto, AccountSummaryDto, ActivityEntryDto, InactiveUsersDto,
            LockedAccountsDto,
        },
        api::{EntityId, MessageDto},
        page::{Listing, PageQuery},
    },
    session::Session,
};

const USER_MANAGEMENT_PATH: &str = "/api/usermanagement";
const RESOURCE: &str = "User";
pub const ACTION_COMPLETED_MESSAGE: &str = "Action completed successfully";

/// Administrative action applied to a single user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Unlock,
    Activate,
    Deactivate,
    ForceResetPassword,
}

impl AccountAction {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Unlock => "unlock-account",
            Self::Activate => "activate-user",
            Self::Deactivate => "deactivate-user",
            Self::ForceResetPassword => "force-reset-password",
        }
    }

    fn action(&self) -> &'static str {
        match self {
            Self::Unlock => "unlock account",
            Self::Activate => "activate user",
            Self::Deactivate => "deactivate user",
            Self::ForceResetPassword => "force reset password",
        }
    }

    /// Reason recorded when the operator leaves it blank; deactivation has none.
    pub fn default_reason(&self) -> Option<&'static str> {
        match self {
            Self::Unlock => Some("Admin unlocked account"),
            Self::Activate => Some("Admin activated user"),
            Self::Deactivate => None,
            Self::ForceResetPassword => Some("Admin initiated password reset"),
        }
    }
}

pub struct AccountService<'a> {
    client: &'a ApiClient,
    session: &'a Session,
}

impl<'a> AccountService<'a> {
    pub fn new(client: &'a ApiClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// Applies `action` to `user_id` with the operator's reason.
    ///
    /// A blank reason falls back to the action's default; deactivation requires an explicit
    /// reason and fails locally without one.
    ///
    /// # Returns
    /// - `Ok(String)` - Server acknowledgement, or "Action completed successfully"
    /// - `Err(Error::ValidationError)` - Deactivation without a reason, nothing was sent
    /// - `Err(Error::ApiError)` - Classified request failure
    pub async fn perform(
        &self,
        action: AccountAction,
        user_id: &EntityId,
        reason: Option<&str>,
    ) -> Result<String, Error> {
        let reason = reason
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
            .or_else(|| action.default_reason())
            .ok_or(ValidationError::MissingReason)?;

        let body = AccountActionDto {
            user_id: user_id.clone(),
            reason: reason.to_string(),
        };
        let request = ApiRequest::post(format!("{}/{}", USER_MANAGEMENT_PATH, action.endpoint()))
            .json(&body)?
            .resource(RESOURCE)
            .action(action.action());

        let response: Option<MessageDto> = self.client.send(request, Some(self.session)).await?;

        tracing::info!(user_id = %user_id, action = ?action, "Account action completed");

        Ok(response
            .unwrap_or_default()
            .message_or(ACTION_COMPLETED_MESSAGE))
    }

    pub async fn unlock_account(&self, user_id: &EntityId, reason: &str) -> Result<String, Error> {
        self.perform(AccountAction::Unlock, user_id, Some(reason))
            .await
    }

    pub async fn activate_user(&self, user_id: &EntityId, reason: &str) -> Result<String, Error> {
        self.perform(AccountAction::Activate, user_id, Some(reason))
            .await
    }

    pub async fn deactivate_user(&self, user_id: &EntityId, reason: &str) -> Result<String, Error> {
        self.perform(AccountAction::Deactivate, user_id, Some(reason))
            .await
    }

    pub async fn force_reset_password(
        &self,
        user_id: &EntityId,
        reason: &str,
    ) -> Result<String, Error> {
        self.perform(AccountAction::ForceResetPassword, user_id, Some(reason))
            .await
    }

    pub async fn get_locked_accounts(
        &self,
        page: PageQuery,
    ) -> Result<Vec<AccountSummaryDto>, Error> {
        let request = ApiRequest::get(format!("{}/locked-accounts", USER_MANAGEMENT_PATH))
            .page(page)
            .resource(RESOURCE)
            .action("get locked accounts");

        let response: LockedAccountsDto = self.client.send(request, Some(self.session)).await?;

        Ok(response.locked_users)
    }

    pub async fn get_inactive_users(
        &self,
        page: PageQuery,
    ) -> Result<Vec<AccountSummaryDto>, Error> {
        let request = ApiRequest::get(format!("{}/inactive-users", USER_MANAGEMENT_PATH))
            .page(page)
            .resource(RESOURCE)
            .action("get inactive users");

        let response: InactiveUsersDto = self.client.send(request, Some(self.session)).await?;

        Ok(response.inactive_users)
    }

    pub async fn get_activity_log(
        &self,
        user_id: &EntityId,
        page: PageQuery,
    ) -> Result<Vec<ActivityEntryDto>, Error> {
        let request = ApiRequest::get(format!("{}/activity-log/{}", USER_MANAGEMENT_PATH, user_id))
            .page(page)
            .resource(RESOURCE)
            .action("get activity log");

        let entries: Listing<ActivityEntryDto> =
            self.client.send(request, Some(self.session)).await?;

        Ok(entries.into_items())
    }
}
