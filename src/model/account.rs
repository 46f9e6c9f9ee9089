use serde::{Deserialize, Serialize};

use crate::model::api::{EntityId, Record};

/// Body of every account-management action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountActionDto {
    pub user_id: EntityId,
    pub reason: String,
}

/// Entry of the locked-account and inactive-user listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountSummaryDto(Record);

impl AccountSummaryDto {
    pub fn id(&self) -> Option<EntityId> {
        self.0.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.0.str("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.0.str("email")
    }

    pub fn record(&self) -> &Record {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedAccountsDto {
    #[serde(default)]
    pub locked_users: Vec<AccountSummaryDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InactiveUsersDto {
    #[serde(default)]
    pub inactive_users: Vec<AccountSummaryDto>,
}

/// One line of a user's activity log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityEntryDto(Record);

impl ActivityEntryDto {
    pub fn action(&self) -> Option<&str> {
        self.0.str("action")
    }

    pub fn reason(&self) -> Option<&str> {
        self.0.str("reason")
    }

    pub fn performed_by(&self) -> Option<&str> {
        self.0.str("performedBy")
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.0.str("timestamp")
    }

    pub fn record(&self) -> &Record {
        &self.0
    }
}
