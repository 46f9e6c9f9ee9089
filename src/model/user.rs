use serde::{Deserialize, Deserializer, Serialize};

use crate::model::api::{EntityId, Record};

pub const DEFAULT_ROLE: &str = "user";
pub const CARRIER_ROLE: &str = "carrier";

/// Profile of the signed-in operator, cached alongside the session token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Accepted from the backend as either a JSON array or a comma-separated string.
    #[serde(default, deserialize_with = "deserialize_roles")]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

impl UserProfile {
    /// First role of the operator, `"user"` when none is recorded.
    pub fn primary_role(&self) -> &str {
        self.roles
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_ROLE)
    }
}

fn deserialize_roles<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Roles {
        List(Vec<String>),
        Csv(String),
        Missing(()),
    }

    Ok(match Roles::deserialize(deserializer)? {
        Roles::List(roles) => roles,
        Roles::Csv(roles) => roles
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string)
            .collect(),
        Roles::Missing(()) => Vec::new(),
    })
}

/// A user record as listed and edited by the console, kept exactly as the backend sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDto(Record);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Locked,
    Inactive,
}

impl UserDto {
    pub fn id(&self) -> Option<EntityId> {
        self.0.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.0.str("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.0.str("email")
    }

    pub fn role(&self) -> Option<&str> {
        self.0.str("role")
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.0.str("organizationName")
    }

    pub fn is_active(&self) -> Option<bool> {
        self.0.bool("isActive")
    }

    pub fn is_locked(&self) -> Option<bool> {
        self.0.bool("isLocked")
    }

    /// Account status shown next to the user; inactive takes precedence over locked.
    pub fn status(&self) -> UserStatus {
        if self.is_active() != Some(true) {
            UserStatus::Inactive
        } else if self.is_locked() == Some(true) {
            UserStatus::Locked
        } else {
            UserStatus::Active
        }
    }

    pub fn record(&self) -> &Record {
        &self.0
    }

    pub fn record_mut(&mut self) -> &mut Record {
        &mut self.0
    }
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDto {
    pub name: String,
    pub email: String,
    pub role: String,
    pub organization_name: String,
}

impl Default for NewUserDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: DEFAULT_ROLE.to_string(),
            organization_name: String::new(),
        }
    }
}
