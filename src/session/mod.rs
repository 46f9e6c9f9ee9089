//! Operator session: bearer token plus cached profile.
//!
//! A [`Session`] is an explicit value handed to every authenticated service call rather
//! than state read from ambient storage. Persisting it between runs goes through the
//! [`SessionStorage`] trait under fixed keys, mirroring the key/value storage a browser
//! console would use. There is no client-side expiry: a stale token is only discovered when
//! the backend answers 401.

pub mod storage;


use crate::{
    error::{storage::StorageError, Error},
    model::user::UserProfile,
};

pub use storage::{FileStorage, MemoryStorage, SessionStorage};

pub const SESSION_TOKEN_KEY: &str = "token";
pub const SESSION_USER_KEY: &str = "user";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<UserProfile>) -> Self {
        Self {
            token: Some(token.into()),
            user,
        }
    }

    /// Session without credentials, used before login and for public endpoints.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Load the session persisted in `storage`.
    ///
    /// A missing token or user yields a session without that part; nothing is validated
    /// against the backend.
    ///
    /// # Returns
    /// - `Ok(Session)` - Possibly anonymous session
    /// - `Err(Error::StorageError)` - Storage unreadable or the stored profile is malformed
    pub fn load<S: SessionStorage + ?Sized>(storage: &S) -> Result<Self, Error> {
        let token = storage
            .get(SESSION_TOKEN_KEY)?
            .filter(|token| !token.is_empty());

        let user = storage
            .get(SESSION_USER_KEY)?
            .map(|raw| serde_json::from_str::<UserProfile>(&raw).map_err(StorageError::from))
            .transpose()?;

        Ok(Self { token, user })
    }

    /// Persist the session into `storage`, removing keys for absent parts.
    pub fn save<S: SessionStorage + ?Sized>(&self, storage: &S) -> Result<(), Error> {
        match &self.token {
            Some(token) => storage.set(SESSION_TOKEN_KEY, token)?,
            None => storage.remove(SESSION_TOKEN_KEY)?,
        }

        match &self.user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(StorageError::from)?;
                storage.set(SESSION_USER_KEY, &raw)?;
            }
            None => storage.remove(SESSION_USER_KEY)?,
        }

        tracing::debug!(authenticated = self.is_authenticated(), "Saved session");

        Ok(())
    }

    /// Remove every persisted session key.
    pub fn clear<S: SessionStorage + ?Sized>(storage: &S) -> Result<(), Error> {
        storage.remove(SESSION_TOKEN_KEY)?;
        storage.remove(SESSION_USER_KEY)?;

        Ok(())
    }
}
