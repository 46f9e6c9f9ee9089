use std::sync::Arc;

use crate::{
    client::ApiClient,
    error::Error,
    flow::navigation::{Navigator, Route},
    service::AuthService,
    session::{Session, SessionStorage},
};

/// Signing in from the login screen: the session is persisted, then the dashboard opens.
pub struct LoginFlow<'a> {
    client: &'a ApiClient,
    storage: &'a dyn SessionStorage,
    navigator: Arc<dyn Navigator>,
}

impl<'a> LoginFlow<'a> {
    pub fn new(
        client: &'a ApiClient,
        storage: &'a dyn SessionStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            storage,
            navigator,
        }
    }

    /// # Returns
    /// - `Ok(Session)` - Stored session; the navigator has been sent to the dashboard
    /// - `Err(Error)` - Login rejected or the session could not be stored; no navigation
    pub async fn submit(&self, username: &str, password: &str) -> Result<Session, Error> {
        let session = AuthService::new(self.client)
            .login_and_store(self.storage, username, password)
            .await?;

        self.navigator.navigate(Route::Dashboard);

        Ok(session)
    }
}
