use serde::{Deserialize, Serialize};

use crate::{
    client::{ApiClient, ApiRequest},
    error::Error,
    model::user::UserProfile,
    session::{Session, SessionStorage},
};

const LOGIN_PATH: &str = "/api/canvas/login";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct LoginDto<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponseDto {
    token: String,
    #[serde(default, alias = "profile")]
    user: Option<UserProfile>,
}

pub struct AuthService<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a session.
    ///
    /// # Returns
    /// - `Ok(Session)` - Session carrying the issued token and the operator profile if sent
    /// - `Err(Error::ApiError)` - Rejected credentials or transport failure
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, Error> {
        let request = ApiRequest::post(LOGIN_PATH)
            .json(&LoginDto { username, password })?
            .anonymous()
            .resource("Account")
            .action("log in");

        let response: LoginResponseDto = self.client.send(request, None).await?;

        tracing::info!(username = %username, "Logged in");

        Ok(Session::new(response.token, response.user))
    }

    /// Log in and persist the resulting session into `storage`.
    pub async fn login_and_store<S: SessionStorage + ?Sized>(
        &self,
        storage: &S,
        username: &str,
        password: &str,
    ) -> Result<Session, Error> {
        let session = self.login(username, password).await?;
        session.save(storage)?;

        Ok(session)
    }

    /// Forget the persisted session and any cached CSRF token.
    ///
    /// The backend keeps no session state, so no request is made.
    pub async fn logout<S: SessionStorage + ?Sized>(&self, storage: &S) -> Result<(), Error> {
        Session::clear(storage)?;
        self.client.reset().await;

        tracing::info!("Logged out");

        Ok(())
    }
}
