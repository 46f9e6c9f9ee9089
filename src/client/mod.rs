//! Authenticated API client.
//!
//! Every call to the backend goes through [`ApiClient`]: it attaches the bearer token of
//! the session it is given, bounds the whole exchange with the configured timeout, and
//! translates the outcome into an [`ApiError`] via the shared response interpretation.
//! Calls are stateless; there is no retry and no backoff.

pub mod csrf;
pub mod request;
pub mod response;


use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    client::{
        csrf::{CsrfTokenCache, CSRF_HEADER, CSRF_TOKEN_PATH},
        response::{check_status, interpret_response},
    },
    config::Config,
    error::api::ApiError,
    session::Session,
};

pub use request::ApiRequest;

pub const CONNECTION_CHECK_PATH: &str = "/swagger/index.html";

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
    csrf: Option<CsrfTokenCache>,
}

impl ApiClient {
    /// Build a client for the backend described by `config`.
    ///
    /// # Returns
    /// - `Ok(ApiClient)` - Client with its own cookie store
    /// - `Err(ApiError::Network)` - The underlying HTTP client could not be initialised
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
            csrf: config.csrf_enabled.then(CsrfTokenCache::new),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send `request` and decode the JSON success body into `T`.
    ///
    /// # Arguments
    /// - `request` - Envelope describing the call
    /// - `session` - Session whose token is attached to authenticated requests, if any
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded 2xx body
    /// - `Err(ApiError)` - Classified failure (status, timeout, network, decode)
    pub async fn send<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        session: Option<&Session>,
    ) -> Result<T, ApiError> {
        let value = self.send_raw(request, session).await?;

        serde_json::from_value(value).map_err(ApiError::Decode)
    }

    /// Send `request` and return the JSON success body unmodified.
    pub async fn send_raw(
        &self,
        request: ApiRequest,
        session: Option<&Session>,
    ) -> Result<Value, ApiError> {
        let (status, body) = self.exchange(&request, session).await?;

        interpret_response(status, &body, &request).inspect_err(|e| log_failure(&request, e))
    }

    /// Send `request` and discard whatever the backend returns on success.
    pub async fn send_empty(
        &self,
        request: ApiRequest,
        session: Option<&Session>,
    ) -> Result<(), ApiError> {
        let (status, body) = self.exchange(&request, session).await?;

        check_status(status, &body, &request).inspect_err(|e| log_failure(&request, e))
    }

    /// Whether the backend answers at all, probing its API documentation page.
    ///
    /// Never fails; unreachable backends and timeouts report `false`.
    pub async fn check_connection(&self) -> bool {
        let url = match self.join(CONNECTION_CHECK_PATH, &[]) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Backend not reachable: {}", e);
                return false;
            }
        };

        match tokio::time::timeout(self.timeout, self.http.get(url).send()).await {
            Ok(Ok(response)) => {
                let reachable = response.status().is_success();
                tracing::info!(status = %response.status(), "Backend reachable: {}", reachable);
                reachable
            }
            Ok(Err(e)) => {
                tracing::error!("Backend not reachable: {}", e);
                false
            }
            Err(_) => {
                tracing::error!("Backend not reachable: {}", ApiError::Timeout);
                false
            }
        }
    }

    /// Forget per-client state tied to the previous operator.
    pub async fn reset(&self) {
        if let Some(csrf) = &self.csrf {
            csrf.clear().await;
        }
    }

    async fn exchange(
        &self,
        request: &ApiRequest,
        session: Option<&Session>,
    ) -> Result<(StatusCode, String), ApiError> {
        let url = self.join(request.path(), request.query_pairs())?;

        let mut builder = self
            .http
            .request(request.method().clone(), url)
            .header(CONTENT_TYPE, "application/json");

        let token = session
            .and_then(Session::token)
            .filter(|_| request.is_authenticated());
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        if request.is_mutating() {
            if let Some(csrf_token) = self.csrf_token().await {
                builder = builder.header(CSRF_HEADER, csrf_token);
            }
        }

        if let Some(body) = request.body() {
            let body = serde_json::to_vec(body).map_err(ApiError::Encode)?;
            builder = builder.body(body);
        }

        tracing::debug!(
            method = %request.method(),
            path = %request.path(),
            authenticated = token.is_some(),
            "Sending request"
        );

        let exchange = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await?;

            Ok::<_, reqwest::Error>((status, body))
        };

        // Dropping the exchange future on timeout aborts the in-flight request
        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(outcome)) => Ok(outcome),
            Ok(Err(e)) if e.is_builder() => Err(ApiError::InvalidUrl(e.to_string())),
            Ok(Err(e)) => {
                tracing::error!(
                    method = %request.method(),
                    path = %request.path(),
                    "Request failed without a response: {}",
                    e
                );
                Err(ApiError::Network(e))
            }
            Err(_) => {
                tracing::warn!(
                    method = %request.method(),
                    path = %request.path(),
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Request timed out, aborted"
                );
                Err(ApiError::Timeout)
            }
        }
    }

    async fn csrf_token(&self) -> Option<String> {
        let csrf = self.csrf.as_ref()?;
        let url = self.join(CSRF_TOKEN_PATH, &[]).ok()?;

        csrf.get_or_fetch(&self.http, url, self.timeout).await
    }

    fn join(&self, path: &str, query: &[(String, String)]) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');

        let mut url = Url::parse(&format!("{}/{}", base, path))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

fn log_failure(request: &ApiRequest, err: &ApiError) {
    tracing::warn!(
        method = %request.method(),
        path = %request.path(),
        category = %err.category(),
        "{}",
        err
    );
}
