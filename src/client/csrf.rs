//! Anti-forgery token fetched once and reused for mutating requests.

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use tokio::sync::Mutex;

pub const CSRF_HEADER: &str = "x-xsrf-token";
pub const CSRF_TOKEN_PATH: &str = "/api/csrf-token";

#[derive(Deserialize)]
struct CsrfTokenDto {
    token: Option<String>,
}

/// Lazily fetched anti-forgery token.
///
/// The token endpoint also sets the matching cookie, so the token is only valid together
/// with the cookie store of the client that fetched it. A failed fetch is not cached; the
/// next mutating request tries again.
#[derive(Debug, Default)]
pub struct CsrfTokenCache {
    token: Mutex<Option<String>>,
}

impl CsrfTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached token, fetching it from `url` when none is held yet.
    ///
    /// # Returns
    /// - `Some(String)` - Token to send in the `X-XSRF-TOKEN` header
    /// - `None` - Endpoint unavailable or returned no token; the request goes out without it
    pub async fn get_or_fetch(
        &self,
        http: &reqwest::Client,
        url: Url,
        timeout: Duration,
    ) -> Option<String> {
        let mut token = self.token.lock().await;
        if let Some(token) = token.as_ref() {
            return Some(token.clone());
        }

        let fetched = match tokio::time::timeout(timeout, fetch_token(http, url)).await {
            Ok(Ok(fetched)) => fetched,
            Ok(Err(e)) => {
                tracing::warn!("Failed to get CSRF token: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!("Failed to get CSRF token: request timed out");
                None
            }
        };

        token.clone_from(&fetched);
        fetched
    }

    /// Forget the cached token, e.g. after logout.
    pub async fn clear(&self) {
        *self.token.lock().await = None;
    }
}

async fn fetch_token(http: &reqwest::Client, url: Url) -> Result<Option<String>, reqwest::Error> {
    let response = http.get(url).send().await?;

    if !response.status().is_success() {
        tracing::debug!(status = %response.status(), "CSRF token endpoint did not return a token");
        return Ok(None);
    }

    let dto = response.json::<CsrfTokenDto>().await?;

    Ok(dto.token.filter(|token| !token.is_empty()))
}
