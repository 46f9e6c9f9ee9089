//! Test context returned by `TestBuilder`.

use mockito::{Mock, Server, ServerGuard};

/// Mock backend plus the mocks registered on it.
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_json_endpoint("GET", "/api/canvas/products", 200, json!([]), 1)
///     .build()
///     .await?;
///
/// let config = Config::for_base_url(&test.url())?;
/// // ... exercise the client ...
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the backend
    pub server: ServerGuard,
    /// Mock endpoints registered through the builder, checked by `assert_mocks`
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock backend, e.g. `http://127.0.0.1:1234`.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Keep `mock` so `assert_mocks` verifies it.
    pub fn push_mock(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

/// Build a `TestContext` without any mock endpoints.
#[macro_export]
macro_rules! test_context {
    () => {{
        $crate::TestBuilder::new().build().await
    }};
}
