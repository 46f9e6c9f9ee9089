//! Declarative test builder.
//!
//! Endpoints are queued on the builder and created on the mock server during `build()`.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// How a mock endpoint constrains the `Authorization` header.
#[derive(Debug, Clone)]
enum AuthMatch {
    Any,
    Bearer(String),
    Missing,
}

/// A single mock backend endpoint.
///
/// Defaults to status 200, an empty body, any query string, any authorization and exactly
/// one expected request.
#[derive(Debug, Clone)]
pub struct Endpoint {
    method: String,
    path: String,
    status: usize,
    body: String,
    content_type: &'static str,
    auth: AuthMatch,
    query: Vec<(String, String)>,
    request_body: Option<Value>,
    expected_requests: usize,
}

impl Endpoint {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            status: 200,
            body: String::new(),
            content_type: "application/json",
            auth: AuthMatch::Any,
            query: Vec::new(),
            request_body: None,
            expected_requests: 1,
        }
    }

    pub fn status(mut self, status: usize) -> Self {
        self.status = status;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = body.to_string();
        self.content_type = "application/json";
        self
    }

    pub fn text(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self.content_type = "text/plain";
        self
    }

    /// Only match requests carrying `Authorization: Bearer <token>`.
    pub fn bearer(mut self, token: &str) -> Self {
        self.auth = AuthMatch::Bearer(token.to_string());
        self
    }

    /// Only match requests without an `Authorization` header.
    pub fn anonymous(mut self) -> Self {
        self.auth = AuthMatch::Missing;
        self
    }

    /// Require a URL-encoded query parameter; may be chained.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Only match requests whose JSON body equals `body`.
    pub fn request_json(mut self, body: Value) -> Self {
        self.request_body = Some(body);
        self
    }

    pub fn expect(mut self, expected_requests: usize) -> Self {
        self.expected_requests = expected_requests;
        self
    }

    async fn create(self, server: &mut ServerGuard) -> Mock {
        let query = if self.query.is_empty() {
            Matcher::Any
        } else {
            Matcher::AllOf(
                self.query
                    .into_iter()
                    .map(|(key, value)| Matcher::UrlEncoded(key, value))
                    .collect(),
            )
        };

        let mut mock = server
            .mock(self.method.as_str(), self.path.as_str())
            .match_query(query)
            .with_status(self.status)
            .with_header("content-type", self.content_type)
            .with_body(self.body)
            .expect(self.expected_requests);

        mock = match self.auth {
            AuthMatch::Any => mock,
            AuthMatch::Bearer(token) => mock.match_header(
                "authorization",
                Matcher::Exact(format!("Bearer {}", token)),
            ),
            AuthMatch::Missing => mock.match_header("authorization", Matcher::Missing),
        };

        if let Some(body) = self.request_body {
            mock = mock.match_body(Matcher::Json(body));
        }

        mock.create_async().await
    }
}

/// Builder for declarative test initialization.
pub struct TestBuilder {
    endpoints: Vec<Endpoint>,
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            endpoints: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Add a fully configured endpoint.
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoints.push(endpoint);
        self
    }

    /// Add an endpoint answering `status` with a JSON `body`, called `expected_requests` times.
    pub fn with_json_endpoint(
        self,
        method: &str,
        path: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(
            Endpoint::new(method, path)
                .status(status)
                .json(body)
                .expect(expected_requests),
        )
    }

    /// Add an endpoint answering `status` with a JSON `body` only for `Bearer <token>`.
    pub fn with_authenticated_json_endpoint(
        self,
        method: &str,
        path: &str,
        token: &str,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(
            Endpoint::new(method, path)
                .status(status)
                .json(body)
                .bearer(token)
                .expect(expected_requests),
        )
    }

    /// Add an endpoint answering `status` with a plain-text `body`.
    pub fn with_text_endpoint(
        self,
        method: &str,
        path: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Self {
        self.with_endpoint(
            Endpoint::new(method, path)
                .status(status)
                .text(body)
                .expect(expected_requests),
        )
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and create every queued endpoint.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await;

        for endpoint in self.endpoints {
            let mock = endpoint.create(&mut context.server).await;
            context.mocks.push(mock);
        }

        for builder in self.mock_builders {
            let mock = builder(&mut context.server);
            context.mocks.push(mock);
        }

        Ok(context)
    }
}
