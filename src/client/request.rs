//! Request envelope shared by every service call.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{error::api::ApiError, model::page::PageQuery};

const DEFAULT_RESOURCE: &str = "Resource";
const DEFAULT_ACTION: &str = "complete request";

/// Method, path, query, optional JSON body and the wording used for failures.
///
/// Requests are authenticated by default; the bearer token is attached only when the
/// session passed to the client actually holds one.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    authenticated: bool,
    resource: String,
    action: String,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authenticated: true,
            resource: DEFAULT_RESOURCE.to_string(),
            action: DEFAULT_ACTION.to_string(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn page(mut self, page: PageQuery) -> Self {
        self.query.extend(page.to_query());
        self
    }

    /// Attach a JSON body.
    ///
    /// # Returns
    /// - `Ok(ApiRequest)` - Request carrying the serialized body
    /// - `Err(ApiError::Encode)` - `body` could not be serialized
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Send without credentials even when a session token is available.
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Noun used for 404 messages, e.g. `"User"` yields "User not found."
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = resource.into();
        self
    }

    /// Verb phrase used for the generic failure default, e.g. `"fetch users"`.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn resource_name(&self) -> &str {
        &self.resource
    }

    pub fn is_mutating(&self) -> bool {
        !matches!(self.method, Method::GET | Method::HEAD | Method::OPTIONS)
    }

    pub fn default_failure_message(&self) -> String {
        format!("Failed to {}", self.action)
    }
}
