//! Test utilities for the Appetite console client.
//!
//! Provides a mockito-backed mock backend configured declaratively through [`TestBuilder`],
//! JSON fixtures shaped like the backend's responses, and endpoints that never answer or
//! refuse connections for timeout and network-failure scenarios.
//!
//! This crate does not depend on `appetite-console`; tests build their client from
//! [`TestContext::url`].

pub mod builder;
pub mod constant;
pub mod context;
pub mod endpoint;
pub mod error;
pub mod fixtures;

pub use builder::{Endpoint, TestBuilder};
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_RESET_TOKEN, TEST_TOKEN},
        endpoint::{refused_url, unresponsive_url},
        fixtures::{account, product, user},
        test_context, Endpoint, TestBuilder, TestContext, TestError,
    };
}
