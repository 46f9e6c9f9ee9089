//! Client library for the Appetite administrative console.
//!
//! Talks to the Appetite backend on behalf of an operator: users, carrier products,
//! account management and password recovery. Every request goes through
//! [`client::ApiClient`], which applies the session token, the request timeout and the
//! shared error classification.

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod model;
pub mod service;
pub mod session;
