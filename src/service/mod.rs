//! Service layer.
//!
//! One service per backend resource. Each method builds an [`ApiRequest`](crate::client::ApiRequest)
//! with the resource noun and action phrase used for its failure messages, sends it through
//! the shared [`ApiClient`](crate::client::ApiClient), and lets the classified error
//! propagate unchanged. No service retries or recovers locally.

pub mod account;
pub mod auth;
pub mod password;
pub mod product;
pub mod user;

pub use account::{AccountAction, AccountService};
pub use auth::AuthService;
pub use password::PasswordService;
pub use product::ProductService;
pub use user::UserService;
