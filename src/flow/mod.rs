//! Headless form state for the console screens.
//!
//! Each flow owns the validation rules and defaults of one screen and decides when a
//! request is worth sending. Rendering is left to whatever front end drives them.

pub mod forgot_password;
pub mod login;
pub mod navigation;
pub mod product_form;
pub mod reset_password;
pub mod user_form;

pub use forgot_password::ForgotPasswordFlow;
pub use login::LoginFlow;
pub use navigation::{Navigator, Route};
pub use product_form::{load_product_types, ProductForm};
pub use reset_password::{ResetPasswordFlow, ResetPasswordOutcome};
pub use user_form::UserForm;
