//! JSON fixtures shaped like the backend's responses.
//!
//! - `user` - user records, operator profiles and login responses
//! - `product` - product records and product types
//! - `account` - locked/inactive listings and activity log entries

pub mod account;
pub mod product;
pub mod user;
