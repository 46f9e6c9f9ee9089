//! Data transfer objects exchanged with the backend.
//!
//! These are pass-through shapes: the console does not compute anything from the business
//! fields (pricing, NAICS codes, organisation hierarchy), it only renders and forwards them.
//! Records read from the backend wrap the raw JSON object in a [`api::Record`] and expose
//! typed accessors, so a record serializes back exactly as it was received.

pub mod account;
pub mod api;
pub mod page;
pub mod password;
pub mod product;
pub mod user;
