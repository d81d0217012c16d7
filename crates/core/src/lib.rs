//! Domain rules for the event agency contact service.
//!
//! Holds everything that does not touch the database or HTTP: the contact
//! validator, pagination arithmetic, shared id/timestamp types and the
//! domain error enum.

pub mod contact;
pub mod error;
pub mod pagination;
pub mod types;
