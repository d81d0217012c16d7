//! Request handlers.
//!
//! Handlers validate through `agency_core`, delegate storage to the
//! repositories in `agency_db` and map failures via [`crate::error::AppError`].

pub mod admin;
pub mod contact;
pub mod pages;
