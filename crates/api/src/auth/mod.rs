//! Admin authentication primitives.
//!
//! - [`basic`] -- HTTP Basic header parsing and constant-time credential checks.

pub mod basic;
