//! Request extractors shared by handlers.
//!
//! - [`auth::RequireAdmin`] -- Requires valid admin Basic credentials.
//! - [`client_ip::ClientIp`] -- Best-effort client address for submissions.

pub mod auth;
pub mod client_ip;
