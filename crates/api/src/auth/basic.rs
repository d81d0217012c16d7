//! HTTP Basic credentials for the single configured admin.
//!
//! Supplied values are never compared to the configured ones directly. Both
//! sides are HMAC-SHA256 tagged under a per-process random key and the tags
//! are checked with [`Mac::verify_slice`], which runs in constant time.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const REALM: &str = "admin";

/// The configured admin username and password, kept only as HMAC tags.
#[derive(Clone)]
pub struct AdminCredentials {
    key: [u8; 32],
    username_tag: Vec<u8>,
    password_tag: Vec<u8>,
}

impl AdminCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        let key: [u8; 32] = rand::random();
        Self {
            username_tag: tag(&key, username.as_bytes()),
            password_tag: tag(&key, password.as_bytes()),
            key,
        }
    }

    /// Check a supplied username/password pair.
    ///
    /// Both halves are always checked so timing does not reveal which one
    /// was wrong.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let username_ok = matches(&self.key, username.as_bytes(), &self.username_tag);
        let password_ok = matches(&self.key, password.as_bytes(), &self.password_tag);
        username_ok & password_ok
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminCredentials { .. }")
    }
}

fn mac_for(key: &[u8], value: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(value);
    mac
}

fn tag(key: &[u8], value: &[u8]) -> Vec<u8> {
    mac_for(key, value).finalize().into_bytes().to_vec()
}

fn matches(key: &[u8], value: &[u8], expected: &[u8]) -> bool {
    mac_for(key, value).verify_slice(expected).is_ok()
}

/// Parse an `Authorization: Basic <base64(user:pass)>` header value.
///
/// The scheme name is case-insensitive. Returns `None` for any other scheme,
/// invalid base64, non-UTF-8 payloads or a payload without a `:`.
pub fn parse_basic_header(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// Build a Basic header value; used by tests and tooling.
pub fn encode_basic_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
