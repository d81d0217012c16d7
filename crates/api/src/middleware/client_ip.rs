//! Client address extractor.

use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

/// Header set by reverse proxies in front of the service.
const FORWARDED_FOR: &str = "x-forwarded-for";

/// Address of the client that sent the request, if it can be determined.
///
/// Uses the first well-formed entry of `X-Forwarded-For`, then the TCP peer
/// address from [`ConnectInfo`]. Never rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get(FORWARDED_FOR)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());

        let peer = || {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip())
        };

        Ok(ClientIp(forwarded.or_else(peer).map(|ip| ip.to_string())))
    }
}
