//! Client IP extraction from proxy headers.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// First address in `X-Forwarded-For`, if the header is present.
#[derive(Debug, Clone, Default)]
pub struct ClientIp(pub Option<String>);

/// `X-Forwarded-For` lists the originating client first.
pub fn first_forwarded_address(value: &str) -> Option<String> {
    value
        .split(',')
        .next()
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(str::to_string)
}

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientIp(
            parts
                .headers
                .get(FORWARDED_FOR_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(first_forwarded_address),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_forwarded_address() {
        assert_eq!(
            first_forwarded_address("203.0.113.7, 10.0.0.1"),
            Some("203.0.113.7".to_string())
        );
        assert_eq!(
            first_forwarded_address(" 198.51.100.2 "),
            Some("198.51.100.2".to_string())
        );
        assert_eq!(first_forwarded_address(""), None);
        assert_eq!(first_forwarded_address(" , 10.0.0.1"), None);
    }
}
