//! Endpoint parsing
//!
//! An endpoint is given as a single `host/path` string, e.g. `localhost:8080/ws`.

use crate::common::{Error, Result};

/// URL scheme for the unencrypted WebSocket protocol
const SCHEME: &str = "ws";

/// Host used by `--local`
const LOCAL_HOST: &str = "localhost:8080";

/// Path used by `--local`
const LOCAL_PATH: &str = "/ws";

/// Remote endpoint, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    path: String,
}

impl Endpoint {
    /// Parse a `host/path` string
    ///
    /// The host is everything before the first `/`; the path is the rest,
    /// including that separator.
    pub fn parse(s: &str) -> Result<Self> {
        let index = s
            .find('/')
            .ok_or_else(|| Error::InvalidEndpoint(s.to_string()))?;
        if index == 0 {
            return Err(Error::InvalidEndpoint(s.to_string()));
        }

        let (host, path) = s.split_at(index);
        Ok(Self {
            host: host.to_string(),
            path: path.to_string(),
        })
    }

    /// The built-in local development endpoint
    pub fn local() -> Self {
        Self {
            host: LOCAL_HOST.to_string(),
            path: LOCAL_PATH.to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full URL to dial
    pub fn url(&self) -> String {
        format!("{}://{}{}", SCHEME, self.host, self.path)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.host, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_and_path() {
        let endpoint = Endpoint::parse("example.com:80/chat").unwrap();
        assert_eq!(endpoint.host(), "example.com:80");
        assert_eq!(endpoint.path(), "/chat");
        assert_eq!(endpoint.url(), "ws://example.com:80/chat");
    }

    #[test]
    fn test_parse_splits_at_first_separator() {
        let endpoint = Endpoint::parse("localhost:3000/api/v1/socket").unwrap();
        assert_eq!(endpoint.host(), "localhost:3000");
        assert_eq!(endpoint.path(), "/api/v1/socket");
    }

    #[test]
    fn test_parse_root_path() {
        let endpoint = Endpoint::parse("localhost/").unwrap();
        assert_eq!(endpoint.host(), "localhost");
        assert_eq!(endpoint.path(), "/");
    }

    #[test]
    fn test_parse_without_separator() {
        let err = Endpoint::parse("localhost:8080").unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(s) if s == "localhost:8080"));
    }

    #[test]
    fn test_parse_empty_host() {
        assert!(matches!(
            Endpoint::parse("/ws"),
            Err(Error::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_local_endpoint() {
        let endpoint = Endpoint::local();
        assert_eq!(endpoint.url(), "ws://localhost:8080/ws");
        assert_eq!(endpoint.to_string(), "localhost:8080/ws");
    }
}
