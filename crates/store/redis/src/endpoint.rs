//! Store endpoint descriptor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

/// Default redis port.
const DEFAULT_REDIS_PORT: u16 = 6379;

/// Error produced when an endpoint token cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum InvalidEndpoint {
    #[error("'{token}' is not a valid URL: {source}")]
    NotAUrl {
        token: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme '{0}'; expected redis://")]
    UnsupportedScheme(String),
    #[error("endpoint '{0}' has no host")]
    MissingHost(String),
    #[error("'{0}' is not a valid database index")]
    InvalidDatabase(String),
}

/// Parsed description of a redis endpoint:
/// `redis://[:password@]host:port[/db]`.
///
/// Parsing is pure; no connection is made until
/// [`StorePool::connect`](crate::StorePool::connect) runs after the whole
/// configuration has been consolidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEndpoint {
    raw: String,
    host: String,
    port: u16,
    has_password: bool,
    database: i64,
}

impl StoreEndpoint {
    /// Endpoint host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Endpoint port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Logical database index (0 when the URL has no path segment).
    pub fn database(&self) -> i64 {
        self.database
    }

    /// Whether the URL embeds a password.
    pub fn has_credentials(&self) -> bool {
        self.has_password
    }

    /// The full connection URL, credentials included.
    pub(crate) fn connection_url(&self) -> &str {
        &self.raw
    }
}

impl FromStr for StoreEndpoint {
    type Err = InvalidEndpoint;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(token).map_err(|source| InvalidEndpoint::NotAUrl {
            token: token.to_string(),
            source,
        })?;

        // TLS (rediss://) is not built in; only plain endpoints are valid,
        // and the mismatch surfaces here instead of at connect time.
        match url.scheme() {
            "redis" => {}
            other => return Err(InvalidEndpoint::UnsupportedScheme(other.to_string())),
        }

        let host = url
            .host_str()
            .ok_or_else(|| InvalidEndpoint::MissingHost(token.to_string()))?
            .to_string();
        let port = url.port().unwrap_or(DEFAULT_REDIS_PORT);

        let database = match url.path().trim_start_matches('/') {
            "" => 0,
            segment => segment
                .parse()
                .map_err(|_| InvalidEndpoint::InvalidDatabase(segment.to_string()))?,
        };

        Ok(Self {
            raw: token.to_string(),
            host,
            port,
            has_password: url.password().is_some(),
            database,
        })
    }
}

/// Renders without credentials, safe for logs.
impl fmt::Display for StoreEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "redis://{}:{}/{}", self.host, self.port, self.database)
    }
}

impl Serialize for StoreEndpoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for StoreEndpoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
