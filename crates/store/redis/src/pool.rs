//! Pooled redis connection handle.

use std::time::Duration;

use tracing::debug;

use crate::endpoint::StoreEndpoint;

/// Error produced when the store cannot be reached.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store endpoint {endpoint} is unavailable")]
    Unavailable {
        endpoint: StoreEndpoint,
        #[source]
        source: redis::RedisError,
    },
}

/// Lazily pooled connection handle to the redis store.
///
/// Created once after configuration consolidation succeeds; owned for the
/// rest of the process lifetime. Consumers borrow connections through
/// [`get`](Self::get) and never close the pool themselves.
#[derive(Debug, Clone)]
pub struct StorePool {
    client: redis::Client,
    endpoint: StoreEndpoint,
}

impl StorePool {
    /// Open the pool and verify the endpoint is reachable.
    ///
    /// The probe acquires a connection with a bounded timeout and issues a
    /// PING, so an unreachable store fails startup fast instead of hanging.
    pub fn connect(endpoint: &StoreEndpoint, timeout: Duration) -> Result<Self, StoreError> {
        let client =
            redis::Client::open(endpoint.connection_url()).map_err(|source| {
                StoreError::Unavailable {
                    endpoint: endpoint.clone(),
                    source,
                }
            })?;

        debug!("Probing store at {endpoint}");
        let mut conn = client
            .get_connection_with_timeout(timeout)
            .map_err(|source| StoreError::Unavailable {
                endpoint: endpoint.clone(),
                source,
            })?;
        redis::cmd("PING")
            .query::<String>(&mut conn)
            .map_err(|source| StoreError::Unavailable {
                endpoint: endpoint.clone(),
                source,
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.clone(),
        })
    }

    /// Borrow a connection from the pool.
    pub fn get(&self) -> Result<redis::Connection, StoreError> {
        self.client
            .get_connection()
            .map_err(|source| StoreError::Unavailable {
                endpoint: self.endpoint.clone(),
                source,
            })
    }

    /// The endpoint this pool is bound to.
    pub fn endpoint(&self) -> &StoreEndpoint {
        &self.endpoint
    }
}
