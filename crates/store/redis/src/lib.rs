//! Redis-backed registration and security-info store for the Lumen server.
//!
//! Split in two deliberately:
//! - [`StoreEndpoint`] - pure parsing of the `redis://` endpoint descriptor,
//!   usable as a CLI value converter with no side effects.
//! - [`StorePool`] - the impure connection pool, established with a bounded
//!   timeout only after the whole configuration has been consolidated.

mod endpoint;
mod pool;

pub use endpoint::{InvalidEndpoint, StoreEndpoint};
pub use pool::{StoreError, StorePool};
