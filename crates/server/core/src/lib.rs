//! Configuration surface for the Lumen LwM2M server.
//!
//! This crate defines the typed, sectioned startup configuration and its
//! conversion/validation pipeline:
//!
//! - [`args`] - CLI argument sections (general, DTLS, identity, logging)
//! - [`convert`] - pure converters from raw tokens to domain values
//! - [`config`] - cross-field consolidation into a validated [`ServerConfig`]
//! - [`identity`] - resolution of the mutually-exclusive credential modes
//!
//! The flow is: raw tokens -> converters -> sections -> consolidation ->
//! an immutable [`ServerConfig`] handed to the server runtime. Any failure
//! along the way is fatal at startup.

pub mod args;
pub mod config;
pub mod constants;
pub mod convert;
pub mod identity;
pub mod logging;
pub mod transport;
pub mod version;

pub use config::{ConsolidationError, ServerConfig, SocketBinding};
pub use identity::{IdentityError, ServerIdentity};
pub use transport::ConnectionIdPolicy;
