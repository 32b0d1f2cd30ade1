//! Version information for the Lumen server.

/// The version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The user agent string reported to registered clients.
pub const USER_AGENT: &str = concat!("lumen/", env!("CARGO_PKG_VERSION"));
