//! Constants used throughout the Lumen server.
//!
//! All magic numbers and default values should be defined here or at the top
//! of specific modules if they are tightly coupled to that module's logic.
//! There is no implicit process-wide default lookup: every section default
//! is an explicit constant.

use std::time::Duration;

// =============================================================================
// Network Ports
// =============================================================================

/// Default port for plain CoAP (UDP).
pub const DEFAULT_COAP_PORT: u16 = 5683;

/// Default port for CoAP over DTLS (UDP).
pub const DEFAULT_COAPS_PORT: u16 = 5684;

/// Default port for the management web interface (TCP).
pub const DEFAULT_WEB_PORT: u16 = 8080;

// =============================================================================
// DTLS
// =============================================================================

/// Default length in bytes of generated DTLS connection IDs.
pub const DEFAULT_CID_LENGTH: u16 = 6;

// =============================================================================
// External Store
// =============================================================================

/// Bound on how long the store connection probe may block at startup.
pub const STORE_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
