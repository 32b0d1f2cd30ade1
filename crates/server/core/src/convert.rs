//! Value converters for command-line tokens.
//!
//! Each converter is a pure function from a raw token to a validated domain
//! value. Converters hold no state; invoking one twice with the same token
//! yields the same result. They are wired into clap via `value_parser`.

use crate::transport::ConnectionIdPolicy;

/// Error produced when a port token cannot be converted.
#[derive(Debug, thiserror::Error)]
pub enum InvalidPort {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("port {0} is outside the valid range 0-65535")]
    OutOfRange(i64),
}

/// Convert a raw token into a transport port.
///
/// Accepts any integer in `0..=65535`; anything else fails.
pub fn parse_port(token: &str) -> Result<u16, InvalidPort> {
    let value: i64 = token
        .trim()
        .parse()
        .map_err(|_| InvalidPort::NotANumber(token.to_string()))?;
    u16::try_from(value).map_err(|_| InvalidPort::OutOfRange(value))
}

/// Error produced when a connection-ID token cannot be converted.
#[derive(Debug, thiserror::Error)]
pub enum InvalidConnectionId {
    #[error("'{0}' is neither 'on', 'off', nor an integer length")]
    NotAPolicy(String),
    #[error("connection-ID length {0} is too large (max {max})", max = u16::MAX)]
    LengthTooLarge(i64),
}

/// Convert a raw token into a [`ConnectionIdPolicy`].
///
/// - `"off"` deactivates connection-ID support.
/// - `"on"` activates it with the default generated length
///   ([`DEFAULT_CID_LENGTH`](crate::constants::DEFAULT_CID_LENGTH)).
/// - An integer token selects the policy by sign: negative deactivates,
///   zero accepts peer IDs without generating one, positive is the length
///   in bytes of self-generated IDs.
pub fn parse_connection_id(token: &str) -> Result<ConnectionIdPolicy, InvalidConnectionId> {
    match token.trim() {
        "off" => Ok(ConnectionIdPolicy::Disabled),
        "on" => Ok(ConnectionIdPolicy::Generate(
            crate::constants::DEFAULT_CID_LENGTH,
        )),
        other => {
            let value: i64 = other
                .parse()
                .map_err(|_| InvalidConnectionId::NotAPolicy(token.to_string()))?;
            if value < 0 {
                Ok(ConnectionIdPolicy::Disabled)
            } else if value == 0 {
                Ok(ConnectionIdPolicy::AcceptOnly)
            } else {
                let len = u16::try_from(value)
                    .map_err(|_| InvalidConnectionId::LengthTooLarge(value))?;
                Ok(ConnectionIdPolicy::Generate(len))
            }
        }
    }
}
