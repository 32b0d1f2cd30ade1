//! DTLS CLI arguments.

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CID_LENGTH;
use crate::convert::parse_connection_id;
use crate::transport::ConnectionIdPolicy;

/// DTLS configuration for the secure CoAP endpoint.
#[derive(Debug, Args, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "DTLS")]
#[serde(default)]
pub struct DtlsArgs {
    /// Control usage of DTLS connection IDs.
    ///
    /// 'on' activates support with the default generated length, 'off'
    /// deactivates it. A positive value sets the generated length in bytes;
    /// 0 accepts peer connection IDs without generating one.
    #[arg(
        long = "connection-id",
        alias = "cid",
        value_name = "on|off|LENGTH",
        value_parser = parse_connection_id,
        default_value_t = ConnectionIdPolicy::Generate(DEFAULT_CID_LENGTH)
    )]
    pub connection_id: ConnectionIdPolicy,

    /// Activate support of old/deprecated cipher suites.
    #[arg(long = "support-deprecated-ciphers", alias = "oc")]
    pub support_deprecated_ciphers: bool,
}

impl Default for DtlsArgs {
    fn default() -> Self {
        Self {
            connection_id: ConnectionIdPolicy::Generate(DEFAULT_CID_LENGTH),
            support_deprecated_ciphers: false,
        }
    }
}
