//! General server CLI arguments.

use clap::Args;
use lumen_store_redis::StoreEndpoint;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_COAP_PORT, DEFAULT_COAPS_PORT, DEFAULT_WEB_PORT};
use crate::convert::parse_port;

/// General server configuration.
///
/// Hosts left unset bind to any local address.
#[derive(Debug, Args, Clone, PartialEq, Serialize, Deserialize)]
#[command(next_help_heading = "General")]
#[serde(default)]
pub struct GeneralArgs {
    /// Local address for the plain CoAP endpoint.
    #[arg(long = "coap-host", alias = "lh", value_name = "ADDR")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coap_host: Option<String>,

    /// Local port for the plain CoAP endpoint.
    #[arg(long = "coap-port", alias = "lp", value_name = "PORT", value_parser = parse_port, default_value_t = DEFAULT_COAP_PORT)]
    pub coap_port: u16,

    /// Local address for the secure (DTLS) CoAP endpoint.
    #[arg(long = "coaps-host", alias = "slh", value_name = "ADDR")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coaps_host: Option<String>,

    /// Local port for the secure (DTLS) CoAP endpoint.
    #[arg(long = "coaps-port", alias = "slp", value_name = "PORT", value_parser = parse_port, default_value_t = DEFAULT_COAPS_PORT)]
    pub coaps_port: u16,

    /// Address for the management web interface.
    #[arg(long = "web-host", alias = "wh", value_name = "ADDR")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_host: Option<String>,

    /// Port for the management web interface.
    #[arg(long = "web-port", alias = "wp", value_name = "PORT", value_parser = parse_port, default_value_t = DEFAULT_WEB_PORT)]
    pub web_port: u16,

    /// Folder containing object model definitions (OMA DDF/XML format).
    ///
    /// The folder is handed to the model loader as-is; its contents are not
    /// inspected here.
    #[arg(short = 'm', long = "models-folder", value_name = "DIR")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models_folder: Option<PathBuf>,

    /// Store registrations and security info in redis instead of memory.
    ///
    /// The endpoint is given as `redis://[:password@]host:port[/db]`.
    /// Parsing the URL is pure; the connection pool is only established
    /// once the whole configuration has been consolidated.
    #[arg(short = 'r', long = "redis", value_name = "URL")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis: Option<StoreEndpoint>,

    /// Publish the server endpoints via DNS service discovery.
    #[arg(long = "mdns")]
    pub mdns: bool,
}

impl Default for GeneralArgs {
    fn default() -> Self {
        Self {
            coap_host: None,
            coap_port: DEFAULT_COAP_PORT,
            coaps_host: None,
            coaps_port: DEFAULT_COAPS_PORT,
            web_host: None,
            web_port: DEFAULT_WEB_PORT,
            models_folder: None,
            redis: None,
            mdns: false,
        }
    }
}
