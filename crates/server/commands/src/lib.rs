//! CLI commands for the Lumen LwM2M server.
//!
//! This crate provides the command-line interface:
//! - [`Cli`] - Top-level CLI parser
//! - [`NodeConfig`] - Layered configuration loading
//! - [`run`] - Parse, consolidate, and hand off to the server runtime
//!
//! Configuration is loaded using Figment with the following priority
//! (highest wins):
//!
//! 1. CLI arguments
//! 2. Config file (TOML)
//! 3. Environment variables (`LUMEN_` prefix)
//! 4. Defaults

mod cli;
pub mod config;

pub use cli::{Cli, DtlsArgs, GeneralArgs, IdentityArgs, LogArgs};
pub use config::NodeConfig;

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use lumen_server_core::{logging, version, ServerConfig};
use tracing::info;

/// Run the Lumen server CLI with a user-provided runner.
///
/// Parses arguments, initializes logging, loads the layered configuration,
/// and runs consolidation. Only a configuration that passed every check is
/// handed to `runner`; any earlier failure aborts the process with a
/// descriptive error and a non-zero exit status.
pub fn run<F>(runner: F) -> eyre::Result<()>
where
    F: FnOnce(ServerConfig) -> eyre::Result<()>,
{
    // Setup error handling
    color_eyre::install()?;

    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    logging::init_logging(&cli.logs)?;

    info!("Starting Lumen LwM2M server {}", version::VERSION);

    // Load configuration (defaults < env < config file), then apply CLI
    // overrides on top
    let mut config = NodeConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    // Consolidate into the validated configuration
    let config = config
        .consolidate()
        .wrap_err("Invalid configuration")?;

    log_config(&config);

    runner(config)
}

/// Log the effective configuration at the hand-off point.
fn log_config(config: &ServerConfig) {
    info!("CoAP endpoint: {}", config.coap.describe());
    info!("CoAPS endpoint: {}", config.coaps.describe());
    info!("Web interface: {}", config.web.describe());
    info!("Identity: {}", config.identity.mode());

    match config.connection_id.generated_length() {
        Some(len) => info!("DTLS connection ID: generated, {len} bytes"),
        None if config.connection_id.is_enabled() => {
            info!("DTLS connection ID: accept only")
        }
        None => info!("DTLS connection ID: off"),
    }

    if config.support_deprecated_ciphers {
        info!("Deprecated cipher suites: enabled");
    }

    if let Some(models) = &config.models_folder {
        info!("Object models folder: {}", models.display());
    }

    match &config.store {
        Some(endpoint) => info!("Registration store: {endpoint}"),
        None => info!("Registration store: in-memory"),
    }

    if config.mdns {
        info!("DNS-SD publication: enabled");
    }
}
