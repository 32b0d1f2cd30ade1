//! CLI argument assembly and top-level parser.

use clap::Parser;
use std::path::PathBuf;

// Re-export args from the core crate
pub use lumen_server_core::args::{DtlsArgs, GeneralArgs, IdentityArgs, LogArgs};

/// Lumen - LwM2M server
///
/// A LwM2M server exposing plain and secure CoAP endpoints and a management
/// web interface. It can be launched without any option.
#[derive(Debug, Parser)]
#[command(name = "lumen", author, version = lumen_server_core::version::VERSION, about, long_about = None)]
pub struct Cli {
    /// Logging configuration.
    #[command(flatten)]
    pub logs: LogArgs,

    /// Path to a TOML configuration file.
    ///
    /// Values from the file sit above environment variables (`LUMEN_`
    /// prefix) and below command-line flags.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// General configuration.
    #[command(flatten)]
    pub general: GeneralArgs,

    /// DTLS configuration.
    #[command(flatten)]
    pub dtls: DtlsArgs,

    /// Identity configuration.
    #[command(flatten)]
    pub identity: IdentityArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_server_core::{ConnectionIdPolicy, ServerConfig, ServerIdentity};

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn no_flags_yield_documented_defaults() {
        let cli = parse(&["lumen"]);
        let config =
            ServerConfig::consolidate(&cli.general, &cli.dtls, &cli.identity).unwrap();

        assert_eq!(config.coap.port, 5683);
        assert_eq!(config.coaps.port, 5684);
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.connection_id, ConnectionIdPolicy::Generate(6));
        assert_eq!(config.identity, ServerIdentity::SelfSigned);
        assert!(config.store.is_none());
    }

    #[test]
    fn overrides_leave_other_sections_at_defaults() {
        let cli = parse(&["lumen", "--coap-port", "9999", "--connection-id", "off"]);
        let config =
            ServerConfig::consolidate(&cli.general, &cli.dtls, &cli.identity).unwrap();

        assert_eq!(config.coap.port, 9999);
        assert_eq!(config.connection_id, ConnectionIdPolicy::Disabled);
        // Secure transport fields untouched.
        assert_eq!(config.coaps.port, 5684);
        assert!(config.coaps.host.is_none());
    }

    #[test]
    fn short_form_aliases_are_accepted() {
        let cli = parse(&["lumen", "--lp", "1234", "--cid", "0", "--oc"]);
        assert_eq!(cli.general.coap_port, 1234);
        assert_eq!(cli.dtls.connection_id, ConnectionIdPolicy::AcceptOnly);
        assert!(cli.dtls.support_deprecated_ciphers);
    }

    #[test]
    fn invalid_port_token_fails_parsing() {
        assert!(Cli::try_parse_from(["lumen", "--coap-port", "coap"]).is_err());
        assert!(Cli::try_parse_from(["lumen", "--web-port", "70000"]).is_err());
    }

    #[test]
    fn invalid_cid_token_fails_parsing() {
        assert!(Cli::try_parse_from(["lumen", "--connection-id", "maybe"]).is_err());
    }

    #[test]
    fn redis_endpoint_is_parsed_not_connected() {
        let cli = parse(&["lumen", "-r", "redis://localhost:6379/2"]);
        let endpoint = cli.general.redis.unwrap();
        assert_eq!(endpoint.host(), "localhost");
        assert_eq!(endpoint.database(), 2);
    }

    #[test]
    fn malformed_redis_endpoint_fails_parsing() {
        assert!(Cli::try_parse_from(["lumen", "--redis", "http://nope"]).is_err());
    }

    #[test]
    fn conflicting_identity_modes_parse_but_fail_consolidation() {
        // Exclusivity is a consolidation-time check, not a parse-time one.
        let cli = parse(&[
            "lumen",
            "--rpk-public-key",
            "pub.pem",
            "--x509-certificate",
            "cert.pem",
        ]);
        assert!(ServerConfig::consolidate(&cli.general, &cli.dtls, &cli.identity).is_err());
    }
}
