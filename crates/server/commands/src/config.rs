//! Figment-based configuration loading.
//!
//! Configuration priority (highest wins):
//! 1. CLI arguments (applied after Figment load)
//! 2. Config file (TOML)
//! 3. Environment variables (`LUMEN_` prefix)
//! 4. Defaults

use eyre::{Result, WrapErr};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::{Cli, DtlsArgs, GeneralArgs, IdentityArgs};
use lumen_server_core::{ConsolidationError, ServerConfig};

/// Complete, still-unvalidated server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// General configuration.
    pub general: GeneralArgs,

    /// DTLS configuration.
    pub dtls: DtlsArgs,

    /// Identity configuration.
    pub identity: IdentityArgs,
}

impl NodeConfig {
    /// Load configuration from defaults, environment, and config file.
    /// CLI overrides should be applied separately after loading.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(NodeConfig::default()))
            .merge(Env::prefixed("LUMEN_").split("__"));

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.extract().wrap_err("Failed to load configuration")
    }

    /// Apply CLI overrides (CLI has highest priority).
    ///
    /// A section is applied wholesale, but only when it differs from the
    /// parser defaults; a section left untouched on the command line keeps
    /// whatever the file and environment layers loaded for it.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.general != GeneralArgs::default() {
            self.general = cli.general.clone();
        }
        if cli.dtls != DtlsArgs::default() {
            self.dtls = cli.dtls.clone();
        }
        if cli.identity != IdentityArgs::default() {
            self.identity = cli.identity.clone();
        }
    }

    /// Run the consolidation step, producing the validated configuration.
    pub fn consolidate(&self) -> Result<ServerConfig, ConsolidationError> {
        ServerConfig::consolidate(&self.general, &self.dtls, &self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use lumen_server_core::ConnectionIdPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = NodeConfig::default();
        assert_eq!(config.general.coap_port, 5683);
        assert_eq!(
            config.dtls.connection_id,
            ConnectionIdPolicy::Generate(6)
        );
        assert!(config.identity.rpk_public_key.is_none());
    }

    #[test]
    fn load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("lumen.toml");

        fs::write(
            &config_path,
            r#"
[general]
coap_port = 15683
redis = "redis://localhost:6379/1"

[dtls]
connection_id = -1
"#,
        )
        .unwrap();

        let config = NodeConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.general.coap_port, 15683);
        assert_eq!(config.general.redis.unwrap().database(), 1);
        assert_eq!(config.dtls.connection_id, ConnectionIdPolicy::Disabled);
        // Untouched fields keep their defaults.
        assert_eq!(config.general.coaps_port, 5684);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = NodeConfig::load(Some(&config_path)).unwrap();
        assert_eq!(config.general.coap_port, 5683);
        assert_eq!(config.general.web_port, 8080);
    }

    #[test]
    fn file_values_survive_a_bare_command_line() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("lumen.toml");

        fs::write(
            &config_path,
            r#"
[general]
coap_port = 15683
"#,
        )
        .unwrap();

        // Same sequence run() uses: load the layers, then apply the CLI.
        let cli = Cli::try_parse_from(["lumen"]).unwrap();
        let mut config = NodeConfig::load(Some(&config_path)).unwrap();
        config.apply_cli(&cli);

        assert_eq!(config.general.coap_port, 15683);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("lumen.toml");

        fs::write(
            &config_path,
            r#"
[general]
coap_port = 15683

[dtls]
connection_id = -1
"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from(["lumen", "--coap-port", "9999"]).unwrap();
        let mut config = NodeConfig::load(Some(&config_path)).unwrap();
        config.apply_cli(&cli);

        assert_eq!(config.general.coap_port, 9999);
        // The DTLS section was untouched on the command line, so the file
        // value stays in place.
        assert_eq!(config.dtls.connection_id, ConnectionIdPolicy::Disabled);
    }

    #[test]
    fn consolidation_runs_on_loaded_config() {
        let config = NodeConfig::default();
        let validated = config.consolidate().unwrap();
        assert_eq!(validated.web.port, 8080);
    }
}
