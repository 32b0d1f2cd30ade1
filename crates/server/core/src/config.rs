//! Consolidated server configuration.
//!
//! The arg sections are the unvalidated state of the configuration; the only
//! way to obtain a [`ServerConfig`] is [`ServerConfig::consolidate`], which
//! runs every cross-field check. A configuration that fails consolidation is
//! never handed to a consumer — startup aborts with the error instead.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use lumen_store_redis::StoreEndpoint;

use crate::args::{DtlsArgs, GeneralArgs, IdentityArgs};
use crate::identity::{IdentityError, ServerIdentity};
use crate::transport::ConnectionIdPolicy;

/// Error produced when individually valid options combine into an illegal
/// configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConsolidationError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(
        "--coap-port and --coaps-port both bind {binding}; the plain and secure endpoints need distinct bindings"
    )]
    BindingClash { binding: String },
}

/// A local socket binding. An unset host means any local address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketBinding {
    pub host: Option<String>,
    pub port: u16,
}

impl SocketBinding {
    fn new(host: Option<&str>, port: u16) -> Self {
        Self {
            host: host.map(str::to_owned),
            port,
        }
    }

    /// The binding as a socket address, defaulting to the wildcard address.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .as_deref()
            .and_then(|host| host.parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.port)
    }

    /// Human-readable form for logs and error messages.
    pub fn describe(&self) -> String {
        format!("{}:{}", self.host.as_deref().unwrap_or("*"), self.port)
    }
}

/// Validated, immutable server configuration.
///
/// This is the terminal state of the configuration pipeline and the only
/// value the server-startup collaborator ever sees.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Plain CoAP endpoint binding.
    pub coap: SocketBinding,
    /// Secure (DTLS) CoAP endpoint binding.
    pub coaps: SocketBinding,
    /// Management web interface binding.
    pub web: SocketBinding,
    /// Folder containing object model definitions, if any.
    pub models_folder: Option<PathBuf>,
    /// External registration/security store, if configured.
    pub store: Option<StoreEndpoint>,
    /// Whether to publish endpoints via DNS service discovery.
    pub mdns: bool,
    /// DTLS connection-ID policy.
    pub connection_id: ConnectionIdPolicy,
    /// Whether old/deprecated cipher suites are offered.
    pub support_deprecated_ciphers: bool,
    /// Resolved credential selection for the secure endpoint.
    pub identity: ServerIdentity,
}

impl ServerConfig {
    /// Consolidate the populated sections into a validated configuration.
    ///
    /// Cross-field checks:
    /// - the identity build step (exclusive mode selection, complete and
    ///   loadable key material),
    /// - the plain and secure endpoints may not share a binding.
    pub fn consolidate(
        general: &GeneralArgs,
        dtls: &DtlsArgs,
        identity: &IdentityArgs,
    ) -> Result<Self, ConsolidationError> {
        let identity = ServerIdentity::build(identity)?;

        let coap = SocketBinding::new(general.coap_host.as_deref(), general.coap_port);
        let coaps = SocketBinding::new(general.coaps_host.as_deref(), general.coaps_port);
        if coap.port == coaps.port && coap.host == coaps.host {
            return Err(ConsolidationError::BindingClash {
                binding: coap.describe(),
            });
        }

        Ok(Self {
            coap,
            coaps,
            web: SocketBinding::new(general.web_host.as_deref(), general.web_port),
            models_folder: general.models_folder.clone(),
            store: general.redis.clone(),
            mdns: general.mdns,
            connection_id: dtls.connection_id,
            support_deprecated_ciphers: dtls.support_deprecated_ciphers,
            identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_consolidate() {
        let config = ServerConfig::consolidate(
            &GeneralArgs::default(),
            &DtlsArgs::default(),
            &IdentityArgs::default(),
        )
        .unwrap();

        assert_eq!(config.coap.port, 5683);
        assert_eq!(config.coaps.port, 5684);
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.connection_id, ConnectionIdPolicy::Generate(6));
        assert_eq!(config.identity, ServerIdentity::SelfSigned);
        assert!(config.store.is_none());
        assert!(!config.mdns);
        assert!(!config.support_deprecated_ciphers);
    }

    #[test]
    fn shared_binding_is_rejected() {
        let general = GeneralArgs {
            coaps_port: 5683,
            ..Default::default()
        };

        assert!(matches!(
            ServerConfig::consolidate(&general, &DtlsArgs::default(), &IdentityArgs::default()),
            Err(ConsolidationError::BindingClash { .. })
        ));
    }

    #[test]
    fn same_port_on_distinct_hosts_is_accepted() {
        let general = GeneralArgs {
            coap_host: Some("127.0.0.1".to_string()),
            coaps_host: Some("127.0.0.2".to_string()),
            coaps_port: 5683,
            ..Default::default()
        };

        assert!(
            ServerConfig::consolidate(&general, &DtlsArgs::default(), &IdentityArgs::default())
                .is_ok()
        );
    }

    #[test]
    fn identity_conflicts_surface_as_consolidation_errors() {
        let identity = IdentityArgs {
            rpk_public_key: Some("pub.pem".into()),
            x509_certificate: Some("cert.pem".into()),
            ..Default::default()
        };

        assert!(matches!(
            ServerConfig::consolidate(&GeneralArgs::default(), &DtlsArgs::default(), &identity),
            Err(ConsolidationError::Identity(
                IdentityError::MultipleModes { .. }
            ))
        ));
    }

    #[test]
    fn wildcard_binding_socket_addr() {
        let binding = SocketBinding {
            host: None,
            port: 5683,
        };
        assert_eq!(binding.socket_addr(), "0.0.0.0:5683".parse().unwrap());
        assert_eq!(binding.describe(), "*:5683");
    }
}
