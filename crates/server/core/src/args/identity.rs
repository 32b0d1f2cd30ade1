//! Identity CLI arguments.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Credential selection for the secure endpoint.
///
/// The modes are mutually exclusive, but exclusivity is deliberately not
/// enforced by clap: conflicting selections are rejected during
/// consolidation so the error can describe the whole combination. With no
/// flags set the server falls back to self-signed credentials.
#[derive(Debug, Args, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[command(next_help_heading = "Identity")]
#[serde(default)]
pub struct IdentityArgs {
    /// Raw public key of the server (PEM, SubjectPublicKeyInfo).
    #[arg(long = "rpk-public-key", value_name = "PEM")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpk_public_key: Option<PathBuf>,

    /// Private key matching the raw public key (PEM).
    #[arg(long = "rpk-private-key", value_name = "PEM")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpk_private_key: Option<PathBuf>,

    /// X.509 certificate chain of the server, leaf first (PEM).
    #[arg(long = "x509-certificate", value_name = "PEM")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_certificate: Option<PathBuf>,

    /// Private key matching the X.509 certificate (PEM).
    #[arg(long = "x509-private-key", value_name = "PEM")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x509_private_key: Option<PathBuf>,
}

impl IdentityArgs {
    /// First raw-public-key flag that was set, if any.
    pub fn rpk_flag(&self) -> Option<&'static str> {
        if self.rpk_public_key.is_some() {
            Some("--rpk-public-key")
        } else if self.rpk_private_key.is_some() {
            Some("--rpk-private-key")
        } else {
            None
        }
    }

    /// First X.509 flag that was set, if any.
    pub fn x509_flag(&self) -> Option<&'static str> {
        if self.x509_certificate.is_some() {
            Some("--x509-certificate")
        } else if self.x509_private_key.is_some() {
            Some("--x509-private-key")
        } else {
            None
        }
    }
}
