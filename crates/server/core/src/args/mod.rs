//! CLI argument sections for the Lumen server.
//!
//! Each section is an independent clap `Args` group with explicit defaults
//! from [`crate::constants`]. The sections serve dual purposes:
//! - CLI parsing via clap (`#[derive(Args)]`)
//! - Configuration serialization via serde (`#[derive(Serialize, Deserialize)]`)
//!
//! Sections are plain data until consolidation; cross-field invariants are
//! checked in [`crate::config`].

mod dtls;
mod general;
mod identity;
mod log;

pub use dtls::DtlsArgs;
pub use general::GeneralArgs;
pub use identity::IdentityArgs;
pub use log::LogArgs;
