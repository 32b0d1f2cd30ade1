//! DTLS transport policies.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// DTLS connection-ID policy.
///
/// A tri-state setting controlling whether the server accepts connection IDs
/// from peers and whether it generates its own:
///
/// - [`Disabled`](Self::Disabled): connection IDs are not used at all.
/// - [`AcceptOnly`](Self::AcceptOnly): the server accepts peer connection IDs
///   but never generates one for foreign peers.
/// - [`Generate`](Self::Generate): the server accepts peer connection IDs and
///   generates its own of the given length in bytes.
///
/// In serialized form the policy collapses to a single integer: negative
/// means disabled, zero means accept-only, positive is the generated length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionIdPolicy {
    /// Connection IDs are not used.
    Disabled,
    /// Accept peer connection IDs, never generate one.
    AcceptOnly,
    /// Accept peer connection IDs and generate IDs of this length in bytes.
    Generate(u16),
}

impl ConnectionIdPolicy {
    /// Whether connection-ID support is active at all.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Length of self-generated connection IDs, if any are generated.
    pub fn generated_length(&self) -> Option<u16> {
        match self {
            Self::Generate(len) => Some(*len),
            _ => None,
        }
    }

    /// The collapsed integer representation (negative / zero / length).
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Disabled => -1,
            Self::AcceptOnly => 0,
            Self::Generate(len) => i64::from(*len),
        }
    }

    /// Build a policy from the collapsed integer representation.
    pub fn from_i64(value: i64) -> Self {
        match value {
            v if v < 0 => Self::Disabled,
            0 => Self::AcceptOnly,
            v => Self::Generate(v.min(i64::from(u16::MAX)) as u16),
        }
    }
}

impl fmt::Display for ConnectionIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("off"),
            Self::AcceptOnly => f.write_str("0"),
            Self::Generate(len) => write!(f, "{len}"),
        }
    }
}

impl Serialize for ConnectionIdPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_i64())
    }
}

impl<'de> Deserialize<'de> for ConnectionIdPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        Ok(Self::from_i64(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_representation_round_trips() {
        assert_eq!(ConnectionIdPolicy::Disabled.as_i64(), -1);
        assert_eq!(ConnectionIdPolicy::AcceptOnly.as_i64(), 0);
        assert_eq!(ConnectionIdPolicy::Generate(6).as_i64(), 6);

        for policy in [
            ConnectionIdPolicy::Disabled,
            ConnectionIdPolicy::AcceptOnly,
            ConnectionIdPolicy::Generate(12),
        ] {
            assert_eq!(ConnectionIdPolicy::from_i64(policy.as_i64()), policy);
        }
    }

    #[test]
    fn negative_values_mean_disabled() {
        assert_eq!(
            ConnectionIdPolicy::from_i64(-42),
            ConnectionIdPolicy::Disabled
        );
    }

    #[test]
    fn display_matches_token_forms() {
        assert_eq!(ConnectionIdPolicy::Disabled.to_string(), "off");
        assert_eq!(ConnectionIdPolicy::AcceptOnly.to_string(), "0");
        assert_eq!(ConnectionIdPolicy::Generate(6).to_string(), "6");
    }
}
