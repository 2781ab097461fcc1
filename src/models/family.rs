use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Address family of a RIB snapshot request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    /// IPv4 unicast, selected as `inet`.
    Ipv4Unicast,
    /// IPv6 unicast, selected as `inet6`.
    Ipv6Unicast,
}

/// An address family token the tool does not serve. Rejected before any
/// network activity is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid address family {0:?}, available: inet, inet6")]
pub struct InvalidFamily(pub String);

impl FromStr for AddressFamily {
    type Err = InvalidFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inet" => Ok(AddressFamily::Ipv4Unicast),
            "inet6" => Ok(AddressFamily::Ipv6Unicast),
            other => Err(InvalidFamily(other.to_string())),
        }
    }
}

impl Display for AddressFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4Unicast => write!(f, "inet"),
            AddressFamily::Ipv6Unicast => write!(f, "inet6"),
        }
    }
}
