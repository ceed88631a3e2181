use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Address family requested for a lookup (memory-optimized: 1 byte).
///
/// Serialized as the conventional integers `4` and `6` so configuration
/// files and wire formats stay readable.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum AddressFamily {
    #[default]
    V4 = 4,
    V6 = 6,
}

impl AddressFamily {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Whether `addr` belongs to this family.
    pub fn matches(&self, addr: &IpAddr) -> bool {
        match self {
            Self::V4 => addr.is_ipv4(),
            Self::V6 => addr.is_ipv6(),
        }
    }
}

impl TryFrom<u8> for AddressFamily {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            other => Err(format!("invalid address family: {other} (expected 4 or 6)")),
        }
    }
}

impl From<AddressFamily> for u8 {
    fn from(family: AddressFamily) -> Self {
        family.as_u8()
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn defaults_to_v4() {
        assert_eq!(AddressFamily::default(), AddressFamily::V4);
    }

    #[test]
    fn converts_from_integers() {
        assert_eq!(AddressFamily::try_from(4).unwrap(), AddressFamily::V4);
        assert_eq!(AddressFamily::try_from(6).unwrap(), AddressFamily::V6);
        assert!(AddressFamily::try_from(5).is_err());
    }

    #[test]
    fn matches_address_version() {
        let v4: IpAddr = Ipv4Addr::new(192, 0, 2, 1).into();
        let v6: IpAddr = Ipv6Addr::LOCALHOST.into();
        assert!(AddressFamily::V4.matches(&v4));
        assert!(!AddressFamily::V4.matches(&v6));
        assert!(AddressFamily::V6.matches(&v6));
    }
}
