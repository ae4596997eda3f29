//! CIDR parsing and subnet arithmetic
//!
//! Provides the calculations behind the `ipcalc` report:
//! - Parse CIDR notation (e.g., "192.168.1.10/24")
//! - Network, broadcast and wildcard via mask arithmetic
//! - Usable host range and host count
//! - Classful and RFC 1918 classification ([`class`])
//! - The printable report ([`report`])
//!
//! # Examples
//!
//! ```
//! use ipcalc_cidr::Cidr;
//!
//! let cidr = Cidr::parse("192.168.1.10/24").unwrap();
//! assert_eq!(cidr.prefix_len(), 24);
//! assert_eq!(cidr.network().0, 0xC0A80100); // 192.168.1.0
//! assert_eq!(cidr.broadcast().0, 0xC0A801FF); // 192.168.1.255
//! assert_eq!(cidr.hosts_per_network(), 254);
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

pub use ipcalc_core::{Address, IpcalcError, Mask, Result, MAX_PREFIX_LEN};

pub mod class;
pub mod report;

use class::{AddressClass, Privacy};
use report::Report;

/// An address together with the mask of the network it lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cidr {
    /// Address as entered, host bits included
    address: Address,
    mask: Mask,
}

impl Cidr {
    /// Parse CIDR notation string
    ///
    /// # Arguments
    ///
    /// * `cidr` - CIDR string (e.g., "192.168.1.10/24")
    ///
    /// # Examples
    ///
    /// ```
    /// use ipcalc_cidr::Cidr;
    ///
    /// let cidr = Cidr::parse("10.0.0.0/8").unwrap();
    /// assert_eq!(cidr.prefix_len(), 8);
    /// assert!(Cidr::parse("999.1.1.1/24").is_err());
    /// ```
    pub fn parse(cidr: &str) -> Result<Self> {
        let cidr = cidr.trim();
        let (ip_str, prefix_str) = cidr.split_once('/').ok_or_else(|| {
            IpcalcError::InvalidCidr("Expected format: x.x.x.x/prefix".to_string())
        })?;

        // u8::from_str would also take a leading '+'
        if !is_decimal(prefix_str) {
            return Err(IpcalcError::InvalidCidr(format!(
                "Invalid prefix: {}",
                prefix_str
            )));
        }
        let prefix_len: u8 = prefix_str
            .parse()
            .map_err(|_| IpcalcError::InvalidCidr(format!("Invalid prefix: {}", prefix_str)))?;

        let mask = Mask::from_prefix(prefix_len)?;
        let address = Self::parse_ipv4(ip_str)?;

        debug!(%address, prefix_len, "parsed CIDR");

        Ok(Self { address, mask })
    }

    /// Parse a strict dotted-quad address
    fn parse_ipv4(ip: &str) -> Result<Address> {
        let octets: Vec<&str> = ip.split('.').collect();
        if octets.len() != 4 {
            return Err(IpcalcError::InvalidAddress("Expected 4 octets".to_string()));
        }

        let mut bytes = [0u8; 4];
        for (byte, octet_str) in bytes.iter_mut().zip(&octets) {
            let leading_zero = octet_str.len() > 1 && octet_str.starts_with('0');
            if !is_decimal(octet_str) || leading_zero {
                return Err(IpcalcError::InvalidAddress(format!(
                    "Invalid octet: {}",
                    octet_str
                )));
            }
            *byte = octet_str.parse().map_err(|_| {
                IpcalcError::InvalidAddress(format!("Invalid octet: {}", octet_str))
            })?;
        }

        Ok(Address::from(bytes))
    }

    /// Create a new CIDR from an address and prefix length
    ///
    /// # Arguments
    ///
    /// * `address` - Any address inside the network
    /// * `prefix_len` - Prefix length (0-32)
    pub fn new(address: Address, prefix_len: u8) -> Result<Self> {
        let mask = Mask::from_prefix(prefix_len)?;
        Ok(Self { address, mask })
    }

    /// Get the address as entered
    pub fn address(&self) -> Address {
        self.address
    }

    /// Get network mask
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Get prefix length
    pub fn prefix_len(&self) -> u8 {
        self.mask.prefix_len()
    }

    /// Get wildcard (inverted) mask
    pub fn wildcard(&self) -> Address {
        self.mask.wildcard()
    }

    /// Get network address
    pub fn network(&self) -> Address {
        self.address & self.mask
    }

    /// Get broadcast address
    pub fn broadcast(&self) -> Address {
        Address(self.network().0 | self.wildcard().0)
    }

    /// Get first usable IP (network + 1)
    ///
    /// `None` for /31 and /32, which have no usable host range.
    pub fn host_min(&self) -> Option<Address> {
        if self.prefix_len() >= MAX_PREFIX_LEN - 1 {
            None
        } else {
            self.network().checked_next()
        }
    }

    /// Get last usable IP (broadcast - 1)
    ///
    /// `None` for /31 and /32, which have no usable host range.
    pub fn host_max(&self) -> Option<Address> {
        if self.prefix_len() >= MAX_PREFIX_LEN - 1 {
            None
        } else {
            self.broadcast().checked_prev()
        }
    }

    /// Get total number of IPs in this CIDR block
    pub fn size(&self) -> u64 {
        1u64 << (MAX_PREFIX_LEN - self.prefix_len())
    }

    /// Usable hosts, excluding the network and broadcast addresses
    ///
    /// Clamped to zero for /31 and /32.
    pub fn hosts_per_network(&self) -> u64 {
        self.size().saturating_sub(2)
    }

    /// Check if IP address is in this CIDR block
    pub fn contains(&self, ip: Address) -> bool {
        (ip & self.mask) == self.network()
    }

    /// Classful category of the network address
    pub fn class(&self) -> AddressClass {
        AddressClass::of(self.network())
    }

    /// Private or public scope of the network address
    pub fn privacy(&self) -> Privacy {
        Privacy::of(self.network())
    }

    /// Compute every derived quantity for display
    pub fn report(&self) -> Report {
        let report = Report::from(self);
        debug!(
            network = %report.network,
            broadcast = %report.broadcast,
            hosts = report.hosts_per_network,
            "computed subnet"
        );
        report
    }
}

impl FromStr for Cidr {
    type Err = IpcalcError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len())
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
