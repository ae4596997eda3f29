//! Core types for ipcalc
//!
//! This crate provides the value types shared across the workspace:
//! - [`Address`] - IPv4 address held as a big-endian `u32`
//! - [`Mask`] - Contiguous subnet mask derived from a prefix length
//! - [`IpcalcError`] - Error types
//!
//! ```
//! use ipcalc_core::{Address, Mask};
//!
//! let addr = Address::from([192, 168, 1, 10]);
//! let mask = Mask::from_prefix(24).unwrap();
//! assert_eq!((addr & mask).to_string(), "192.168.1.0");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::BitAnd;
use thiserror::Error;

/// Number of bits in an IPv4 address.
pub const MAX_PREFIX_LEN: u8 = 32;

/// IPv4 address
///
/// Stored as a big-endian `u32`, so `0xC0A80101` is `192.168.1.1`.
///
/// # Examples
///
/// ```
/// use ipcalc_core::Address;
///
/// let dns = Address(0x08080808);
/// assert_eq!(dns.to_string(), "8.8.8.8");
/// assert_eq!(dns.to_binary(), "00001000.00001000.00001000.00001000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub u32);

impl Address {
    /// The four octets, most significant first.
    pub fn octets(&self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// First octet, used for classful lookups.
    pub fn first_octet(&self) -> u8 {
        self.octets()[0]
    }

    /// Binary rendering, each octet zero-padded to 8 bits and joined by `.`
    pub fn to_binary(&self) -> String {
        binary_octets(self.0)
    }

    /// Next address, carrying across octets. `None` past `255.255.255.255`.
    pub fn checked_next(&self) -> Option<Address> {
        self.0.checked_add(1).map(Address)
    }

    /// Previous address, borrowing across octets. `None` before `0.0.0.0`.
    pub fn checked_prev(&self) -> Option<Address> {
        self.0.checked_sub(1).map(Address)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        // pad() so width specifiers like {:<20} apply to the whole address
        f.pad(&format!("{}.{}.{}.{}", a, b, c, d))
    }
}

impl From<u32> for Address {
    fn from(value: u32) -> Self {
        Address(value)
    }
}

impl From<[u8; 4]> for Address {
    fn from(octets: [u8; 4]) -> Self {
        Address(u32::from_be_bytes(octets))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl BitAnd<Mask> for Address {
    type Output = Address;

    fn bitand(self, mask: Mask) -> Address {
        Address(self.0 & mask.bits())
    }
}

/// Subnet mask
///
/// Always contiguous: the 1-bits precede all 0-bits. The only way to build
/// one is from a prefix length, which keeps that invariant.
///
/// # Examples
///
/// ```
/// use ipcalc_core::Mask;
///
/// let mask = Mask::from_prefix(20).unwrap();
/// assert_eq!(mask.to_string(), "255.255.240.0");
/// assert_eq!(mask.prefix_len(), 20);
/// assert_eq!(mask.wildcard().to_string(), "0.0.15.255");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask(u32);

impl Mask {
    /// Build a mask with `prefix_len` leading ones.
    pub fn from_prefix(prefix_len: u8) -> Result<Self> {
        if prefix_len > MAX_PREFIX_LEN {
            return Err(IpcalcError::InvalidPrefixLength(prefix_len));
        }

        let bits = if prefix_len == 0 {
            0
        } else {
            u32::MAX << (MAX_PREFIX_LEN - prefix_len)
        };

        Ok(Mask(bits))
    }

    /// Raw mask bits
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Count of leading 1-bits
    pub fn prefix_len(&self) -> u8 {
        self.0.leading_ones() as u8
    }

    /// Bitwise complement of the mask
    pub fn wildcard(&self) -> Address {
        Address(!self.0)
    }

    /// Binary rendering, each octet zero-padded to 8 bits and joined by `.`
    pub fn to_binary(&self) -> String {
        binary_octets(self.0)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Address(self.0), f)
    }
}

impl Serialize for Mask {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

fn binary_octets(bits: u32) -> String {
    let [a, b, c, d] = bits.to_be_bytes();
    format!("{:08b}.{:08b}.{:08b}.{:08b}", a, b, c, d)
}

/// Error types for ipcalc operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpcalcError {
    /// Malformed CIDR string
    #[error("Invalid CIDR notation: {0}")]
    InvalidCidr(String),

    /// Malformed dotted-quad address
    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    /// Prefix length above 32
    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefixLength(u8),
}

/// Result type alias for ipcalc operations
pub type Result<T> = std::result::Result<T, IpcalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_display() {
        assert_eq!(Address(0xC0A8010A).to_string(), "192.168.1.10");
        assert_eq!(Address(0).to_string(), "0.0.0.0");
        assert_eq!(Address(u32::MAX).to_string(), "255.255.255.255");
    }

    #[test]
    fn test_address_display_padding() {
        assert_eq!(format!("{:<12}|", Address(0x0A000001)), "10.0.0.1    |");
    }

    #[test]
    fn test_address_from_octets() {
        let addr: Address = [172, 16, 5, 4].into();
        assert_eq!(addr, Address(0xAC100504));
        assert_eq!(addr.octets(), [172, 16, 5, 4]);
        assert_eq!(addr.first_octet(), 172);
    }

    #[test]
    fn test_address_binary() {
        let addr = Address::from([192, 168, 1, 0]);
        assert_eq!(addr.to_binary(), "11000000.10101000.00000001.00000000");
    }

    #[test]
    fn test_address_next_carries_across_octets() {
        let addr = Address::from([10, 0, 0, 255]);
        assert_eq!(addr.checked_next(), Some(Address::from([10, 0, 1, 0])));
        assert_eq!(Address(u32::MAX).checked_next(), None);
    }

    #[test]
    fn test_address_prev_borrows_across_octets() {
        let addr = Address::from([10, 1, 0, 0]);
        assert_eq!(addr.checked_prev(), Some(Address::from([10, 0, 255, 255])));
        assert_eq!(Address(0).checked_prev(), None);
    }

    #[test]
    fn test_mask_from_prefix() {
        assert_eq!(Mask::from_prefix(0).unwrap().bits(), 0x00000000);
        assert_eq!(Mask::from_prefix(8).unwrap().bits(), 0xFF000000);
        assert_eq!(Mask::from_prefix(12).unwrap().bits(), 0xFFF00000);
        assert_eq!(Mask::from_prefix(24).unwrap().bits(), 0xFFFFFF00);
        assert_eq!(Mask::from_prefix(32).unwrap().bits(), 0xFFFFFFFF);
        assert_eq!(
            Mask::from_prefix(33),
            Err(IpcalcError::InvalidPrefixLength(33))
        );
    }

    #[test]
    fn test_mask_prefix_round_trip() {
        for p in 0..=MAX_PREFIX_LEN {
            assert_eq!(Mask::from_prefix(p).unwrap().prefix_len(), p);
        }
    }

    #[test]
    fn test_mask_bits_contiguous() {
        for p in 0..=MAX_PREFIX_LEN {
            let bits = Mask::from_prefix(p).unwrap().bits();
            assert_eq!(bits.leading_ones() + bits.trailing_zeros(), 32);
        }
    }

    #[test]
    fn test_mask_binary() {
        let mask = Mask::from_prefix(20).unwrap();
        assert_eq!(mask.to_binary(), "11111111.11111111.11110000.00000000");
    }

    #[test]
    fn test_mask_wildcard() {
        let mask = Mask::from_prefix(24).unwrap();
        assert_eq!(mask.wildcard(), Address(0x000000FF));
        assert_eq!(Mask::from_prefix(0).unwrap().wildcard(), Address(u32::MAX));
        assert_eq!(Mask::from_prefix(32).unwrap().wildcard(), Address(0));
    }

    #[test]
    fn test_address_and_mask() {
        let addr = Address::from([192, 168, 1, 42]);
        let mask = Mask::from_prefix(16).unwrap();
        assert_eq!(addr & mask, Address::from([192, 168, 0, 0]));
    }

    #[test]
    fn test_serialize_as_dotted_string() {
        let json = serde_json::to_string(&Address(0x08080808)).expect("serialization failed");
        assert_eq!(json, r#""8.8.8.8""#);

        let json = serde_json::to_string(&Mask::from_prefix(16).unwrap())
            .expect("serialization failed");
        assert_eq!(json, r#""255.255.0.0""#);
    }

    #[test]
    fn test_error_display() {
        let err = IpcalcError::InvalidPrefixLength(40);
        assert_eq!(format!("{}", err), "Invalid prefix length: 40 (must be 0-32)");

        let err = IpcalcError::InvalidAddress("Invalid octet: 999".to_string());
        assert_eq!(format!("{}", err), "Invalid IP address: Invalid octet: 999");
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<Mask> {
            Mask::from_prefix(24)
        }

        assert_eq!(returns_result().unwrap().prefix_len(), 24);
    }
}
