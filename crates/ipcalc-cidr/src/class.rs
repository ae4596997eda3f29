//! Classful and private-range classification

use ipcalc_core::Address;
use serde::Serialize;
use std::fmt;

/// Legacy classful category, decided by the first octet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressClass {
    #[serde(rename = "Class A")]
    A,
    #[serde(rename = "Class B")]
    B,
    #[serde(rename = "Class C")]
    C,
    #[serde(rename = "Class D (Multicast)")]
    D,
    #[serde(rename = "Class E (Reserved)")]
    E,
}

impl AddressClass {
    pub fn of(address: Address) -> Self {
        match address.first_octet() {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressClass::A => "Class A",
            AddressClass::B => "Class B",
            AddressClass::C => "Class C",
            AddressClass::D => "Class D (Multicast)",
            AddressClass::E => "Class E (Reserved)",
        };
        f.write_str(name)
    }
}

/// RFC 1918 blocks as (network, mask)
pub const PRIVATE_RANGES: [(u32, u32); 3] = [
    (0x0A000000, 0xFF000000), // 10.0.0.0/8
    (0xAC100000, 0xFFF00000), // 172.16.0.0/12
    (0xC0A80000, 0xFFFF0000), // 192.168.0.0/16
];

/// Whether an address is routable on the public internet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Privacy {
    #[serde(rename = "Private Internet")]
    Private,
    #[serde(rename = "Public Internet")]
    Public,
}

impl Privacy {
    pub fn of(address: Address) -> Self {
        let private = PRIVATE_RANGES
            .iter()
            .any(|&(network, mask)| address.0 & mask == network);

        if private {
            Privacy::Private
        } else {
            Privacy::Public
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Privacy::Private => f.write_str("Private Internet"),
            Privacy::Public => f.write_str("Public Internet"),
        }
    }
}
