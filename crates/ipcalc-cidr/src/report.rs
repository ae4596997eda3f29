//! Printable subnet report
//!
//! [`Report`] is a snapshot of everything computed for one [`Cidr`]. Its
//! `Display` impl renders the fixed text layout; it also serializes with
//! serde for the machine-readable outputs.
//!
//! ```
//! use ipcalc_cidr::Cidr;
//!
//! let report = Cidr::parse("192.168.1.10/24").unwrap().report();
//! let text = report.to_string();
//! assert!(text.contains("Network:   192.168.1.0 /24"));
//! assert!(text.ends_with("Class C, Private Internet"));
//! ```

use serde::Serialize;
use std::fmt;

use crate::class::{AddressClass, Privacy};
use crate::Cidr;
use ipcalc_core::{Address, Mask};

/// Shown in place of the host range for /31 and /32.
pub const NOT_APPLICABLE: &str = "N/A";

/// Width of the label column, including the colon
const LABEL_WIDTH: usize = 11;
/// Width of the dotted-decimal value column
const VALUE_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub address: Address,
    pub netmask: Mask,
    pub prefix_len: u8,
    pub wildcard: Address,
    pub network: Address,
    pub host_min: Option<Address>,
    pub host_max: Option<Address>,
    pub broadcast: Address,
    pub hosts_per_network: u64,
    pub class: AddressClass,
    pub privacy: Privacy,
}

impl From<&Cidr> for Report {
    fn from(cidr: &Cidr) -> Self {
        Self {
            address: cidr.address(),
            netmask: cidr.mask(),
            prefix_len: cidr.prefix_len(),
            wildcard: cidr.wildcard(),
            network: cidr.network(),
            host_min: cidr.host_min(),
            host_max: cidr.host_max(),
            broadcast: cidr.broadcast(),
            hosts_per_network: cidr.hosts_per_network(),
            class: cidr.class(),
            privacy: cidr.privacy(),
        }
    }
}

impl Report {
    /// Mask column text, e.g. `255.255.255.0 = 24`
    pub fn netmask_label(&self) -> String {
        format!("{} = {}", self.netmask, self.prefix_len)
    }

    /// Network column text, e.g. `192.168.1.0 /24`
    pub fn network_label(&self) -> String {
        format!("{} /{}", self.network, self.prefix_len)
    }

    /// Class column text, e.g. `Class C, Private Internet`
    pub fn class_label(&self) -> String {
        format!("{}, {}", self.class, self.privacy)
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: &dyn fmt::Display,
    detail: &dyn fmt::Display,
) -> fmt::Result {
    writeln!(
        f,
        "{:<lw$}{:<vw$} {}",
        label,
        value.to_string(),
        detail,
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    )
}

fn write_host_row(f: &mut fmt::Formatter<'_>, label: &str, host: Option<Address>) -> fmt::Result {
    match host {
        Some(addr) => write_row(f, label, &addr, &addr.to_binary()),
        None => writeln!(f, "{:<lw$}{}", label, NOT_APPLICABLE, lw = LABEL_WIDTH),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, "Address:", &self.address, &self.address.to_binary())?;
        write_row(f, "Netmask:", &self.netmask_label(), &self.netmask.to_binary())?;
        write_row(f, "Wildcard:", &self.wildcard, &self.wildcard.to_binary())?;
        writeln!(f, "=>")?;
        write_row(f, "Network:", &self.network_label(), &self.network.to_binary())?;
        write_host_row(f, "HostMin:", self.host_min)?;
        write_host_row(f, "HostMax:", self.host_max)?;
        write_row(f, "Broadcast:", &self.broadcast, &self.broadcast.to_binary())?;
        write!(
            f,
            "{:<lw$}{:<vw$} {}",
            "Hosts/Net:",
            self.hosts_per_network,
            self.class_label(),
            lw = LABEL_WIDTH,
            vw = VALUE_WIDTH
        )
    }
}
