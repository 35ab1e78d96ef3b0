//! Plain text report of an [`AddressInfo`].

use crate::AddressInfo;
use std::fmt::Write;

/// Format every derived field into the fixed multi-line report.
pub fn describe(info: &AddressInfo) -> String {
    info.to_string()
}

fn write_report<W: Write>(out: &mut W, info: &AddressInfo) -> std::fmt::Result {
    writeln!(out, "IP address: {}", info.address())?;
    writeln!(out, "Subnet Mask Default: {}", info.default_mask())?;
    writeln!(out, "Subnet Mask Custom: {}", info.custom_mask())?;
    writeln!(out, "Class: {}", info.address_class())?;
    writeln!(
        out,
        "The address is {}private",
        if info.is_private() { "" } else { "not " }
    )?;
    if let Some(range) = info.private_range() {
        writeln!(out, "Private range: {range}")?;
    }
    writeln!(out, "Network: {}", info.network())?;
    writeln!(out, "Host: {}", info.host())?;
    writeln!(out, "Broadcast: {}", info.broadcast())?;
    writeln!(
        out,
        "Number of hosts: {} (incl. host and network addresses)",
        info.host_count()
    )?;
    writeln!(
        out,
        "Bits borrowed in custom subnet mask: {}",
        info.borrowed_bits()
    )?;
    if let Some(note) = info.note() {
        writeln!(out, "{note}")?;
    }
    Ok(())
}

impl std::fmt::Display for AddressInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write_report(f, self)
    }
}
