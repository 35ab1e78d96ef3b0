//! Dotted-decimal IPv4 utilities.
//!
//! Parsing and validation of `a.b.c.d` text, prefix-length masks and the
//! 32 character binary string form.

use crate::error::{AddressError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    // Four decimal octets, no leading zeros, nothing around them.
    static ref QUAD_RE: Regex = Regex::new(
        r"^(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})\.(0|[1-9][0-9]{0,2})$"
    )
    .expect("Invalid Regex?");
}

/// Parse a dotted-decimal quadruple, each octet in 0..=255.
///
/// This is a purely structural check, `255.255.255.255` parses fine.
pub fn parse_quad(text: &str) -> Option<Ipv4Addr> {
    let caps = QUAD_RE.captures(text)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps[i + 1].parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Returns true if `text` is a usable address or dotted mask.
///
/// The all-ones broadcast sentinel and the all-zero value are rejected.
///
/// # Examples
/// ```
/// use ipv4_info::models::validate;
/// assert!(validate("192.168.0.1"));
/// assert!(!validate("255.255.255.255"));
/// assert!(!validate("0.0.0.0"));
/// assert!(!validate("192.168.0"));
/// ```
pub fn validate(text: &str) -> bool {
    parse_valid(text).is_some()
}

/// Parse an address, failing with [`AddressError::InvalidAddress`].
pub fn parse_address(text: &str) -> Result<Ipv4Addr> {
    parse_valid(text).ok_or_else(|| AddressError::InvalidAddress(text.to_string()))
}

fn parse_valid(text: &str) -> Option<Ipv4Addr> {
    parse_quad(text)
        .filter(|addr| *addr != Ipv4Addr::BROADCAST && *addr != Ipv4Addr::UNSPECIFIED)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_info::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Number of 1-bits in a mask, i.e. its prefix length when contiguous.
pub fn mask_prefix_len(mask: Ipv4Addr) -> u8 {
    u32::from(mask).count_ones() as u8
}

/// Convert an address to its 32 character binary string.
pub fn ip_dec2bin(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect()
}

/// Convert a 32 character binary string back to an address.
pub fn ip_bin2dec(bits: &str) -> Result<Ipv4Addr> {
    if bits.len() != MAX_LENGTH as usize || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(AddressError::InvalidBinaryOperands(format!(
            "Expected 32 binary digits, got {bits:?}"
        )));
    }
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = u8::from_str_radix(&bits[i * 8..(i + 1) * 8], 2)
            .map_err(|e| AddressError::InvalidBinaryOperands(e.to_string()))?;
    }
    Ok(Ipv4Addr::from(octets))
}
