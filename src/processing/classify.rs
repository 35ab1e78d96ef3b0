//! Classful classification and private-range lookup.

use crate::error::{AddressError, Result};
use crate::models::{AddressClass, PrivateRange};
use std::net::Ipv4Addr;

/// Classify an address and decide whether it sits in a private block.
///
/// Only the first octet (and the second, for B and C) is consulted.
pub fn classify(addr: Ipv4Addr) -> Result<(AddressClass, bool)> {
    let [first, second, _, _] = addr.octets();
    let class =
        AddressClass::from_first_octet(first).ok_or(AddressError::UnclassifiedAddress(addr))?;
    let is_private = match class {
        AddressClass::A => first == 10,
        AddressClass::B => first == 172 && (16..=31).contains(&second),
        AddressClass::C => first == 192 && second == 168,
        AddressClass::D | AddressClass::E => false,
    };
    log::trace!("classify({addr}) class={class} private={is_private}");
    Ok((class, is_private))
}

/// Private block of a class. Only A, B and C have one.
pub fn private_range(class: AddressClass) -> Result<PrivateRange> {
    match class {
        AddressClass::A => Ok(PrivateRange::CLASS_A),
        AddressClass::B => Ok(PrivateRange::CLASS_B),
        AddressClass::C => Ok(PrivateRange::CLASS_C),
        AddressClass::D | AddressClass::E => {
            log::error!("private_range() called for class {class}");
            Err(AddressError::InvalidClassForPrivateRange(class))
        }
    }
}

/// Free-text annotation for reserved blocks.
pub fn note(class: AddressClass, addr: Ipv4Addr) -> Option<&'static str> {
    match class {
        AddressClass::D => Some("Reserved for multicast"),
        AddressClass::E => Some("Reserved for experimental, used for research"),
        _ if addr.octets()[0] == 127 => {
            Some("Network 127 is reserved for loopback and internal testing")
        }
        _ => None,
    }
}
