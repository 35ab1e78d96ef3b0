//! Classful address classes and the RFC1918 private blocks.

use serde::Serialize;
use std::net::Ipv4Addr;

/// Legacy address class, decided by the leading octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl AddressClass {
    /// Class bracket for a first octet. Octet 0 has none.
    pub fn from_first_octet(octet: u8) -> Option<AddressClass> {
        match octet {
            1..=127 => Some(AddressClass::A),
            128..=191 => Some(AddressClass::B),
            192..=223 => Some(AddressClass::C),
            224..=239 => Some(AddressClass::D),
            240..=255 => Some(AddressClass::E),
            0 => None,
        }
    }

    /// Classful default mask, `0.0.0.0` for D and E.
    pub fn default_mask(&self) -> Ipv4Addr {
        match self {
            AddressClass::A => Ipv4Addr::new(255, 0, 0, 0),
            AddressClass::B => Ipv4Addr::new(255, 255, 0, 0),
            AddressClass::C => Ipv4Addr::new(255, 255, 255, 0),
            AddressClass::D | AddressClass::E => Ipv4Addr::UNSPECIFIED,
        }
    }
}

impl std::fmt::Display for AddressClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let letter = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        write!(f, "{letter}")
    }
}

/// Inclusive start/stop of a private block.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PrivateRange {
    pub start: Ipv4Addr,
    pub stop: Ipv4Addr,
}

impl PrivateRange {
    pub const CLASS_A: PrivateRange = PrivateRange {
        start: Ipv4Addr::new(10, 0, 0, 0),
        stop: Ipv4Addr::new(10, 255, 255, 255),
    };
    pub const CLASS_B: PrivateRange = PrivateRange {
        start: Ipv4Addr::new(172, 16, 0, 0),
        stop: Ipv4Addr::new(172, 31, 255, 255),
    };
    pub const CLASS_C: PrivateRange = PrivateRange {
        start: Ipv4Addr::new(192, 168, 0, 0),
        stop: Ipv4Addr::new(192, 168, 255, 255),
    };

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.start <= addr && addr <= self.stop
    }
}

impl std::fmt::Display for PrivateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.stop)
    }
}
