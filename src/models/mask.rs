//! Subnet mask in both dotted and prefix-length form.

use super::ipv4::mask_prefix_len;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A mask together with its count of 1-bits.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetMask {
    pub mask: Ipv4Addr,
    pub prefix_len: u8,
}

impl SubnetMask {
    /// Wrap a dotted mask, counting its set bits for the prefix length.
    pub fn from_dotted(mask: Ipv4Addr) -> SubnetMask {
        SubnetMask {
            mask,
            prefix_len: mask_prefix_len(mask),
        }
    }

    /// Bitwise complement of the mask.
    pub fn inverted(&self) -> Ipv4Addr {
        !self.mask
    }

    /// Addresses covered by the mask, network and broadcast included.
    pub fn host_count(&self) -> u64 {
        1u64 << (32 - u32::from(self.prefix_len.min(32)))
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (/{})", self.mask, self.prefix_len)
    }
}
