//! Value types for IPv4 address information.
//!
//! - [`AddressClass`] and [`PrivateRange`] - Classful classes and RFC1918 blocks
//! - [`SubnetMask`] - Mask with its prefix length
//! - dotted-decimal helpers for parsing and bit strings

mod class;
mod ipv4;
mod mask;

// Re-export public types
pub use class::{AddressClass, PrivateRange};
pub use ipv4::{
    get_cidr_mask, ip_bin2dec, ip_dec2bin, mask_prefix_len, parse_address, parse_quad, validate,
    MAX_LENGTH,
};
pub use mask::SubnetMask;
