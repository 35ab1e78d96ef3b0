//! The derived view of one address and mask.

use crate::error::Result;
use crate::models::{mask_prefix_len, parse_address, AddressClass, PrivateRange, SubnetMask};
use crate::processing::{apply, classify, normalize_mask, note, private_range, BinaryOp};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derived from an address and an optional mask.
///
/// Built once by [`AddressInfo::new`] and never changed afterwards.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    address: Ipv4Addr,
    address_class: AddressClass,
    is_private: bool,
    private_range: Option<PrivateRange>,
    default_mask: SubnetMask,
    custom_mask: SubnetMask,
    inverted_custom_mask: Ipv4Addr,
    network: Ipv4Addr,
    host: Ipv4Addr,
    broadcast: Ipv4Addr,
    host_count: u64,
    borrowed_bits: u8,
    note: Option<&'static str>,
}

impl AddressInfo {
    /// Validate `address` and `mask` and derive every field.
    ///
    /// `mask` may be a prefix length (`"18"`) or dotted (`"255.255.192.0"`).
    /// A missing or unusable mask means the classful default.
    ///
    /// # Examples
    /// ```
    /// use ipv4_info::AddressInfo;
    /// let info = AddressInfo::new("172.16.35.233", Some("18")).unwrap();
    /// assert_eq!(info.network().to_string(), "172.16.0.0");
    /// assert_eq!(info.borrowed_bits(), 2);
    /// ```
    pub fn new(address: &str, mask: Option<&str>) -> Result<AddressInfo> {
        let address = parse_address(address)?;
        let (address_class, is_private) = classify(address)?;
        log::debug!("{address}: class={address_class} private={is_private}");
        let private_range = if is_private {
            Some(private_range(address_class)?)
        } else {
            None
        };

        let default_mask = SubnetMask::from_dotted(address_class.default_mask());
        let custom_mask = normalize_mask(mask, default_mask.mask);
        let inverted_custom_mask = custom_mask.inverted();
        log::debug!(
            "{address}: default_mask={default_mask} custom_mask={custom_mask} inverted={inverted_custom_mask}"
        );

        let network = apply(address, custom_mask.mask, BinaryOp::And);
        let host = apply(address, inverted_custom_mask, BinaryOp::And);
        let broadcast = apply(network, inverted_custom_mask, BinaryOp::Xor);
        log::debug!("{address}: network={network} host={host} broadcast={broadcast}");

        let host_count = custom_mask.host_count();
        let borrowed_bits =
            mask_prefix_len(apply(default_mask.mask, custom_mask.mask, BinaryOp::Xor));
        log::debug!("{address}: host_count={host_count} borrowed_bits={borrowed_bits}");

        Ok(AddressInfo {
            address,
            address_class,
            is_private,
            private_range,
            default_mask,
            custom_mask,
            inverted_custom_mask,
            network,
            host,
            broadcast,
            host_count,
            borrowed_bits,
            note: note(address_class, address),
        })
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn address_class(&self) -> AddressClass {
        self.address_class
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Set exactly when [`is_private`](Self::is_private) is true.
    pub fn private_range(&self) -> Option<PrivateRange> {
        self.private_range
    }

    pub fn default_mask(&self) -> SubnetMask {
        self.default_mask
    }

    pub fn custom_mask(&self) -> SubnetMask {
        self.custom_mask
    }

    pub fn inverted_custom_mask(&self) -> Ipv4Addr {
        self.inverted_custom_mask
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn host(&self) -> Ipv4Addr {
        self.host
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.broadcast
    }

    /// Total addresses in the block, network and broadcast included.
    pub fn host_count(&self) -> u64 {
        self.host_count
    }

    pub fn borrowed_bits(&self) -> u8 {
        self.borrowed_bits
    }

    pub fn note(&self) -> Option<&'static str> {
        self.note
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;

    #[test]
    fn test_class_c_default_mask() {
        let info = AddressInfo::new("192.168.0.1", None).unwrap();
        assert_eq!(info.address_class(), AddressClass::C);
        assert!(info.is_private());
        assert_eq!(info.private_range(), Some(PrivateRange::CLASS_C));
        assert_eq!(info.default_mask().mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(info.default_mask().prefix_len, 24);
        assert_eq!(info.custom_mask(), info.default_mask());
        assert_eq!(info.network(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(info.host(), Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(info.broadcast(), Ipv4Addr::new(192, 168, 0, 255));
        assert_eq!(info.host_count(), 256);
        assert_eq!(info.borrowed_bits(), 0);
        assert_eq!(info.note(), None);
    }

    #[test]
    fn test_class_b_prefix_18() {
        let info = AddressInfo::new("172.16.35.233", Some("18")).unwrap();
        assert_eq!(info.address_class(), AddressClass::B);
        assert!(info.is_private());
        assert_eq!(info.custom_mask().mask, Ipv4Addr::new(255, 255, 192, 0));
        assert_eq!(info.custom_mask().prefix_len, 18);
        assert_eq!(info.inverted_custom_mask(), Ipv4Addr::new(0, 0, 63, 255));
        assert_eq!(info.network(), Ipv4Addr::new(172, 16, 0, 0));
        assert_eq!(info.host(), Ipv4Addr::new(0, 0, 35, 233));
        assert_eq!(info.broadcast(), Ipv4Addr::new(172, 16, 63, 255));
        assert_eq!(info.host_count(), 16384);
        assert_eq!(info.borrowed_bits(), 2);
    }

    #[test]
    fn test_class_d_has_no_default_prefix() {
        let info = AddressInfo::new("224.0.0.1", None).unwrap();
        assert_eq!(info.address_class(), AddressClass::D);
        assert!(!info.is_private());
        assert_eq!(info.private_range(), None);
        assert_eq!(info.default_mask().prefix_len, 0);
        assert_eq!(info.note(), Some("Reserved for multicast"));
        assert_eq!(info.network(), Ipv4Addr::UNSPECIFIED);
        assert_eq!(info.broadcast(), Ipv4Addr::BROADCAST);
        assert_eq!(info.host_count(), 1u64 << 32);
    }

    #[test]
    fn test_class_a_dotted_mask() {
        let info = AddressInfo::new("10.0.0.1", Some("255.255.255.0")).unwrap();
        assert_eq!(info.address_class(), AddressClass::A);
        assert_eq!(info.private_range(), Some(PrivateRange::CLASS_A));
        assert_eq!(info.borrowed_bits(), 16);
        assert_eq!(info.host_count(), 256);
    }

    #[test]
    fn test_loopback_note() {
        let info = AddressInfo::new("127.0.0.1", None).unwrap();
        assert!(!info.is_private());
        assert_eq!(
            info.note(),
            Some("Network 127 is reserved for loopback and internal testing")
        );
    }

    #[test]
    fn test_rejected_inputs() {
        assert_eq!(
            AddressInfo::new("255.255.255.255", None).unwrap_err(),
            AddressError::InvalidAddress("255.255.255.255".to_string())
        );
        assert!(matches!(
            AddressInfo::new("192.168.1", Some("24")),
            Err(AddressError::InvalidAddress(_))
        ));
        assert_eq!(
            AddressInfo::new("0.1.2.3", None).unwrap_err(),
            AddressError::UnclassifiedAddress(Ipv4Addr::new(0, 1, 2, 3))
        );
    }

    #[test]
    fn test_numeric_prefix_text() {
        for mask in ["+18", " 18", "18.0"] {
            let info = AddressInfo::new("172.16.35.233", Some(mask)).unwrap();
            assert_eq!(info.custom_mask().to_string(), "255.255.192.0 (/18)", "{mask:?}");
            assert_eq!(info.borrowed_bits(), 2);
            assert_eq!(info.host_count(), 16384);
        }
        let info = AddressInfo::new("172.16.35.233", Some("18.5")).unwrap();
        assert_eq!(info.custom_mask(), info.default_mask());
    }

    #[test]
    fn test_all_zero_address_and_mask() {
        assert_eq!(
            AddressInfo::new("0.0.0.0", None).unwrap_err(),
            AddressError::InvalidAddress("0.0.0.0".to_string())
        );
        let info = AddressInfo::new("172.16.35.233", Some("0.0.0.0")).unwrap();
        assert_eq!(info.custom_mask().to_string(), "255.255.0.0 (/16)");
        assert_eq!(info.borrowed_bits(), 0);
        assert_eq!(info.host_count(), 65536);
    }

    #[test]
    fn test_out_of_range_prefix_uses_default() {
        let info = AddressInfo::new("172.16.35.233", Some("40")).unwrap();
        assert_eq!(info.custom_mask(), info.default_mask());
        assert_eq!(info.borrowed_bits(), 0);
    }

    #[test]
    fn test_host_count_power_of_two() {
        for len in 8..=32u8 {
            let info = AddressInfo::new("10.9.8.7", Some(len.to_string().as_str())).unwrap();
            assert!(info.host_count().is_power_of_two());
            assert_eq!(info.host_count(), 1u64 << (32 - len));
        }
    }
}
