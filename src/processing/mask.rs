//! Normalization of user supplied masks.

use crate::models::{get_cidr_mask, parse_quad, validate, SubnetMask, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Smallest prefix length accepted in short form.
pub const MIN_PREFIX_LEN: u8 = 8;

/// Turn a raw mask into a [`SubnetMask`].
///
/// Accepts a prefix length in `8..=32` or a dotted-decimal mask. Anything
/// else, a missing mask included, falls back to `default_mask`. Out of range
/// prefixes are not an error.
pub fn normalize_mask(raw_mask: Option<&str>, default_mask: Ipv4Addr) -> SubnetMask {
    let raw = match raw_mask {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            log::debug!("No mask given, using default {default_mask}");
            return SubnetMask::from_dotted(default_mask);
        }
    };

    if let Some(len) = parse_prefix_len(raw) {
        if let Some(bits) = get_cidr_mask(len) {
            return SubnetMask {
                mask: Ipv4Addr::from(bits),
                prefix_len: len,
            };
        }
    }
    if validate(raw) {
        if let Some(mask) = parse_quad(raw) {
            return SubnetMask::from_dotted(mask);
        }
    }

    log::warn!("Mask {raw:?} not accepted, using default {default_mask}");
    SubnetMask::from_dotted(default_mask)
}

/// Numeric text with an integral value in `MIN_PREFIX_LEN..=32`.
///
/// Surrounding whitespace, a sign and decimal forms such as `"18.0"` or
/// `"1.8e1"` are accepted. Fractional values are not.
fn parse_prefix_len(raw: &str) -> Option<u8> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if (f64::from(MIN_PREFIX_LEN)..=f64::from(MAX_LENGTH)).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ip_dec2bin;

    const CLASS_B: Ipv4Addr = Ipv4Addr::new(255, 255, 0, 0);

    #[test]
    fn test_prefix_form() {
        let mask = normalize_mask(Some("18"), CLASS_B);
        assert_eq!(mask.mask, Ipv4Addr::new(255, 255, 192, 0));
        assert_eq!(mask.prefix_len, 18);
    }

    #[test]
    fn test_prefix_bit_pattern() {
        for len in MIN_PREFIX_LEN..=32 {
            let mask = normalize_mask(Some(len.to_string().as_str()), CLASS_B);
            let bits = ip_dec2bin(mask.mask);
            let expected = "1".repeat(len as usize) + &"0".repeat(32 - len as usize);
            assert_eq!(bits, expected);
            assert_eq!(mask.mask.to_bits().count_ones(), u32::from(len));
            assert_eq!(mask.prefix_len, len);
        }
    }

    #[test]
    fn test_numeric_prefix_forms() {
        for raw in ["18", "+18", " 18", "18 ", "18.0", "18.", "1.8e1", "018"] {
            let mask = normalize_mask(Some(raw), CLASS_B);
            assert_eq!(mask.mask, Ipv4Addr::new(255, 255, 192, 0), "{raw:?}");
            assert_eq!(mask.prefix_len, 18, "{raw:?}");
        }
    }

    #[test]
    fn test_dotted_form() {
        let mask = normalize_mask(Some("255.255.255.0"), Ipv4Addr::new(255, 0, 0, 0));
        assert_eq!(mask.mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(mask.prefix_len, 24);
    }

    #[test]
    fn test_fallback_to_default() {
        for raw in [
            None,
            Some(""),
            Some("0"),
            Some("7"),
            Some("33"),
            Some("-18"),
            Some("18.5"),
            Some("inf"),
            Some("NaN"),
            Some("junk"),
            Some("0.0.0.0"),
        ] {
            let mask = normalize_mask(raw, CLASS_B);
            assert_eq!(mask.mask, CLASS_B, "{raw:?}");
            assert_eq!(mask.prefix_len, 16);
        }
    }

    #[test]
    fn test_all_ones_dotted_mask_falls_back() {
        let mask = normalize_mask(Some("255.255.255.255"), CLASS_B);
        assert_eq!(mask.mask, CLASS_B);
        let mask = normalize_mask(Some("32"), CLASS_B);
        assert_eq!(mask.mask, Ipv4Addr::BROADCAST);
    }

    #[test]
    fn test_default_for_class_d() {
        let mask = normalize_mask(None, Ipv4Addr::UNSPECIFIED);
        assert_eq!(mask.prefix_len, 0);
    }
}
