//! Octet-wise AND / XOR between dotted-decimal quadruples.

use crate::error::{AddressError, Result};
use crate::models::parse_quad;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Supported binary operators.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Xor,
}

impl FromStr for BinaryOp {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<BinaryOp> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Ok(BinaryOp::And),
            "XOR" => Ok(BinaryOp::Xor),
            _ => Err(AddressError::InvalidBinaryOperands(format!(
                "Invalid operator {s:?}"
            ))),
        }
    }
}

/// Apply `op` to two addresses given as text.
///
/// Both operands must be dotted-decimal quadruples, so operands with a
/// different number of octets are rejected here as well.
pub fn bitwise_op(addr1: &str, addr2: &str, op: &str) -> Result<Ipv4Addr> {
    let (a1, a2) = match (parse_quad(addr1), parse_quad(addr2)) {
        (Some(a1), Some(a2)) => (a1, a2),
        _ => {
            return Err(AddressError::InvalidBinaryOperands(format!(
                "Wrong format. (255.255.255.255) {addr1}-{addr2}"
            )));
        }
    };
    let op: BinaryOp = op.parse()?;
    Ok(apply(a1, a2, op))
}

/// AND / XOR of two addresses, the core of [`bitwise_op`].
pub fn apply(addr1: Ipv4Addr, addr2: Ipv4Addr, op: BinaryOp) -> Ipv4Addr {
    let (a1, a2) = (u32::from(addr1), u32::from(addr2));
    let bits = match op {
        BinaryOp::And => a1 & a2,
        BinaryOp::Xor => a1 ^ a2,
    };
    Ipv4Addr::from(bits)
}
