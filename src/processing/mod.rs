//! Derivation steps for address information.
//!
//! - [`classify`] - Classful classification and private ranges
//! - [`mask`] - Mask normalization from prefix or dotted form
//! - [`bitwise`] - Octet-wise AND / XOR

mod bitwise;
mod classify;
mod mask;

pub use bitwise::{apply, bitwise_op, BinaryOp};
pub use classify::{classify, note, private_range};
pub use mask::{normalize_mask, MIN_PREFIX_LEN};
