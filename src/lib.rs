//! Derived information about an IPv4 address and an optional subnet mask:
//! classful class, default and custom masks, network/host/broadcast
//! addresses, host count, borrowed bits and private-range membership.
//!
//! Module organization:
//! - [`models`] - Value types and dotted-decimal helpers
//! - [`processing`] - Classification, mask normalization, bit operations
//! - [`output`] - Text, HTML and JSON presentation
//! - [`cli`] - Command line front end

mod address_info;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use address_info::AddressInfo;
pub use error::AddressError;

/// Build the [`AddressInfo`] for `address` and an optional `mask`.
pub fn calculate(address: &str, mask: Option<&str>) -> Result<AddressInfo, AddressError> {
    AddressInfo::new(address, mask)
}
