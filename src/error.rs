//! Error kinds raised while deriving address information.

use crate::models::AddressClass;
use std::net::Ipv4Addr;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AddressError>;

/// Input-validation failures. None of them leave a partially built
/// [`AddressInfo`](crate::AddressInfo) behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid IP address pattern (255.255.255.255): {0:?}")]
    InvalidAddress(String),
    #[error("Invalid binary operands: {0}")]
    InvalidBinaryOperands(String),
    #[error("Invalid private IP addr class {0} (A-C)")]
    InvalidClassForPrivateRange(AddressClass),
    #[error("IP address class not set for {0}")]
    UnclassifiedAddress(Ipv4Addr),
}

impl AddressError {
    /// Short name of the error kind, shown in front of the message by callers.
    pub fn kind(&self) -> &'static str {
        match self {
            AddressError::InvalidAddress(_) => "InvalidAddress",
            AddressError::InvalidBinaryOperands(_) => "InvalidBinaryOperands",
            AddressError::InvalidClassForPrivateRange(_) => "InvalidClassForPrivateRange",
            AddressError::UnclassifiedAddress(_) => "UnclassifiedAddress",
        }
    }
}
