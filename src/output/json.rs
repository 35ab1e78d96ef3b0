//! JSON rendering of an [`AddressInfo`].

use crate::AddressInfo;

/// Pretty printed JSON with every derived field.
pub fn to_json(info: &AddressInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(info)
}
