use crate::SymmetricKey;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Web2 credential material exchanged with the client through the payload codec.
///
/// The codec does not persist the symmetric key, so `symmetric_key` is whatever the
/// peer sent and must be overwritten from the record after every decode
/// (see [`crate::IdentityRecord::replace_web2`]). A malformed value from the peer
/// reads as `None` rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Web2Payload {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_symmetric_key"
    )]
    pub symmetric_key: Option<SymmetricKey>,

    /// Client-side ciphertext of the web2 private key, echoed back in notifications.
    #[serde(default)]
    pub private_ciphertext: String,

    /// Remaining credential fields, carried through untouched.
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn lenient_symmetric_key<'de, D>(deserializer: D) -> Result<Option<SymmetricKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}
