//! Record model as persisted in the store document.

use serde::{Deserialize, Deserializer, Serialize};

use crate::crypto::Scheme;

/// One named, encrypted payload plus its password digest and hint.
///
/// The name is the key in the store document, not a field of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Base64 ciphertext produced under `scheme`
    pub data: String,

    /// Non-secret reminder shown before the password prompt (may be empty)
    #[serde(default, deserialize_with = "deserialize_hint")]
    pub hint: String,

    /// Digest of the password `data` was encrypted with
    #[serde(rename = "passHash")]
    pub pass_hash: String,

    /// Absent in documents that predate the scheme tag
    #[serde(default = "absent_scheme", skip_serializing_if = "is_legacy")]
    pub scheme: Scheme,
}

impl Record {
    pub fn new(
        data: impl Into<String>,
        hint: impl Into<String>,
        pass_hash: impl Into<String>,
        scheme: Scheme,
    ) -> Self {
        Self {
            data: data.into(),
            hint: hint.into(),
            pass_hash: pass_hash.into(),
            scheme,
        }
    }

    /// The hint, if one was given.
    pub fn hint(&self) -> Option<&str> {
        if self.hint.is_empty() {
            None
        } else {
            Some(self.hint.as_str())
        }
    }
}

/// A row of `list` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub name: String,
    pub hint: String,
    pub scheme: Scheme,
}

fn absent_scheme() -> Scheme {
    Scheme::Legacy
}

fn is_legacy(scheme: &Scheme) -> bool {
    scheme.is_legacy()
}

// Older documents may carry `"hint": null` when no hint was entered.
fn deserialize_hint<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
