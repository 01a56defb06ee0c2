//! Redacting wrapper for secret configuration values.
//!
//! A `Secret` holds a credential read from config. It deserializes from a
//! plain string, but every outbound path (TOML, JSON, `Debug`) emits the
//! redaction marker instead of the wrapped bytes, so serializing a config
//! back out or logging it cannot leak the credential. Serialization is
//! lossy on purpose: deserializing the marker yields the literal marker,
//! never the original secret.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Marker emitted in place of a non-empty secret.
pub const REDACTED: &str = "<secret>";

/// A string credential that never leaves the process in clear text.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Secret(value.into())
    }

    /// True when no credential is set. Empty secrets serialize as absent.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The wrapped bytes, for handing to an authenticator. This is the only
    /// way to read them; keep the result out of logs and serializers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Secret(value.to_string())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("\"\"")
        } else {
            write!(f, "{:?}", REDACTED)
        }
    }
}

/// One impl serves both serialization pipelines (TOML config and JSON
/// interchange): empty maps to the absent marker, anything else to the
/// literal redaction marker. Config structs pair the empty case with
/// `skip_serializing_if = "Secret::is_empty"` since TOML has no null.
impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_empty() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(REDACTED)
        }
    }
}
