//! Sender identity used for per-sender aggregation

use serde::{Deserialize, Serialize};

/// Raw value of a "From" header, used verbatim as a sender's identity
///
/// No normalization happens: `"Jane <jane@x.com>"` and `"<jane@x.com>"`
/// are different senders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderKey(pub String);

impl SenderKey {
    pub fn new(from: impl Into<String>) -> Self {
        Self(from.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing name for the sender.
    ///
    /// "From" values come as either `<jane@x.com>` or `Jane Doe <jane@x.com>`.
    /// A display name is returned when one precedes the address, otherwise the
    /// bare address.
    pub fn display_name(&self) -> String {
        let raw = self.0.as_str();

        if let Some(rest) = raw.strip_prefix('<') {
            return rest.strip_suffix('>').unwrap_or(rest).to_string();
        }

        raw.split('<').next().unwrap_or_default().trim().to_string()
    }
}

impl From<&str> for SenderKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SenderKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}
