//! Message record representing one email's metadata snapshot

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::labels;

/// Unique identifier for a message within a batch (Gmail message ID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email header (name-value pair), name kept exactly as delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Metadata of a single email as seen by the triage core
///
/// Records are immutable snapshots; nothing in this crate mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Gmail message ID
    pub id: MessageId,
    /// Headers in delivery order
    pub headers: Vec<Header>,
    /// Gmail label IDs; `None` when the upstream resource had no label field
    pub labels: Option<Vec<String>>,
    /// Gmail's internal timestamp (milliseconds since epoch), 0 when unset
    pub internal_date: i64,
}

impl MessageRecord {
    /// Create a new record builder
    pub fn builder(id: impl Into<MessageId>) -> MessageRecordBuilder {
        MessageRecordBuilder::new(id.into())
    }

    /// Whether the label field is present and contains `label`
    pub fn has_label(&self, label: &str) -> bool {
        self.labels
            .as_ref()
            .is_some_and(|labels| labels.iter().any(|l| l == label))
    }

    /// Starred by the user
    pub fn is_starred(&self) -> bool {
        self.has_label(labels::STARRED)
    }

    /// Marked important by Gmail
    pub fn is_important(&self) -> bool {
        self.has_label(labels::IMPORTANT)
    }

    /// Whether the internal timestamp has been set
    pub fn has_timestamp(&self) -> bool {
        self.internal_date != 0
    }

    /// The internal timestamp as a UTC instant, if set and representable
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        if !self.has_timestamp() {
            return None;
        }
        Utc.timestamp_millis_opt(self.internal_date).single()
    }
}

/// Builder for creating MessageRecord instances
pub struct MessageRecordBuilder {
    id: MessageId,
    headers: Vec<Header>,
    labels: Option<Vec<String>>,
    internal_date: i64,
}

impl MessageRecordBuilder {
    fn new(id: MessageId) -> Self {
        Self {
            id,
            headers: Vec::new(),
            labels: None,
            internal_date: 0,
        }
    }

    /// Append a header, keeping earlier headers of the same name first
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    pub fn headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = headers;
        self
    }

    pub fn from(self, from: impl Into<String>) -> Self {
        self.header("From", from)
    }

    pub fn to(self, to: impl Into<String>) -> Self {
        self.header("To", to)
    }

    pub fn subject(self, subject: impl Into<String>) -> Self {
        self.header("Subject", subject)
    }

    /// Set the label field; an empty list is kept distinct from no field at all
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn label_ids(mut self, labels: Option<Vec<String>>) -> Self {
        self.labels = labels;
        self
    }

    pub fn internal_date(mut self, internal_date: i64) -> Self {
        self.internal_date = internal_date;
        self
    }

    pub fn received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.internal_date = received_at.timestamp_millis();
        self
    }

    pub fn build(self) -> MessageRecord {
        MessageRecord {
            id: self.id,
            headers: self.headers,
            labels: self.labels,
            internal_date: self.internal_date,
        }
    }
}
