//! Gmail API integration
//!
//! Fetching is done elsewhere; this module only describes the shape of
//! Gmail message resources and normalizes them to triage records.

mod normalize;

pub use normalize::{normalize_message, normalize_messages};

/// Gmail API response types
pub mod api {
    use serde::Deserialize;

    /// Message resource from Gmail API (MINIMAL, METADATA or FULL format)
    ///
    /// Only the fields triage reads are declared; the rest are ignored.
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GmailMessage {
        pub id: String,
        pub label_ids: Option<Vec<String>>,
        pub internal_date: Option<String>,
        pub payload: Option<MessagePayload>,
    }

    /// Message payload; only the headers matter for triage
    #[derive(Debug, Deserialize)]
    pub struct MessagePayload {
        pub headers: Option<Vec<Header>>,
    }

    /// Email header (name-value pair)
    #[derive(Debug, Deserialize)]
    pub struct Header {
        pub name: String,
        pub value: String,
    }
}
