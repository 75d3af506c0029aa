//! Gmail API response normalization
//!
//! Converts Gmail API message resources to triage records.

use anyhow::{Context, Result};

use super::api::GmailMessage;
use crate::models::{Header, MessageRecord};

/// Normalize a Gmail API message to a MessageRecord
///
/// Header names are kept verbatim and an absent label field stays absent.
/// An absent or empty `internalDate` leaves the timestamp unset (0), which the
/// statistics functions reject later; a non-numeric one is an error here.
pub fn normalize_message(gmail_msg: GmailMessage) -> Result<MessageRecord> {
    let internal_date = parse_internal_date(gmail_msg.internal_date.as_deref())
        .with_context(|| format!("Message {} has an invalid internalDate", gmail_msg.id))?;

    let headers = gmail_msg
        .payload
        .and_then(|p| p.headers)
        .unwrap_or_default()
        .into_iter()
        .map(|h| Header::new(h.name, h.value))
        .collect();

    Ok(MessageRecord::builder(gmail_msg.id)
        .headers(headers)
        .label_ids(gmail_msg.label_ids)
        .internal_date(internal_date)
        .build())
}

/// Normalize a batch, failing on the first invalid message
pub fn normalize_messages(gmail_msgs: Vec<GmailMessage>) -> Result<Vec<MessageRecord>> {
    gmail_msgs.into_iter().map(normalize_message).collect()
}

/// Parse Gmail's `internalDate` (milliseconds since epoch, sent as a string)
fn parse_internal_date(raw: Option<&str>) -> Result<i64> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(s) => s
            .parse::<i64>()
            .with_context(|| format!("Failed to parse {:?} as milliseconds", s)),
    }
}
