//! Header lookup on message records

use crate::error::{MalformedMessageError, Result};
use crate::models::{Header, MessageRecord};

pub const FROM: &str = "From";
pub const TO: &str = "To";
pub const SUBJECT: &str = "Subject";

/// Find the first header whose name matches exactly (case-sensitive)
///
/// Absence is not an error here; callers decide whether a header is mandatory.
pub fn extract_header<'a>(record: &'a MessageRecord, name: &str) -> Option<&'a Header> {
    record.headers.iter().find(|h| h.name == name)
}

/// Value of a mandatory header, or [`MalformedMessageError::MissingHeader`]
pub fn require_header<'a>(record: &'a MessageRecord, name: &'static str) -> Result<&'a str> {
    extract_header(record, name)
        .map(|h| h.value.as_str())
        .ok_or_else(|| MalformedMessageError::MissingHeader {
            message_id: record.id.clone(),
            header: name,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(headers: Vec<(&str, &str)>) -> MessageRecord {
        headers
            .into_iter()
            .fold(MessageRecord::builder("m1"), |b, (n, v)| b.header(n, v))
            .build()
    }

    #[test]
    fn test_extract_header() {
        let record = make_record(vec![("From", "test@example.com"), ("Subject", "Test Subject")]);

        assert_eq!(
            extract_header(&record, "From").map(|h| h.value.as_str()),
            Some("test@example.com")
        );
        assert_eq!(
            extract_header(&record, "Subject").map(|h| h.value.as_str()),
            Some("Test Subject")
        );
        assert_eq!(extract_header(&record, "Cc"), None);
    }

    #[test]
    fn test_extract_header_is_case_sensitive() {
        let record = make_record(vec![("FROM", "test@example.com")]);
        assert_eq!(extract_header(&record, "From"), None);
        assert!(extract_header(&record, "FROM").is_some());
    }

    #[test]
    fn test_extract_header_first_match_wins() {
        let record = make_record(vec![("To", "first <a@x.com>"), ("To", "second <b@x.com>")]);
        assert_eq!(
            extract_header(&record, "To").map(|h| h.value.as_str()),
            Some("first <a@x.com>")
        );
    }

    #[test]
    fn test_require_header_missing() {
        let record = make_record(vec![("Subject", "hi")]);
        let err = require_header(&record, TO).unwrap_err();
        assert_eq!(
            err,
            MalformedMessageError::MissingHeader {
                message_id: record.id.clone(),
                header: "To",
            }
        );
    }
}
