//! Mailing-list detection from the "To" header
//!
//! A message counts as list mail when it was not addressed to the user
//! personally: the recipients are hidden, the recipient list is large, or the
//! user's address does not appear exactly once among the recipients.

use serde::{Deserialize, Serialize};

use crate::error::{MalformedMessageError, Result};
use crate::headers::{TO, require_header};
use crate::models::MessageRecord;

/// "To" value Gmail reports when every recipient was Bcc'd
pub const UNDISCLOSED_RECIPIENTS: &str = "undisclosed-recipients:;";

/// Recipient count at which a message is treated as list mail
pub const MAILING_LIST_LOWER_BOUND: usize = 15;

/// Tunable thresholds for [`is_from_mailing_list`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailingListRules {
    /// Minimum number of "To" entries that marks list mail
    pub lower_bound: usize,
    /// Exact "To" value that marks hidden recipients
    pub undisclosed_recipients: String,
}

impl Default for MailingListRules {
    fn default() -> Self {
        Self {
            lower_bound: MAILING_LIST_LOWER_BOUND,
            undisclosed_recipients: UNDISCLOSED_RECIPIENTS.to_string(),
        }
    }
}

/// Decide whether a message was broadcast to a list rather than sent to
/// `user_email` personally.
///
/// # Errors
/// - `MissingHeader` if the message has no "To" header
/// - `MalformedRecipient` if, below the size bound, a recipient entry has
///   no `<address>` segment
pub fn is_from_mailing_list(
    record: &MessageRecord,
    user_email: &str,
    rules: &MailingListRules,
) -> Result<bool> {
    let to = require_header(record, TO)?;

    if to == rules.undisclosed_recipients {
        return Ok(true);
    }

    let recipients = split_recipients(to);
    if recipients.len() >= rules.lower_bound {
        return Ok(true);
    }

    let mut matches = 0;
    for entry in recipients {
        let address =
            embedded_address(entry).ok_or_else(|| MalformedMessageError::MalformedRecipient {
                message_id: record.id.clone(),
                entry: entry.to_string(),
            })?;
        if address == user_email {
            matches += 1;
        }
    }

    // Duplicated user addresses count as list-like too
    Ok(matches != 1)
}

/// Split a "To" value on commas, dropping trailing empty entries
/// (a dangling comma does not add a recipient)
fn split_recipients(value: &str) -> Vec<&str> {
    let mut entries: Vec<&str> = value.split(',').collect();
    while entries.len() > 1 && entries.last().is_some_and(|e| e.is_empty()) {
        entries.pop();
    }
    entries
}

/// The text between `<` and the following `>` of a recipient entry
fn embedded_address(entry: &str) -> Option<&str> {
    let (_, rest) = entry.split_once('<')?;
    let (address, _) = rest.split_once('>')?;
    Some(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = "user@example.com";

    fn with_to(to: &str) -> MessageRecord {
        MessageRecord::builder("m1").to(to).build()
    }

    fn detect(to: &str, user: &str) -> Result<bool> {
        is_from_mailing_list(&with_to(to), user, &MailingListRules::default())
    }

    fn recipients(n: usize, include_user: bool) -> String {
        let mut list: Vec<String> = (0..n)
            .map(|i| format!("Person {} <person{}@example.com>", i, i))
            .collect();
        if include_user {
            list[0] = format!("Me <{}>", USER);
        }
        list.join(", ")
    }

    #[test]
    fn test_missing_to_header() {
        let record = MessageRecord::builder("m1").from("a@x.com").build();
        let err = is_from_mailing_list(&record, USER, &MailingListRules::default()).unwrap_err();
        assert!(matches!(
            err,
            MalformedMessageError::MissingHeader { header: "To", .. }
        ));
    }

    #[test]
    fn test_undisclosed_recipients() {
        assert!(detect("undisclosed-recipients:;", USER).unwrap());
    }

    #[test]
    fn test_large_recipient_list_even_with_user() {
        assert!(detect(&recipients(15, true), USER).unwrap());
        assert!(!detect(&recipients(14, true), USER).unwrap());
    }

    #[test]
    fn test_large_list_skips_strict_parsing() {
        let to = vec!["bare@example.com"; 15].join(",");
        assert!(detect(&to, USER).unwrap());
    }

    #[test]
    fn test_user_present_once_or_absent() {
        let to = "Alice <a@x.com>, Bob <b@x.com>";
        assert!(detect(to, "c@x.com").unwrap());
        assert!(!detect(to, "a@x.com").unwrap());
    }

    #[test]
    fn test_user_listed_twice_is_list_like() {
        let to = "Alice <a@x.com>, Alice again <a@x.com>";
        assert!(detect(to, "a@x.com").unwrap());
    }

    #[test]
    fn test_bare_angle_address() {
        assert!(!detect("<a@x.com>", "a@x.com").unwrap());
    }

    #[test]
    fn test_address_comparison_is_case_sensitive() {
        assert!(detect("Alice <A@x.com>", "a@x.com").unwrap());
    }

    #[test]
    fn test_entry_without_angle_brackets_is_malformed() {
        let err = detect("Alice <a@x.com>, b@x.com", "a@x.com").unwrap_err();
        assert_eq!(
            err,
            MalformedMessageError::MalformedRecipient {
                message_id: MessageRecord::builder("m1").build().id,
                entry: " b@x.com".to_string(),
            }
        );
    }

    #[test]
    fn test_unclosed_angle_bracket_is_malformed() {
        assert!(matches!(
            detect("Alice <a@x.com", "a@x.com"),
            Err(MalformedMessageError::MalformedRecipient { .. })
        ));
    }

    #[test]
    fn test_empty_to_is_malformed() {
        assert!(matches!(
            detect("", USER),
            Err(MalformedMessageError::MalformedRecipient { .. })
        ));
    }

    #[test]
    fn test_trailing_comma_ignored() {
        assert!(!detect("Alice <a@x.com>,", "a@x.com").unwrap());
    }

    #[test]
    fn test_custom_rules() {
        let rules = MailingListRules {
            lower_bound: 2,
            undisclosed_recipients: "hidden:;".to_string(),
        };
        let record = with_to("Alice <a@x.com>, Bob <b@x.com>");
        assert!(is_from_mailing_list(&record, "a@x.com", &rules).unwrap());

        let record = with_to("hidden:;");
        assert!(is_from_mailing_list(&record, "a@x.com", &rules).unwrap());

        // Default literal no longer special once overridden
        let record = with_to(UNDISCLOSED_RECIPIENTS);
        assert!(is_from_mailing_list(&record, "a@x.com", &rules).is_err());
    }
}
