//! Classified view of a message for triage display

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::headers::{SUBJECT, extract_header};
use crate::models::{MessageId, MessageRecord, PriorityTier};

use super::{MailingListRules, assign_priority};

/// A message together with its assigned priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionableMessage {
    /// Gmail message ID
    pub id: MessageId,
    /// Subject line, empty when the header is absent
    pub subject: String,
    /// Assigned tier
    pub priority: PriorityTier,
}

/// Build the classified view of a single message
pub fn classify_message(
    record: &MessageRecord,
    user_email: &str,
    rules: &MailingListRules,
) -> Result<ActionableMessage> {
    let priority = assign_priority(record, user_email, rules)?;
    let subject = extract_header(record, SUBJECT)
        .map(|h| h.value.clone())
        .unwrap_or_default();

    Ok(ActionableMessage {
        id: record.id.clone(),
        subject,
        priority,
    })
}

/// Classify a batch in input order; the first malformed record fails the batch
pub fn classify_messages(
    records: &[MessageRecord],
    user_email: &str,
    rules: &MailingListRules,
) -> Result<Vec<ActionableMessage>> {
    records
        .iter()
        .map(|record| classify_message(record, user_email, rules))
        .collect::<Result<Vec<_>>>()
        .inspect_err(|e| warn!("Rejecting batch of {} messages: {}", records.len(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedMessageError;

    const USER: &str = "user@example.com";

    #[test]
    fn test_classify_message() {
        let record = MessageRecord::builder("m1")
            .to("Me <user@example.com>")
            .subject("Lunch?")
            .build();

        let view = classify_message(&record, USER, &MailingListRules::default()).unwrap();
        assert_eq!(view.id.as_str(), "m1");
        assert_eq!(view.subject, "Lunch?");
        assert_eq!(view.priority, PriorityTier::Medium);
    }

    #[test]
    fn test_classify_message_without_subject() {
        let record = MessageRecord::builder("m1")
            .to("Me <user@example.com>")
            .labels(["STARRED"])
            .build();

        let view = classify_message(&record, USER, &MailingListRules::default()).unwrap();
        assert_eq!(view.subject, "");
        assert_eq!(view.priority, PriorityTier::High);
    }

    #[test]
    fn test_classify_messages_keeps_order() {
        let records = vec![
            MessageRecord::builder("a").to("List <list@example.com>").build(),
            MessageRecord::builder("b").to("Me <user@example.com>").build(),
        ];

        let views = classify_messages(&records, USER, &MailingListRules::default()).unwrap();
        let tiers: Vec<PriorityTier> = views.iter().map(|v| v.priority).collect();
        assert_eq!(tiers, vec![PriorityTier::Low, PriorityTier::Medium]);
    }

    #[test]
    fn test_classify_messages_fails_whole_batch() {
        let records = vec![
            MessageRecord::builder("a").to("Me <user@example.com>").build(),
            MessageRecord::builder("b").build(),
        ];

        let err = classify_messages(&records, USER, &MailingListRules::default()).unwrap_err();
        assert!(matches!(err, MalformedMessageError::MissingHeader { .. }));
        assert_eq!(err.message_id().as_str(), "b");
    }
}
