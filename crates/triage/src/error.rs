//! Errors raised when a message record lacks metadata an operation needs

use crate::models::MessageId;

/// A record does not carry the minimum metadata an operation requires
///
/// Batch operations fail as a whole when any record is malformed; a record is
/// never silently skipped or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedMessageError {
    /// A mandatory header ("To" or "From") is absent
    #[error("message {message_id}: '{header}' header not present, check message format")]
    MissingHeader {
        message_id: MessageId,
        header: &'static str,
    },

    /// The internal timestamp is 0 (unset)
    #[error("message {message_id}: internal timestamp not set, check message format")]
    MissingTimestamp { message_id: MessageId },

    /// A "To" recipient entry has no `<address>` segment
    #[error("message {message_id}: recipient '{entry}' has no <address> segment")]
    MalformedRecipient { message_id: MessageId, entry: String },
}

impl MalformedMessageError {
    /// ID of the offending message
    pub fn message_id(&self) -> &MessageId {
        match self {
            Self::MissingHeader { message_id, .. }
            | Self::MissingTimestamp { message_id }
            | Self::MalformedRecipient { message_id, .. } => message_id,
        }
    }
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, MalformedMessageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_message() {
        let err = MalformedMessageError::MissingHeader {
            message_id: MessageId::new("m42"),
            header: "To",
        };
        assert_eq!(
            err.to_string(),
            "message m42: 'To' header not present, check message format"
        );
        assert_eq!(err.message_id().as_str(), "m42");

        let err = MalformedMessageError::MissingTimestamp {
            message_id: MessageId::new("m7"),
        };
        assert!(err.to_string().starts_with("message m7:"));
    }
}
