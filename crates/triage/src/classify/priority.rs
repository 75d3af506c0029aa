//! Priority tier assignment

use crate::error::Result;
use crate::models::{MessageRecord, PriorityTier};

use super::{MailingListRules, is_from_mailing_list};

/// Assign a priority tier to a message, first match wins:
///
/// 1. Starred -> `High`
/// 2. Not from a mailing list, or marked important -> `Medium`
/// 3. Otherwise -> `Low`
///
/// Starred messages are classified without consulting the "To" header, so
/// they never fail. Everything else propagates mailing-list detection errors.
pub fn assign_priority(
    record: &MessageRecord,
    user_email: &str,
    rules: &MailingListRules,
) -> Result<PriorityTier> {
    if record.is_starred() {
        return Ok(PriorityTier::High);
    }

    if !is_from_mailing_list(record, user_email, rules)? || record.is_important() {
        return Ok(PriorityTier::Medium);
    }

    Ok(PriorityTier::Low)
}
