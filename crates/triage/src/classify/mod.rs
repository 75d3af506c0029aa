//! Per-message classification
//!
//! Mailing-list detection and priority assignment operate on one record at a
//! time and are called directly by whoever composes a classified view.

mod actionable;
mod mailing_list;
mod priority;

pub use actionable::{ActionableMessage, classify_message, classify_messages};
pub use mailing_list::{
    MAILING_LIST_LOWER_BOUND, MailingListRules, UNDISCLOSED_RECIPIENTS, is_from_mailing_list,
};
pub use priority::assign_priority;
