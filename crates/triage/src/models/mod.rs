//! Domain models for triage

pub mod labels;
mod message;
mod priority;
mod sender;

pub use message::{Header, MessageId, MessageRecord, MessageRecordBuilder};
pub use priority::PriorityTier;
pub use sender::SenderKey;
