//! Triage crate - Analytics over already-fetched email metadata
//!
//! This crate provides pure, synchronous computation over an in-memory batch
//! of message records:
//! - Domain models (MessageRecord, PriorityTier, SenderKey)
//! - Header lookup
//! - Mailing-list detection and priority classification
//! - Window counts, importance counts and most-significant-sender ranking
//! - Normalization of Gmail API message resources into records
//!
//! Fetching, authentication and response formatting live outside this crate.

pub mod classify;
pub mod config;
pub mod error;
pub mod gmail;
pub mod headers;
pub mod models;
pub mod stats;

pub use classify::{
    ActionableMessage, MailingListRules, assign_priority, classify_message, classify_messages,
    is_from_mailing_list,
};
pub use config::TriageConfig;
pub use error::{MalformedMessageError, Result};
pub use gmail::{api::GmailMessage, normalize_message, normalize_messages};
pub use headers::{extract_header, require_header};
pub use models::{Header, MessageId, MessageRecord, PriorityTier, SenderKey};
pub use stats::{
    InboxSummary, SenderStats, count_important, count_within_last_n_days,
    count_within_last_n_hours, find_most_frequent_sender, rank_top_sender, summarize,
    summarize_at, tally_senders,
};
