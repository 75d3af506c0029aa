//! Aggregate statistics over a batch of message records
//!
//! Every function here fails the whole batch on the first malformed record.

mod sender;
mod summary;
mod window;

pub use sender::{SenderStats, find_most_frequent_sender, rank_top_sender, tally_senders};
pub use summary::{InboxSummary, summarize, summarize_at};
pub use window::{
    count_important, count_within_last_n_days, count_within_last_n_days_at,
    count_within_last_n_hours, count_within_last_n_hours_at,
};
