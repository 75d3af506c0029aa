//! Inbox overview combining the window, importance and sender statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::MessageRecord;

use super::window::{count_since, days_before, hours_before};
use super::find_most_frequent_sender;

/// Statistics over a batch of (typically unread) messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxSummary {
    /// Day window the summary covers
    pub n_days: u32,
    /// Short hour window
    pub m_hours: u32,
    /// Messages received within the last `n_days` days
    pub unread_from_n_days: usize,
    /// Messages received within the last `m_hours` hours
    pub unread_from_m_hours: usize,
    /// IMPORTANT messages within the last `n_days` days
    pub important_from_n_days: usize,
    /// Display name of the most significant sender, `None` for an empty batch
    pub top_sender: Option<String>,
}

/// Summarize a batch using the current time
pub fn summarize(records: &[MessageRecord], n_days: u32, m_hours: u32) -> Result<InboxSummary> {
    summarize_at(records, n_days, m_hours, Utc::now())
}

/// Summarize a batch against a fixed `now`, shared by both windows
pub fn summarize_at(
    records: &[MessageRecord],
    n_days: u32,
    m_hours: u32,
    now: DateTime<Utc>,
) -> Result<InboxSummary> {
    let day_cutoff_ms = days_before(now, n_days);
    let hour_cutoff_ms = hours_before(now, m_hours);

    let unread_from_n_days = count_since(records, day_cutoff_ms)?;
    let unread_from_m_hours = count_since(records, hour_cutoff_ms)?;

    let important_from_n_days = records
        .iter()
        .filter(|r| r.internal_date >= day_cutoff_ms && r.is_important())
        .count();

    let top_sender = find_most_frequent_sender(records)?;

    Ok(InboxSummary {
        n_days,
        m_hours,
        unread_from_n_days,
        unread_from_m_hours,
        important_from_n_days,
        top_sender,
    })
}
