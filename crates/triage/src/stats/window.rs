//! Counting messages by recency window and importance
//!
//! Pure functions that can be tested without a clock: each `*_at` variant
//! takes `now` explicitly, and the plain variants sample it once per call.

use chrono::{DateTime, Utc};
use log::debug;

use crate::error::{MalformedMessageError, Result};
use crate::models::MessageRecord;

/// Count messages received within the last `hours` hours
///
/// # Errors
/// `MissingTimestamp` if any record's internal timestamp is unset.
pub fn count_within_last_n_hours(records: &[MessageRecord], hours: u32) -> Result<usize> {
    count_within_last_n_hours_at(records, hours, Utc::now())
}

/// [`count_within_last_n_hours`] against a fixed `now`
pub fn count_within_last_n_hours_at(
    records: &[MessageRecord],
    hours: u32,
    now: DateTime<Utc>,
) -> Result<usize> {
    count_since(records, hours_before(now, hours))
}

/// Count messages received within the last `days` days
///
/// # Errors
/// `MissingTimestamp` if any record's internal timestamp is unset.
pub fn count_within_last_n_days(records: &[MessageRecord], days: u32) -> Result<usize> {
    count_within_last_n_days_at(records, days, Utc::now())
}

/// [`count_within_last_n_days`] against a fixed `now`
pub fn count_within_last_n_days_at(
    records: &[MessageRecord],
    days: u32,
    now: DateTime<Utc>,
) -> Result<usize> {
    count_since(records, days_before(now, days))
}

/// Count messages labelled IMPORTANT; records without labels count as 0
pub fn count_important(records: &[MessageRecord]) -> usize {
    records.iter().filter(|r| r.is_important()).count()
}

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Cutoff (ms since epoch) `hours` before `now`, saturating at `i64::MIN`
pub(crate) fn hours_before(now: DateTime<Utc>, hours: u32) -> i64 {
    now.timestamp_millis().saturating_sub(i64::from(hours) * MS_PER_HOUR)
}

/// Cutoff (ms since epoch) `days` before `now`, saturating at `i64::MIN`
pub(crate) fn days_before(now: DateTime<Utc>, days: u32) -> i64 {
    now.timestamp_millis().saturating_sub(i64::from(days) * MS_PER_DAY)
}

/// Count records whose internal timestamp is at or after `cutoff_ms`
pub(crate) fn count_since(records: &[MessageRecord], cutoff_ms: i64) -> Result<usize> {
    let mut count = 0;

    for record in records {
        if !record.has_timestamp() {
            return Err(MalformedMessageError::MissingTimestamp {
                message_id: record.id.clone(),
            });
        }
        if record.internal_date >= cutoff_ms {
            count += 1;
        }
    }

    debug!("{} of {} messages since {}ms", count, records.len(), cutoff_ms);
    Ok(count)
}
