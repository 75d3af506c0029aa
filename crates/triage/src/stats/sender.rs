//! Most-significant sender ranking
//!
//! Senders are ranked by how many messages they sent, with the timestamp of
//! their most recent message breaking ties.

use std::collections::HashMap;

use log::debug;

use crate::error::{MalformedMessageError, Result};
use crate::headers::{FROM, require_header};
use crate::models::{MessageRecord, SenderKey};

/// Per-sender aggregate over a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderStats {
    /// Raw "From" value identifying the sender
    pub sender: SenderKey,
    /// Number of messages in the batch from this sender
    pub frequency: usize,
    /// Latest internal timestamp (ms since epoch) among those messages
    pub most_recent_ms: i64,
}

impl SenderStats {
    /// Whether `self` ranks strictly above `other`
    fn outranks(&self, other: &Self) -> bool {
        (self.frequency, self.most_recent_ms) > (other.frequency, other.most_recent_ms)
    }
}

/// Build per-sender frequency and recency in first-seen order
///
/// Every record must carry a "From" header and a non-zero timestamp; the
/// "From" headers of the whole batch are checked before any timestamp.
///
/// # Errors
/// - `MissingHeader` if any record lacks a "From" header
/// - `MissingTimestamp` if any record's internal timestamp is unset
pub fn tally_senders(records: &[MessageRecord]) -> Result<Vec<SenderStats>> {
    let senders = records
        .iter()
        .map(|record| require_header(record, FROM))
        .collect::<Result<Vec<&str>>>()?;

    let mut tallies: Vec<SenderStats> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (record, sender) in records.iter().zip(senders) {
        if !record.has_timestamp() {
            return Err(MalformedMessageError::MissingTimestamp {
                message_id: record.id.clone(),
            });
        }

        match index.get(sender) {
            Some(&i) => {
                let tally = &mut tallies[i];
                tally.frequency += 1;
                tally.most_recent_ms = tally.most_recent_ms.max(record.internal_date);
            }
            None => {
                index.insert(sender, tallies.len());
                tallies.push(SenderStats {
                    sender: SenderKey::from(sender),
                    frequency: 1,
                    most_recent_ms: record.internal_date,
                });
            }
        }
    }

    Ok(tallies)
}

/// Select the top sender: highest frequency, then most recent message.
///
/// Entries tied on both keys resolve to the one that appears first.
pub fn rank_top_sender(stats: &[SenderStats]) -> Option<&SenderStats> {
    let mut best: Option<&SenderStats> = None;
    for candidate in stats {
        if best.is_none_or(|current| candidate.outranks(current)) {
            best = Some(candidate);
        }
    }
    best
}

/// Display name of the most significant sender in a batch
///
/// Returns `Ok(None)` for an empty batch.
pub fn find_most_frequent_sender(records: &[MessageRecord]) -> Result<Option<String>> {
    let stats = tally_senders(records)?;
    let top = rank_top_sender(&stats);

    if let Some(top) = top {
        debug!(
            "Top sender {:?}: {} messages, latest at {} ({} senders)",
            top.sender.as_str(),
            top.frequency,
            top.most_recent_ms,
            stats.len()
        );
    }

    Ok(top.map(|s| s.sender.display_name()))
}
