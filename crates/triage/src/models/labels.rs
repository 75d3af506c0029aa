//! Well-known Gmail system label IDs read by triage
//!
//! Gmail label IDs are case-sensitive.

pub const INBOX: &str = "INBOX";
pub const STARRED: &str = "STARRED";
pub const IMPORTANT: &str = "IMPORTANT";
