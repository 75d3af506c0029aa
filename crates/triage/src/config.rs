//! Configuration loading for triage
//!
//! Settings are resolved in this order:
//! 1. JSON file (~/.config/inbox-triage/triage.json), or built-in defaults
//! 2. Environment variable overrides (`TRIAGE_*`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classify::MailingListRules;

/// Config filename in the inbox-triage config directory
const CONFIG_FILE: &str = "triage.json";

const ENV_LOWER_BOUND: &str = "TRIAGE_MAILING_LIST_LOWER_BOUND";
const ENV_DEFAULT_DAYS: &str = "TRIAGE_DEFAULT_DAYS";
const ENV_DEFAULT_HOURS: &str = "TRIAGE_DEFAULT_HOURS";

/// Triage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Heuristics for the mailing-list detector
    pub mailing_list: MailingListRules,
    /// Day window used when a caller does not supply one
    pub default_days: u32,
    /// Hour window used when a caller does not supply one
    pub default_hours: u32,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            mailing_list: MailingListRules::default(),
            default_days: 7,
            default_hours: 3,
        }
    }
}

impl TriageConfig {
    /// Load the config file if present (defaults otherwise), then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let base = if config::config_exists(CONFIG_FILE) {
            config::load_json(CONFIG_FILE)?
        } else {
            Self::default()
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse settings from a JSON string; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse triage config JSON")
    }

    /// Get the default config file path (~/.config/inbox-triage/triage.json)
    pub fn default_config_path() -> Option<PathBuf> {
        config::config_path(CONFIG_FILE)
    }

    /// Apply `TRIAGE_*` overrides read through `lookup`
    fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bound) = parse_override::<usize>(&lookup, ENV_LOWER_BOUND)? {
            self.mailing_list.lower_bound = bound;
        }
        if let Some(days) = parse_override::<u32>(&lookup, ENV_DEFAULT_DAYS)? {
            self.default_days = days;
        }
        if let Some(hours) = parse_override::<u32>(&lookup, ENV_DEFAULT_HOURS)? {
            self.default_hours = hours;
        }
        Ok(self)
    }
}

fn parse_override<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {}: {:?}", key, raw))
        })
        .transpose()
}
