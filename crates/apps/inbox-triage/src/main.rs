//! inbox-triage - Summarize and classify a batch of Gmail messages
//!
//! Reads message resources already fetched from the Gmail API and prints the
//! triage results as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::path::Path;
use triage::{GmailMessage, MessageRecord, TriageConfig};

mod args;

use args::{Args, Command};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    if let Err(e) = run(Args::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = TriageConfig::load().context("Failed to load triage config")?;

    let output = match args.command {
        Command::Summary { input, days, hours } => {
            let records = load_records(&input)?;
            let days = days.unwrap_or(config.default_days);
            let hours = hours.unwrap_or(config.default_hours);

            let summary = triage::summarize(&records, days, hours)
                .with_context(|| format!("Cannot summarize {}", input.display()))?;
            serde_json::to_string_pretty(&summary)?
        }
        Command::Classify { input, user_email } => {
            let records = load_records(&input)?;

            let views = triage::classify_messages(&records, &user_email, &config.mailing_list)
                .with_context(|| format!("Cannot classify {}", input.display()))?;
            serde_json::to_string_pretty(&views)?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Read and normalize a JSON array of Gmail message resources
fn load_records(path: &Path) -> Result<Vec<MessageRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let msgs: Vec<GmailMessage> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let records = triage::normalize_messages(msgs)?;
    info!("Loaded {} messages from {}", records.len(), path.display());
    Ok(records)
}
