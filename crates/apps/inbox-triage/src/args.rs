use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "inbox-triage")]
#[clap(author, version, about)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print window counts, importance count and top sender for a batch.
    Summary {
        /// JSON file holding an array of Gmail API message resources.
        #[clap(short, long)]
        input: PathBuf,
        /// Day window; defaults to the configured value.
        #[clap(short, long)]
        days: Option<u32>,
        /// Hour window; defaults to the configured value.
        #[clap(long)]
        hours: Option<u32>,
    },
    /// Print the priority tier of every message in a batch.
    Classify {
        /// JSON file holding an array of Gmail API message resources.
        #[clap(short, long)]
        input: PathBuf,
        /// Address of the mailbox owner.
        #[clap(short, long)]
        user_email: String,
    },
}
