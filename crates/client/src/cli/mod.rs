//! CLI command definitions.

pub mod members;

use clap::{Parser, Subcommand, ValueEnum};
use gymdesk_core::member::StatusFilter;

use crate::config::DEFAULT_BASE_URL;

/// CLI client for the gymdesk member API.
#[derive(Debug, Parser)]
#[command(name = "gymdesk")]
#[command(version, about = "CLI client for the gymdesk member API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "GYMDESK_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List members, soonest expiry first.
    List {
        /// Match against name, member ID or mobile.
        #[arg(long, default_value = "")]
        search: String,
        /// Status filter: all, active, expiring or expired.
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Show dashboard counts and income.
    Stats,
    /// Register a new member.
    Create(members::MemberArgs),
    /// Edit an existing member.
    Update {
        /// Member ID as shown by `list`.
        id: String,
        #[command(flatten)]
        changes: members::MemberChanges,
    },
    /// Start a new membership period.
    Renew {
        /// Member ID as shown by `list`.
        id: String,
        #[command(flatten)]
        renewal: members::RenewArgs,
    },
    /// Delete a member.
    Delete {
        /// Member ID as shown by `list`.
        id: String,
    },
    /// Suggest the next free member code.
    SuggestId,
    /// Check whether a member code is free.
    CheckId {
        /// Member code to check.
        code: String,
    },
}
