//! Output formatting functions.

pub mod json;
pub mod pretty;

use gymdesk_core::member::{Member, MemberStatus};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: Serialize>(
    value: &T,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
}

/// A member alongside its derived status, as shown in listings.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MemberRow<'a> {
    #[serde(flatten)]
    pub member: &'a Member,
    pub status: MemberStatus,
}
