mod codes;
mod error;
mod operations;
mod stats;
mod types;

pub use codes::{generate_member_id, is_member_code_available, suggest_next_member_code};
pub use error::MemberError;
pub use operations::{filter_members, sort_members_by_expiry, validate_draft};
pub use stats::aggregate;
pub use types::{DashboardStats, Member, MemberDraft, MemberStatus, StatusFilter};
