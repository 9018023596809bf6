use uuid::Uuid;

use super::types::Member;

/// Generates a fresh client-side member id.
pub fn generate_member_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Returns true if no member already uses `code`.
pub fn is_member_code_available(members: &[Member], code: &str) -> bool {
    let code = code.trim();
    !members.iter().any(|member| member.member_code.trim() == code)
}

/// Suggests the next numeric member code: the largest all-digit code plus
/// one, zero-padded to three digits. Non-numeric codes are ignored.
pub fn suggest_next_member_code(members: &[Member]) -> String {
    let next = members
        .iter()
        .map(|member| member.member_code.trim())
        .filter(|code| !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|code| code.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1);

    format!("{next:03}")
}
