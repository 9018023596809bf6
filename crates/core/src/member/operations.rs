use crate::clock::Clock;
use crate::status::StatusCache;

use super::error::MemberError;
use super::types::{Member, MemberDraft, StatusFilter};

/// Validates a draft before creation or update.
///
/// Checks run in form order and the first failure wins.
pub fn validate_draft(draft: &MemberDraft) -> Result<(), MemberError> {
    if draft.name.trim().is_empty() {
        return Err(MemberError::EmptyName);
    }
    if draft.member_code.trim().is_empty() {
        return Err(MemberError::EmptyMemberCode);
    }
    if draft.mobile.trim().is_empty() {
        return Err(MemberError::EmptyMobile);
    }
    if !is_valid_mobile(&draft.mobile) {
        return Err(MemberError::InvalidMobile);
    }

    let required = [
        ("Training type", &draft.training_type),
        ("Address", &draft.address),
        ("ID proof", &draft.id_proof),
        ("Batch", &draft.batch),
        ("Plan type", &draft.plan_type),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(MemberError::MissingField(*field));
    }

    if draft.expiry_date < draft.purchase_date {
        return Err(MemberError::InvalidDateRange);
    }
    if !draft.total_amount.is_finite() || !draft.amount_paid.is_finite() {
        return Err(MemberError::NonFiniteAmount);
    }
    if draft.total_amount <= 0.0 {
        return Err(MemberError::NonPositiveTotal);
    }
    if draft.amount_paid < 0.0 {
        return Err(MemberError::NegativePayment);
    }
    if draft.amount_paid > draft.total_amount {
        return Err(MemberError::Overpaid);
    }

    Ok(())
}

/// Exactly ten ASCII digits.
fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit())
}

/// Sorts members by expiry date, soonest first. Ties keep their order.
pub fn sort_members_by_expiry(members: &mut [&Member]) {
    members.sort_by_key(|member| member.expiry_date);
}

/// Returns true if `member` matches an already lowercased, trimmed search term.
fn matches_search(member: &Member, term: &str) -> bool {
    member.name.to_lowercase().contains(term)
        || member.mobile.contains(term)
        || member.member_code.to_lowercase().contains(term)
}

/// Filters members by search term and status, then sorts by expiry.
///
/// The search term matches case-insensitively against name and member code,
/// and as a plain substring of the mobile number. A blank term matches
/// everyone. The result is always sorted, filtered or not.
pub fn filter_members<'a, C: Clock>(
    members: &'a [Member],
    search_term: &str,
    status_filter: StatusFilter,
    statuses: &mut StatusCache<C>,
) -> Vec<&'a Member> {
    let term = search_term.trim().to_lowercase();

    let mut filtered: Vec<&Member> = members
        .iter()
        .filter(|member| term.is_empty() || matches_search(member, &term))
        .filter(|member| {
            status_filter == StatusFilter::All
                || status_filter.matches(statuses.status(member.expiry_date))
        })
        .collect();

    sort_members_by_expiry(&mut filtered);
    filtered
}
