//! Identifier rules for members that may carry both a client-side `id` and a
//! store-assigned `_id`.
//!
//! The store-assigned id always wins. This is a compatibility shim for
//! documents written before the store started assigning ids.

use crate::member::Member;

/// The id the store knows this member by: `_id` if set, else `id`.
/// `None` when neither is populated.
pub fn resolve_store_id(member: &Member) -> Option<&str> {
    member
        .secondary_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .or_else(|| Some(member.id.as_str()).filter(|id| !id.trim().is_empty()))
}

/// Makes `id` carry the authoritative identifier.
///
/// Returns `None` for a document with no identifier at all, since it can be
/// neither updated nor deleted.
pub fn normalize_member(mut member: Member) -> Option<Member> {
    let id = resolve_store_id(&member)?.to_string();
    member.id = id;
    Some(member)
}

/// Normalizes a fetched collection, dropping unaddressable documents.
pub fn normalize_members(members: Vec<Member>) -> Vec<Member> {
    members.into_iter().filter_map(normalize_member).collect()
}

/// Copy of `member` suitable as an update body: `_id` removed so the store
/// does not reject the write as an attempt to change its key.
pub fn strip_secondary_id(member: &Member) -> Member {
    Member {
        secondary_id: None,
        ..member.clone()
    }
}
