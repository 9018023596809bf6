use async_trait::async_trait;

use crate::member::Member;

use super::Result;

/// The remote document store holding members.
///
/// Implementations perform one request per call: no caching, no retries.
/// Those belong to the repository layered on top.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Fetches every member document as stored.
    async fn fetch_members(&self) -> Result<Vec<Member>>;

    /// Inserts a new member.
    async fn insert_member(&self, member: &Member) -> Result<()>;

    /// Replaces the member stored under `id`.
    async fn replace_member(&self, id: &str, member: &Member) -> Result<()>;

    /// Removes the member stored under `id`.
    async fn remove_member(&self, id: &str) -> Result<()>;
}
