//! Member repository with list caching, request coalescing and retries.
//!
//! Wraps a [`MemberStore`] the way a cache-aside decorator would:
//!
//! - **Reads**: serve the member list from a short-lived cache; on a miss,
//!   join the fetch already in flight or start one, retrying transient
//!   failures.
//! - **Writes**: validate, persist, then invalidate the list cache.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! let store = Arc::new(GymdeskClient::new("http://localhost:5000"));
//! let repository = MemberRepository::new(store, RepositoryConfig::from_env());
//!
//! let members = repository.list().await?;
//! ```

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::future::{BoxFuture, FutureExt, Shared};
use tokio::sync::Mutex;

use gymdesk_core::clock::{Clock, SystemClock};
use gymdesk_core::member::{
    generate_member_id, is_member_code_available, suggest_next_member_code, validate_draft,
    Member, MemberDraft,
};
use gymdesk_core::storage::{
    normalize_members, resolve_store_id, strip_secondary_id, MemberStore, Result, StoreError,
};

use crate::config::RepositoryConfig;

type SharedFetch = Shared<BoxFuture<'static, Result<Arc<Vec<Member>>>>>;

/// A fetched member list and when it arrived.
struct CachedList {
    members: Arc<Vec<Member>>,
    fetched_at: DateTime<Utc>,
}

/// The fetch every concurrent `list` call waits on.
struct InFlight {
    id: u64,
    fetch: SharedFetch,
}

#[derive(Default)]
struct ListState {
    cache: Option<CachedList>,
    in_flight: Option<InFlight>,
    next_fetch_id: u64,
}

/// Member repository over a remote [`MemberStore`].
///
/// # Type Parameters
///
/// * `S` - The store implementation
/// * `K` - The clock used to age the list cache
pub struct MemberRepository<S, K = SystemClock>
where
    S: MemberStore,
    K: Clock,
{
    store: Arc<S>,
    clock: K,
    config: RepositoryConfig,
    state: Mutex<ListState>,
}

impl<S> MemberRepository<S, SystemClock>
where
    S: MemberStore + 'static,
{
    /// Creates a repository aging its cache by the wall clock.
    pub fn new(store: Arc<S>, config: RepositoryConfig) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S, K> MemberRepository<S, K>
where
    S: MemberStore + 'static,
    K: Clock,
{
    /// Creates a repository with an explicit clock.
    pub fn with_clock(store: Arc<S>, config: RepositoryConfig, clock: K) -> Self {
        Self {
            store,
            clock,
            config,
            state: Mutex::new(ListState::default()),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Returns every member, each with a populated `id`.
    ///
    /// Served from cache while it is younger than `list_cache_ttl`.
    /// Concurrent callers during a fetch all receive that fetch's result.
    pub async fn list(&self) -> Result<Vec<Member>> {
        let (fetch_id, fetch) = {
            let mut state = self.state.lock().await;

            if let Some(cached) = &state.cache {
                if self.is_fresh(cached.fetched_at) {
                    tracing::trace!(count = cached.members.len(), "Cache hit for member list");
                    return Ok(cached.members.as_ref().clone());
                }
            }

            match &state.in_flight {
                Some(in_flight) => {
                    tracing::trace!(fetch_id = in_flight.id, "Joining in-flight member fetch");
                    (in_flight.id, in_flight.fetch.clone())
                }
                None => {
                    let id = state.next_fetch_id;
                    state.next_fetch_id += 1;
                    tracing::trace!(fetch_id = id, "Cache miss for member list");

                    let fetch = fetch_with_retry(Arc::clone(&self.store), self.config.clone())
                        .boxed()
                        .shared();
                    state.in_flight = Some(InFlight {
                        id,
                        fetch: fetch.clone(),
                    });
                    (id, fetch)
                }
            }
        };

        let result = fetch.await;

        {
            let mut state = self.state.lock().await;
            // An invalidation while the fetch ran clears `in_flight`; the
            // result may then predate the mutation and must not be cached.
            if state.in_flight.as_ref().is_some_and(|f| f.id == fetch_id) {
                state.in_flight = None;
                if let Ok(members) = &result {
                    state.cache = Some(CachedList {
                        members: Arc::clone(members),
                        fetched_at: self.clock.now(),
                    });
                }
            }
        }

        result.map(|members| members.as_ref().clone())
    }

    /// Returns the member with the given (normalized) id.
    pub async fn get(&self, id: &str) -> Result<Member> {
        let id = id.trim();
        self.list()
            .await?
            .into_iter()
            .find(|member| member.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Validates a draft, assigns a fresh client-side id and persists it.
    pub async fn register(&self, draft: MemberDraft) -> Result<Member> {
        let member = draft.into_member(generate_member_id());
        self.create(&member).await?;
        Ok(member)
    }

    /// Persists a new member.
    ///
    /// Fails with `Conflict` when the member code is taken and `Validation`
    /// when the payload is rejected, locally or by the store.
    pub async fn create(&self, member: &Member) -> Result<()> {
        let payload = self.prepare_payload(member)?;

        self.with_timeout(self.store.insert_member(&payload)).await?;
        self.invalidate().await;

        tracing::debug!(
            member_id = %payload.id,
            member_code = %payload.member_code,
            "Member created"
        );
        Ok(())
    }

    /// Persists edits (including renewals) to an existing member.
    ///
    /// Addresses the store by `_id` when present, else `id`, and never sends
    /// `_id` in the body.
    pub async fn update(&self, member: &Member) -> Result<()> {
        let id = resolve_store_id(member)
            .ok_or(StoreError::IdentifierMissing)?
            .to_string();
        let payload = strip_secondary_id(&self.prepare_payload(member)?);

        self.with_timeout(self.store.replace_member(&id, &payload)).await?;
        self.invalidate().await;

        tracing::debug!(member_id = %id, "Member updated");
        Ok(())
    }

    /// Deletes a member. Irreversible.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = id.trim();
        if id.is_empty() {
            return Err(StoreError::IdentifierMissing);
        }

        self.with_timeout(self.store.remove_member(id)).await?;
        self.invalidate().await;

        tracing::debug!(member_id = %id, "Member deleted");
        Ok(())
    }

    /// Drops the cached list and detaches any in-flight fetch.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        state.cache = None;
        state.in_flight = None;
        tracing::trace!("Member list cache invalidated");
    }

    /// Suggests the next free numeric member code.
    pub async fn suggest_next_member_code(&self) -> Result<String> {
        let members = self.list().await?;
        Ok(suggest_next_member_code(&members))
    }

    /// Returns true if no member uses `code` yet.
    pub async fn is_member_code_available(&self, code: &str) -> Result<bool> {
        let members = self.list().await?;
        Ok(is_member_code_available(&members, code))
    }

    /// Validated copy of `member` with its due amount recomputed.
    fn prepare_payload(&self, member: &Member) -> Result<Member> {
        validate_draft(&member.to_draft()).map_err(|e| StoreError::Validation(e.to_string()))?;

        let mut payload = member.clone();
        payload.set_payment(member.total_amount, member.amount_paid);
        Ok(payload)
    }

    fn is_fresh(&self, fetched_at: DateTime<Utc>) -> bool {
        (self.clock.now() - fetched_at)
            .to_std()
            .is_ok_and(|age| age < self.config.list_cache_ttl)
    }

    async fn with_timeout<T>(&self, operation: impl Future<Output = Result<T>>) -> Result<T> {
        with_timeout(self.config.request_timeout, operation).await
    }
}

/// Runs `operation`, failing with `Timeout` once `timeout` elapses.
async fn with_timeout<T>(
    timeout: Duration,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(timeout, operation)
        .await
        .unwrap_or_else(|_| Err(StoreError::Timeout(timeout.as_millis() as u64)))
}

/// Fetches and normalizes the member list, retrying transient failures.
async fn fetch_with_retry<S>(store: Arc<S>, config: RepositoryConfig) -> Result<Arc<Vec<Member>>>
where
    S: MemberStore + ?Sized,
{
    let mut attempt: u32 = 1;
    loop {
        match with_timeout(config.request_timeout, store.fetch_members()).await {
            Ok(documents) => {
                let received = documents.len();
                let members = normalize_members(documents);
                if members.len() < received {
                    tracing::warn!(
                        dropped = received - members.len(),
                        "Dropped member documents without an identifier"
                    );
                }
                tracing::debug!(count = members.len(), attempt, "Fetched members");
                return Ok(Arc::new(members));
            }
            Err(err) if err.is_transient() && attempt <= config.max_retries => {
                let delay = config.retry_delay_for(attempt);
                tracing::warn!(
                    attempt,
                    retries_left = config.max_retries + 1 - attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "Member fetch failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::warn!(attempt, error = %err, "Member fetch failed");
                return Err(err);
            }
        }
    }
}
