/// Keyed request cache
///
/// Holds one `QueryState` per `QueryKey` and decides when a fetch has
/// to be started. The cache never performs I/O itself: `observe` and
/// `refetch` hand out a `FetchTicket`, the host runs the fetch, and the
/// result comes back through `resolve`. Each entry carries a generation
/// number and a result is only applied when its ticket still matches,
/// so a superseded fetch can never overwrite newer state.

use std::collections::HashMap;
use std::fmt;

use crate::api::FetchError;

/// Ordered tuple identifying a cached request, e.g. `["products", "1"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryKey(parts.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Request lifecycle without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Current state of one query
///
/// Data and error are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Success(T),
    Error(FetchError),
}

impl<T> QueryState<T> {
    pub fn status(&self) -> QueryStatus {
        match self {
            QueryState::Idle => QueryStatus::Idle,
            QueryState::Loading => QueryStatus::Loading,
            QueryState::Success(_) => QueryStatus::Success,
            QueryState::Error(_) => QueryStatus::Error,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// Proof that a fetch was started for a key at a given generation
///
/// Returned to the cache together with the fetch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub key: QueryKey,
    generation: u64,
}

#[derive(Debug)]
struct Entry<T> {
    state: QueryState<T>,
    generation: u64,
}

/// Session-scoped query table
#[derive(Debug)]
pub struct QueryCache<T> {
    entries: HashMap<QueryKey, Entry<T>>,
    next_generation: u64,
    /// Returned by `state` for disabled or unknown keys
    idle: QueryState<T>,
}

impl<T> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            next_generation: 0,
            idle: QueryState::Idle,
        }
    }

    /// Declare interest in `key` and start a fetch if one is needed
    ///
    /// A disabled query never fetches and creates no entry. An enabled
    /// query fetches only when the key has no entry yet; while a fetch
    /// is in flight, or once it has settled, the same key is not fetched
    /// again.
    pub fn observe(&mut self, key: &QueryKey, enabled: bool) -> Option<FetchTicket> {
        if !enabled || self.entries.contains_key(key) {
            return None;
        }
        Some(self.start(key.clone()))
    }

    /// Unconditionally fetch `key` again
    ///
    /// Any fetch already in flight for the key is superseded and its
    /// result will be discarded.
    pub fn refetch(&mut self, key: &QueryKey) -> FetchTicket {
        self.start(key.clone())
    }

    /// Apply the result of a fetch
    ///
    /// Returns false when the ticket is stale (the key was refetched
    /// since), in which case the cache is left untouched.
    pub fn resolve(&mut self, ticket: FetchTicket, result: Result<T, FetchError>) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.key) else {
            tracing::debug!(key = %ticket.key, "discarding result for unknown query");
            return false;
        };
        if entry.generation != ticket.generation {
            tracing::debug!(
                key = %ticket.key,
                stale = ticket.generation,
                current = entry.generation,
                "discarding superseded result"
            );
            return false;
        }

        entry.state = match result {
            Ok(data) => {
                tracing::debug!(key = %ticket.key, "query succeeded");
                QueryState::Success(data)
            }
            Err(err) => {
                tracing::warn!(key = %ticket.key, kind = err.kind(), "query failed: {}", err);
                QueryState::Error(err)
            }
        };
        true
    }

    /// Current state of `key`; `Idle` when disabled or never fetched
    pub fn state(&self, key: &QueryKey, enabled: bool) -> &QueryState<T> {
        if !enabled {
            return self.idle();
        }
        self.entries
            .get(key)
            .map(|entry| &entry.state)
            .unwrap_or(&self.idle)
    }

    /// The state every disabled query reports
    pub fn idle(&self) -> &QueryState<T> {
        &self.idle
    }

    fn start(&mut self, key: QueryKey) -> FetchTicket {
        self.next_generation += 1;
        let generation = self.next_generation;
        tracing::debug!(key = %key, generation, "query loading");
        self.entries.insert(
            key.clone(),
            Entry {
                state: QueryState::Loading,
                generation,
            },
        );
        FetchTicket { key, generation }
    }
}
