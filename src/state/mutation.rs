/// Lifecycle of a fire-and-forget remote write (product creation)
///
/// Only the most recent submission is tracked: an earlier one that
/// settles late is ignored.

use crate::api::FetchError;

#[derive(Debug, Clone, PartialEq)]
pub enum MutationState<T> {
    Idle,
    Pending,
    Success(T),
    Error(FetchError),
}

/// Identifies one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationTicket(u64);

#[derive(Debug)]
pub struct Mutation<T> {
    state: MutationState<T>,
    latest: u64,
}

impl<T> Default for Mutation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mutation<T> {
    pub fn new() -> Self {
        Self {
            state: MutationState::Idle,
            latest: 0,
        }
    }

    pub fn state(&self) -> &MutationState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, MutationState::Pending)
    }

    /// Start a new submission, superseding any pending one
    pub fn begin(&mut self) -> MutationTicket {
        self.latest += 1;
        self.state = MutationState::Pending;
        MutationTicket(self.latest)
    }

    /// Record the outcome of a submission; false if it was superseded
    pub fn settle(&mut self, ticket: MutationTicket, result: Result<T, FetchError>) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.state = match result {
            Ok(confirmation) => MutationState::Success(confirmation),
            Err(err) => MutationState::Error(err),
        };
        true
    }
}
