//! Guard against stale results from overlapping generations.
//!
//! When a caller starts a new generation before the previous one has returned,
//! only the most recently started one may publish its outcome. Each start takes a
//! [`RequestTicket`]; completions presenting an older ticket are discarded.

use crate::GenerationOutcome;
use std::future::Future;
use std::sync::Mutex;
use tracing::debug;

/// Identifies one started generation. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Sequence number of this ticket, starting at 1.
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct SlotState {
    issued: u64,
    outcome: Option<(RequestTicket, GenerationOutcome)>,
}

/// Holds the outcome of the latest generation a caller started.
///
/// # Examples
///
/// ```
/// use storyboard::ResultSlot;
///
/// let slot = ResultSlot::new();
/// let first = slot.issue();
/// let second = slot.issue();
///
/// assert!(!slot.complete(first, Ok(vec![])));
/// assert!(slot.complete(second, Ok(vec![])));
/// ```
#[derive(Debug, Default)]
pub struct ResultSlot {
    state: Mutex<SlotState>,
}

impl ResultSlot {
    /// An empty slot with no tickets issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn issue(&self) -> RequestTicket {
        let mut state = self.lock();
        state.issued += 1;
        RequestTicket(state.issued)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.lock().issued == ticket.0
    }

    /// Stores `outcome` if `ticket` is still current. Returns whether it was stored.
    pub fn complete(&self, ticket: RequestTicket, outcome: GenerationOutcome) -> bool {
        let mut state = self.lock();
        if state.issued != ticket.0 {
            debug!(
                ticket = ticket.0,
                latest = state.issued,
                "Discarding stale generation result"
            );
            return false;
        }
        state.outcome = Some((ticket, outcome));
        true
    }

    /// Issues a ticket, awaits `generation`, and completes with its outcome.
    ///
    /// Returns whether the outcome was stored.
    pub async fn track<F>(&self, generation: F) -> bool
    where
        F: Future<Output = GenerationOutcome>,
    {
        let ticket = self.issue();
        let outcome = generation.await;
        self.complete(ticket, outcome)
    }

    /// A copy of the stored outcome, if any.
    pub fn current(&self) -> Option<GenerationOutcome> {
        self.lock()
            .outcome
            .as_ref()
            .map(|(_, outcome)| outcome.clone())
    }

    /// Ticket of the stored outcome, if any.
    pub fn current_ticket(&self) -> Option<RequestTicket> {
        self.lock().outcome.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Removes and returns the stored outcome.
    pub fn take(&self) -> Option<GenerationOutcome> {
        self.lock().outcome.take().map(|(_, outcome)| outcome)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SlotState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
