use tokio::sync::RwLock;
use tracing::debug;

use crate::state::{ErrorInfo, ViewState};

/// Identifies one fetch issued against a [`Slot`]. Only the latest ticket
/// may write its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

struct Inner<T> {
    generation: u64,
    state: ViewState<T>,
}

/// A page-owned [`ViewState`] guarded by a generation counter. Results
/// settled with a superseded ticket are discarded.
pub struct Slot<T> {
    name: &'static str,
    inner: RwLock<Inner<T>>,
}

impl<T: Clone> Slot<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Inner {
                generation: 0,
                state: ViewState::idle(),
            }),
        }
    }

    pub async fn begin(&self) -> Ticket {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.state.start_loading();
        debug!(slot = self.name, generation = inner.generation, "fetch started");
        Ticket(inner.generation)
    }

    /// Returns false when the ticket was superseded and the data dropped.
    pub async fn settle_ok(&self, ticket: Ticket, data: T) -> bool {
        let mut inner = self.inner.write().await;
        if !self.accepts(&inner, ticket) {
            return false;
        }
        inner.state.succeed(data);
        true
    }

    pub async fn settle_err(&self, ticket: Ticket, error: ErrorInfo, fallback: Option<T>) -> bool {
        let mut inner = self.inner.write().await;
        if !self.accepts(&inner, ticket) {
            return false;
        }
        inner.state.fail(error, fallback);
        true
    }

    /// Supersedes every in-flight fetch without starting a new one.
    pub async fn invalidate(&self) {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        debug!(slot = self.name, generation = inner.generation, "slot invalidated");
    }

    pub async fn snapshot(&self) -> ViewState<T> {
        self.inner.read().await.state.clone()
    }

    pub async fn is_current(&self, ticket: Ticket) -> bool {
        self.inner.read().await.generation == ticket.0
    }

    fn accepts(&self, inner: &Inner<T>, ticket: Ticket) -> bool {
        if inner.generation == ticket.0 {
            return true;
        }
        debug!(
            slot = self.name,
            stale = ticket.0,
            current = inner.generation,
            "discarding stale response"
        );
        false
    }
}
