//! Lifecycle of one asynchronous data source.
//!
//! A [`FetchSlot`] owns the [`FetchState`] of a single source (profile, job
//! list, job details) and remembers the [`RequestId`] it is waiting on.
//! Completions are matched against that id so a response that was superseded,
//! or that arrives after the owning view has been torn down, never overwrites
//! newer state.

use jobby_logging::jobby_debug;

/// Identifies one issued request. Ids grow monotonically across the whole app.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Idle,
    Pending(RequestId),
    Success(T),
    Failure,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            FetchState::Success(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Result of feeding a completion into a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSlot<T> {
    state: FetchState<T>,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Moves the slot to `Pending` under `request`. Any previous payload or
    /// failure is dropped.
    pub fn begin(&mut self, request: RequestId) {
        self.state = FetchState::Pending(request);
    }

    /// Applies a completion if it belongs to the pending request.
    pub fn resolve<E>(&mut self, request: RequestId, result: Result<T, E>) -> Resolution {
        match self.state {
            FetchState::Pending(current) if current == request => {}
            _ => {
                jobby_debug!("Dropping stale completion for request {}", request);
                return Resolution::Stale;
            }
        }
        self.state = match result {
            Ok(payload) => FetchState::Success(payload),
            Err(_) => FetchState::Failure,
        };
        Resolution::Applied
    }

    /// Teardown on unmount.
    pub fn reset(&mut self) {
        self.state = FetchState::Idle;
    }
}
