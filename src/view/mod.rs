//! The fetch lifecycle shared by every page.
//!
//! A page issues exactly one request per trigger and renders one of three
//! mutually exclusive states: still loading, failed with a user-facing
//! message, or ready with the unwrapped payload. [`ViewModel`] enforces the
//! transitions and drops results from superseded fetches via a generation
//! counter, so a late response can never overwrite a newer lifecycle.

/// The three mutually exclusive states of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// A request is in flight; no previous data is visible.
    Loading,
    /// The request succeeded with this payload.
    Ready(T),
    /// The request failed with this user-facing message.
    Failed(String),
}

impl<T> ViewState<T> {
    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Handle tying a resolution back to the fetch that started it.
///
/// Tokens are not reusable across [`ViewModel::begin`] calls: resolving with
/// a token from a superseded fetch is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Drives the `Loading -> Ready | Failed` lifecycle for one page.
#[derive(Debug)]
pub struct ViewModel<T> {
    state: ViewState<T>,
    generation: u64,
}

impl<T> Default for ViewModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ViewModel<T> {
    /// A fresh view model in the initial `Loading` state.
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading,
            generation: 0,
        }
    }

    /// Starts a new fetch: resets to `Loading` (discarding any stale data or
    /// error from a previous fetch) and returns the token the eventual
    /// result must be resolved with.
    pub fn begin(&mut self) -> FetchToken {
        self.generation += 1;
        self.state = ViewState::Loading;
        FetchToken(self.generation)
    }

    /// Applies a fetch result. Returns `false` without touching the state if
    /// the token belongs to a superseded fetch.
    pub fn resolve(&mut self, token: FetchToken, result: Result<T, String>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(data) => ViewState::Ready(data),
            Err(message) => ViewState::Failed(message),
        };
        true
    }

    /// The current state.
    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Consumes the view model, yielding the final state.
    pub fn into_state(self) -> ViewState<T> {
        self.state
    }
}
