//! Debounced search term.
//!
//! A [`DebouncedFilter`] holds the term the user is typing (`raw_term`) and
//! the term filtering actually uses (`debounced_term`). Each keystroke
//! re-arms a single deadline; only when the deadline passes without another
//! keystroke does the debounced term catch up.
//!
//! ```text
//! Idle ──start──▶ Pending ──start──▶ Pending (deadline re-armed)
//!                   │  └──cancel──▶ previous state
//!                   └──poll after deadline──▶ Settled
//! ```
//!
//! There are no timers or threads. The owning event loop calls
//! [`poll`](DebouncedFilter::poll), typically when
//! [`next_deadline`](DebouncedFilter::next_deadline) is reached.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::search::search_refs;
use crate::value::Value;

/// Default quiescence window.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Settle callback.
type SettleFn = Box<dyn FnMut(&str)>;

/// Debounce state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Nothing typed yet.
    Idle,
    /// A keystroke is waiting for the window to pass.
    Pending,
    /// The debounced term matches the last keystroke.
    Settled,
}

/// Search term that settles after input goes quiet.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use roomdesk_list::{DebouncedFilter, MockClock};
///
/// let clock = MockClock::new();
/// let mut filter = DebouncedFilter::with_clock(Duration::from_millis(500), clock.clone());
///
/// filter.start("10");
/// clock.advance(Duration::from_millis(100));
/// filter.start("101");
/// assert_eq!(filter.poll(), None);
///
/// clock.advance(Duration::from_millis(500));
/// assert_eq!(filter.poll().as_deref(), Some("101"));
/// assert_eq!(filter.debounced_term(), "101");
/// ```
pub struct DebouncedFilter<C: Clock = SystemClock> {
    window: Duration,
    clock: C,
    raw_term: String,
    debounced_term: String,
    deadline: Option<Instant>,
    state: DebounceState,
    // state to return to when a pending settle is cancelled
    resting: DebounceState,
    callbacks: Vec<SettleFn>,
}

impl DebouncedFilter<SystemClock> {
    /// Create a filter on the system clock.
    pub fn new(window: Duration) -> Self {
        Self::with_clock(window, SystemClock)
    }
}

impl<C: Clock> DebouncedFilter<C> {
    /// Create a filter on the given clock.
    pub fn with_clock(window: Duration, clock: C) -> Self {
        Self {
            window,
            clock,
            raw_term: String::new(),
            debounced_term: String::new(),
            deadline: None,
            state: DebounceState::Idle,
            resting: DebounceState::Idle,
            callbacks: Vec::new(),
        }
    }

    /// Record a keystroke and re-arm the deadline.
    ///
    /// Any previously pending settle is superseded.
    pub fn start(&mut self, term: impl Into<String>) {
        self.raw_term = term.into();
        self.deadline = Some(self.clock.now() + self.window);
        if self.state != DebounceState::Pending {
            self.resting = self.state;
        }
        self.state = DebounceState::Pending;
        trace!(term = %self.raw_term, "search term pending");
    }

    /// Disarm a pending settle. The debounced term is left as it was.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            self.state = self.resting;
            trace!(term = %self.raw_term, "pending search term cancelled");
        }
    }

    /// Register a callback run with the term each time it settles.
    pub fn on_settle<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Settle if the deadline has passed.
    ///
    /// Returns the newly settled term, or `None` if nothing settled on this
    /// call. A settle happens at most once per armed deadline.
    pub fn poll(&mut self) -> Option<String> {
        let deadline = self.deadline?;
        if self.clock.now() < deadline {
            return None;
        }
        self.deadline = None;
        self.debounced_term = self.raw_term.clone();
        self.state = DebounceState::Settled;
        debug!(term = %self.debounced_term, "search term settled");
        for callback in &mut self.callbacks {
            callback(&self.debounced_term);
        }
        Some(self.debounced_term.clone())
    }

    /// When the next settle is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` while a keystroke is waiting to settle.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Current state.
    pub fn state(&self) -> DebounceState {
        self.state
    }

    /// The latest keystroke.
    pub fn raw_term(&self) -> &str {
        &self.raw_term
    }

    /// The term filtering uses.
    pub fn debounced_term(&self) -> &str {
        &self.debounced_term
    }

    /// The quiescence window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Set both terms at once, skipping the window.
    ///
    /// Used when restoring a persisted search or clearing filters, where
    /// there is no typing to wait out.
    pub fn set_immediate(&mut self, term: impl Into<String>) {
        let term = term.into();
        self.raw_term = term.clone();
        self.debounced_term = term;
        self.deadline = None;
        self.resting = if self.debounced_term.is_empty() {
            DebounceState::Idle
        } else {
            DebounceState::Settled
        };
        self.state = self.resting;
    }

    /// Filter `items` on `field` using the debounced term.
    pub fn apply<'a, T, F>(&self, items: &[&'a T], field: &str, accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        search_refs(items, field, &self.debounced_term, accessor)
    }
}

impl<C: Clock> Drop for DebouncedFilter<C> {
    fn drop(&mut self) {
        if self.deadline.take().is_some() {
            trace!(term = %self.raw_term, "pending search term dropped");
        }
        self.callbacks.clear();
    }
}

impl<C: Clock> fmt::Debug for DebouncedFilter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedFilter")
            .field("window", &self.window)
            .field("raw_term", &self.raw_term)
            .field("debounced_term", &self.debounced_term)
            .field("state", &self.state)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
