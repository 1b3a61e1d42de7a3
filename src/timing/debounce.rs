//! Delay-and-coalesce rate limiting.
//!
//! A debouncer restarts a quiet-period timer on every call and fires exactly
//! once, with the arguments of the most recent call, after the quiet period
//! elapses with no further calls. It is built on an explicit deadline/poll
//! model: callers pass `Instant`s in and drive firing with [`Debouncer::poll`],
//! so no runtime timer API is involved and tests are fully deterministic.
//!
//! Dropping a debouncer (or calling [`Debouncer::cancel`]) discards any
//! pending invocation; that is the only teardown required.

use std::time::{Duration, Instant};

/// Pending coalesced invocation.
#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Instant,
    value: T,
}

/// Delay-and-coalesce state machine.
///
/// Each [`call`](Self::call) replaces the pending value and restarts the
/// deadline at `now + wait`. [`poll`](Self::poll) returns the coalesced value
/// exactly once when the deadline has passed. Intermediate calls never fire.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use spacepicker::timing::Debouncer;
///
/// let mut debouncer = Debouncer::new(Duration::from_millis(100));
/// let t0 = Instant::now();
///
/// debouncer.call(t0, "a");
/// debouncer.call(t0 + Duration::from_millis(50), "b");
///
/// // Still within the quiet period of the second call.
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(100)), None);
/// // 100ms after the last call: fires once with the latest arguments.
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(150)), Some("b"));
/// assert_eq!(debouncer.poll(t0 + Duration::from_millis(300)), None);
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Records a call, replacing any pending value and restarting the deadline.
    pub fn call(&mut self, now: Instant, value: T) {
        self.pending = Some(Pending {
            deadline: now + self.wait,
            value,
        });
    }

    /// Fires the pending invocation if its deadline has passed.
    ///
    /// Returns the coalesced value at most once per quiet period; subsequent
    /// polls return `None` until [`call`](Self::call) schedules again.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref()?.deadline > now {
            return None;
        }
        self.pending.take().map(|pending| pending.value)
    }

    /// Discards any pending invocation without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a call is waiting for its quiet period to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending invocation, if any.
    ///
    /// Hosts with real timers can use this to schedule the next
    /// [`poll`](Self::poll) instead of polling continuously.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}

/// Callback wrapper matching the `debounce(fn, wait) -> wrapped` contract.
///
/// Wraps a callback so that [`call`](Self::call) coalesces invocations and
/// [`tick`](Self::tick) invokes the callback once per quiet period with the
/// most recent arguments.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use spacepicker::timing::Debounced;
///
/// let mut fired = Vec::new();
/// let mut search = Debounced::new(Duration::from_millis(100), |query: String| {
///     fired.push(query);
/// });
///
/// let t0 = Instant::now();
/// search.call(t0, "z".to_string());
/// search.call(t0 + Duration::from_millis(50), "ze".to_string());
/// search.tick(t0 + Duration::from_millis(150));
/// drop(search);
///
/// assert_eq!(fired, vec!["ze".to_string()]);
/// ```
#[derive(Debug)]
pub struct Debounced<T, F: FnMut(T)> {
    inner: Debouncer<T>,
    callback: F,
}

impl<T, F: FnMut(T)> Debounced<T, F> {
    /// Wraps a callback with the given quiet period.
    pub const fn new(wait: Duration, callback: F) -> Self {
        Self {
            inner: Debouncer::new(wait),
            callback,
        }
    }

    /// Records a call; the callback fires on a later [`tick`](Self::tick).
    pub fn call(&mut self, now: Instant, value: T) {
        self.inner.call(now, value);
    }

    /// Invokes the callback if the quiet period has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(value) = self.inner.poll(now) {
            (self.callback)(value);
        }
    }

    /// Discards any pending invocation.
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }
}
