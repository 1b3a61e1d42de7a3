//! Leading-edge rate limiting.
//!
//! A throttle fires immediately on the first call, then drops every call during
//! a cooldown window. Unlike debouncing there is no trailing edge: dropped
//! calls are gone, not queued. The cooldown is a simple elapsed-time gate over
//! caller-supplied `Instant`s, not a cancellable timer.

use std::time::{Duration, Instant};

/// Elapsed-time gate implementing leading-edge rate limiting.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use spacepicker::timing::Throttle;
///
/// let mut throttle = Throttle::new(Duration::from_millis(100));
/// let t0 = Instant::now();
///
/// assert!(throttle.allow(t0));
/// assert!(!throttle.allow(t0 + Duration::from_millis(10)));
/// assert!(!throttle.allow(t0 + Duration::from_millis(20)));
/// assert!(throttle.allow(t0 + Duration::from_millis(150)));
/// ```
#[derive(Debug)]
pub struct Throttle {
    limit: Duration,
    last_fired: Option<Instant>,
}

impl Throttle {
    /// Creates a throttle with the given cooldown window.
    #[must_use]
    pub const fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_fired: None,
        }
    }

    /// Whether a call at `now` may fire.
    ///
    /// The first call always fires and opens the cooldown; calls within the
    /// cooldown return false and leave it untouched. The first call at or
    /// after the cooldown's end fires and restarts it.
    pub fn allow(&mut self, now: Instant) -> bool {
        let permitted = self
            .last_fired
            .map_or(true, |last| now.duration_since(last) >= self.limit);

        if permitted {
            self.last_fired = Some(now);
        }
        permitted
    }

    /// Resets the gate so the next call fires immediately.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

/// Callback wrapper matching the `throttle(fn, limit) -> wrapped` contract.
///
/// [`call`](Self::call) invokes the callback immediately when the gate is
/// open and drops the arguments entirely otherwise.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use spacepicker::timing::Throttled;
///
/// let mut refreshed = Vec::new();
/// let mut refresh = Throttled::new(Duration::from_millis(100), |id: &str| {
///     refreshed.push(id.to_string());
/// });
///
/// let t0 = Instant::now();
/// refresh.call(t0, "s1");
/// refresh.call(t0 + Duration::from_millis(10), "s2"); // dropped
/// refresh.call(t0 + Duration::from_millis(150), "s3");
/// drop(refresh);
///
/// assert_eq!(refreshed, vec!["s1".to_string(), "s3".to_string()]);
/// ```
#[derive(Debug)]
pub struct Throttled<T, F: FnMut(T)> {
    gate: Throttle,
    callback: F,
    _marker: std::marker::PhantomData<fn(T)>,
}

impl<T, F: FnMut(T)> Throttled<T, F> {
    /// Wraps a callback with the given cooldown window.
    pub const fn new(limit: Duration, callback: F) -> Self {
        Self {
            gate: Throttle::new(limit),
            callback,
            _marker: std::marker::PhantomData,
        }
    }

    /// Invokes the callback now if the gate is open; drops the call otherwise.
    ///
    /// Returns whether the callback fired.
    pub fn call(&mut self, now: Instant, value: T) -> bool {
        if self.gate.allow(now) {
            (self.callback)(value);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn first_call_fires_then_cooldown_drops() {
        // Calls at t=0, 10, 20, 150 with limit=100: fires at 0 and 150.
        let mut throttle = Throttle::new(ms(100));
        let t0 = Instant::now();

        assert!(throttle.allow(t0));
        assert!(!throttle.allow(t0 + ms(10)));
        assert!(!throttle.allow(t0 + ms(20)));
        assert!(throttle.allow(t0 + ms(150)));
    }

    #[test]
    fn cooldown_restarts_on_each_firing() {
        let mut throttle = Throttle::new(ms(100));
        let t0 = Instant::now();

        assert!(throttle.allow(t0));
        assert!(throttle.allow(t0 + ms(150)));
        // Window now runs from 150, so 200 is still inside it.
        assert!(!throttle.allow(t0 + ms(200)));
        assert!(throttle.allow(t0 + ms(250)));
    }

    #[test]
    fn dropped_calls_do_not_extend_the_window() {
        let mut throttle = Throttle::new(ms(100));
        let t0 = Instant::now();

        assert!(throttle.allow(t0));
        assert!(!throttle.allow(t0 + ms(90)));
        // The drop at 90 must not push the window past 100.
        assert!(throttle.allow(t0 + ms(100)));
    }

    #[test]
    fn reset_reopens_the_gate() {
        let mut throttle = Throttle::new(ms(100));
        let t0 = Instant::now();

        assert!(throttle.allow(t0));
        throttle.reset();
        assert!(throttle.allow(t0 + ms(1)));
    }

    #[test]
    fn wrapper_invokes_with_first_call_arguments() {
        let t0 = Instant::now();
        let mut fired = Vec::new();
        {
            let mut wrapped = Throttled::new(ms(100), |v: u32| fired.push(v));
            assert!(wrapped.call(t0, 1));
            assert!(!wrapped.call(t0 + ms(10), 2));
            assert!(!wrapped.call(t0 + ms(20), 3));
            assert!(wrapped.call(t0 + ms(150), 4));
        }
        assert_eq!(fired, vec![1, 4]);
    }
}
