//! Coalescing of rapid input changes

use std::time::{Duration, Instant};

use crate::DEBOUNCE_DELAY_MS;

/// Collapses a burst of changes into the last value once input goes quiet.
///
/// Time is supplied by the caller, so the debouncer owns no timers or
/// threads.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    last_value: Option<T>,
    pending: Option<(T, Instant)>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_value: None,
            pending: None,
        }
    }

    /// Debouncer whose last seen value is `value`, so re-submitting it is ignored
    pub fn with_initial(delay: Duration, value: T) -> Self {
        Self {
            delay,
            last_value: Some(value),
            pending: None,
        }
    }

    /// Record a new input at `now`.
    ///
    /// Returns `false` when `value` equals the last submitted value, in which
    /// case the pending deadline is left alone.
    pub fn submit(&mut self, value: T, now: Instant) -> bool {
        if self.last_value.as_ref() == Some(&value) {
            return false;
        }
        self.last_value = Some(value.clone());
        self.pending = Some((value, now));
        true
    }

    /// Take the pending value if the quiet period has elapsed by `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    /// Take the pending value immediately, e.g. when the slider is released
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T: Clone + PartialEq> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_default_delay() {
        let debouncer: Debouncer<usize> = Debouncer::default();
        assert_eq!(debouncer.delay(), ms(50));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_burst_coalesces_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(50));

        assert!(debouncer.submit(16, start));
        assert!(debouncer.submit(17, start + ms(10)));
        assert!(debouncer.submit(18, start + ms(20)));

        assert_eq!(debouncer.poll(start + ms(60)), None);
        assert_eq!(debouncer.poll(start + ms(70)), Some(18));
        assert_eq!(debouncer.poll(start + ms(200)), None);
    }

    #[test]
    fn test_repeated_value_ignored() {
        let start = Instant::now();
        let mut debouncer = Debouncer::with_initial(ms(50), 15);

        assert!(!debouncer.submit(15, start));
        assert!(!debouncer.is_pending());

        assert!(debouncer.submit(16, start));
        assert!(!debouncer.submit(16, start + ms(40)));
        // Deadline still counts from the first submit of 16
        assert_eq!(debouncer.poll(start + ms(50)), Some(16));
    }

    #[test]
    fn test_flush_skips_wait() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(50));
        debouncer.submit(30, start);
        assert_eq!(debouncer.flush(), Some(30));
        assert_eq!(debouncer.flush(), None);
        assert_eq!(debouncer.poll(start + ms(100)), None);
    }
}
