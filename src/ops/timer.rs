use std::time::Instant;

/// Handle for a scheduled one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// One-shot deadlines with explicit cancellation.
///
/// Tokens are never reused, so cancelling or firing a stale token can't
/// touch a timer scheduled later.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_token: u64,
    entries: Vec<(TimerToken, Instant)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a timer firing at `deadline`
    pub fn schedule(&mut self, deadline: Instant) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.entries.push((token, deadline));
        token
    }

    /// Cancel a pending timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(t, _)| *t != token);
        self.entries.len() != before
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|(_, d)| *d).min()
    }

    /// Remove and return every timer due at `now`, earliest first
    pub fn pop_due(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut due: Vec<(TimerToken, Instant)> = Vec::new();
        self.entries.retain(|&(token, deadline)| {
            if deadline <= now {
                due.push((token, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(token, deadline)| (deadline, token));
        due.into_iter().map(|(token, _)| token).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn tokens_are_unique() {
        let mut q = TimerQueue::new();
        let now = Instant::now();
        let a = q.schedule(now);
        let b = q.schedule(now);
        assert_ne!(a, b);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn pop_due_returns_only_expired_in_deadline_order() {
        let mut q = TimerQueue::new();
        let start = Instant::now();
        let late = q.schedule(start + Duration::from_millis(200));
        let early = q.schedule(start + Duration::from_millis(100));
        let future = q.schedule(start + Duration::from_secs(10));

        let due = q.pop_due(start + Duration::from_millis(250));
        assert_eq!(due, vec![early, late]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(start + Duration::from_secs(10)));
        assert!(q.cancel(future));
        assert!(q.pop_due(start + Duration::from_millis(250)).is_empty());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut q = TimerQueue::new();
        let start = Instant::now();
        let token = q.schedule(start + Duration::from_millis(10));
        assert!(q.cancel(token));
        assert!(!q.cancel(token));
        assert!(q.pop_due(start + Duration::from_secs(1)).is_empty());
        assert!(q.is_empty());
    }

    #[test]
    fn next_deadline_is_earliest() {
        let mut q = TimerQueue::new();
        assert_eq!(q.next_deadline(), None);
        let start = Instant::now();
        q.schedule(start + Duration::from_millis(300));
        let first = q.schedule(start + Duration::from_millis(100));
        assert_eq!(q.next_deadline(), Some(start + Duration::from_millis(100)));
        q.cancel(first);
        assert_eq!(q.next_deadline(), Some(start + Duration::from_millis(300)));
    }
}
