use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::model::{Notification, NotificationKind};
use crate::ops::timer::{TimerQueue, TimerToken};

/// Receiver for the notification each store mutation emits
pub trait NotificationSink {
    fn show(&mut self, text: &str, kind: NotificationKind);
}

/// Collects notifications instead of displaying them
impl NotificationSink for Vec<Notification> {
    fn show(&mut self, text: &str, kind: NotificationKind) {
        self.push(Notification::new(text, kind));
    }
}

/// Source of "now" for scheduling auto-clear
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[derive(Debug)]
struct Shown {
    notification: Notification,
    timer: TimerToken,
}

/// Single-slot notification with auto-clear.
///
/// Showing a new notification cancels the previous one's timer before
/// scheduling its own.
#[derive(Debug)]
pub struct Notifier<C: Clock = SystemClock> {
    clock: C,
    duration: Duration,
    shown: Option<Shown>,
    timers: TimerQueue,
}

impl Notifier<SystemClock> {
    pub fn new(duration: Duration) -> Self {
        Notifier::with_clock(duration, SystemClock)
    }
}

impl<C: Clock> Notifier<C> {
    pub fn with_clock(duration: Duration, clock: C) -> Self {
        Notifier {
            clock,
            duration,
            shown: None,
            timers: TimerQueue::new(),
        }
    }

    /// Replace the current notification and restart the auto-clear timer
    pub fn show_notification(&mut self, notification: Notification) -> TimerToken {
        if let Some(prev) = self.shown.take() {
            self.timers.cancel(prev.timer);
            tracing::trace!(text = %prev.notification.text, "notification superseded");
        }
        let timer = self.timers.schedule(self.clock.now() + self.duration);
        tracing::debug!(kind = notification.kind.as_str(), text = %notification.text, "notification shown");
        self.shown = Some(Shown {
            notification,
            timer,
        });
        timer
    }

    /// Drop the current notification and its pending timer
    pub fn clear(&mut self) {
        if let Some(prev) = self.shown.take() {
            self.timers.cancel(prev.timer);
        }
    }

    /// Fire every due timer. Returns true if the visible notification was cleared.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut cleared = false;
        for token in self.timers.pop_due(now) {
            if self.shown.as_ref().is_some_and(|s| s.timer == token) {
                self.shown = None;
                cleared = true;
            }
        }
        cleared
    }

    pub fn current(&self) -> Option<&Notification> {
        self.shown.as_ref().map(|s| &s.notification)
    }

    /// When the next auto-clear is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Timers still waiting to fire
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl<C: Clock> NotificationSink for Notifier<C> {
    fn show(&mut self, text: &str, kind: NotificationKind) {
        self.show_notification(Notification::new(text, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> (Notifier<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (
            Notifier::with_clock(Duration::from_millis(3000), clock.clone()),
            clock,
        )
    }

    #[test]
    fn show_then_expire() {
        let (mut n, clock) = notifier();
        n.show("Polished. Much better.", NotificationKind::Update);
        assert_eq!(n.current().unwrap().kind, NotificationKind::Update);

        clock.advance(Duration::from_millis(2999));
        assert!(!n.tick());
        assert!(n.current().is_some());

        clock.advance(Duration::from_millis(1));
        assert!(n.tick());
        assert!(n.current().is_none());
        assert_eq!(n.pending_timers(), 0);
    }

    #[test]
    fn newer_notification_cancels_older_timer() {
        let (mut n, clock) = notifier();
        let first = n.show_notification(Notification::new("A", NotificationKind::Create));
        clock.advance(Duration::from_millis(2000));
        let second = n.show_notification(Notification::new("B", NotificationKind::Delete));
        assert_ne!(first, second);
        assert_eq!(n.pending_timers(), 1);

        // A's original deadline passes; B must survive
        clock.advance(Duration::from_millis(1500));
        assert!(!n.tick());
        assert_eq!(n.current().unwrap().text, "B");

        clock.advance(Duration::from_millis(1500));
        assert!(n.tick());
        assert!(n.current().is_none());
    }

    #[test]
    fn explicit_clear_cancels_timer() {
        let (mut n, clock) = notifier();
        n.show("A", NotificationKind::Complete);
        n.clear();
        assert!(n.current().is_none());
        assert_eq!(n.pending_timers(), 0);
        assert_eq!(n.next_deadline(), None);

        clock.advance(Duration::from_secs(5));
        assert!(!n.tick());
    }

    #[test]
    fn next_deadline_tracks_latest_show() {
        let (mut n, clock) = notifier();
        let start = clock.now();
        n.show("A", NotificationKind::Create);
        assert_eq!(n.next_deadline(), Some(start + Duration::from_millis(3000)));
        clock.advance(Duration::from_millis(500));
        n.show("B", NotificationKind::Create);
        assert_eq!(n.next_deadline(), Some(start + Duration::from_millis(3500)));
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.show("one", NotificationKind::Create);
        sink.show("two", NotificationKind::Delete);
        assert_eq!(
            sink,
            vec![
                Notification::new("one", NotificationKind::Create),
                Notification::new("two", NotificationKind::Delete),
            ]
        );
    }
}
