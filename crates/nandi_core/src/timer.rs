//! Virtual-time timer scheduler
//!
//! Components never block: they schedule a future firing and are told about
//! it later. The scheduler owns a virtual clock that only moves when the host
//! advances it, which keeps every animation deterministic under test.
//!
//! - `TimerScheduler` - owns the clock and all pending timers
//! - `TimerHandle` - weak handle passed to components for scheduling
//! - `Timer` - owning guard around one timer; cancels on drop
//!
//! Firings are popped one at a time so that a component handling a firing
//! can schedule follow-up timers that still land inside the same advance
//! window (e.g. a submit delay followed by a success hold).
//!
//! ```ignore
//! use nandi_core::timer::{Timer, TimerScheduler};
//!
//! let scheduler = TimerScheduler::new();
//! let tick = Timer::repeating(&scheduler.handle(), 4000).unwrap();
//!
//! scheduler.advance(8000, |firing| {
//!     assert!(tick.owns(firing.id));
//! });
//! ```

use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

/// How a timer re-arms after firing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once, then is removed
    Once,
    /// Fires every `period_ms` until cancelled
    Repeating { period_ms: u64 },
}

/// A single timer firing popped from the scheduler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Firing {
    pub id: TimerId,
    /// Virtual time the timer was due at
    pub at_ms: u64,
}

#[derive(Clone, Copy, Debug)]
struct TimerEntry {
    due_ms: u64,
    kind: TimerKind,
    /// Tie-breaker for timers due at the same instant
    seq: u64,
}

struct SchedulerInner {
    timers: SlotMap<TimerId, TimerEntry>,
    now_ms: u64,
    next_seq: u64,
    fired: u64,
}

impl SchedulerInner {
    fn insert(&mut self, delay_ms: u64, kind: TimerKind) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let id = self.timers.insert(TimerEntry { due_ms, kind, seq });
        tracing::debug!(?id, due_ms, ?kind, "timer scheduled");
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let removed = self.timers.remove(id).is_some();
        if removed {
            tracing::debug!(?id, now_ms = self.now_ms, "timer cancelled");
        }
        removed
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<Firing> {
        let (id, entry) = self
            .timers
            .iter()
            .filter(|(_, entry)| entry.due_ms <= until_ms)
            .min_by_key(|(_, entry)| (entry.due_ms, entry.seq))
            .map(|(id, entry)| (id, *entry))?;

        self.now_ms = self.now_ms.max(entry.due_ms);
        self.fired += 1;

        match entry.kind {
            TimerKind::Once => {
                self.timers.remove(id);
            }
            TimerKind::Repeating { period_ms } => match entry.due_ms.checked_add(period_ms) {
                Some(next_ms) => {
                    let seq = self.next_seq;
                    self.next_seq += 1;
                    if let Some(slot) = self.timers.get_mut(id) {
                        slot.due_ms = next_ms;
                        slot.seq = seq;
                    }
                }
                None => {
                    // Next firing is past the end of the clock
                    self.timers.remove(id);
                    tracing::debug!(?id, at_ms = entry.due_ms, "repeating timer retired");
                }
            },
        }

        tracing::trace!(?id, at_ms = entry.due_ms, "timer fired");
        Some(Firing {
            id,
            at_ms: entry.due_ms,
        })
    }
}

fn lock(inner: &Mutex<SchedulerInner>) -> MutexGuard<'_, SchedulerInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The scheduler that owns the virtual clock and all pending timers
///
/// Held by the host (page runner, CLI, tests). Components only ever see a
/// [`TimerHandle`], so dropping the scheduler makes every handle inert.
pub struct TimerScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl TimerScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                timers: SlotMap::with_key(),
                now_ms: 0,
                next_seq: 0,
                fired: 0,
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> TimerHandle {
        TimerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        lock(&self.inner).now_ms
    }

    /// Number of timers waiting to fire
    pub fn pending_count(&self) -> usize {
        lock(&self.inner).timers.len()
    }

    /// Total number of firings delivered so far
    pub fn fired_count(&self) -> u64 {
        lock(&self.inner).fired
    }

    pub fn schedule_once(&self, delay_ms: u64) -> TimerId {
        lock(&self.inner).insert(delay_ms, TimerKind::Once)
    }

    /// Schedule a repeating timer. A zero period is clamped to 1ms.
    pub fn schedule_repeating(&self, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        lock(&self.inner).insert(period_ms, TimerKind::Repeating { period_ms })
    }

    /// Cancel a timer. Returns `false` if it was already cancelled or fired.
    pub fn cancel(&self, id: TimerId) -> bool {
        lock(&self.inner).cancel(id)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        lock(&self.inner).timers.contains_key(id)
    }

    /// Pop the earliest timer due at or before `until_ms`
    ///
    /// Moves the clock to the firing's due time. One-shot timers are removed,
    /// repeating timers are re-armed one period later.
    pub fn pop_due(&self, until_ms: u64) -> Option<Firing> {
        lock(&self.inner).pop_due(until_ms)
    }

    /// Move the clock forward to `until_ms` (never backwards)
    pub fn settle(&self, until_ms: u64) {
        let mut inner = lock(&self.inner);
        inner.now_ms = inner.now_ms.max(until_ms);
    }

    /// Deliver every firing due within the next `dt_ms`, in order
    ///
    /// The lock is released before `dispatch` runs, so the callback may
    /// schedule or cancel timers. Returns the number of firings delivered.
    pub fn advance<F>(&self, dt_ms: u64, dispatch: F) -> usize
    where
        F: FnMut(Firing),
    {
        let until_ms = self.now_ms().saturating_add(dt_ms);
        self.advance_to(until_ms, dispatch)
    }

    /// Deliver every firing due at or before `until_ms`, then settle there
    pub fn advance_to<F>(&self, until_ms: u64, mut dispatch: F) -> usize
    where
        F: FnMut(Firing),
    {
        let mut delivered = 0;
        while let Some(firing) = self.pop_due(until_ms) {
            dispatch(firing);
            delivered += 1;
        }
        self.settle(until_ms);
        delivered
    }
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimerScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = lock(&self.inner);
        f.debug_struct("TimerScheduler")
            .field("now_ms", &inner.now_ms)
            .field("pending", &inner.timers.len())
            .finish()
    }
}

/// A weak handle to the timer scheduler
///
/// Passed to components that need to schedule timers. It won't keep the
/// scheduler alive; every operation on a dead handle is a no-op.
#[derive(Clone)]
pub struct TimerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl TimerHandle {
    /// Schedule a one-shot timer `delay_ms` from now
    pub fn schedule_once(&self, delay_ms: u64) -> Option<TimerId> {
        self.inner
            .upgrade()
            .map(|inner| lock(&inner).insert(delay_ms, TimerKind::Once))
    }

    /// Schedule a repeating timer. A zero period is clamped to 1ms.
    pub fn schedule_repeating(&self, period_ms: u64) -> Option<TimerId> {
        let period_ms = period_ms.max(1);
        self.inner.upgrade().map(|inner| {
            lock(&inner).insert(period_ms, TimerKind::Repeating { period_ms })
        })
    }

    /// Cancel a timer
    ///
    /// Idempotent: cancelling twice, after firing, or after the scheduler is
    /// gone returns `false` and has no other effect.
    pub fn cancel(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| lock(&inner).cancel(id))
            .unwrap_or(false)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| lock(&inner).timers.contains_key(id))
            .unwrap_or(false)
    }

    pub fn now_ms(&self) -> Option<u64> {
        self.inner.upgrade().map(|inner| lock(&inner).now_ms)
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// An owned timer that is cancelled when dropped
///
/// Components keep their pending timer in one of these, so tearing the
/// component down (explicitly or by dropping it) always releases the timer.
pub struct Timer {
    handle: TimerHandle,
    id: TimerId,
    kind: TimerKind,
}

impl Timer {
    /// Schedule a one-shot timer. Returns `None` if the scheduler is gone.
    pub fn once(handle: &TimerHandle, delay_ms: u64) -> Option<Self> {
        let id = handle.schedule_once(delay_ms)?;
        Some(Self {
            handle: handle.clone(),
            id,
            kind: TimerKind::Once,
        })
    }

    /// Schedule a repeating timer. Returns `None` if the scheduler is gone.
    pub fn repeating(handle: &TimerHandle, period_ms: u64) -> Option<Self> {
        let id = handle.schedule_repeating(period_ms)?;
        Some(Self {
            handle: handle.clone(),
            id,
            kind: TimerKind::Repeating {
                period_ms: period_ms.max(1),
            },
        })
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// Whether a firing belongs to this timer
    pub fn owns(&self, id: TimerId) -> bool {
        self.id == id
    }

    /// Whether the timer is still waiting to fire
    pub fn is_pending(&self) -> bool {
        self.handle.is_pending(self.id)
    }

    /// Cancel the timer. Safe to call any number of times.
    pub fn cancel(&mut self) -> bool {
        self.handle.cancel(self.id)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.handle.cancel(self.id);
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}
