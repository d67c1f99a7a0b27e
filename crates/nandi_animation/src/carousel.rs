//! Interval carousel
//!
//! A wrapping index cycler that advances once per period while mounted.
//! Used to rotate the highlighted card in the feature showcase and the hero
//! statistics.
//!
//! ```ignore
//! let mut carousel = IntervalCarousel::new(4, 4000)?;
//! carousel.mount(&scheduler.handle());
//!
//! scheduler.advance(12_000, |firing| {
//!     carousel.on_timer(firing.id);
//! });
//! assert_eq!(carousel.active_index(), 3);
//! ```

use nandi_core::{TimerHandle, TimerId, Timer, Tracked};
use serde::Serialize;

use crate::error::{AnimationError, Result};

/// Render-ready carousel state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub item_count: usize,
}

impl CarouselState {
    /// Start at index 0. `item_count` must be non-zero.
    pub fn new(item_count: usize) -> Result<Self> {
        if item_count == 0 {
            return Err(AnimationError::EmptyCarousel);
        }
        Ok(Self {
            active_index: 0,
            item_count,
        })
    }

    /// The state after one tick
    pub fn advanced(self) -> Self {
        Self {
            active_index: (self.active_index + 1) % self.item_count,
            ..self
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }
}

/// A carousel bound to a repeating timer
#[derive(Debug)]
pub struct IntervalCarousel {
    state: Tracked<CarouselState>,
    period_ms: u64,
    timer: Option<Timer>,
}

impl IntervalCarousel {
    pub fn new(item_count: usize, period_ms: u64) -> Result<Self> {
        if period_ms == 0 {
            return Err(AnimationError::ZeroPeriod);
        }
        Ok(Self {
            state: Tracked::new(CarouselState::new(item_count)?),
            period_ms,
            timer: None,
        })
    }

    /// Start the repeating timer
    ///
    /// Mounting an already mounted carousel does nothing, so there is never
    /// more than one live timer per instance. Returns whether a timer was
    /// started.
    pub fn mount(&mut self, handle: &TimerHandle) -> bool {
        if self.is_mounted() {
            return false;
        }
        self.timer = Timer::repeating(handle, self.period_ms);
        if self.timer.is_some() {
            tracing::debug!(
                items = self.state.get().item_count,
                period_ms = self.period_ms,
                "carousel mounted"
            );
        }
        self.timer.is_some()
    }

    /// Cancel the timer. Further firings are ignored.
    pub fn unmount(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
            tracing::debug!(
                active_index = self.state.get().active_index,
                "carousel unmounted"
            );
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.timer.as_ref().is_some_and(Timer::is_pending)
    }

    /// Handle a timer firing. Returns `false` for firings it does not own.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match &self.timer {
            Some(timer) if timer.owns(id) => {
                self.tick();
                true
            }
            _ => false,
        }
    }

    /// Advance by one item and return the new state
    pub fn tick(&mut self) -> CarouselState {
        let next = self.state.get().advanced();
        self.state.set(next);
        tracing::trace!(active_index = next.active_index, "carousel tick");
        next
    }

    pub fn active_index(&self) -> usize {
        self.state.get().active_index
    }

    pub fn snapshot(&self) -> CarouselState {
        *self.state.get()
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Number of state writes so far
    pub fn writes(&self) -> u64 {
        self.state.writes()
    }
}
