//! Count-up numeric tweens
//!
//! Drives a set of named integer values from 0 to their targets over a fixed
//! number of steps. Each step floors the linear interpolation; the last step
//! writes the targets verbatim so flooring can never leave a value short.
//!
//! Lifecycle:
//!
//! ```text
//! Pending --mount--> Delayed --delay fires--> Running --last step--> Finished
//!    ^                  |                        |
//!    +----unmount-------+-----------unmount------+
//! ```

use indexmap::IndexMap;
use nandi_core::{Timer, TimerHandle, TimerId, Tracked};
use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};

/// Timing for a tween
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweenConfig {
    /// Total time from first to last step
    pub duration_ms: u64,
    /// Number of steps the duration is divided into
    pub steps: u32,
    /// Delay between mount and the first step being scheduled
    #[serde(default)]
    pub delay_ms: u64,
}

impl TweenConfig {
    /// Hero statistics: 60 steps over 2s, starting 1s after mount
    pub fn hero_stats() -> Self {
        Self {
            duration_ms: 2000,
            steps: 60,
            delay_ms: 1000,
        }
    }

    /// Route prices: 30 steps over 2s, starting on mount
    pub fn route_prices() -> Self {
        Self {
            duration_ms: 2000,
            steps: 30,
            delay_ms: 0,
        }
    }

    /// Interval between steps, never less than 1ms
    pub fn tick_ms(&self) -> u64 {
        if self.steps == 0 {
            return self.duration_ms.max(1);
        }
        (self.duration_ms / u64::from(self.steps)).max(1)
    }
}

/// `floor(target * step / steps)`, or `target` once `step >= steps`
pub fn interpolate(target: i64, step: u32, steps: u32) -> i64 {
    if steps == 0 || step >= steps {
        return target;
    }
    let scaled = i128::from(target) * i128::from(step);
    // div_euclid floors for negative targets too
    scaled.div_euclid(i128::from(steps)) as i64
}

/// Render-ready tween values
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TweenState {
    current: IndexMap<String, i64>,
    target: IndexMap<String, i64>,
    steps_elapsed: u32,
    total_steps: u32,
}

impl TweenState {
    /// All values start at 0
    pub fn new<I, K>(targets: I, total_steps: u32) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        if total_steps == 0 {
            return Err(AnimationError::ZeroSteps);
        }
        let target: IndexMap<String, i64> = targets
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        let current = target.keys().map(|name| (name.clone(), 0)).collect();
        Ok(Self {
            current,
            target,
            steps_elapsed: 0,
            total_steps,
        })
    }

    /// Advance one step. Returns `true` when this step finished the tween.
    ///
    /// Stepping a finished tween is a no-op that returns `false`.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.steps_elapsed += 1;
        if self.is_finished() {
            self.current = self.target.clone();
            return true;
        }
        for (name, value) in self.current.iter_mut() {
            let target = self.target.get(name).copied().unwrap_or_default();
            *value = interpolate(target, self.steps_elapsed, self.total_steps);
        }
        false
    }

    pub fn value(&self, name: &str) -> Option<i64> {
        self.current.get(name).copied()
    }

    pub fn target(&self, name: &str) -> Option<i64> {
        self.target.get(name).copied()
    }

    pub fn values(&self) -> &IndexMap<String, i64> {
        &self.current
    }

    pub fn targets(&self) -> &IndexMap<String, i64> {
        &self.target
    }

    pub fn steps_elapsed(&self) -> u32 {
        self.steps_elapsed
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn is_finished(&self) -> bool {
        self.steps_elapsed >= self.total_steps
    }

    /// Fraction of steps completed (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.steps_elapsed as f32 / self.total_steps as f32
    }
}

#[derive(Debug)]
enum TweenPhase {
    /// Not mounted, or unmounted before finishing
    Pending,
    /// Waiting for the start delay
    Delayed(Timer),
    /// Stepping on a repeating timer
    Running(Timer),
    Finished,
}

/// A tween bound to the timer scheduler
#[derive(Debug)]
pub struct NumericTween {
    state: Tracked<TweenState>,
    config: TweenConfig,
    phase: TweenPhase,
    handle: Option<TimerHandle>,
}

impl NumericTween {
    pub fn new<I, K>(targets: I, config: TweenConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Ok(Self {
            state: Tracked::new(TweenState::new(targets, config.steps)?),
            config,
            phase: TweenPhase::Pending,
            handle: None,
        })
    }

    /// Schedule the start delay, or start stepping right away
    ///
    /// A tween that already has a pending timer or has finished ignores the
    /// call. A tween unmounted mid-animation resumes stepping from where it
    /// stopped without waiting for the delay again.
    pub fn mount(&mut self, handle: &TimerHandle) -> bool {
        if !matches!(self.phase, TweenPhase::Pending) {
            return false;
        }
        self.handle = Some(handle.clone());

        let resumed = self.state.get().steps_elapsed() > 0;
        let phase = if self.config.delay_ms > 0 && !resumed {
            Timer::once(handle, self.config.delay_ms).map(TweenPhase::Delayed)
        } else {
            Timer::repeating(handle, self.config.tick_ms()).map(TweenPhase::Running)
        };

        match phase {
            Some(phase) => {
                tracing::debug!(
                    steps = self.config.steps,
                    tick_ms = self.config.tick_ms(),
                    delay_ms = self.config.delay_ms,
                    resumed,
                    "tween mounted"
                );
                self.phase = phase;
                true
            }
            None => false,
        }
    }

    /// Cancel whichever timer is pending. No writes happen afterwards.
    pub fn unmount(&mut self) {
        match std::mem::replace(&mut self.phase, TweenPhase::Pending) {
            TweenPhase::Delayed(mut timer) | TweenPhase::Running(mut timer) => {
                timer.cancel();
                tracing::debug!(
                    steps_elapsed = self.state.get().steps_elapsed(),
                    "tween unmounted"
                );
            }
            TweenPhase::Finished => self.phase = TweenPhase::Finished,
            TweenPhase::Pending => {}
        }
        self.handle = None;
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.phase, TweenPhase::Delayed(_) | TweenPhase::Running(_))
    }

    /// Handle a timer firing. Returns `false` for firings it does not own.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match &self.phase {
            TweenPhase::Delayed(timer) if timer.owns(id) => {
                self.start_ticking();
                true
            }
            TweenPhase::Running(timer) if timer.owns(id) => {
                let finished = self.state.update(TweenState::step);
                tracing::trace!(
                    steps_elapsed = self.state.get().steps_elapsed(),
                    "tween step"
                );
                if finished {
                    // Dropping the timer cancels it
                    self.phase = TweenPhase::Finished;
                    tracing::debug!("tween finished");
                }
                true
            }
            _ => false,
        }
    }

    fn start_ticking(&mut self) {
        let timer = self
            .handle
            .as_ref()
            .and_then(|handle| Timer::repeating(handle, self.config.tick_ms()));
        self.phase = match timer {
            Some(timer) => TweenPhase::Running(timer),
            None => TweenPhase::Pending,
        };
    }

    pub fn value(&self, name: &str) -> Option<i64> {
        self.state.get().value(name)
    }

    pub fn state(&self) -> &TweenState {
        self.state.get()
    }

    pub fn snapshot(&self) -> TweenState {
        self.state.snapshot()
    }

    pub fn config(&self) -> TweenConfig {
        self.config
    }

    pub fn is_finished(&self) -> bool {
        self.state.get().is_finished()
    }

    /// Number of state writes so far
    pub fn writes(&self) -> u64 {
        self.state.writes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_core::TimerScheduler;

    fn run(scheduler: &TimerScheduler, tween: &mut NumericTween, dt_ms: u64) {
        scheduler.advance(dt_ms, |firing| {
            tween.on_timer(firing.id);
        });
    }

    #[test]
    fn test_tick_ms() {
        assert_eq!(TweenConfig::hero_stats().tick_ms(), 33);
        assert_eq!(TweenConfig::route_prices().tick_ms(), 66);
        let instant = TweenConfig {
            duration_ms: 0,
            steps: 10,
            delay_ms: 0,
        };
        assert_eq!(instant.tick_ms(), 1);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let config = TweenConfig {
            duration_ms: 2000,
            steps: 0,
            delay_ms: 0,
        };
        assert_eq!(
            NumericTween::new([("routes", 50)], config).unwrap_err(),
            AnimationError::ZeroSteps
        );
    }

    #[test]
    fn test_floor_interpolation_every_step() {
        let targets = [("routes", 50), ("customers", 10_000), ("performance", 99)];
        let mut state = TweenState::new(targets, 60).unwrap();

        for s in 0..60 {
            for (name, target) in targets {
                assert_eq!(state.value(name), Some(target * i64::from(s) / 60));
            }
            state.step();
        }
        assert_eq!(state.values(), state.targets());
    }

    #[test]
    fn test_exact_after_final_step() {
        // 7 * 2 / 3 floors to 4; the final step must still land on 7
        let mut state = TweenState::new([("odd", 7)], 3).unwrap();
        assert!(!state.step());
        assert_eq!(state.value("odd"), Some(2));
        assert!(!state.step());
        assert_eq!(state.value("odd"), Some(4));
        assert!(state.step());
        assert_eq!(state.value("odd"), Some(7));
        assert!(!state.step());
        assert_eq!(state.steps_elapsed(), 3);
    }

    #[test]
    fn test_negative_targets_floor() {
        assert_eq!(interpolate(-7, 1, 3), -3);
        assert_eq!(interpolate(-7, 3, 3), -7);
    }

    #[test]
    fn test_routes_fifty_over_sixty_steps() {
        let scheduler = TimerScheduler::new();
        let config = TweenConfig {
            delay_ms: 0,
            ..TweenConfig::hero_stats()
        };
        let mut tween = NumericTween::new([("routes", 50)], config).unwrap();
        tween.mount(&scheduler.handle());

        run(&scheduler, &mut tween, 30 * config.tick_ms());
        assert_eq!(tween.state().steps_elapsed(), 30);
        assert_eq!(tween.value("routes"), Some(25));

        run(&scheduler, &mut tween, 30 * config.tick_ms());
        assert_eq!(tween.value("routes"), Some(50));
        assert!(tween.is_finished());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_start_delay() {
        let scheduler = TimerScheduler::new();
        let mut tween = NumericTween::new([("routes", 50)], TweenConfig::hero_stats()).unwrap();
        tween.mount(&scheduler.handle());

        run(&scheduler, &mut tween, 999);
        assert_eq!(tween.value("routes"), Some(0));
        assert_eq!(tween.writes(), 0);

        // delay fires at 1000, first step at 1033
        run(&scheduler, &mut tween, 34);
        assert_eq!(tween.state().steps_elapsed(), 1);

        run(&scheduler, &mut tween, 5000);
        assert_eq!(tween.value("routes"), Some(50));
    }

    #[test]
    fn test_unmount_mid_animation_stops_writes() {
        let scheduler = TimerScheduler::new();
        let mut tween =
            NumericTween::new([("price", 650)], TweenConfig::route_prices()).unwrap();
        tween.mount(&scheduler.handle());

        run(&scheduler, &mut tween, 10 * 66);
        assert_eq!(tween.state().steps_elapsed(), 10);

        tween.unmount();
        let writes = tween.writes();
        assert_eq!(scheduler.pending_count(), 0);

        run(&scheduler, &mut tween, 10_000);
        assert_eq!(tween.writes(), writes);
        assert_eq!(tween.value("price"), Some(216));
    }

    #[test]
    fn test_unmount_during_delay() {
        let scheduler = TimerScheduler::new();
        let mut tween = NumericTween::new([("routes", 50)], TweenConfig::hero_stats()).unwrap();
        tween.mount(&scheduler.handle());
        tween.unmount();

        run(&scheduler, &mut tween, 10_000);
        assert_eq!(tween.writes(), 0);
    }

    #[test]
    fn test_remount_resumes_without_delay() {
        let scheduler = TimerScheduler::new();
        let mut tween = NumericTween::new([("routes", 60)], TweenConfig::hero_stats()).unwrap();
        tween.mount(&scheduler.handle());
        run(&scheduler, &mut tween, 1000 + 33 * 5);
        assert_eq!(tween.state().steps_elapsed(), 5);

        tween.unmount();
        assert!(tween.mount(&scheduler.handle()));
        run(&scheduler, &mut tween, 33);
        assert_eq!(tween.state().steps_elapsed(), 6);
    }

    #[test]
    fn test_finished_tween_ignores_mount() {
        let scheduler = TimerScheduler::new();
        let mut tween = NumericTween::new([("routes", 50)], TweenConfig::route_prices()).unwrap();
        tween.mount(&scheduler.handle());
        run(&scheduler, &mut tween, 10_000);
        assert!(tween.is_finished());

        tween.unmount();
        assert!(!tween.mount(&scheduler.handle()));
        assert_eq!(scheduler.pending_count(), 0);
    }
}
