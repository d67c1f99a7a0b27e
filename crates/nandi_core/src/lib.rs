//! Nandi Core Runtime
//!
//! Foundational primitives for the Nandighosh Bus page runtime:
//!
//! - **Timers**: a virtual-time scheduler with schedule/cancel handles
//! - **Tracked state**: write-counting cells that every component stores its
//!   state in
//!
//! Everything here is host independent. A host (the page runner, the CLI,
//! a test) owns a [`TimerScheduler`] and advances its clock; components hold
//! [`TimerHandle`]s and [`Timer`] guards.
//!
//! # Example
//!
//! ```rust
//! use nandi_core::{Timer, TimerScheduler};
//!
//! let scheduler = TimerScheduler::new();
//! let timer = Timer::once(&scheduler.handle(), 2000).unwrap();
//!
//! let mut fired = 0;
//! scheduler.advance(2000, |firing| {
//!     if timer.owns(firing.id) {
//!         fired += 1;
//!     }
//! });
//! assert_eq!(fired, 1);
//! ```

pub mod timer;
pub mod tracked;

pub use timer::{Firing, Timer, TimerHandle, TimerId, TimerKind, TimerScheduler};
pub use tracked::Tracked;
