//! Nandighosh Bus site runtime
//!
//! Composes the widget state machines into the brochure page: a header that
//! turns solid on scroll, counting hero statistics, route cards with price
//! count-up and selection, a rotating feature spotlight, and the contact
//! form. Hosts feed [`PageEvent`]s and elapsed time in, and take
//! [`PageSnapshot`]s out.
//!
//! # Example
//!
//! ```rust
//! use nandi_app::prelude::*;
//!
//! let scheduler = TimerScheduler::new();
//! let mut page = Page::new(&SiteConfig::default())?;
//! page.mount(&scheduler.handle());
//!
//! page.dispatch(PageEvent::Scroll { offset: 120.0, viewport_height: None })?;
//! page.advance(&scheduler, 3000);
//!
//! let snapshot = page.snapshot();
//! assert!(snapshot.header.solid);
//! assert_eq!(snapshot.hero.stats[1].display, "10,000+");
//! # Ok::<(), nandi_app::SiteError>(())
//! ```

pub mod config;
pub mod content;
mod error;
pub mod format;
pub mod nav;
pub mod page;
pub mod render;
pub mod sections;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use page::{CardGroup, HostRequest, Page, PageEvent};
pub use render::render_text;
pub use snapshot::PageSnapshot;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::error::{Result, SiteError};
    pub use crate::page::{CardGroup, HostRequest, Page, PageEvent};
    pub use crate::render::render_text;
    pub use crate::snapshot::PageSnapshot;

    pub use nandi_core::{TimerHandle, TimerScheduler};
    pub use nandi_widgets::FormPhase;
}
