//! The page: every section composed, with a single event entry point
//!
//! Host input arrives as [`PageEvent`]s through [`Page::dispatch`]. Elapsed
//! time arrives through [`Page::advance`], which pulls due firings off the
//! scheduler and routes each to the section whose timer it is. Neither path
//! renders anything: callers take a [`PageSnapshot`] when they want to draw.

use std::fmt;

use nandi_core::{TimerHandle, TimerId, TimerScheduler};
use nandi_widgets::CardEvent;
use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::nav;
use crate::sections::{footer, ContactSection, FeaturesSection, Header, Hero, RoutesSection};
use crate::snapshot::PageSnapshot;

/// Card groups that take pointer input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardGroup {
    Routes,
    Features,
}

impl fmt::Display for CardGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardGroup::Routes => f.write_str("routes"),
            CardGroup::Features => f.write_str("features"),
        }
    }
}

/// Input from the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Scroll {
        offset: f32,
        #[serde(default)]
        viewport_height: Option<f32>,
    },
    PointerEnter {
        group: CardGroup,
        index: usize,
    },
    PointerLeave {
        group: CardGroup,
    },
    Activate {
        group: CardGroup,
        index: usize,
    },
    ToggleMenu,
    FollowLink {
        label: String,
    },
    ScrollToTop,
    FieldChange {
        field: String,
        value: String,
    },
    Focus {
        field: String,
    },
    Blur,
    Submit,
}

/// Something the page needs the host to do
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostRequest {
    /// Smooth-scroll to an in-page anchor
    ScrollTo { anchor: String },
    ScrollToTop,
}

#[derive(Debug)]
pub struct Page {
    header: Header,
    hero: Hero,
    routes: RoutesSection,
    features: FeaturesSection,
    contact: ContactSection,
    handle: Option<TimerHandle>,
    scroll_offset: f32,
}

impl Page {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            header: Header::new(&config.header),
            hero: Hero::new(&config.hero)?,
            routes: RoutesSection::new(&config.routes)?,
            features: FeaturesSection::new(&config.features, &config.layout)?,
            contact: ContactSection::new(config.contact),
            handle: None,
            scroll_offset: 0.0,
        })
    }

    /// Start every section's timers on `handle`
    pub fn mount(&mut self, handle: &TimerHandle) {
        if self.handle.is_some() {
            tracing::debug!("page already mounted");
            return;
        }
        self.header.mount();
        self.hero.mount(handle);
        self.routes.mount(handle);
        self.features.mount(handle);
        self.contact.mount(handle);
        self.handle = Some(handle.clone());
        tracing::debug!(now_ms = ?handle.now_ms(), "page mounted");
    }

    /// Cancel every timer. State stays as it was; nothing changes afterwards
    /// until the page is mounted again.
    pub fn unmount(&mut self) {
        self.header.unmount();
        self.hero.unmount();
        self.routes.unmount();
        self.features.unmount();
        self.contact.unmount();
        if self.handle.take().is_some() {
            tracing::debug!("page unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Apply one host event
    pub fn dispatch(&mut self, event: PageEvent) -> Result<Option<HostRequest>> {
        tracing::trace!(?event, "dispatch");
        match event {
            PageEvent::Scroll {
                offset,
                viewport_height,
            } => {
                self.scroll_offset = offset;
                self.header.on_scroll(offset);
                self.features.on_scroll(offset, viewport_height);
            }
            PageEvent::PointerEnter { group, index } => {
                self.on_card(group, CardEvent::PointerEnter(index))?;
            }
            PageEvent::PointerLeave { group } => {
                self.on_card(group, CardEvent::PointerLeave)?;
            }
            PageEvent::Activate { group, index } => {
                self.on_card(group, CardEvent::Activate(index))?;
            }
            PageEvent::ToggleMenu => {
                self.header.toggle_menu();
            }
            PageEvent::FollowLink { label } => {
                self.header.close_menu();
                return Ok(Some(HostRequest::ScrollTo {
                    anchor: nav::resolve(&label),
                }));
            }
            PageEvent::ScrollToTop => return Ok(Some(HostRequest::ScrollToTop)),
            PageEvent::FieldChange { field, value } => {
                self.contact.on_field_change(&field, &value)?;
            }
            PageEvent::Focus { field } => self.contact.on_focus(&field)?,
            PageEvent::Blur => self.contact.on_blur(),
            PageEvent::Submit => {
                self.contact.on_submit()?;
            }
        }
        Ok(None)
    }

    fn on_card(&mut self, group: CardGroup, event: CardEvent) -> Result<()> {
        let count = match group {
            CardGroup::Routes => self.routes.card_count(),
            CardGroup::Features => self.features.card_count(),
        };
        if let CardEvent::PointerEnter(index) | CardEvent::Activate(index) = event {
            if index >= count {
                return Err(SiteError::CardOutOfRange {
                    group,
                    index,
                    count,
                });
            }
        }
        match group {
            CardGroup::Routes => {
                self.routes.on_card(event);
            }
            CardGroup::Features => self.features.on_card(event),
        }
        Ok(())
    }

    /// Route one timer firing to its owner
    ///
    /// Returns `false` for ids no section owns (stale firings after an
    /// unmount, or timers scheduled by someone else).
    pub fn fire(&mut self, id: TimerId) -> bool {
        let handled = self.hero.on_timer(id)
            || self.routes.on_timer(id)
            || self.features.on_timer(id)
            || self.contact.on_timer(id);
        if !handled {
            tracing::trace!(?id, "firing not owned by any section");
        }
        handled
    }

    /// Advance the clock by `dt_ms`, firing due timers in order
    pub fn advance(&mut self, scheduler: &TimerScheduler, dt_ms: u64) -> usize {
        scheduler.advance(dt_ms, |firing| {
            self.fire(firing.id);
        })
    }

    /// Advance the clock to `at_ms`
    pub fn advance_to(&mut self, scheduler: &TimerScheduler, at_ms: u64) -> usize {
        scheduler.advance_to(at_ms, |firing| {
            self.fire(firing.id);
        })
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn routes(&self) -> &RoutesSection {
        &self.routes
    }

    pub fn features(&self) -> &FeaturesSection {
        &self.features
    }

    pub fn contact(&self) -> &ContactSection {
        &self.contact
    }

    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            now_ms: self
                .handle
                .as_ref()
                .and_then(TimerHandle::now_ms)
                .unwrap_or_default(),
            scroll_offset: self.scroll_offset,
            header: self.header.view(),
            hero: self.hero.view(),
            routes: self.routes.view(),
            features: self.features.view(),
            contact: self.contact.view(),
            footer: footer::view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let event: PageEvent =
            serde_json::from_str(r#"{"type":"pointer_enter","group":"routes","index":1}"#).unwrap();
        assert_eq!(
            event,
            PageEvent::PointerEnter {
                group: CardGroup::Routes,
                index: 1
            }
        );

        let event: PageEvent = serde_json::from_str(r#"{"type":"scroll","offset":120}"#).unwrap();
        assert_eq!(
            event,
            PageEvent::Scroll {
                offset: 120.0,
                viewport_height: None
            }
        );
    }

    #[test]
    fn test_card_out_of_range() {
        let mut page = Page::new(&SiteConfig::default()).unwrap();
        let err = page
            .dispatch(PageEvent::Activate {
                group: CardGroup::Routes,
                index: 3,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            SiteError::CardOutOfRange {
                group: CardGroup::Routes,
                index: 3,
                count: 3
            }
        ));
        assert_eq!(page.routes().cards().selected(), None);

        // leave carries no index and is always accepted
        assert!(page
            .dispatch(PageEvent::PointerLeave {
                group: CardGroup::Features
            })
            .is_ok());
    }

    #[test]
    fn test_mount_twice_keeps_one_set_of_timers() {
        let scheduler = TimerScheduler::new();
        let mut page = Page::new(&SiteConfig::default()).unwrap();
        page.mount(&scheduler.handle());
        let pending = scheduler.pending_count();
        page.mount(&scheduler.handle());
        assert_eq!(scheduler.pending_count(), pending);
    }
}
