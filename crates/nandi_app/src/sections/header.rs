use nandi_widgets::{MenuToggle, ScrollPhaseTracker};
use serde::Serialize;

use crate::config::HeaderConfig;
use crate::content::{BRAND, EMERGENCY_PHONE, MOBILE_NAV_LINKS, NAV_LINKS};
use crate::nav::NavLink;

/// Fixed header: scroll-dependent background and the mobile menu
#[derive(Debug)]
pub struct Header {
    scroll: ScrollPhaseTracker,
    menu: MenuToggle,
}

impl Header {
    pub fn new(config: &HeaderConfig) -> Self {
        Self {
            scroll: ScrollPhaseTracker::new(config.scroll_threshold_px),
            menu: MenuToggle::new(),
        }
    }

    pub fn mount(&mut self) {
        self.scroll.mount();
    }

    pub fn unmount(&mut self) {
        self.scroll.unmount();
    }

    /// Returns `true` when the header background changed
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        self.scroll.on_scroll(offset).is_some()
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn close_menu(&mut self) -> bool {
        self.menu.close()
    }

    pub fn scroll(&self) -> &ScrollPhaseTracker {
        &self.scroll
    }

    pub fn view(&self) -> HeaderView {
        HeaderView {
            brand: BRAND,
            solid: self.scroll.phase().past_threshold,
            menu_open: self.menu.is_open(),
            nav: NAV_LINKS.iter().map(|label| NavLink::new(label)).collect(),
            mobile_nav: MOBILE_NAV_LINKS
                .iter()
                .map(|label| NavLink::new(label))
                .collect(),
            call_href: format!("tel:{EMERGENCY_PHONE}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeaderView {
    pub brand: &'static str,
    /// Opaque background once scrolled past the threshold
    pub solid: bool,
    pub menu_open: bool,
    pub nav: Vec<NavLink>,
    pub mobile_nav: Vec<NavLink>,
    pub call_href: String,
}
