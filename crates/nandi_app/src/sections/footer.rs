use nandi_icons::Icon;
use serde::Serialize;

use crate::content::{CONTACT_CHANNELS, COPYRIGHT, QUICK_LINKS};
use crate::nav::NavLink;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FooterView {
    pub quick_links: Vec<NavLink>,
    /// First detail of each contact channel
    pub contacts: Vec<(Icon, &'static str)>,
    pub copyright: &'static str,
}

/// The footer has no state of its own; its scroll-to-top control is
/// handled by the page.
pub fn view() -> FooterView {
    FooterView {
        quick_links: QUICK_LINKS
            .iter()
            .map(|(label, href)| NavLink {
                label: label.to_string(),
                href: href.to_string(),
            })
            .collect(),
        contacts: CONTACT_CHANNELS
            .iter()
            .map(|channel| (channel.icon, channel.details[0]))
            .collect(),
        copyright: COPYRIGHT,
    }
}
