//! Plain-text rendering of a page snapshot

use std::fmt;

use crate::snapshot::PageSnapshot;

/// Display adapter that draws a snapshot as text
pub struct TextRender<'a>(pub &'a PageSnapshot);

pub fn render_text(snapshot: &PageSnapshot) -> String {
    TextRender(snapshot).to_string()
}

fn mark(on: bool, text: &str) -> &str {
    if on {
        text
    } else {
        ""
    }
}

impl fmt::Display for TextRender<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.0;

        let header = &page.header;
        writeln!(
            f,
            "== {} == [{}] t={}ms scroll={}px",
            header.brand,
            if header.solid { "solid" } else { "transparent" },
            page.now_ms,
            page.scroll_offset
        )?;
        let nav: Vec<String> = header
            .nav
            .iter()
            .map(|link| format!("{} ({})", link.label, link.href))
            .collect();
        writeln!(f, "  {}", nav.join(" | "))?;
        if header.menu_open {
            for link in &header.mobile_nav {
                writeln!(f, "  menu> {} ({})", link.label, link.href)?;
            }
        }

        let hero = &page.hero;
        writeln!(f, "\n-- {} --", hero.title)?;
        writeln!(f, "{}", hero.tagline)?;
        for stat in &hero.stats {
            writeln!(
                f,
                "  {} {:>8} {}",
                if stat.highlighted { ">" } else { " " },
                stat.display,
                stat.label
            )?;
        }

        writeln!(f, "\n-- Popular Routes --")?;
        for card in &page.routes.cards {
            writeln!(
                f,
                "  {}{} -> {} {} {} (was {}, {}) {:.1}* ({}) {}{}",
                mark(card.popular, "[popular] "),
                card.from,
                card.to,
                card.duration,
                card.price,
                card.original_price,
                card.savings,
                card.rating,
                card.reviews,
                mark(card.hovered, "[hover]"),
                mark(card.selected, "[selected]"),
            )?;
            let features: Vec<String> = card
                .features
                .iter()
                .map(|badge| format!("{}:{}", badge.icon.name(), badge.name))
                .collect();
            writeln!(f, "      {}", features.join(", "))?;
        }

        let features = &page.features;
        writeln!(f, "\n-- Why Choose Us --")?;
        for card in &features.cards {
            writeln!(
                f,
                "  {} {} - {}{}",
                if card.active { "*" } else { " " },
                card.title,
                card.stats,
                mark(card.hovered, " [hover]"),
            )?;
        }
        if features.highlights_revealed {
            let highlights: Vec<String> = features
                .highlights
                .iter()
                .map(|h| format!("{} {}", h.value, h.label))
                .collect();
            writeln!(f, "  {}", highlights.join(" | "))?;
        }
        let extras: Vec<&str> = features.extras.iter().map(|card| card.title).collect();
        writeln!(f, "  also: {}", extras.join(", "))?;

        let contact = &page.contact;
        writeln!(f, "\n-- Contact --")?;
        for channel in &contact.channels {
            writeln!(f, "  {}: {}", channel.title, channel.details.join(", "))?;
        }
        for (name, value) in &contact.form.fields {
            let focus = contact.form.focused.as_deref() == Some(name.as_str());
            writeln!(f, "  {}{}: {:?}", name, mark(focus, "*"), value)?;
        }
        writeln!(
            f,
            "  [{}]{}",
            contact.submit_label,
            mark(!contact.submit_enabled, " (disabled)")
        )?;

        let footer = &page.footer;
        writeln!(f, "\n-- Footer --")?;
        let links: Vec<&str> = footer
            .quick_links
            .iter()
            .map(|link| link.label.as_str())
            .collect();
        writeln!(f, "  {}", links.join(" | "))?;
        write!(f, "  {}  [^ top]", footer.copyright)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::page::{Page, PageEvent};

    #[test]
    fn test_render_initial_page() {
        let page = Page::new(&SiteConfig::default()).unwrap();
        let text = render_text(&page.snapshot());
        assert!(text.starts_with("== Nandighosh Bus == [transparent]"));
        assert!(text.contains("[popular] Balasore -> Sambalpur 8h 30m ₹650"));
        assert!(text.contains("[Send Message]"));
        assert!(!text.contains("menu>"));
        assert!(!text.contains("Customer Support"));
    }

    #[test]
    fn test_render_open_menu() {
        let mut page = Page::new(&SiteConfig::default()).unwrap();
        page.dispatch(PageEvent::ToggleMenu).unwrap();
        let text = render_text(&page.snapshot());
        assert!(text.contains("menu> Why Choose Us (#features)"));
    }
}
