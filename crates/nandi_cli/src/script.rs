//! Scripted sessions
//!
//! A script is a TOML list of timed steps. Each step moves the clock to
//! `at_ms` and then, optionally, delivers one event:
//!
//! ```toml
//! [[step]]
//! at_ms = 0
//! event = { type = "pointer_enter", group = "routes", index = 0 }
//!
//! [[step]]
//! at_ms = 2500
//! event = { type = "submit" }
//!
//! [[step]]
//! at_ms = 6000
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nandi_app::{HostRequest, Page, PageEvent, PageSnapshot};
use nandi_core::TimerScheduler;
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, Default, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
pub struct Step {
    /// Absolute clock time of the step
    pub at_ms: u64,
    #[serde(default)]
    pub event: Option<PageEvent>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self> {
        let script: Script = toml::from_str(text).context("Failed to parse script")?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid script {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].at_ms < pair[0].at_ms {
                anyhow::bail!(
                    "step {} goes back in time ({}ms after {}ms)",
                    index + 1,
                    pair[1].at_ms,
                    pair[0].at_ms
                );
            }
        }
        Ok(())
    }

    /// Play every step against a mounted page
    ///
    /// Rejected events are logged and skipped, the way a UI drops input it
    /// cannot apply. `on_step` sees the snapshot after each step. Returns
    /// the page as it stands once the last step has played.
    pub fn run<F>(
        &self,
        page: &mut Page,
        scheduler: &TimerScheduler,
        mut on_step: F,
    ) -> Result<PageSnapshot>
    where
        F: FnMut(usize, &PageSnapshot) -> Result<()>,
    {
        for (index, step) in self.steps.iter().enumerate() {
            page.advance_to(scheduler, step.at_ms);
            if let Some(event) = &step.event {
                match page.dispatch(event.clone()) {
                    Ok(Some(request)) => handle_request(page, request),
                    Ok(None) => {}
                    Err(err) => warn!(step = index, at_ms = step.at_ms, "event rejected: {err}"),
                }
            }
            on_step(index, &page.snapshot())?;
        }
        Ok(page.snapshot())
    }
}

/// Act as the host for requests the page makes
pub fn handle_request(page: &mut Page, request: HostRequest) {
    match request {
        HostRequest::ScrollToTop => {
            info!("scrolling to top");
            let top = PageEvent::Scroll {
                offset: 0.0,
                viewport_height: None,
            };
            if let Err(err) = page.dispatch(top) {
                warn!("scroll to top failed: {err}");
            }
        }
        HostRequest::ScrollTo { anchor } => info!(%anchor, "scroll requested"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_app::SiteConfig;

    const SCRIPT: &str = r#"
        [[step]]
        at_ms = 0
        event = { type = "field_change", field = "name", value = "Asha" }

        [[step]]
        at_ms = 100
        event = { type = "scroll", offset = 300 }

        [[step]]
        at_ms = 200
        event = { type = "activate", group = "routes", index = 7 }

        [[step]]
        at_ms = 4000
    "#;

    #[test]
    fn test_parse_steps() {
        let script = Script::parse(SCRIPT).unwrap();
        assert_eq!(script.steps.len(), 4);
        assert_eq!(
            script.steps[1].event,
            Some(PageEvent::Scroll {
                offset: 300.0,
                viewport_height: None
            })
        );
        assert!(script.steps[3].event.is_none());
    }

    #[test]
    fn test_rejects_time_travel() {
        let err = Script::parse("[[step]]\nat_ms = 50\n[[step]]\nat_ms = 10").unwrap_err();
        assert!(err.to_string().contains("back in time"));
    }

    #[test]
    fn test_run_skips_rejected_events() {
        let script = Script::parse(SCRIPT).unwrap();
        let scheduler = TimerScheduler::new();
        let mut page = Page::new(&SiteConfig::default()).unwrap();
        page.mount(&scheduler.handle());

        let mut seen = Vec::new();
        let last = script
            .run(&mut page, &scheduler, |index, snapshot| {
                seen.push((index, snapshot.now_ms));
                Ok(())
            })
            .unwrap();

        assert_eq!(seen, [(0, 0), (1, 100), (2, 200), (3, 4000)]);
        assert_eq!(last.now_ms, 4000);
        assert!(last.same_content(&page.snapshot()));
        assert!(last.header.solid);
        assert_eq!(last.contact.form.field("name"), Some("Asha"));
        assert!(last.routes.cards.iter().all(|card| !card.selected));
    }

    #[test]
    fn test_empty_script_returns_mounted_page() {
        let script = Script::parse("").unwrap();
        let scheduler = TimerScheduler::new();
        let mut page = Page::new(&SiteConfig::default()).unwrap();
        page.mount(&scheduler.handle());

        let mut steps = 0;
        let last = script
            .run(&mut page, &scheduler, |_, _| {
                steps += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(steps, 0);
        assert_eq!(last.now_ms, 0);
    }
}
