use nandi_animation::{IntervalCarousel, NumericTween};
use nandi_core::{TimerHandle, TimerId};
use nandi_icons::Icon;
use serde::Serialize;

use crate::config::HeroConfig;
use crate::content::{BRAND, HERO_STATS, TAGLINE};
use crate::error::Result;
use crate::format::display_stat;

/// Hero banner: counting statistics with a rotating highlight
#[derive(Debug)]
pub struct Hero {
    numbers: NumericTween,
    highlight: IntervalCarousel,
}

impl Hero {
    pub fn new(config: &HeroConfig) -> Result<Self> {
        let targets = HERO_STATS.iter().map(|stat| (stat.key, stat.value));
        Ok(Self {
            numbers: NumericTween::new(targets, config.tween)?,
            highlight: IntervalCarousel::new(HERO_STATS.len(), config.highlight_period_ms)?,
        })
    }

    pub fn mount(&mut self, handle: &TimerHandle) {
        self.numbers.mount(handle);
        self.highlight.mount(handle);
    }

    pub fn unmount(&mut self) {
        self.numbers.unmount();
        self.highlight.unmount();
    }

    pub fn on_timer(&mut self, id: TimerId) -> bool {
        self.numbers.on_timer(id) || self.highlight.on_timer(id)
    }

    pub fn numbers(&self) -> &NumericTween {
        &self.numbers
    }

    pub fn highlight(&self) -> &IntervalCarousel {
        &self.highlight
    }

    pub fn view(&self) -> HeroView {
        let highlighted = self.highlight.active_index();
        let stats = HERO_STATS
            .iter()
            .enumerate()
            .map(|(index, stat)| {
                let value = self.numbers.value(stat.key).unwrap_or_default();
                StatView {
                    label: stat.label,
                    value,
                    display: display_stat(stat, value),
                    icon: stat.icon,
                    highlighted: index == highlighted,
                }
            })
            .collect();

        HeroView {
            title: BRAND,
            tagline: TAGLINE,
            stats,
            counting: !self.numbers.is_finished(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeroView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub stats: Vec<StatView>,
    /// Numbers are still counting up
    pub counting: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatView {
    pub label: &'static str,
    pub value: i64,
    pub display: String,
    pub icon: Icon,
    pub highlighted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_core::TimerScheduler;

    #[test]
    fn test_counts_then_rotates() {
        let scheduler = TimerScheduler::new();
        let mut hero = Hero::new(&HeroConfig::default()).unwrap();
        hero.mount(&scheduler.handle());

        scheduler.advance(999, |firing| {
            hero.on_timer(firing.id);
        });
        let view = hero.view();
        assert!(view.counting);
        assert_eq!(view.stats[1].display, "0+");
        assert!(view.stats[0].highlighted);

        scheduler.advance(2001, |firing| {
            hero.on_timer(firing.id);
        });
        let view = hero.view();
        assert!(!view.counting);
        let displays: Vec<&str> = view.stats.iter().map(|s| s.display.as_str()).collect();
        assert_eq!(displays, ["50+", "10,000+", "99%"]);
        assert!(view.stats[1].highlighted);
    }
}
