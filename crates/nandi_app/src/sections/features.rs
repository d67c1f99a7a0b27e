use nandi_animation::IntervalCarousel;
use nandi_core::{TimerHandle, TimerId};
use nandi_icons::Icon;
use nandi_widgets::{CardEvent, HoverSelectionState, RevealLatch};
use serde::Serialize;

use crate::config::{FeaturesConfig, LayoutConfig};
use crate::content::{Feature, ADDITIONAL_FEATURES, FEATURES, SERVICE_HIGHLIGHTS};
use crate::error::Result;

/// "Why choose us": rotating feature spotlight and a stats row revealed on
/// first sight
#[derive(Debug)]
pub struct FeaturesSection {
    rotation: IntervalCarousel,
    cards: HoverSelectionState,
    highlights: RevealLatch,
    layout: LayoutConfig,
}

impl FeaturesSection {
    pub fn new(config: &FeaturesConfig, layout: &LayoutConfig) -> Result<Self> {
        Ok(Self {
            rotation: IntervalCarousel::new(FEATURES.len(), config.rotation_period_ms)?,
            cards: HoverSelectionState::new(),
            highlights: RevealLatch::new(config.reveal_threshold),
            layout: layout.clone(),
        })
    }

    pub fn card_count(&self) -> usize {
        FEATURES.len()
    }

    pub fn mount(&mut self, handle: &TimerHandle) {
        self.rotation.mount(handle);
    }

    pub fn unmount(&mut self) {
        self.rotation.unmount();
    }

    pub fn on_timer(&mut self, id: TimerId) -> bool {
        self.rotation.on_timer(id)
    }

    /// Feature cards are hover-only; activation is dropped
    pub fn on_card(&mut self, event: CardEvent) {
        if let CardEvent::Activate(index) = event {
            tracing::trace!(index, "feature cards are not selectable");
            return;
        }
        self.cards.dispatch(event);
    }

    /// Feed the viewport position. Returns `true` when the stats row is
    /// revealed by this observation.
    pub fn on_scroll(&mut self, offset: f32, viewport_height: Option<f32>) -> bool {
        self.highlights.observe(
            offset,
            viewport_height.unwrap_or(self.layout.viewport_height),
            self.layout.features_top,
            self.layout.features_height,
        )
    }

    pub fn rotation(&self) -> &IntervalCarousel {
        &self.rotation
    }

    pub fn cards(&self) -> &HoverSelectionState {
        &self.cards
    }

    pub fn view(&self) -> FeaturesView {
        let active = self.rotation.active_index();
        let hovered = self.cards.hovered();
        FeaturesView {
            active,
            cards: FEATURES
                .iter()
                .enumerate()
                .map(|(index, feature)| {
                    FeatureCard::new(feature, index == active, hovered == Some(index))
                })
                .collect(),
            highlights_revealed: self.highlights.is_revealed(),
            highlights: SERVICE_HIGHLIGHTS
                .iter()
                .map(|&(value, label)| Highlight { value, label })
                .collect(),
            extras: ADDITIONAL_FEATURES
                .iter()
                .map(|feature| FeatureCard::new(feature, false, false))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FeaturesView {
    /// Index of the spotlighted feature
    pub active: usize,
    pub cards: Vec<FeatureCard>,
    pub highlights_revealed: bool,
    pub highlights: Vec<Highlight>,
    pub extras: Vec<FeatureCard>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub stats: &'static str,
    pub icon: Icon,
    pub active: bool,
    pub hovered: bool,
}

impl FeatureCard {
    fn new(feature: &Feature, active: bool, hovered: bool) -> Self {
        Self {
            title: feature.title,
            description: feature.description,
            stats: feature.stats,
            icon: feature.icon,
            active,
            hovered,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}
