use nandi_animation::NumericTween;
use nandi_core::{TimerHandle, TimerId};
use nandi_icons::{feature_icon, Icon};
use nandi_widgets::{CardEvent, CardInteraction, HoverSelectionState};
use serde::Serialize;
use smallvec::SmallVec;

use crate::config::RoutesConfig;
use crate::content::ROUTES;
use crate::error::Result;
use crate::format::{display_price, parse_price, rupees, savings};

/// Popular routes: price count-up plus hover and selection per card
#[derive(Debug)]
pub struct RoutesSection {
    prices: NumericTween,
    cards: HoverSelectionState,
}

impl RoutesSection {
    pub fn new(config: &RoutesConfig) -> Result<Self> {
        let targets = ROUTES
            .iter()
            .map(|route| (route.slug, parse_price(route.price)));
        Ok(Self {
            prices: NumericTween::new(targets, config.tween)?,
            cards: HoverSelectionState::new(),
        })
    }

    pub fn card_count(&self) -> usize {
        ROUTES.len()
    }

    pub fn mount(&mut self, handle: &TimerHandle) {
        self.prices.mount(handle);
    }

    pub fn unmount(&mut self) {
        self.prices.unmount();
    }

    pub fn on_timer(&mut self, id: TimerId) -> bool {
        self.prices.on_timer(id)
    }

    /// Apply a card event; the index has already been range-checked
    pub fn on_card(&mut self, event: CardEvent) -> CardInteraction {
        self.cards.dispatch(event)
    }

    pub fn prices(&self) -> &NumericTween {
        &self.prices
    }

    pub fn cards(&self) -> &HoverSelectionState {
        &self.cards
    }

    pub fn view(&self) -> RoutesView {
        let cards = ROUTES
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let emphasis = self.cards.emphasis(index);
                RouteCard {
                    from: route.from,
                    to: route.to,
                    duration: route.duration,
                    price: display_price(route, self.prices.value(route.slug)),
                    original_price: route.original_price,
                    savings: format!("Save {}", rupees(savings(route))),
                    rating: route.rating,
                    reviews: route.reviews,
                    popular: route.popular,
                    features: route
                        .features
                        .iter()
                        .map(|&name| FeatureBadge {
                            name,
                            icon: feature_icon(name),
                        })
                        .collect(),
                    hovered: emphasis.hovered,
                    selected: emphasis.selected,
                }
            })
            .collect();
        RoutesView { cards }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoutesView {
    pub cards: Vec<RouteCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteCard {
    pub from: &'static str,
    pub to: &'static str,
    pub duration: &'static str,
    pub price: String,
    pub original_price: &'static str,
    pub savings: String,
    pub rating: f32,
    pub reviews: u32,
    pub popular: bool,
    pub features: SmallVec<[FeatureBadge; 4]>,
    pub hovered: bool,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureBadge {
    pub name: &'static str,
    pub icon: Icon,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_core::TimerScheduler;

    #[test]
    fn test_static_price_until_count_starts() {
        let section = RoutesSection::new(&RoutesConfig::default()).unwrap();
        let view = section.view();
        assert_eq!(view.cards[0].price, "₹650");
        assert_eq!(view.cards[0].savings, "Save ₹100");
        assert_eq!(view.cards[1].features[3].icon, Icon::Shield);
    }

    #[test]
    fn test_prices_settle_on_targets() {
        let scheduler = TimerScheduler::new();
        let mut section = RoutesSection::new(&RoutesConfig::default()).unwrap();
        section.mount(&scheduler.handle());

        scheduler.advance(66, |firing| {
            section.on_timer(firing.id);
        });
        // step 1 of 30: floor(650 / 30)
        assert_eq!(section.view().cards[0].price, "₹21");

        scheduler.advance(2000, |firing| {
            section.on_timer(firing.id);
        });
        let prices: Vec<String> = section.view().cards.into_iter().map(|c| c.price).collect();
        assert_eq!(prices, ["₹650", "₹450", "₹520"]);
        assert!(section.prices().is_finished());
    }

    #[test]
    fn test_card_emphasis() {
        let mut section = RoutesSection::new(&RoutesConfig::default()).unwrap();
        section.on_card(CardEvent::PointerEnter(2));
        section.on_card(CardEvent::Activate(1));
        let view = section.view();
        assert!(view.cards[2].hovered);
        assert!(view.cards[1].selected);
        assert!(!view.cards[0].hovered && !view.cards[0].selected);
    }
}
