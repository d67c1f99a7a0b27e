//! Page sections
//!
//! Each section owns the state machines behind one part of the page and
//! produces a serialisable view of itself.

pub mod contact;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod routes;

pub use contact::{ChannelView, ContactSection, ContactView};
pub use features::{FeatureCard, FeaturesSection, FeaturesView, Highlight};
pub use footer::FooterView;
pub use header::{Header, HeaderView};
pub use hero::{Hero, HeroView, StatView};
pub use routes::{FeatureBadge, RouteCard, RoutesSection, RoutesView};
