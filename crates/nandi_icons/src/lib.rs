//! Nandi icon registry
//!
//! The subset of Lucide icons the site uses, as a closed [`Icon`] enum. Route
//! feature names map to icons through [`feature_icon`], which is total:
//! unknown names resolve to [`FALLBACK_ICON`] instead of failing to render.
//!
//! ```rust
//! use nandi_icons::{feature_icon, Icon};
//!
//! assert_eq!(feature_icon("Free Wi-Fi"), Icon::Wifi);
//! assert_eq!(feature_icon("Hot Towels"), Icon::Coffee);
//! assert!(Icon::Bus.to_svg().starts_with("<svg"));
//! ```

pub mod svg;

use serde::Serialize;

/// Icons used across the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Icon {
    ArrowRight,
    ArrowUp,
    Award,
    Bus,
    Calendar,
    CircleCheck,
    Clock,
    Coffee,
    Download,
    Facebook,
    Heart,
    Instagram,
    Mail,
    MapPin,
    Menu,
    MessageCircle,
    Phone,
    Play,
    Route,
    Send,
    Shield,
    Smartphone,
    Snowflake,
    Sparkles,
    Star,
    Twitter,
    User,
    Users,
    Wifi,
    X,
    Zap,
}

/// Icon used for any feature name without an explicit mapping
pub const FALLBACK_ICON: Icon = Icon::Coffee;

impl Icon {
    pub const ALL: [Icon; 31] = [
        Icon::ArrowRight,
        Icon::ArrowUp,
        Icon::Award,
        Icon::Bus,
        Icon::Calendar,
        Icon::CircleCheck,
        Icon::Clock,
        Icon::Coffee,
        Icon::Download,
        Icon::Facebook,
        Icon::Heart,
        Icon::Instagram,
        Icon::Mail,
        Icon::MapPin,
        Icon::Menu,
        Icon::MessageCircle,
        Icon::Phone,
        Icon::Play,
        Icon::Route,
        Icon::Send,
        Icon::Shield,
        Icon::Smartphone,
        Icon::Snowflake,
        Icon::Sparkles,
        Icon::Star,
        Icon::Twitter,
        Icon::User,
        Icon::Users,
        Icon::Wifi,
        Icon::X,
        Icon::Zap,
    ];

    /// Lucide icon name (kebab-case)
    pub fn name(self) -> &'static str {
        match self {
            Icon::ArrowRight => "arrow-right",
            Icon::ArrowUp => "arrow-up",
            Icon::Award => "award",
            Icon::Bus => "bus",
            Icon::Calendar => "calendar",
            Icon::CircleCheck => "circle-check",
            Icon::Clock => "clock",
            Icon::Coffee => "coffee",
            Icon::Download => "download",
            Icon::Facebook => "facebook",
            Icon::Heart => "heart",
            Icon::Instagram => "instagram",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::Menu => "menu",
            Icon::MessageCircle => "message-circle",
            Icon::Phone => "phone",
            Icon::Play => "play",
            Icon::Route => "route",
            Icon::Send => "send",
            Icon::Shield => "shield",
            Icon::Smartphone => "smartphone",
            Icon::Snowflake => "snowflake",
            Icon::Sparkles => "sparkles",
            Icon::Star => "star",
            Icon::Twitter => "twitter",
            Icon::User => "user",
            Icon::Users => "users",
            Icon::Wifi => "wifi",
            Icon::X => "x",
            Icon::Zap => "zap",
        }
    }

    /// Inner SVG elements
    pub fn body(self) -> &'static str {
        match self {
            Icon::ArrowRight => svg::ARROW_RIGHT,
            Icon::ArrowUp => svg::ARROW_UP,
            Icon::Award => svg::AWARD,
            Icon::Bus => svg::BUS,
            Icon::Calendar => svg::CALENDAR,
            Icon::CircleCheck => svg::CIRCLE_CHECK,
            Icon::Clock => svg::CLOCK,
            Icon::Coffee => svg::COFFEE,
            Icon::Download => svg::DOWNLOAD,
            Icon::Facebook => svg::FACEBOOK,
            Icon::Heart => svg::HEART,
            Icon::Instagram => svg::INSTAGRAM,
            Icon::Mail => svg::MAIL,
            Icon::MapPin => svg::MAP_PIN,
            Icon::Menu => svg::MENU,
            Icon::MessageCircle => svg::MESSAGE_CIRCLE,
            Icon::Phone => svg::PHONE,
            Icon::Play => svg::PLAY,
            Icon::Route => svg::ROUTE,
            Icon::Send => svg::SEND,
            Icon::Shield => svg::SHIELD,
            Icon::Smartphone => svg::SMARTPHONE,
            Icon::Snowflake => svg::SNOWFLAKE,
            Icon::Sparkles => svg::SPARKLES,
            Icon::Star => svg::STAR,
            Icon::Twitter => svg::TWITTER,
            Icon::User => svg::USER,
            Icon::Users => svg::USERS,
            Icon::Wifi => svg::WIFI,
            Icon::X => svg::X,
            Icon::Zap => svg::ZAP,
        }
    }

    /// Look an icon up by its Lucide name
    pub fn from_name(name: &str) -> Option<Icon> {
        Icon::ALL.into_iter().find(|icon| icon.name() == name)
    }

    /// Complete `<svg>` element for this icon
    pub fn to_svg(self) -> String {
        to_svg(self.body())
    }
}

impl From<Icon> for &'static str {
    fn from(icon: Icon) -> Self {
        icon.name()
    }
}

/// Icon for a route feature name
///
/// Total over all strings: names without a mapping get [`FALLBACK_ICON`].
pub fn feature_icon(feature: &str) -> Icon {
    match feature {
        "AC Sleeper" | "AC Seater" | "Charging Port" => Icon::Zap,
        "GPS Tracking" => Icon::MapPin,
        "Free Wi-Fi" => Icon::Wifi,
        "Safety" => Icon::Shield,
        "Entertainment" | "Snacks" | "Blanket" | "Meals" => Icon::Coffee,
        other => {
            tracing::debug!(feature = other, "no icon mapping, using fallback");
            FALLBACK_ICON
        }
    }
}

/// Wrap icon body elements in a 24x24 stroke `<svg>` element
pub fn to_svg(body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{body}</svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_features() {
        assert_eq!(feature_icon("AC Sleeper"), Icon::Zap);
        assert_eq!(feature_icon("GPS Tracking"), Icon::MapPin);
        assert_eq!(feature_icon("Free Wi-Fi"), Icon::Wifi);
        assert_eq!(feature_icon("Safety"), Icon::Shield);
        assert_eq!(feature_icon("Meals"), Icon::Coffee);
    }

    #[test]
    fn test_unknown_feature_falls_back() {
        assert_eq!(feature_icon(""), FALLBACK_ICON);
        assert_eq!(feature_icon("ac sleeper"), FALLBACK_ICON);
        assert_eq!(feature_icon("Massage Chairs"), FALLBACK_ICON);
    }

    #[test]
    fn test_name_roundtrip() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_name(icon.name()), Some(icon));
            assert!(!icon.body().is_empty());
        }
        assert_eq!(Icon::from_name("rocket"), None);
    }

    #[test]
    fn test_to_svg_wraps_body() {
        let markup = Icon::Bus.to_svg();
        assert!(markup.starts_with("<svg"));
        assert!(markup.contains(svg::BUS));
        assert!(markup.ends_with("</svg>"));
    }
}
