//! Static site content

use nandi_icons::Icon;

pub const BRAND: &str = "Nandighosh Bus";
pub const TAGLINE: &str = "Connecting Odisha, Comfortably";
pub const EMERGENCY_PHONE: &str = "+919876543210";
pub const COPYRIGHT: &str = "© 2024 Nandighosh Bus. Made with love in Odisha";

/// Desktop navigation labels
pub const NAV_LINKS: [&str; 3] = ["Routes", "Features", "Contact"];

/// Mobile menu labels
pub const MOBILE_NAV_LINKS: [&str; 3] = ["Routes", "Why Choose Us", "Contact"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Route {
    /// Stable key, also the contact form option value
    pub slug: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub duration: &'static str,
    pub price: &'static str,
    pub original_price: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub features: [&'static str; 4],
    pub popular: bool,
}

pub const ROUTES: [Route; 3] = [
    Route {
        slug: "balasore-sambalpur",
        from: "Balasore",
        to: "Sambalpur",
        duration: "8h 30m",
        price: "₹650",
        original_price: "₹750",
        rating: 4.8,
        reviews: 234,
        features: ["AC Sleeper", "GPS Tracking", "Free Wi-Fi", "Entertainment"],
        popular: true,
    },
    Route {
        slug: "balasore-jamshedpur",
        from: "Balasore",
        to: "Jamshedpur",
        duration: "5h 45m",
        price: "₹450",
        original_price: "₹520",
        rating: 4.9,
        reviews: 189,
        features: ["AC Seater", "Charging Port", "Snacks", "Safety"],
        popular: false,
    },
    Route {
        slug: "balasore-berhampur",
        from: "Balasore",
        to: "Berhampur",
        duration: "6h 15m",
        price: "₹520",
        original_price: "₹600",
        rating: 4.7,
        reviews: 156,
        features: ["AC Sleeper", "Entertainment", "Blanket", "Meals"],
        popular: false,
    },
];

/// Headline statistic counted up in the hero
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    /// Tween metric name
    pub key: &'static str,
    pub value: i64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        key: "routes",
        value: 50,
        suffix: "+",
        label: "Routes Available",
        icon: Icon::MapPin,
    },
    HeroStat {
        key: "customers",
        value: 10_000,
        suffix: "+",
        label: "Happy Customers",
        icon: Icon::Users,
    },
    HeroStat {
        key: "performance",
        value: 99,
        suffix: "%",
        label: "On-Time Performance",
        icon: Icon::Award,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Highlight line; empty for the additional features
    pub stats: &'static str,
    pub icon: Icon,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "AC Sleeper Coaches",
        description: "Travel in comfort with our fully air-conditioned sleeper coaches designed for long-distance journeys.",
        stats: "18°C Perfect Temperature",
        icon: Icon::Snowflake,
    },
    Feature {
        title: "Smart Booking",
        description: "Book your tickets instantly through our AI-powered platform with real-time seat selection.",
        stats: "30 Sec Average Booking",
        icon: Icon::Smartphone,
    },
    Feature {
        title: "Timely Departure",
        description: "We pride ourselves on punctuality. Our buses depart and arrive on time, every time.",
        stats: "99.2% On-Time Record",
        icon: Icon::Clock,
    },
    Feature {
        title: "Premium Hygiene",
        description: "Sanitized interiors and well-maintained restroom facilities for your comfort during the journey.",
        stats: "Cleaned Every 2 Hours",
        icon: Icon::Sparkles,
    },
];

pub const ADDITIONAL_FEATURES: [Feature; 4] = [
    Feature {
        title: "Free Wi-Fi",
        description: "High-speed internet throughout your journey",
        stats: "",
        icon: Icon::Wifi,
    },
    Feature {
        title: "GPS Tracking",
        description: "Real-time location tracking for safety",
        stats: "",
        icon: Icon::Shield,
    },
    Feature {
        title: "Refreshments",
        description: "Complimentary snacks and beverages",
        stats: "",
        icon: Icon::Coffee,
    },
    Feature {
        title: "24/7 Support",
        description: "Round-the-clock customer assistance",
        stats: "",
        icon: Icon::Star,
    },
];

/// Stats row shown once the features section is revealed
pub const SERVICE_HIGHLIGHTS: [(&str, &str); 3] = [
    ("24/7", "Customer Support"),
    ("GPS", "Live Tracking"),
    ("Safe", "Secure Journey"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub details: [&'static str; 2],
    pub icon: Icon,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Phone",
        details: ["+91 9876543210", "+91 9876543211"],
        icon: Icon::Phone,
    },
    ContactChannel {
        title: "Email",
        details: ["info@nandighoshbus.com", "booking@nandighoshbus.com"],
        icon: Icon::Mail,
    },
    ContactChannel {
        title: "Address",
        details: ["123 Bus Terminal Road", "Balasore, Odisha 756001"],
        icon: Icon::MapPin,
    },
];

/// Contact form fields, in display order
pub const FORM_FIELDS: [&str; 4] = ["name", "phone", "route", "message"];

/// Fields that must be non-blank to submit
pub const REQUIRED_FIELDS: [&str; 4] = FORM_FIELDS;

/// `(value, label)` pairs of the route select
pub const ROUTE_OPTIONS: [(&str, &str); 5] = [
    ("", "Select a route"),
    ("balasore-sambalpur", "Balasore to Sambalpur"),
    ("balasore-jamshedpur", "Balasore to Jamshedpur"),
    ("balasore-berhampur", "Balasore to Berhampur"),
    ("other", "Other"),
];

/// `(label, href)` pairs of the footer quick links
pub const QUICK_LINKS: [(&str, &str); 6] = [
    ("Routes", "#routes"),
    ("Why Choose Us", "#features"),
    ("Contact", "#contact"),
    ("Terms & Conditions", "#"),
    ("Privacy Policy", "#"),
    ("Refund Policy", "#"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_slugs_are_select_options() {
        for route in ROUTES {
            assert!(ROUTE_OPTIONS.iter().any(|(value, _)| *value == route.slug));
        }
    }

    #[test]
    fn test_hero_stat_keys_unique() {
        let mut keys: Vec<&str> = HERO_STATS.iter().map(|stat| stat.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), HERO_STATS.len());
    }
}
