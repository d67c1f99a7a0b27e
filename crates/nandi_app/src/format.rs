//! Display text: prices, grouped numbers, hero stats

use crate::content::{HeroStat, Route};

const CURRENCY_PREFIXES: [&str; 4] = ["₹", "Rs.", "Rs", "$"];

/// Parse a display price such as `₹1,250` into whole rupees
///
/// Returns `None` when nothing numeric is left after stripping the currency
/// symbol, whitespace and thousands separators.
pub fn try_parse_price(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let unprefixed = CURRENCY_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);
    let digits: String = unprefixed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    digits.parse().ok()
}

/// Parse a display price, falling back to 0
pub fn parse_price(text: &str) -> i64 {
    try_parse_price(text).unwrap_or_else(|| {
        tracing::warn!(text, "unparseable price, using 0");
        0
    })
}

/// Discount of a route against its original price
pub fn savings(route: &Route) -> i64 {
    parse_price(route.original_price) - parse_price(route.price)
}

/// Integer with `,` between groups of three digits
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn rupees(amount: i64) -> String {
    format!("₹{amount}")
}

/// Price shown on a route card
///
/// The count-up value once it has started, the static price before that.
pub fn display_price(route: &Route, tweened: Option<i64>) -> String {
    match tweened {
        Some(value) if value != 0 => rupees(value),
        _ => route.price.to_string(),
    }
}

/// Hero statistic text, e.g. `10,000+`
pub fn display_stat(stat: &HeroStat, current: i64) -> String {
    format!("{}{}", group_thousands(current), stat.suffix)
}
