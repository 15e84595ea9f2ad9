use chrono::DateTime;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Short human label for how long ago `timestamp_ms` was.
pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let elapsed = now_ms.saturating_sub(timestamp_ms).max(0);

    let minutes = elapsed / MINUTE_MS;
    let hours = elapsed / HOUR_MS;
    let days = elapsed / DAY_MS;
    let weeks = elapsed / WEEK_MS;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else if weeks < 4 {
        format!("{}w ago", weeks)
    } else {
        DateTime::from_timestamp_millis(timestamp_ms)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

// Ordered, first match wins.
const PRODUCT_EMOJIS: &[(&[&str], &str)] = &[
    (&["water", "drink"], "💧"),
    (&["bread", "toast"], "🍞"),
    (&["milk", "dairy"], "🥛"),
    (&["cheese"], "🧀"),
    (&["yogurt"], "🥛"),
    (&["chicken", "meat"], "🍗"),
    (&["fish", "salmon"], "🐟"),
    (&["egg"], "🥚"),
    (&["apple", "fruit"], "🍎"),
    (&["vegetable", "carrot"], "🥕"),
    (&["cereal", "oats"], "🥣"),
    (&["pasta", "noodle"], "🍝"),
    (&["pizza"], "🍕"),
    (&["burger"], "🍔"),
    (&["cookie", "biscuit"], "🍪"),
    (&["chocolate", "candy"], "🍫"),
    (&["ice cream"], "🍦"),
    (&["coffee"], "☕"),
    (&["tea"], "🍵"),
    (&["soda", "cola"], "🥤"),
    (&["energy"], "⚡"),
    (&["protein", "bar"], "🍫"),
    (&["snack", "chip"], "🥨"),
    (&["soup"], "🍲"),
    (&["sauce"], "🥫"),
];

pub const DEFAULT_PRODUCT_EMOJI: &str = "📦";

pub fn product_emoji(product_name: &str) -> &'static str {
    let name = product_name.to_lowercase();

    PRODUCT_EMOJIS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(DEFAULT_PRODUCT_EMOJI)
}
