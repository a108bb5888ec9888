//! Display formatting helpers.

use chrono::{DateTime, NaiveDate};

/// Format a price with thousands separators and a currency symbol. A price
/// with no currency renders as a bare grouped number.
pub fn format_price(price: f64, currency: Option<&str>) -> String {
    let grouped = group_thousands(price);
    match currency {
        Some("NGN") => format!("\u{20a6}{grouped}"),
        Some("USD") => format!("${grouped}"),
        Some("EUR") => format!("\u{20ac}{grouped}"),
        Some("GBP") => format!("\u{a3}{grouped}"),
        Some(code) => format!("{code} {grouped}"),
        None => grouped,
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render an ISO-8601 timestamp as "June 1, 2024". Falls back to the raw
/// string when it does not parse; CMS dates are display-only here.
pub fn format_date(iso: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(iso) {
        return timestamp.format("%B %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    iso.to_string()
}

/// Trim to `max_length` characters on a char boundary, with an ellipsis.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length).collect();
    format!("{}...", cut.trim_end())
}

/// Estimated reading time at 200 words per minute, at least one minute.
pub fn reading_time(text: &str) -> String {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(200).max(1);
    format!("{minutes} min read")
}

/// Lowercased, hyphen-separated, ASCII-safe slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_hyphen = true;
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_was_hyphen = false;
        } else if (ch.is_whitespace() || ch == '-' || ch == '_') && !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(45_000_000.0, Some("NGN")), "\u{20a6}45,000,000");
        assert_eq!(format_price(1_500.0, Some("USD")), "$1,500");
        assert_eq!(format_price(999.0, None), "999");
        assert_eq!(format_price(0.0, Some("NGN")), "\u{20a6}0");
    }

    #[test]
    fn unknown_currencies_fall_back_to_the_code() {
        assert_eq!(format_price(2_000.0, Some("GHS")), "GHS 2,000");
    }

    #[test]
    fn dates_render_long_form() {
        assert_eq!(format_date("2024-06-01T08:00:00Z"), "June 1, 2024");
        assert_eq!(format_date("2024-12-25"), "December 25, 2024");
        assert_eq!(format_date("not a date"), "not a date");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a longer sentence", 8), "a longer...");
    }

    #[test]
    fn reading_time_has_a_floor_of_one_minute() {
        assert_eq!(reading_time("just a few words"), "1 min read");
        let long = "word ".repeat(450);
        assert_eq!(reading_time(&long), "3 min read");
    }

    #[test]
    fn slugify_strips_punctuation_and_collapses_separators() {
        assert_eq!(slugify("Modern 3-Bedroom Duplex!"), "modern-3-bedroom-duplex");
        assert_eq!(slugify("  Lekki -- Phase_1  "), "lekki-phase-1");
        assert_eq!(slugify("état réel"), "tat-rel");
    }
}
