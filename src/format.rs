//! Display Formatting
//!
//! Pure helpers turning model values into display strings.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::filter::OPEN_ENDED_BEDROOMS;
use crate::models::AddedDate;

/// Whole pounds with en-GB digit grouping, e.g. `£1,250,000`
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    grouped.push('£');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// `12 October 2022`
pub fn format_date(added: &AddedDate) -> String {
    if added.day == 0 || added.month.trim().is_empty() || added.year == 0 {
        return "Date not available".to_string();
    }
    format!("{} {} {}", added.day, added.month, added.year)
}

/// Cut `text` to `length` characters, marking the cut with an ellipsis
pub fn truncate_text(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub fn bedroom_text(bedrooms: u32) -> String {
    if bedrooms >= OPEN_ENDED_BEDROOMS {
        return format!("{}+ Bedrooms", OPEN_ENDED_BEDROOMS);
    }
    if bedrooms == 1 {
        "1 Bedroom".to_string()
    } else {
        format!("{} Bedrooms", bedrooms)
    }
}

/// Map search link for an address
pub fn maps_search_url(location: &str, postcode: &str) -> String {
    let query = [location.trim(), postcode.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "https://www.openstreetmap.org/search?query={}",
        utf8_percent_encode(&query, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "£0");
        assert_eq!(format_price(950), "£950");
        assert_eq!(format_price(1000), "£1,000");
        assert_eq!(format_price(450000), "£450,000");
        assert_eq!(format_price(1250000), "£1,250,000");
    }

    #[test]
    fn test_format_date() {
        let added = AddedDate { day: 12, month: "October".to_string(), year: 2022 };
        assert_eq!(format_date(&added), "12 October 2022");
        assert_eq!(format_date(&AddedDate::default()), "Date not available");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("a longer line", 8), "a longer...");
        assert_eq!(truncate_text("£££££", 2), "££...");
    }

    #[test]
    fn test_bedroom_text() {
        assert_eq!(bedroom_text(0), "0 Bedrooms");
        assert_eq!(bedroom_text(1), "1 Bedroom");
        assert_eq!(bedroom_text(3), "3 Bedrooms");
        assert_eq!(bedroom_text(7), "5+ Bedrooms");
    }

    #[test]
    fn test_maps_search_url() {
        assert_eq!(
            maps_search_url("Bow, London", "E3"),
            "https://www.openstreetmap.org/search?query=Bow%2C%20London%20E3"
        );
        assert_eq!(
            maps_search_url("Leeds", ""),
            "https://www.openstreetmap.org/search?query=Leeds"
        );
    }
}
