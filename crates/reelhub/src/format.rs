//! Presentation helpers shared by the screens and the demo shell.
//!
//! The service sends dates as `YYYY-MM-DD` strings and ratings as
//! nullable floats; these helpers turn both into the text the pages
//! show. They never fail: a date that doesn't parse is shown as-is
//! rather than hidden, and a missing rating reads "N/A".

use chrono::NaiveDate;

/// `"2024-06-01"` → `"Jun 1, 2024"`. Empty input stays empty.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// One-decimal rating, or `"N/A"` when nothing has been rated yet.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) => format!("{value:.1}"),
        None => "N/A".to_owned(),
    }
}

/// Five-slot star bar: `3.5` → `"★★★★☆"`. Halves round up, anything
/// outside the scale clamps to it.
pub fn star_bar(rating: f64) -> String {
    let filled = (rating + 0.5).floor().clamp(0.0, 5.0) as usize;
    let mut bar = "★".repeat(filled);
    bar.push_str(&"☆".repeat(5 - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_wire_shape() {
        assert_eq!(format_date("2024-06-01"), "Jun 1, 2024");
        assert_eq!(format_date("1999-12-31"), "Dec 31, 1999");
    }

    #[test]
    fn test_format_date_empty_stays_empty() {
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_date_unparseable_passes_through() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_date("01/06/2024"), "01/06/2024");
    }

    #[test]
    fn test_format_rating_one_decimal() {
        assert_eq!(format_rating(Some(4.0)), "4.0");
        assert_eq!(format_rating(Some(3.25)), "3.2");
        assert_eq!(format_rating(Some(3.667)), "3.7");
    }

    #[test]
    fn test_format_rating_absent_is_na() {
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn test_star_bar_whole_values() {
        assert_eq!(star_bar(0.0), "☆☆☆☆☆");
        assert_eq!(star_bar(3.0), "★★★☆☆");
        assert_eq!(star_bar(5.0), "★★★★★");
    }

    #[test]
    fn test_star_bar_halves_round_up() {
        assert_eq!(star_bar(3.5), "★★★★☆");
        assert_eq!(star_bar(3.4), "★★★☆☆");
    }

    #[test]
    fn test_star_bar_clamps_out_of_scale() {
        assert_eq!(star_bar(9.0), "★★★★★");
        assert_eq!(star_bar(-2.0), "☆☆☆☆☆");
    }
}
