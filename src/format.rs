//! Display Formatting Helpers
//!
//! Rating scaling, timestamp formatting and small string utilities.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Ratings are stored normalized to [0, 1]; users see them on a
/// 0..ratingMax scale.
pub fn scale_rating(stored: f64, rating_max: f64) -> f64 {
    stored * rating_max
}

/// Inverse of `scale_rating`, applied before anything goes over the wire.
pub fn normalize_rating(displayed: f64, rating_max: f64) -> f64 {
    if rating_max > 0.0 {
        displayed / rating_max
    } else {
        0.0
    }
}

/// One-decimal display used in list rows, "-" when unrated
pub fn format_rating(stored: Option<f64>, rating_max: f64) -> String {
    match stored {
        Some(r) => format!("{:.1}", scale_rating(r, rating_max)),
        None => "-".to_string(),
    }
}

pub fn format_datetime(dt: &DateTime<Utc>, use_24_hr_time: bool) -> String {
    if use_24_hr_time {
        dt.format("%Y-%m-%d %H:%M").to_string()
    } else {
        dt.format("%Y-%m-%d %I:%M %p").to_string()
    }
}

/// Value string for an `<input type="datetime-local">`
pub fn datetime_local_value(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// Parse what an `<input type="datetime-local">` hands back
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    Some(naive.and_utc())
}

/// "video_game" -> "Video Game"
pub fn capitalize_words(s: &str) -> String {
    s.replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased, hyphen-separated identifier derived from a display name.
/// Underscores survive; anything else non-alphanumeric is dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_was_sep = true;
    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
            last_was_sep = false;
        } else if (c.is_whitespace() || c == '-') && !last_was_sep {
            slug.push('-');
            last_was_sep = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_round_trip() {
        // Entered as 7 on a 0-10 scale, stored as 0.7, displayed as 7 again
        for max in [5.0, 10.0, 100.0] {
            let entered = 0.7 * max;
            let stored = normalize_rating(entered, max);
            assert!((scale_rating(stored, max) - entered).abs() < 1e-9);
        }
        assert!((normalize_rating(7.0, 10.0) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(0.9), 5.0), "4.5");
        assert_eq!(format_rating(None, 5.0), "-");
    }

    #[test]
    fn test_normalize_rating_zero_max() {
        assert_eq!(normalize_rating(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Video Game"), "video-game");
        assert_eq!(slugify("  Page Count!  "), "page-count");
        assert_eq!(slugify("already-slugged"), "already-slugged");
        assert_eq!(slugify("under_scored"), "under_scored");
        assert_eq!(slugify("Trailing "), "trailing");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("video_game"), "Video Game");
        assert_eq!(capitalize_words("book"), "Book");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_datetime_local_round_trip() {
        let parsed = parse_datetime_local("2024-03-01T18:30").expect("should parse");
        assert_eq!(datetime_local_value(&parsed), "2024-03-01T18:30");
    }

    #[test]
    fn test_format_datetime_respects_clock_setting() {
        let dt = parse_datetime_local("2024-03-01T18:30").unwrap();
        assert_eq!(format_datetime(&dt, true), "2024-03-01 18:30");
        assert_eq!(format_datetime(&dt, false), "2024-03-01 06:30 PM");
    }
}
