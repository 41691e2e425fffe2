//! Match clock helpers
//!
//! The spectated client shows elapsed match time as `mm:ss` (or `h:mm:ss`
//! past the first hour). Everything downstream of the clock reader works in
//! whole elapsed seconds.

/// Whole seconds elapsed since the match started
pub type MatchSecond = u32;

/// Parse a clock string such as `"12:34"` or `"1:02:03"` into elapsed seconds.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that is not
/// a well-formed clock (minutes/seconds fields must be below 60 when a larger
/// unit precedes them).
///
/// # Examples
/// ```
/// use rcast_common::time::parse_clock_text;
/// assert_eq!(parse_clock_text("00:00"), Some(0));
/// assert_eq!(parse_clock_text(" 12:34 "), Some(754));
/// assert_eq!(parse_clock_text("1:02:03"), Some(3723));
/// assert_eq!(parse_clock_text("12:3x"), None);
/// ```
pub fn parse_clock_text(text: &str) -> Option<MatchSecond> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let fields: Vec<&str> = text.split(':').collect();
    if !(2..=3).contains(&fields.len()) {
        return None;
    }

    let mut values = Vec::with_capacity(fields.len());
    for field in &fields {
        if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        values.push(field.parse::<u32>().ok()?);
    }

    // Every field after the first is a sexagesimal digit
    if values[1..].iter().any(|&v| v >= 60) {
        return None;
    }

    let seconds = values
        .iter()
        .try_fold(0u32, |acc, &v| acc.checked_mul(60)?.checked_add(v))?;
    Some(seconds)
}

/// Format elapsed seconds as a clock string (`mm:ss`, or `h:mm:ss` past an hour)
pub fn format_clock(seconds: MatchSecond) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes_seconds() {
        assert_eq!(parse_clock_text("05:07"), Some(307));
        assert_eq!(parse_clock_text("5:07"), Some(307));
    }

    #[test]
    fn test_parse_rejects_out_of_range_seconds() {
        assert_eq!(parse_clock_text("05:60"), None);
        assert_eq!(parse_clock_text("1:60:00"), None);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_clock_text(""), None);
        assert_eq!(parse_clock_text("   "), None);
        assert_eq!(parse_clock_text("12"), None);
        assert_eq!(parse_clock_text("1:2:3:4"), None);
        assert_eq!(parse_clock_text("-1:00"), None);
        assert_eq!(parse_clock_text("a1:00"), None);
        assert_eq!(parse_clock_text(":30"), None);
    }

    #[test]
    fn test_minutes_field_may_exceed_sixty_without_hours() {
        // Some clients keep counting minutes past the hour
        assert_eq!(parse_clock_text("75:00"), Some(4500));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(754), "12:34");
        assert_eq!(format_clock(3723), "1:02:03");
    }

    #[test]
    fn test_format_then_parse_is_identity() {
        for s in [0, 59, 60, 3599, 3600, 7261] {
            assert_eq!(parse_clock_text(&format_clock(s)), Some(s));
        }
    }
}
