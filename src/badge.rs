//! Unrated-record counting and badge text rendering.
//!
//! The host platform renders a short textual counter next to the extension
//! icon. This module derives that text from a record sequence: the count of
//! records still lacking a rating, capped for display.

use crate::record::AdRecord;

/// Largest count rendered as a number; anything above shows as `"100+"`.
pub const BADGE_LIMIT: usize = 100;

/// Counts the records that do not carry a `rating` attribute.
///
/// Presence is a key-membership test — a record with `"rating": null` counts
/// as rated.
#[must_use]
pub fn unrated_count(records: &[AdRecord]) -> usize {
    records.iter().filter(|ad| !ad.has_rating()).count()
}

/// Renders the badge text for an unrated-record count.
///
/// Returns the empty string for zero, the decimal count for 1 through
/// [`BADGE_LIMIT`], and `"100+"` beyond it.
///
/// # Examples
/// ```
/// use adcollect::badge::badge_text;
///
/// assert_eq!(badge_text(0), "");
/// assert_eq!(badge_text(7), "7");
/// assert_eq!(badge_text(100), "100");
/// assert_eq!(badge_text(101), "100+");
/// ```
#[must_use]
pub fn badge_text(count: usize) -> String {
    if count == 0 {
        String::new()
    } else if count > BADGE_LIMIT {
        format!("{BADGE_LIMIT}+")
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_unrated_count_ignores_rated() {
        let records = vec![
            AdRecord::new("a"),
            AdRecord::new("b").with_field(AdRecord::RATING, json!(3)),
            AdRecord::new("c"),
        ];
        assert_eq!(unrated_count(&records), 2);
    }

    #[test]
    fn test_unrated_count_null_rating_is_rated() {
        let records = vec![AdRecord::new("a").with_field(AdRecord::RATING, Value::Null)];
        assert_eq!(unrated_count(&records), 0);
    }

    #[test]
    fn test_badge_text_boundaries() {
        assert_eq!(badge_text(0), "");
        assert_eq!(badge_text(1), "1");
        assert_eq!(badge_text(99), "99");
        assert_eq!(badge_text(100), "100");
        assert_eq!(badge_text(101), "100+");
        assert_eq!(badge_text(5000), "100+");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(unrated_count(&[]), 0);
        assert_eq!(badge_text(unrated_count(&[])), "");
    }
}
