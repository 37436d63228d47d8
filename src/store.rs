//! The locally held, deduplicated set of observed ads.
//!
//! [`AdStore`] owns the record sequence that successive incoming batches are
//! merged into. The store maintains one invariant: its records are always
//! sorted by ascending id with no duplicate ids. All mutation goes through
//! the pure merge in [`crate::merge`]; the store itself only swaps the held
//! sequence.

use crate::badge::{badge_text, unrated_count};
use crate::merge::merge_records;
use crate::record::AdRecord;

/// In-memory deduplicated record set.
///
/// # Examples
/// ```
/// use adcollect::record::AdRecord;
/// use adcollect::store::AdStore;
/// use serde_json::json;
///
/// let mut store = AdStore::new();
/// store.absorb(&[AdRecord::new("b"), AdRecord::new("a")]);
/// store.absorb(&[AdRecord::new("a").with_field(AdRecord::RATING, json!(2))]);
///
/// let ids: Vec<&str> = store.records().iter().map(|ad| ad.id.as_str()).collect();
/// assert_eq!(ids, ["a", "b"]);
/// assert_eq!(store.unrated_count(), 1);
/// assert_eq!(store.badge_text(), "1");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdStore {
    ads: Vec<AdRecord>,
}

impl AdStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `records`.
    ///
    /// Seeding runs through the merge, so the store invariant holds even if
    /// the input is unsorted or contains duplicate ids (later entries win,
    /// field-wise).
    #[must_use]
    pub fn from_records(records: &[AdRecord]) -> Self {
        Self {
            ads: merge_records(&[], records),
        }
    }

    /// The held records, sorted by ascending id.
    #[must_use]
    pub fn records(&self) -> &[AdRecord] {
        &self.ads
    }

    /// Merges an incoming batch into the held set.
    ///
    /// Incoming fields override stored ones per record; records with new ids
    /// are inserted. The held sequence stays sorted and deduplicated.
    pub fn absorb(&mut self, incoming: &[AdRecord]) {
        self.ads = merge_records(&self.ads, incoming);
    }

    /// Number of held records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ads.len()
    }

    /// Returns true if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ads.is_empty()
    }

    /// Count of held records lacking a rating.
    #[must_use]
    pub fn unrated_count(&self) -> usize {
        unrated_count(&self.ads)
    }

    /// Badge text for the current unrated count.
    #[must_use]
    pub fn badge_text(&self) -> String {
        badge_text(self.unrated_count())
    }
}
