//! Batch merging for observed ad records.
//!
//! The collector client repeatedly receives batches of records that overlap
//! with what is already held locally. [`merge_records`] combines an existing
//! and an incoming sequence into one deduplicated sequence, with incoming
//! data taking precedence per field and the result ordered by ascending id.

use rustc_hash::FxHashMap;

use crate::record::AdRecord;

/// Merges two record sequences into one, deduplicated by id.
///
/// A map from id to record is seeded from `existing`; each incoming record is
/// then applied in input order. An incoming record whose id is already
/// present replaces the stored record with a field-wise shallow merge
/// ([`AdRecord::merged_with`]) — incoming fields override, fields absent from
/// the incoming record keep their stored values. An incoming record with a
/// new id is inserted unchanged. The map's values are returned sorted by
/// ascending id.
///
/// The function is pure: neither input is modified, and repeated invocation
/// over the same inputs yields the same output. Within each input sequence
/// ids are expected to be unique; across the two sequences they may overlap.
///
/// Runs in O(n + m) time and space plus an O(k log k) sort over the k
/// distinct ids.
///
/// # Examples
/// ```
/// use adcollect::merge::merge_records;
/// use adcollect::record::AdRecord;
/// use serde_json::json;
///
/// let existing = vec![
///     AdRecord::new("3"),
///     AdRecord::new("1").with_field("html", json!("x")).with_field("rating", json!(5)),
/// ];
/// let incoming = vec![
///     AdRecord::new("2"),
///     AdRecord::new("1").with_field("html", json!("y")),
/// ];
///
/// let merged = merge_records(&existing, &incoming);
/// let ids: Vec<&str> = merged.iter().map(|ad| ad.id.as_str()).collect();
/// assert_eq!(ids, ["1", "2", "3"]);
/// assert_eq!(merged[0].field("html"), Some(&json!("y")));
/// assert_eq!(merged[0].field("rating"), Some(&json!(5)));
/// ```
#[must_use]
pub fn merge_records(existing: &[AdRecord], incoming: &[AdRecord]) -> Vec<AdRecord> {
    let mut by_id: FxHashMap<String, AdRecord> = existing
        .iter()
        .map(|ad| (ad.id.clone(), ad.clone()))
        .collect();

    for ad in incoming {
        match by_id.get_mut(&ad.id) {
            Some(stored) => *stored = stored.merged_with(ad),
            None => {
                by_id.insert(ad.id.clone(), ad.clone());
            }
        }
    }

    let mut merged: Vec<AdRecord> = by_id.into_values().collect();
    merged.sort_by(|a, b| a.id.cmp(&b.id));
    merged
}
