use adcollect::record::AdRecord;
use adcollect::store::AdStore;
use serde_json::json;

mod common;
use common::*;

#[test]
fn test_new_store_is_empty() {
    let store = AdStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.unrated_count(), 0);
    assert_eq!(store.badge_text(), "");
}

#[test]
fn test_from_records_sorts_and_dedupes() {
    let store = AdStore::from_records(&[
        html_ad("b", "first"),
        ad("a"),
        html_ad("b", "second"),
    ]);

    assert_ids(store.records(), &["a", "b"]);
    // Later duplicate wins field-wise, as in a merge.
    assert_field(store.records(), "b", AdRecord::HTML, &json!("second"));
}

#[test]
fn test_absorb_merges_batches() {
    let mut store = AdStore::new();

    store.absorb(&[rated_ad("a", 4), html_ad("c", "<div/>")]);
    store.absorb(&[ad("b"), AdRecord::new("a").with_field(AdRecord::HTML, json!("<p/>"))]);

    assert_ids(store.records(), &["a", "b", "c"]);
    assert_field(store.records(), "a", AdRecord::HTML, &json!("<p/>"));
    assert_field(store.records(), "a", AdRecord::RATING, &json!(4));
}

#[test]
fn test_absorb_keeps_invariant_across_batches() {
    let mut store = AdStore::new();
    store.absorb(&[ad("z"), ad("m")]);
    store.absorb(&[ad("a"), ad("m")]);
    store.absorb(&[]);

    assert_ids(store.records(), &["a", "m", "z"]);
}

#[test]
fn test_unrated_count_and_badge_follow_merges() {
    let mut store = AdStore::new();
    store.absorb(&[ad("a"), ad("b"), rated_ad("c", 2)]);
    assert_eq!(store.unrated_count(), 2);
    assert_eq!(store.badge_text(), "2");

    // A rating arriving for "a" drops the count.
    store.absorb(&[rated_ad("a", 1)]);
    assert_eq!(store.unrated_count(), 1);
    assert_eq!(store.badge_text(), "1");

    store.absorb(&[rated_ad("b", 3)]);
    assert_eq!(store.badge_text(), "");
}

#[test]
fn test_badge_caps_above_one_hundred() {
    let batch: Vec<AdRecord> = (0..150).map(|i| ad(&format!("ad_{i:03}"))).collect();
    let store = AdStore::from_records(&batch);
    assert_eq!(store.len(), 150);
    assert_eq!(store.badge_text(), "100+");
}
