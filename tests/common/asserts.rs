use adcollect::record::AdRecord;
use serde_json::Value;

#[allow(dead_code)]
pub fn assert_ids(records: &[AdRecord], expected: &[&str]) {
    let ids: Vec<&str> = records.iter().map(|ad| ad.id.as_str()).collect();
    assert_eq!(
        ids, expected,
        "expected record ids {expected:?}, got {ids:?}"
    );
}

#[allow(dead_code)]
pub fn assert_field(records: &[AdRecord], id: &str, key: &str, expected: &Value) {
    let record = records
        .iter()
        .find(|ad| ad.id == id)
        .unwrap_or_else(|| panic!("no record with id '{id}'"));
    assert_eq!(
        record.field(key),
        Some(expected),
        "record '{id}' field '{key}' mismatch, fields: {:?}",
        record.fields
    );
}
