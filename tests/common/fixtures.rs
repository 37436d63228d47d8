use adcollect::record::AdRecord;
use serde_json::json;

#[allow(dead_code)]
pub fn ad(id: &str) -> AdRecord {
    AdRecord::new(id)
}

#[allow(dead_code)]
pub fn rated_ad(id: &str, rating: i64) -> AdRecord {
    AdRecord::new(id).with_field(AdRecord::RATING, json!(rating))
}

#[allow(dead_code)]
pub fn html_ad(id: &str, html: &str) -> AdRecord {
    AdRecord::new(id).with_field(AdRecord::HTML, json!(html))
}
