use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single observed advertisement, keyed by a unique identifier.
///
/// Records are the primary data structure exchanged with the collector
/// endpoint and merged into the locally held set. Identity is defined solely
/// by [`id`](AdRecord::id); every other attribute lives in the flattened
/// [`fields`](AdRecord::fields) map and is treated as opaque JSON payload.
///
/// # Wire format
///
/// `AdRecord` serializes to a flat JSON object — the `fields` map is
/// flattened next to `id`:
///
/// ```
/// use adcollect::record::AdRecord;
/// use serde_json::json;
///
/// let ad = AdRecord::new("ad_1")
///     .with_field(AdRecord::HTML, json!("<div>…</div>"))
///     .with_field(AdRecord::POLITICAL, json!(true));
///
/// let value = serde_json::to_value(&ad).unwrap();
/// assert_eq!(value["id"], json!("ad_1"));
/// assert_eq!(value["html"], json!("<div>…</div>"));
/// ```
///
/// A JSON object without an `id` member fails to deserialize; records with a
/// missing identifier are unrepresentable on this side of the wire.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AdRecord {
    /// Unique identifier; the sort and merge key.
    pub id: String,
    /// All remaining attributes, serialized flattened next to `id`.
    #[serde(flatten)]
    pub fields: FxHashMap<String, Value>,
}

impl AdRecord {
    /// Rendered ad markup attribute.
    pub const HTML: &'static str = "html";
    /// Political classification attribute.
    pub const POLITICAL: &'static str = "political";
    /// Advertiser targeting attribute.
    pub const TARGETING: &'static str = "targeting";
    /// Reviewer rating attribute; its presence marks a record as rated.
    pub const RATING: &'static str = "rating";

    /// Creates a record with the given identifier and no payload fields.
    ///
    /// # Examples
    /// ```
    /// use adcollect::record::AdRecord;
    ///
    /// let ad = AdRecord::new("ad_42");
    /// assert_eq!(ad.id, "ad_42");
    /// assert!(ad.fields.is_empty());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: FxHashMap::default(),
        }
    }

    /// Adds a payload field, returning the record for chaining.
    ///
    /// # Examples
    /// ```
    /// use adcollect::record::AdRecord;
    /// use serde_json::json;
    ///
    /// let ad = AdRecord::new("ad_1")
    ///     .with_field(AdRecord::RATING, json!(5))
    ///     .with_field("seen_count", json!(3));
    /// assert_eq!(ad.fields.len(), 2);
    /// ```
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Returns the payload field stored under `key`, if any.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns true if a payload field named `key` is present.
    ///
    /// Presence is a key-membership test: an explicit `null` value still
    /// counts as present.
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Returns true if this record carries a `rating` attribute.
    #[must_use]
    pub fn has_rating(&self) -> bool {
        self.has_field(Self::RATING)
    }

    /// Field-wise shallow merge of this record with a newer observation.
    ///
    /// Fields present in `incoming` override the stored values, fields absent
    /// from `incoming` are retained, and the result takes the incoming `id`.
    /// The override is shallow: a field whose value is itself an object is
    /// replaced wholesale, never merged recursively.
    ///
    /// # Examples
    /// ```
    /// use adcollect::record::AdRecord;
    /// use serde_json::json;
    ///
    /// let stored = AdRecord::new("ad_1")
    ///     .with_field(AdRecord::HTML, json!("old"))
    ///     .with_field(AdRecord::RATING, json!(5));
    /// let incoming = AdRecord::new("ad_1").with_field(AdRecord::HTML, json!("new"));
    ///
    /// let merged = stored.merged_with(&incoming);
    /// assert_eq!(merged.field(AdRecord::HTML), Some(&json!("new")));
    /// assert_eq!(merged.field(AdRecord::RATING), Some(&json!(5)));
    /// ```
    #[must_use]
    pub fn merged_with(&self, incoming: &AdRecord) -> AdRecord {
        let mut fields = self.fields.clone();
        for (key, value) in &incoming.fields {
            fields.insert(key.clone(), value.clone());
        }
        AdRecord {
            id: incoming.id.clone(),
            fields,
        }
    }
}

/// The transmission projection of a record: the subset of attributes the
/// collector endpoint accepts on submission.
///
/// Absent attributes are omitted from the serialized JSON rather than sent
/// as `null`.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct AdSubmission {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub political: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<String>,
}

impl AdSubmission {
    /// Projects a record down to its submission attributes.
    ///
    /// Payload fields of an unexpected JSON type (for example a numeric
    /// `html`) are dropped from the projection rather than coerced.
    #[must_use]
    pub fn from_record(record: &AdRecord) -> Self {
        Self {
            id: record.id.clone(),
            html: record
                .field(AdRecord::HTML)
                .and_then(Value::as_str)
                .map(str::to_string),
            political: record.field(AdRecord::POLITICAL).and_then(Value::as_bool),
            targeting: record
                .field(AdRecord::TARGETING)
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

impl From<&AdRecord> for AdSubmission {
    fn from(record: &AdRecord) -> Self {
        Self::from_record(record)
    }
}
