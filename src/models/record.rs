use super::ContentType;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Ordered label → value mapping shown for a payload
///
/// Insertion order is display order. Re-inserting an existing key replaces the
/// value in place. Empty values are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, String)>,
}

impl Fields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field; empty values are ignored
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a field value by label
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a label is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate `(label, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Labels in display order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no field survived
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Classified QR payload
///
/// Built fresh by every classification call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    content_type: ContentType,
    raw_value: String,
    fields: Fields,
}

impl ContentRecord {
    /// Create a record; `Unknown` records never carry fields
    pub fn new(content_type: ContentType, raw_value: impl Into<String>, fields: Fields) -> Self {
        let mut fields = fields;
        if content_type == ContentType::Unknown {
            fields.clear();
        }
        Self {
            content_type,
            raw_value: raw_value.into(),
            fields,
        }
    }

    /// Create a record with no extracted fields
    pub fn bare(content_type: ContentType, raw_value: impl Into<String>) -> Self {
        Self::new(content_type, raw_value, Fields::new())
    }

    /// Detected content type
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Encoded payload as it was classified
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// Label for the content type
    pub fn display_name(&self) -> &'static str {
        self.content_type.label()
    }

    /// Extracted fields in display order
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Whether field values are URIs a presentation layer may open
    pub fn is_navigable(&self) -> bool {
        self.content_type == ContentType::Link
    }

    /// Render fields as display lines: `label: value`, or the bare value for
    /// unlabeled fields
    pub fn lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(k, v)| {
                if k.is_empty() {
                    v.to_string()
                } else {
                    format!("{k}: {v}")
                }
            })
            .collect()
    }
}

impl Serialize for ContentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ContentRecord", 4)?;
        state.serialize_field("type", &self.content_type)?;
        state.serialize_field("raw_value", &self.raw_value)?;
        state.serialize_field("display_name", self.display_name())?;
        state.serialize_field("fields", &self.fields)?;
        state.end()
    }
}
