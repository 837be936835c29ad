//! Locale dictionaries

use serde::Deserialize;
use serde_json::Value;

/// Nested key → text mapping loaded from `locales/{lang}.json`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(Value);

impl Dictionary {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Walk a dotted key such as `booking.form.title`.
    ///
    /// Returns `None` when a segment is absent or the value found is not a
    /// scalar; callers leave the text unchanged in that case.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let value = key.split('.').try_fold(&self.0, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })?;

        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for Dictionary {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
