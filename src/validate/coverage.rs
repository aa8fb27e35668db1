use serde_json::Value;

use crate::model::index::OrderedMap;

/// Per-field-path count of explicit `null` values across a set of records.
///
/// Paths are dotted object keys. Objects inside arrays contribute to the
/// path of the array itself, without an index segment.
#[derive(Debug, Clone, Default)]
pub struct NullCounts {
    counts: OrderedMap<usize>,
    records: usize,
}

impl NullCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one record's nulls to the tally.
    pub fn record(&mut self, value: &Value) {
        self.records += 1;
        self.visit(value, "");
    }

    fn visit(&mut self, value: &Value, prefix: &str) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    match child {
                        Value::Null => self.bump(path),
                        Value::Object(_) | Value::Array(_) => self.visit(child, &path),
                        _ => {}
                    }
                }
            }
            Value::Array(items) => {
                for item in items.iter().filter(|i| i.is_object()) {
                    self.visit(item, prefix);
                }
            }
            _ => {}
        }
    }

    fn bump(&mut self, path: String) {
        *self.counts.entry(path).or_insert(0) += 1;
    }

    pub fn get(&self, path: &str) -> usize {
        self.counts.get(path).copied().unwrap_or(0)
    }

    /// Number of records tallied.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Number of distinct paths with at least one null.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` paths with the most nulls; ties keep first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// Percentage of records with a null at `path`.
    pub fn percent_missing(&self, path: &str) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            self.get(path) as f64 * 100.0 / self.records as f64
        }
    }
}
