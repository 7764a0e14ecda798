use crate::compat::{String, Vec, vec};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Parameter present with no value, written as `true`
    Flag,
    /// A scalar written by `set`
    Text(String),
    /// Ordered values, the form every parsed parameter takes
    List(Vec<String>),
}

impl QueryValue {
    /// Get the values as strings.
    /// A flag reads as the single value `"true"`.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Flag => vec!["true"],
            Self::Text(text) => vec![text.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// Decoded `name -> value(s)` view of a query string.
/// Keys are unique and iterate in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert a value, replacing an existing key in place or appending a new one.
    /// Returns the previous value.
    pub fn insert(&mut self, key: &str, value: QueryValue) -> Option<QueryValue> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| k == key) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((String::from(key), value));
        None
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Append a decoded occurrence of `key`.
    /// A second occurrence turns a `Text` entry into a `List`.
    pub(crate) fn push_occurrence(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, QueryValue::List(items))) => items.push(value),
            Some((_, slot)) => {
                let first = match core::mem::replace(slot, QueryValue::Flag) {
                    QueryValue::Text(text) => text,
                    _ => String::from("true"),
                };
                *slot = QueryValue::List(vec![first, value]);
            }
            None => self.entries.push((key, QueryValue::Text(value))),
        }
    }

    /// Apply `f` to every value, keeping keys and order.
    pub(crate) fn map_values(self, mut f: impl FnMut(QueryValue) -> QueryValue) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .map(|(k, v)| (k, f(v)))
                .collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, QueryValue)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, QueryValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            let key = key.into();
            map.insert(&key, value);
        }
        map
    }
}
