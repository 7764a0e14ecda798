use crate::compat::{String, Vec, vec};
use crate::query_map::{QueryMap, QueryValue};
use crate::unicode::percent_encode::{decode_component, escape_component_into};
use crate::value::ListItem;

/// How a parameter holding several values is written in the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiValueEncoding {
    /// One pair per key, values joined with `+`: `foo=2+3`.
    /// A single value containing spaces reads back as several values.
    #[default]
    PlusJoined,
    /// One pair per value: `foo=2&foo=3`
    RepeatedKeys,
}

impl MultiValueEncoding {
    /// Decode a raw query string (without the leading `?`) into a mapping.
    pub fn decode(self, query: &str) -> QueryMap {
        let mut map = QueryMap::new();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            map.push_occurrence(decode_component(key), decode_component(value));
        }

        map.map_values(|value| match (self, value) {
            (Self::PlusJoined, QueryValue::Text(text)) => {
                QueryValue::List(text.split(' ').map(String::from).collect())
            }
            (Self::RepeatedKeys, QueryValue::Text(text)) => QueryValue::List(vec![text]),
            (_, other) => other,
        })
    }

    /// Encode a mapping into a percent-encoded `key=value&key=value` string.
    pub fn encode(self, query: &QueryMap) -> String {
        let mut result = String::new();

        for (key, value) in query.iter() {
            match (self, value) {
                (Self::PlusJoined, QueryValue::List(items)) => {
                    push_pair(&mut result, key, &items.join("+"));
                }
                (Self::RepeatedKeys, QueryValue::List(items)) => {
                    for item in items {
                        push_pair(&mut result, key, item);
                    }
                }
                (_, QueryValue::Text(text)) => push_pair(&mut result, key, text),
                (_, QueryValue::Flag) => push_pair(&mut result, key, "true"),
            }
        }
        result
    }
}

fn push_pair(buffer: &mut String, key: &str, value: &str) {
    if !buffer.is_empty() {
        buffer.push('&');
    }
    escape_component_into(buffer, key);
    buffer.push('=');
    escape_component_into(buffer, value);
}

/// Order-preserving union: `current` followed by every new value not seen yet.
/// A flag only matches another flag, never the stored text `"true"`.
pub fn union(current: &[&str], added: &[ListItem]) -> Vec<String> {
    let mut result: Vec<ListItem> = Vec::with_capacity(current.len() + added.len());
    let stored = current.iter().map(|value| ListItem::Text(String::from(*value)));
    for item in stored.chain(added.iter().cloned()) {
        if !result.contains(&item) {
            result.push(item);
        }
    }
    result.into_iter().map(ListItem::into_string).collect()
}

/// Order-preserving difference: `current` without any of `removed`.
/// Flags in `removed` match nothing.
pub fn difference(current: &[&str], removed: &[ListItem]) -> Vec<String> {
    current
        .iter()
        .filter(|value| {
            !removed
                .iter()
                .any(|item| !item.is_flag() && item.as_str() == **value)
        })
        .map(|value| String::from(*value))
        .collect()
}
