use crate::compat::{String, ToString, Vec};
use crate::error::Result;
use crate::parser::parse_url_object;
use crate::query_codec::{MultiValueEncoding, difference, union};
use crate::query_map::QueryValue;
use crate::unicode::percent_encode::unescape;
use crate::url_object::UrlObject;
use crate::value::{ListItem, ParsedValue, Value, parse_value};

/// Query parameter operations with a chosen wire format.
///
/// Every call parses the input, builds a new query mapping and serializes
/// the result once. Nothing is shared between calls.
///
/// ```
/// use urlparams::{MultiValueEncoding, UrlParams};
///
/// let params = UrlParams::new().with_encoding(MultiValueEncoding::RepeatedKeys);
/// let url = params.add("http://example.com?foo=2", "foo", 3).unwrap();
/// assert_eq!(url, "http://example.com/?foo=2&foo=3");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlParams {
    encoding: MultiValueEncoding,
}

impl UrlParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: MultiValueEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn encoding(&self) -> MultiValueEncoding {
        self.encoding
    }

    /// Parse a URL string into a [`UrlObject`].
    ///
    /// # Errors
    ///
    /// Fails only for a malformed port or a hostname IDNA rejects.
    pub fn create_url_object(&self, url: &str) -> Result<UrlObject> {
        parse_url_object(url, self.encoding)
    }

    /// Serialize a [`UrlObject`] back into a URL string.
    ///
    /// The encoded query and then the whole URL are unescaped, so values read
    /// as written (`foo=2+3`, not `foo=2%2B3`).
    pub fn stringify(&self, url: &UrlObject) -> String {
        let encoded = self.encoding.encode(url.query());
        let search = unescape(&encoded);
        let assembled = url.format_with_search(&search);
        unescape(&assembled).into_owned()
    }

    /// Add values to a parameter, keeping existing values first and
    /// dropping duplicates.
    ///
    /// The input is returned verbatim when the value is unsupported, or when
    /// it is absent (alone or as a one-element list) and the parameter
    /// already exists.
    ///
    /// # Errors
    ///
    /// Propagates URL parse errors.
    pub fn add(&self, url: &str, name: &str, value: impl Into<Value>) -> Result<String> {
        let object = self.create_url_object(url)?;

        let exists = object.query().contains_key(name);
        let added: Vec<ListItem> = match parse_value(value.into()) {
            ParsedValue::Unsupported => return Ok(url.to_string()),
            ParsedValue::Flag if exists => return Ok(url.to_string()),
            ParsedValue::List(items) if exists && items == [ListItem::Flag] => {
                return Ok(url.to_string());
            }
            ParsedValue::Flag => Vec::from([ListItem::Flag]),
            ParsedValue::Text(text) => Vec::from([ListItem::Text(text)]),
            ParsedValue::List(items) => items,
        };

        // A new parameter takes the values as given, duplicates included
        let merged = match object.query().get(name) {
            Some(current) => union(&current.values(), &added),
            None => added.into_iter().map(ListItem::into_string).collect(),
        };

        let mut query = object.query().clone();
        query.insert(name, QueryValue::List(merged));
        Ok(self.stringify(&object.with_query(query)))
    }

    /// Remove values from a parameter, or the whole parameter when `value`
    /// is absent. The parameter is dropped once it has no values left.
    ///
    /// The input is returned verbatim when the parameter does not exist.
    ///
    /// # Errors
    ///
    /// Propagates URL parse errors.
    pub fn remove(&self, url: &str, name: &str, value: impl Into<Value>) -> Result<String> {
        let object = self.create_url_object(url)?;
        let Some(current) = object.query().get(name) else {
            return Ok(url.to_string());
        };

        let value = value.into();
        let remove_all = value == Value::Absent;
        let removed = match parse_value(value) {
            ParsedValue::Text(text) => Vec::from([ListItem::Text(text)]),
            ParsedValue::List(items) => items,
            ParsedValue::Flag | ParsedValue::Unsupported => Vec::new(),
        };
        let remaining = difference(&current.values(), &removed);

        let mut query = object.query().clone();
        if remove_all || remaining.is_empty() {
            query.remove(name);
        } else {
            query.insert(name, QueryValue::List(remaining));
        }
        Ok(self.stringify(&object.with_query(query)))
    }

    /// Replace a parameter's values, creating the parameter if needed.
    ///
    /// # Errors
    ///
    /// Propagates URL parse errors.
    pub fn set(&self, url: &str, name: &str, value: impl Into<Value>) -> Result<String> {
        let object = self.create_url_object(url)?;

        let replacement = match parse_value(value.into()) {
            ParsedValue::Flag => QueryValue::Flag,
            ParsedValue::Text(text) => QueryValue::Text(text),
            ParsedValue::List(items) => {
                QueryValue::List(items.into_iter().map(ListItem::into_string).collect())
            }
            // An unsupported value is written without content: `name=`
            ParsedValue::Unsupported => QueryValue::Text(String::new()),
        };

        let mut query = object.query().clone();
        query.insert(name, replacement);
        Ok(self.stringify(&object.with_query(query)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::compat::vec;

    const EXAMPLE: &str = "http://www.example.com";

    fn params() -> UrlParams {
        UrlParams::new()
    }

    #[test]
    fn test_stringify_normalizes_bare_host() {
        let object = params().create_url_object(EXAMPLE).unwrap();
        assert_eq!(params().stringify(&object), "http://www.example.com/");
    }

    #[test]
    fn test_stringify_unescapes_path() {
        let object = params()
            .create_url_object("http://example.com/a%2Bb%20c?x=1")
            .unwrap();
        assert_eq!(params().stringify(&object), "http://example.com/a+b c?x=1");
    }

    #[test]
    fn test_add_to_existing() {
        let url = params().add("http://www.example.com?foo=2+3", "foo", 4).unwrap();
        assert_eq!(url, "http://www.example.com/?foo=2+3+4");
    }

    #[test]
    fn test_add_flag_to_existing_returns_input() {
        let input = "http://www.example.com?foo=2+3+4";
        assert_eq!(params().add(input, "foo", Value::Absent).unwrap(), input);
    }

    #[test]
    fn test_add_unsupported_returns_input() {
        let input = "http://www.example.com?foo=2";
        assert_eq!(params().add(input, "bar", Value::Unsupported).unwrap(), input);
    }

    #[test]
    fn test_add_empty_list() {
        let url = params().add(EXAMPLE, "foo", Vec::<u8>::new()).unwrap();
        assert_eq!(url, "http://www.example.com/?foo=");
    }

    #[test]
    fn test_add_single_flag_list_to_existing_returns_input() {
        let input = "http://www.example.com?foo=2+3";
        let value = Value::List(vec![Value::Absent]);
        assert_eq!(params().add(input, "foo", value).unwrap(), input);
    }

    #[test]
    fn test_add_flag_list_to_new_key() {
        let value = Value::List(vec![Value::Absent]);
        let url = params().add(EXAMPLE, "foo", value).unwrap();
        assert_eq!(url, "http://www.example.com/?foo=true");
    }

    #[test]
    fn test_add_flag_with_other_values() {
        let value = Value::List(vec![Value::Absent, Value::from("x")]);
        let url = params().add("http://www.example.com?foo=2", "foo", value).unwrap();
        assert_eq!(url, "http://www.example.com/?foo=2+true+x");
    }

    #[test]
    fn test_remove_flag_list_keeps_true_values() {
        let url = params()
            .remove("http://www.example.com?foo=true+3", "foo", [Value::Absent])
            .unwrap();
        assert_eq!(url, "http://www.example.com/?foo=true+3");
    }

    #[test]
    fn test_set_flag_list() {
        let url = params().set(EXAMPLE, "foo", [Value::Absent, Value::from(1)]).unwrap();
        assert_eq!(url, "http://www.example.com/?foo=true+1");
    }

    #[test]
    fn test_remove_flag_value_removes_key() {
        let url = params()
            .remove("http://www.example.com?foo=2&bar=1", "foo", Value::Absent)
            .unwrap();
        assert_eq!(url, "http://www.example.com/?bar=1");
    }

    #[test]
    fn test_remove_unsupported_keeps_values() {
        let url = params()
            .remove("http://www.example.com?foo=2+3", "foo", Value::Unsupported)
            .unwrap();
        assert_eq!(url, "http://www.example.com/?foo=2+3");
    }

    #[test]
    fn test_remove_value_not_present() {
        let url = params()
            .remove("http://www.example.com?foo=2+3", "foo", 9)
            .unwrap();
        assert_eq!(url, "http://www.example.com/?foo=2+3");
    }

    #[test]
    fn test_set_unsupported_writes_empty_value() {
        let url = params()
            .set("http://www.example.com?foo=2", "foo", Value::Unsupported)
            .unwrap();
        assert_eq!(url, "http://www.example.com/?foo=");
    }

    #[test]
    fn test_set_appends_new_key_last() {
        let url = params().set("http://www.example.com?a=1", "b", "x").unwrap();
        assert_eq!(url, "http://www.example.com/?a=1&b=x");
    }

    #[test]
    fn test_parse_error_propagates() {
        assert!(params().add("http://example.com:port/", "a", 1).is_err());
        assert!(params().remove("http://example.com:port/", "a", 1).is_err());
        assert!(params().set("http://example.com:port/", "a", 1).is_err());
    }

    #[test]
    fn test_repeated_keys_encoding() {
        let params = params().with_encoding(MultiValueEncoding::RepeatedKeys);
        assert_eq!(params.encoding(), MultiValueEncoding::RepeatedKeys);

        let url = params.add("http://example.com?foo=2&foo=3", "foo", [3, 4]).unwrap();
        assert_eq!(url, "http://example.com/?foo=2&foo=3&foo=4");

        let url = params.remove(&url, "foo", 3).unwrap();
        assert_eq!(url, "http://example.com/?foo=2&foo=4");

        let url = params.set(&url, "foo", "a b").unwrap();
        assert_eq!(url, "http://example.com/?foo=a b");
    }
}
