//! Add, remove and set query parameter values on URL strings.
//!
//! A parameter may hold several values. By default they are written as one
//! `+`-joined pair (`foo=2+3`); the rest of the URL is passed through.
//!
//! ```
//! let url = urlparams::add("http://www.example.com?foo=2+3", "foo", [4, 5]).unwrap();
//! assert_eq!(url, "http://www.example.com/?foo=2+3+4+5");
//!
//! let url = urlparams::remove(&url, "foo", 2).unwrap();
//! assert_eq!(url, "http://www.example.com/?foo=3+4+5");
//!
//! let url = urlparams::set(&url, "bar", "baz").unwrap();
//! assert_eq!(url, "http://www.example.com/?foo=3+4+5&bar=baz");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod operations;
mod parser;
mod query_codec;
mod query_map;
mod scheme;
mod types;
mod unicode;
mod url_object;
mod value;

// Public API
pub use error::{ParseError, Result};
pub use operations::UrlParams;
pub use query_codec::MultiValueEncoding;
pub use query_map::{QueryMap, QueryValue};
pub use url_object::UrlObject;
pub use value::{ListItem, ParsedValue, Value, parse_value};

use compat::String;

/// Parse a URL string into a [`UrlObject`] with a `+`-joined query.
///
/// # Errors
///
/// Fails only for a malformed port or a hostname IDNA rejects.
pub fn create_url_object(url: &str) -> Result<UrlObject> {
    UrlParams::new().create_url_object(url)
}

/// Serialize a [`UrlObject`] back into a URL string.
pub fn stringify(url: &UrlObject) -> String {
    UrlParams::new().stringify(url)
}

/// Add values to a parameter. See [`UrlParams::add`].
///
/// # Errors
///
/// Propagates URL parse errors.
pub fn add(url: &str, name: &str, value: impl Into<Value>) -> Result<String> {
    UrlParams::new().add(url, name, value)
}

/// Remove values, or the whole parameter. See [`UrlParams::remove`].
///
/// # Errors
///
/// Propagates URL parse errors.
pub fn remove(url: &str, name: &str, value: impl Into<Value>) -> Result<String> {
    UrlParams::new().remove(url, name, value)
}

/// Replace a parameter's values. See [`UrlParams::set`].
///
/// # Errors
///
/// Propagates URL parse errors.
pub fn set(url: &str, name: &str, value: impl Into<Value>) -> Result<String> {
    UrlParams::new().set(url, name, value)
}
