use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};

/// Normalize a hostname for storage.
///
/// ASCII hostnames are lowercased and otherwise kept verbatim (no character
/// validation is performed). Non-ASCII hostnames go through IDNA `ToASCII`.
/// IPv6 literals (starting with '[') are returned as-is.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    if domain.starts_with('[') {
        return Ok(domain.to_string());
    }

    if domain.is_ascii() {
        return Ok(domain.to_ascii_lowercase());
    }

    idna::domain_to_ascii(domain).map_err(|_| ParseError::IdnaError)
}
