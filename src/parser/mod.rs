use crate::character_sets::is_authority_delimiter;
use crate::checkers::{parse_port, scheme_end};
use crate::compat::{String, ToString};
use crate::error::{ParseError, Result};
use crate::helpers::{clean_tabs_and_newlines, prune_fragment, prune_query};
use crate::query_codec::MultiValueEncoding;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::unicode::idna::domain_to_ascii;
use crate::url_object::UrlObject;

/// Split `hostname[:port]` into its parts.
/// A bare trailing ':' is dropped, any other non-numeric suffix is an error.
fn split_host_port(host: &str) -> Result<(&str, Option<&str>)> {
    let (hostname, port) = if host.starts_with('[') {
        match host.find(']') {
            Some(bracket_end) => {
                let rest = &host[bracket_end + 1..];
                match rest.strip_prefix(':') {
                    Some(port) => (&host[..=bracket_end], port),
                    None if rest.is_empty() => return Ok((host, None)),
                    None => return Err(ParseError::InvalidPort),
                }
            }
            None => return Ok((host, None)),
        }
    } else {
        match memchr::memrchr(b':', host.as_bytes()) {
            Some(colon_pos) => (&host[..colon_pos], &host[colon_pos + 1..]),
            None => return Ok((host, None)),
        }
    };

    if port.is_empty() {
        return Ok((hostname, None));
    }
    parse_port(port)
        .map(|_| (hostname, Some(port)))
        .ok_or(ParseError::InvalidPort)
}

/// Decompose a URL string and decode its query with `encoding`.
///
/// Only the pieces the query operations need are interpreted: the scheme
/// is lowercased, the hostname normalized, and everything else is kept
/// verbatim.
///
/// # Errors
///
/// Returns [`ParseError::InvalidPort`] for a non-numeric or out-of-range
/// port and [`ParseError::IdnaError`] when a non-ASCII hostname cannot be
/// converted to ASCII.
pub fn parse_url_object(input: &str, encoding: MultiValueEncoding) -> Result<UrlObject> {
    let input = clean_tabs_and_newlines(input);
    let (rest, hash) = prune_fragment(&input);
    let (mut rest, query) = prune_query(rest);

    let mut url = UrlObject {
        hash: hash.map(ToString::to_string),
        query: encoding.decode(query.unwrap_or("")),
        ..UrlObject::default()
    };

    if let Some(colon) = scheme_end(rest) {
        let protocol = rest[..colon].to_ascii_lowercase();
        url.scheme_type = get_scheme_type(&protocol);
        url.protocol = Some(protocol);
        rest = &rest[colon + 1..];
    } else {
        url.scheme_type = SchemeType::Other;
    }

    if url.protocol.is_some() {
        if let Some(after_slashes) = rest.strip_prefix("//") {
            url.slashes = true;

            let authority_end = after_slashes
                .bytes()
                .position(is_authority_delimiter)
                .unwrap_or(after_slashes.len());
            let (authority, path) = after_slashes.split_at(authority_end);

            let host = match memchr::memrchr(b'@', authority.as_bytes()) {
                Some(at) => {
                    url.auth = Some(authority[..at].to_string());
                    &authority[at + 1..]
                }
                None => authority,
            };

            let (hostname, port) = split_host_port(host)?;
            url.hostname = Some(domain_to_ascii(hostname)?);
            url.port = port.map(ToString::to_string);
            rest = path;
        }
    }

    if !rest.is_empty() {
        url.pathname = Some(rest.to_string());
    } else if url.scheme_type.is_slashed()
        && url.hostname.as_deref().is_some_and(|h| !h.is_empty())
    {
        url.pathname = Some(String::from("/"));
    }

    Ok(url)
}
