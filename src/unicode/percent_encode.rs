use crate::compat::{Cow, String};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Query component percent-encode set
/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`
pub const COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Write a percent-encoded query component directly to buffer
pub fn escape_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, COMPONENT_SET) {
        buffer.push_str(chunk);
    }
}

/// Decode a query component: `+` is a space, then percent-decoding.
/// Invalid escapes are kept literally, invalid UTF-8 is replaced lossily.
pub fn decode_component(input: &str) -> String {
    let spaced: Cow<'_, str> = if input.contains('+') {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    };

    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Undo percent-encoding for display.
///
/// Every valid `%XX` sequence is decoded and invalid sequences are kept.
/// When the decoded bytes are not valid UTF-8 the input is returned unchanged.
pub fn unescape(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'%', input.as_bytes()).is_none() {
        return Cow::Borrowed(input);
    }

    percent_decode_str(input)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(input))
}
