use crate::character_sets::{is_scheme_byte, is_scheme_start_byte};

/// Find the scheme at the start of the input.
/// Returns the position of the terminating ':' when the input starts with
/// `[A-Za-z][A-Za-z0-9+.-]*:`.
pub fn scheme_end(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let first = *bytes.first()?;
    if !is_scheme_start_byte(first) {
        return None;
    }

    let colon = memchr::memchr(b':', bytes)?;
    bytes[1..colon]
        .iter()
        .all(|&b| is_scheme_byte(b))
        .then_some(colon)
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}
