use crate::types::SchemeType;

/// Get the scheme type from a lowercase scheme string (without ':').
/// Uses perfect hash based on length + first byte to minimize comparisons.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let bytes = scheme.as_bytes();

    // Perfect hash: filter by length first, then first byte, then full comparison
    match (bytes.len(), bytes.first()) {
        (2, Some(b'w')) if bytes == b"ws" => SchemeType::Ws,
        (3, Some(b'w')) if bytes == b"wss" => SchemeType::Wss,
        (3, Some(b'f')) if bytes == b"ftp" => SchemeType::Ftp,
        (4, Some(b'h')) if bytes == b"http" => SchemeType::Http,
        (4, Some(b'f')) if bytes == b"file" => SchemeType::File,
        (5, Some(b'h')) if bytes == b"https" => SchemeType::Https,
        (6, Some(b'g')) if bytes == b"gopher" => SchemeType::Gopher,
        _ => SchemeType::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type("http"), SchemeType::Http);
        assert_eq!(get_scheme_type("https"), SchemeType::Https);
        assert_eq!(get_scheme_type("ftp"), SchemeType::Ftp);
        assert_eq!(get_scheme_type("gopher"), SchemeType::Gopher);
        assert_eq!(get_scheme_type("custom"), SchemeType::Other);
    }

    #[test]
    fn test_slashed_schemes() {
        assert!(get_scheme_type("http").is_slashed());
        assert!(get_scheme_type("file").is_slashed());
        assert!(!get_scheme_type("mailto").is_slashed());
    }
}
